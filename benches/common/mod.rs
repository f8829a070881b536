#![allow(dead_code)]

use std::hint::black_box;
use std::str::FromStr;
use std::sync::Arc;

use clmm_quote::entities::{
    CurrencyAmount, Tick, TickBitmapProvider, TickListDataProvider, Token, nearest_usable_tick,
};
use clmm_quote::math::bit_math::{least_significant_bit, most_significant_bit};
use clmm_quote::math::encode::encode_sqrt_ratio_x64;
use clmm_quote::math::math_helpers::{mul_div, mul_div_rounding_up};
use clmm_quote::math::sqrt_price_math::{
    get_amount_0_delta, get_amount_1_delta, get_next_sqrt_price_from_input,
    get_next_sqrt_price_from_output,
};
use clmm_quote::math::swap_math::compute_swap_step;
use clmm_quote::math::tick_bitmap::{flip_tick, next_initialized_tick_within_one_word};
use clmm_quote::math::tick_math::{
    MAX_TICK, MIN_TICK, get_sqrt_ratio_at_tick, get_tick_at_sqrt_ratio,
};
use clmm_quote::pool::swap::SwapParams;
use clmm_quote::{Address, ClmmPool, FastMap, I256, Q64, U256};
use criterion::{BenchmarkId, Criterion};

const E18: u128 = 1_000_000_000_000_000_000;

pub fn token0() -> Token {
    Token::new(1, Address::repeat_byte(0x11), 18, Some("TK0"), None).unwrap()
}

pub fn token1() -> Token {
    Token::new(1, Address::repeat_byte(0x22), 18, Some("TK1"), None).unwrap()
}

/// Full-range liquidity plus a ladder of narrow positions every 600 ticks
/// around the current price, so swaps cross many initialized ticks.
pub fn laddered_ticks(spacing: i32) -> Vec<Tick> {
    let lower = nearest_usable_tick(MIN_TICK, spacing).unwrap();
    let upper = nearest_usable_tick(MAX_TICK, spacing).unwrap();

    let mut ticks = vec![Tick::new(lower, E18, E18 as i128).unwrap()];
    for i in (-50..50).map(|i| i * 600) {
        ticks.push(Tick::new(i, E18 / 10, (E18 / 10) as i128).unwrap());
        ticks.push(Tick::new(i + 300, E18 / 10, -((E18 / 10) as i128)).unwrap());
    }
    ticks.push(Tick::new(upper, E18, -(E18 as i128)).unwrap());
    ticks.sort_by_key(|tick| tick.index);
    ticks
}

pub fn list_pool() -> ClmmPool<TickListDataProvider> {
    let provider = TickListDataProvider::new(laddered_ticks(60), 60).unwrap();
    ClmmPool::new(token0(), token1(), 3000, 60, Q64, 11 * E18 / 10, 0, Arc::new(provider)).unwrap()
}

pub fn bitmap_pool() -> ClmmPool<TickBitmapProvider> {
    let provider = TickBitmapProvider::from_ticks(laddered_ticks(60), 60).unwrap();
    ClmmPool::new(token0(), token1(), 3000, 60, Q64, 11 * E18 / 10, 0, Arc::new(provider)).unwrap()
}

pub fn bench_tick_math(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick_math");
    for tick in [MIN_TICK, -97675, 0, 97674, MAX_TICK] {
        group.bench_with_input(
            BenchmarkId::new("get_sqrt_ratio_at_tick", tick),
            &tick,
            |b, &tick| b.iter(|| get_sqrt_ratio_at_tick(black_box(tick))),
        );
    }
    for tick in [MIN_TICK, 0, MAX_TICK - 1] {
        let price = get_sqrt_ratio_at_tick(tick).unwrap();
        group.bench_with_input(
            BenchmarkId::new("get_tick_at_sqrt_ratio", tick),
            &price,
            |b, &price| b.iter(|| get_tick_at_sqrt_ratio(black_box(price))),
        );
    }
    group.bench_function("encode_sqrt_ratio_x64", |b| {
        b.iter(|| encode_sqrt_ratio_x64(black_box(U256::from(333u16)), black_box(U256::from(111u16))))
    });
    group.finish();
}

pub fn bench_sqrt_price_math(c: &mut Criterion) {
    let a = get_sqrt_ratio_at_tick(-1200).unwrap();
    let b_price = get_sqrt_ratio_at_tick(1200).unwrap();
    let amount = U256::from(E18);

    let mut group = c.benchmark_group("sqrt_price_math");
    group.bench_function("get_amount_0_delta", |b| {
        b.iter(|| get_amount_0_delta(black_box(a), black_box(b_price), black_box(E18), true))
    });
    group.bench_function("get_amount_1_delta", |b| {
        b.iter(|| get_amount_1_delta(black_box(a), black_box(b_price), black_box(E18), true))
    });
    for zero_for_one in [true, false] {
        group.bench_with_input(
            BenchmarkId::new("get_next_sqrt_price_from_input", zero_for_one),
            &zero_for_one,
            |b, &zero_for_one| {
                b.iter(|| {
                    get_next_sqrt_price_from_input(Q64, black_box(E18), black_box(amount), zero_for_one)
                })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("get_next_sqrt_price_from_output", zero_for_one),
            &zero_for_one,
            |b, &zero_for_one| {
                b.iter(|| {
                    get_next_sqrt_price_from_output(
                        Q64,
                        black_box(E18),
                        black_box(amount / U256::from(100u8)),
                        zero_for_one,
                    )
                })
            },
        );
    }
    group.finish();
}

pub fn bench_swap_math(c: &mut Criterion) {
    let current = U256::from_str("2402403269835123476612").unwrap();
    let target = U256::from_str("2379498185825388834695").unwrap();

    let mut group = c.benchmark_group("swap_math");
    group.bench_function("compute_swap_step/exact_in", |b| {
        b.iter(|| {
            compute_swap_step(
                black_box(current),
                black_box(target),
                black_box(644166710458),
                black_box(I256::try_from(500_000).unwrap()),
                10_000,
            )
        })
    });
    group.bench_function("compute_swap_step/exact_out", |b| {
        b.iter(|| {
            compute_swap_step(
                black_box(current),
                black_box(target),
                black_box(644166710458),
                black_box(I256::try_from(-500_000).unwrap()),
                10_000,
            )
        })
    });
    group.finish();
}

pub fn bench_math_helpers(c: &mut Criterion) {
    let a = U256::MAX / U256::from(3u8);
    let b_value = U256::from(E18);
    let denominator = U256::from(u128::MAX);

    let mut group = c.benchmark_group("math_helpers");
    group.bench_function("mul_div", |b| {
        b.iter(|| mul_div(black_box(a), black_box(b_value), black_box(denominator)))
    });
    group.bench_function("mul_div_rounding_up", |b| {
        b.iter(|| mul_div_rounding_up(black_box(a), black_box(b_value), black_box(denominator)))
    });
    group.finish();
}

pub fn bench_tick_bitmap(c: &mut Criterion) {
    let mut bitmap: FastMap<i16, U256> = FastMap::default();
    for tick in laddered_ticks(60) {
        flip_tick(&mut bitmap, tick.index, 60).unwrap();
    }

    let mut group = c.benchmark_group("tick_bitmap");
    for lte in [true, false] {
        group.bench_with_input(
            BenchmarkId::new("next_initialized_tick_within_one_word", lte),
            &lte,
            |b, &lte| {
                b.iter(|| next_initialized_tick_within_one_word(&bitmap, black_box(150), 60, lte))
            },
        );
    }
    group.finish();
}

pub fn bench_bit_math(c: &mut Criterion) {
    let value = U256::from(1u8) << 200 | U256::from(1u8) << 17;

    let mut group = c.benchmark_group("bit_math");
    group.bench_function("most_significant_bit", |b| {
        b.iter(|| most_significant_bit(black_box(value)))
    });
    group.bench_function("least_significant_bit", |b| {
        b.iter(|| least_significant_bit(black_box(value)))
    });
    group.finish();
}

pub fn bench_swap(c: &mut Criterion) {
    let list = list_pool();
    let bitmap = bitmap_pool();

    let mut group = c.benchmark_group("swap");
    for amount in [E18 / 1000, E18 / 10, 10 * E18] {
        let params = SwapParams::new(true, I256::try_from(amount).unwrap(), None);
        group.bench_with_input(BenchmarkId::new("tick_list", amount), &params, |b, &params| {
            b.iter(|| list.swap(black_box(params)))
        });
        group.bench_with_input(BenchmarkId::new("bitmap", amount), &params, |b, &params| {
            b.iter(|| bitmap.swap(black_box(params)))
        });
    }
    group.finish();
}

pub fn bench_quote(c: &mut Criterion) {
    let pool = bitmap_pool();
    let amount_in = CurrencyAmount::from_raw_amount(token0().into(), U256::from(E18 / 10));
    let amount_out = CurrencyAmount::from_raw_amount(token0().into(), U256::from(E18 / 10));

    let mut group = c.benchmark_group("quote");
    group.bench_function("quote_output", |b| {
        b.iter(|| pool.quote_output(black_box(&amount_in), None))
    });
    group.bench_function("quote_input", |b| {
        b.iter(|| pool.quote_input(black_box(&amount_out), None))
    });
    group.finish();
}
