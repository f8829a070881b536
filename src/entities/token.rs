use crate::error::TokenError;
use alloy_primitives::{Address, U256};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A fungible token with a unique address on one chain.
///
/// Two tokens are equal when they share chain id and address; symbol,
/// name and decimals are metadata.
#[derive(Debug, Clone, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Token {
    chain_id: u64,
    address: Address,
    decimals: u8,
    symbol: Option<String>,
    name: Option<String>,
}

impl Token {
    pub fn new(
        chain_id: u64,
        address: Address,
        decimals: u8,
        symbol: Option<&str>,
        name: Option<&str>,
    ) -> Result<Self, TokenError> {
        if decimals == u8::MAX {
            return Err(TokenError::InvalidDecimals);
        }
        Ok(Self {
            chain_id,
            address,
            decimals,
            symbol: symbol.map(str::to_owned),
            name: name.map(str::to_owned),
        })
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns true if the address of this token sorts before the address
    /// of `other`.
    ///
    /// Addresses are compared as numbers, which is the case-insensitive
    /// order of their hex forms. Fails for tokens on different chains or
    /// with the same address.
    pub fn sorts_before(&self, other: &Token) -> Result<bool, TokenError> {
        if self.chain_id != other.chain_id {
            return Err(TokenError::DifferentChain);
        }
        if self.address == other.address {
            return Err(TokenError::SameAddress);
        }
        Ok(self.address < other.address)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id && self.address == other.address
    }
}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain_id.hash(state);
        self.address.hash(state);
    }
}

/// The chain-native currency, which has to be wrapped to be traded in a
/// pool.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NativeCurrency {
    chain_id: u64,
    decimals: u8,
    symbol: Option<String>,
    name: Option<String>,
    wrapped: Token,
}

impl NativeCurrency {
    /// Creates the native currency of `wrapped`'s chain.
    pub fn new(
        wrapped: Token,
        decimals: u8,
        symbol: Option<&str>,
        name: Option<&str>,
    ) -> Result<Self, TokenError> {
        if decimals == u8::MAX {
            return Err(TokenError::InvalidDecimals);
        }
        Ok(Self {
            chain_id: wrapped.chain_id,
            decimals,
            symbol: symbol.map(str::to_owned),
            name: name.map(str::to_owned),
            wrapped,
        })
    }
}

/// Any fungible instrument: the chain-native currency or a token.
///
/// `==` follows [`Currency::equals`]: native currencies compare by chain
/// only, so their metadata is ignored.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Currency {
    Native(NativeCurrency),
    Token(Token),
}

impl Currency {
    pub fn is_native(&self) -> bool {
        matches!(self, Currency::Native(_))
    }

    pub fn is_token(&self) -> bool {
        matches!(self, Currency::Token(_))
    }

    pub fn chain_id(&self) -> u64 {
        match self {
            Currency::Native(native) => native.chain_id,
            Currency::Token(token) => token.chain_id,
        }
    }

    pub fn decimals(&self) -> u8 {
        match self {
            Currency::Native(native) => native.decimals,
            Currency::Token(token) => token.decimals,
        }
    }

    pub fn symbol(&self) -> Option<&str> {
        match self {
            Currency::Native(native) => native.symbol.as_deref(),
            Currency::Token(token) => token.symbol(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Currency::Native(native) => native.name.as_deref(),
            Currency::Token(token) => token.name(),
        }
    }

    /// Native currencies are equal per chain, tokens per chain and address.
    pub fn equals(&self, other: &Currency) -> bool {
        match (self, other) {
            (Currency::Native(a), Currency::Native(b)) => a.chain_id == b.chain_id,
            (Currency::Token(a), Currency::Token(b)) => a == b,
            _ => false,
        }
    }

    /// The token a pool trades for this currency.
    pub fn wrapped(&self) -> &Token {
        match self {
            Currency::Native(native) => &native.wrapped,
            Currency::Token(token) => token,
        }
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for Currency {}

impl From<Token> for Currency {
    fn from(token: Token) -> Self {
        Currency::Token(token)
    }
}

impl From<NativeCurrency> for Currency {
    fn from(native: NativeCurrency) -> Self {
        Currency::Native(native)
    }
}

/// A raw (smallest unit) amount of a currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyAmount {
    currency: Currency,
    quotient: U256,
}

impl CurrencyAmount {
    pub fn from_raw_amount(currency: Currency, raw_amount: U256) -> Self {
        Self {
            currency,
            quotient: raw_amount,
        }
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// The amount in the currency's smallest unit.
    pub fn quotient(&self) -> U256 {
        self.quotient
    }
}
