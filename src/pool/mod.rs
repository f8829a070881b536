pub mod clmm_pool;
pub mod quote;
pub mod swap;
