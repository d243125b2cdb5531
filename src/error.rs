use num_bigint::BigUint;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Asked to pick `k` items out of `n` with `k` outside of `1..=n`
    #[error("choice size {k} is out of range 1..={n}")]
    InvalidChoiceSize { k: usize, n: usize },

    /// All combinations have already been produced
    #[error("all {total} combinations have already been produced")]
    ExhaustedIterator { total: BigUint },
}

pub type Result<T> = std::result::Result<T, Error>;
