use thiserror::Error;

/// Why a human-readable amount could not be converted to base units.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("amount is empty")]
    Empty,

    #[error("amount must be non-negative")]
    Negative,

    #[error("amount is not a decimal number: {0:?}")]
    NotNumeric(String),

    #[error("amount has {fractional} fractional digits but the asset only has {decimals}")]
    TooManyDecimals { decimals: u32, fractional: usize },

    #[error("amount does not fit in base units")]
    Overflow,
}

#[derive(Error, Debug)]
pub enum AccountError {
    #[error("invalid amount: {0}")]
    Amount(#[from] AmountError),

    #[error("address derivation failed: {0}")]
    Address(String),

    #[error("balance query failed: {0}")]
    Balance(String),

    #[error("deposit failed: {0}")]
    Deposit(String),

    #[error("operation not supported by this account: {0}")]
    Unsupported(String),
}

impl AccountError {
    #[allow(clippy::needless_pass_by_value)]
    pub fn deposit<T: ToString>(e: T) -> Self {
        AccountError::Deposit(e.to_string())
    }

    #[allow(clippy::needless_pass_by_value)]
    pub fn balance<T: ToString>(e: T) -> Self {
        AccountError::Balance(e.to_string())
    }

    #[allow(clippy::needless_pass_by_value)]
    pub fn address<T: ToString>(e: T) -> Self {
        AccountError::Address(e.to_string())
    }
}
