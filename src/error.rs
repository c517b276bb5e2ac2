// Error types returned by the calculator engine

use thiserror::Error;

/// Errors reported by [`Calculator::input`](crate::Calculator::input).
///
/// Every variant except `InputOverflow` resets the engine before it is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalcError {
    /// The integer or fraction segment being typed is already full
    #[error("input overflow: segment already holds the maximum number of digits")]
    InputOverflow,

    /// A computation went below zero while negative values are disabled
    #[error("negative value")]
    NegativeValue,

    /// A computed value has more integer digits than the display allows
    #[error("calculation overflow")]
    CalculateOverflow,

    /// Internal state became inconsistent
    #[error("fatal: calculator state is inconsistent")]
    Fatal,
}

/// Errors raised while constructing a [`Calculator`](crate::Calculator).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    #[error("integer digit limit {0} is outside 1..=18")]
    IntegerDigits(u8),

    #[error("entry fraction digit limit {0} exceeds 8")]
    EntryFractionDigits(u8),

    #[error("result fraction digit limit {0} exceeds the entry fraction limit")]
    ResultFractionDigits(u8),

    #[error("seed value {0} is negative but negative values are disabled")]
    NegativeSeed(i64),

    #[error("seed value {0} has more integer digits than allowed")]
    SeedTooLarge(i64),
}
