// Engine policy fixed at construction

use crate::error::ConfigError;

/// Largest supported integer digit limit; every such value fits in an i64
pub const MAX_INTEGER_DIGITS: u8 = 18;
/// Largest supported fraction digit limit (entry and result)
pub const MAX_FRACTION_DIGITS: u8 = 8;

/// Digit limits and sign policy of a calculator.
///
/// The defaults match a pocket calculator: 14 integer digits, 3 fraction
/// digits while typing, integer results, no negative values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Maximum digits before the decimal point
    pub integer_digits: u8,
    /// Maximum digits after the decimal point while typing
    pub entry_fraction_digits: u8,
    /// Fraction digits kept after a computation (results are floored)
    pub result_fraction_digits: u8,
    /// Whether a computation may produce a negative value
    pub allow_negative: bool,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.integer_digits == 0 || self.integer_digits > MAX_INTEGER_DIGITS {
            return Err(ConfigError::IntegerDigits(self.integer_digits));
        }
        if self.entry_fraction_digits > MAX_FRACTION_DIGITS {
            return Err(ConfigError::EntryFractionDigits(self.entry_fraction_digits));
        }
        // Results must fit the fraction the display can show
        if self.result_fraction_digits > self.entry_fraction_digits {
            return Err(ConfigError::ResultFractionDigits(
                self.result_fraction_digits,
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            integer_digits: 14,
            entry_fraction_digits: 3,
            result_fraction_digits: 0,
            allow_negative: false,
        }
    }
}
