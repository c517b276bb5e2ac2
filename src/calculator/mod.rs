// Calculator engine: digit entry, operator chaining and display formatting
// The operand being typed is kept as text so digit limits and trailing zeros
// are handled without floating-point artifacts. Arithmetic uses Decimal.

mod config;
mod input;

use core::fmt::{self, Write};

use heapless::String;
use log::{debug, trace, warn};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{CalcError, ConfigError};
use crate::utils::format::{group_digits, integer_len, numeric, trim_fraction};

pub use config::{Config, MAX_FRACTION_DIGITS, MAX_INTEGER_DIGITS};
pub use input::{CLEAR_CHAR, Input, Operator};

/// Capacity of the entry buffer (sign, digits, point)
pub const BUFFER_CAPACITY: usize = 32;
/// Capacity of the formatted display string
pub const DISPLAY_CAPACITY: usize = 48;

pub type DisplayString = String<DISPLAY_CAPACITY>;

type Buffer = String<BUFFER_CAPACITY>;
/// Wide enough for any Decimal rendered with up to 8 fraction digits
type Scratch = String<48>;

/// Calculator state
#[derive(Debug, Clone)]
pub struct Calculator {
    config: Config,
    /// Value being typed, or the last committed value
    buffer: Buffer,
    /// Left-hand operand of the pending operation
    accumulator: Decimal,
    pending: Option<Operator>,
    /// True while digits are being typed for the current operand
    entering: bool,
}

impl Calculator {
    pub fn new() -> Self {
        Self::blank(Config::default())
    }

    pub fn with_config(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::blank(config))
    }

    /// Start with `value` shown on the display
    pub fn with_value(value: i64) -> Result<Self, ConfigError> {
        Self::with_config_and_value(Config::default(), value)
    }

    pub fn with_config_and_value(config: Config, value: i64) -> Result<Self, ConfigError> {
        config.validate()?;

        if value < 0 && !config.allow_negative {
            return Err(ConfigError::NegativeSeed(value));
        }

        let mut calc = Self::blank(config);
        calc.buffer.clear();
        write!(calc.buffer, "{value}").map_err(|_| ConfigError::SeedTooLarge(value))?;

        if integer_len(&calc.buffer) > usize::from(config.integer_digits) {
            return Err(ConfigError::SeedTooLarge(value));
        }

        Ok(calc)
    }

    fn blank(config: Config) -> Self {
        Self {
            config,
            buffer: zero(),
            accumulator: Decimal::ZERO,
            pending: None,
            entering: false,
        }
    }

    /// Handle one keypress
    pub fn input(&mut self, input: Input) -> Result<(), CalcError> {
        trace!("input {:?}", input);

        match input {
            Input::Digit(digit) => self.push_digit(digit),
            Input::DoubleZero => self.push_double_zero(),
            Input::Point => self.push_point(),
            Input::Operator(op) => self.commit(Some(op)),
            Input::Equals => self.commit(None),
            Input::Clear => {
                self.reset();
                Ok(())
            }
            Input::Unrecognized => {
                debug!("ignoring unrecognized input");
                Ok(())
            }
        }
    }

    /// Classify a token ("7", "00", "+", "=", ".", "C") and handle it
    pub fn press(&mut self, token: &str) -> Result<(), CalcError> {
        self.input(Input::from_token(token))
    }

    /// Reset calculator completely
    pub fn reset(&mut self) {
        self.buffer = zero();
        self.accumulator = Decimal::ZERO;
        self.pending = None;
        self.entering = false;
    }

    /// Formatted display text, e.g. "12,345.6"
    pub fn display_string(&self) -> DisplayString {
        group_digits(&self.buffer, self.config.entry_fraction_digits)
    }

    /// Exact value of the display buffer
    pub fn decimal_value(&self) -> Decimal {
        self.value().unwrap_or(Decimal::ZERO)
    }

    pub fn double_value(&self) -> f64 {
        numeric(&self.buffer).parse::<f64>().unwrap_or(0.0)
    }

    /// Display value floored to an integer
    pub fn int_value(&self) -> i64 {
        self.decimal_value().floor().to_i64().unwrap_or(0)
    }

    pub fn in_operation(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending
    }

    pub fn is_entering(&self) -> bool {
        self.entering
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn value(&self) -> Result<Decimal, CalcError> {
        numeric(&self.buffer)
            .parse::<Decimal>()
            .map_err(|_| CalcError::Fatal)
    }

    fn push_digit(&mut self, digit: u8) -> Result<(), CalcError> {
        let Some(ch) = char::from_digit(u32::from(digit), 10) else {
            return self.fail(CalcError::Fatal);
        };

        if !self.entering {
            // A leading zero starts nothing
            if digit == 0 && self.pending.is_none() {
                self.reset();
                return Ok(());
            }

            self.buffer.clear();
            if self.buffer.push(ch).is_err() {
                return self.fail(CalcError::Fatal);
            }
            self.entering = true;
            return Ok(());
        }

        // A lone zero is replaced, never extended
        if self.buffer.as_str() == "0" {
            self.buffer.clear();
            if self.buffer.push(ch).is_err() {
                return self.fail(CalcError::Fatal);
            }
            return Ok(());
        }

        let (len, limit) = match self.buffer.split_once('.') {
            Some((_, fraction)) => (fraction.len(), self.config.entry_fraction_digits),
            None => (self.buffer.len(), self.config.integer_digits),
        };

        if len >= usize::from(limit) {
            return Err(CalcError::InputOverflow);
        }

        if self.buffer.push(ch).is_err() {
            return self.fail(CalcError::Fatal);
        }
        Ok(())
    }

    /// "00" succeeds as long as the first zero fits
    fn push_double_zero(&mut self) -> Result<(), CalcError> {
        self.push_digit(0)?;
        if self.push_digit(0).is_err() {
            trace!("second zero of 00 rejected");
        }
        Ok(())
    }

    fn push_point(&mut self) -> Result<(), CalcError> {
        if !self.entering {
            self.buffer.clear();
            if self.buffer.push_str("0.").is_err() {
                return self.fail(CalcError::Fatal);
            }
            self.entering = true;
            return Ok(());
        }

        if self.buffer.contains('.') {
            return Ok(());
        }

        if self.buffer.push('.').is_err() {
            return self.fail(CalcError::Fatal);
        }
        Ok(())
    }

    /// Operator or equals: evaluate any pending operation, then either store
    /// `next` as the new pending operator or end the chain.
    fn commit(&mut self, next: Option<Operator>) -> Result<(), CalcError> {
        let value = match self.value() {
            Ok(value) => value,
            Err(err) => return self.fail(err),
        };

        match (self.entering, self.pending) {
            (true, Some(op)) => self.evaluate(op, value)?,
            _ => self.accumulator = value,
        }

        self.pending = next;
        self.entering = false;
        Ok(())
    }

    fn evaluate(&mut self, op: Operator, rhs: Decimal) -> Result<(), CalcError> {
        let Some(result) = op.apply(self.accumulator, rhs) else {
            return self.fail(CalcError::CalculateOverflow);
        };

        let result = result.round_dp_with_strategy(
            u32::from(self.config.result_fraction_digits),
            RoundingStrategy::ToNegativeInfinity,
        );
        let result = if result.is_zero() { Decimal::ZERO } else { result };

        debug!(
            "{} {} {} = {}",
            self.accumulator,
            op.symbol(),
            rhs,
            result
        );

        if result.is_sign_negative() && !self.config.allow_negative {
            return self.fail(CalcError::NegativeValue);
        }

        let mut text = Scratch::new();
        if write!(text, "{result}").is_err() {
            return self.fail(CalcError::CalculateOverflow);
        }
        trim_fraction(&mut text);

        if integer_len(&text) > usize::from(self.config.integer_digits) {
            return self.fail(CalcError::CalculateOverflow);
        }

        self.buffer.clear();
        if self.buffer.push_str(&text).is_err() {
            return self.fail(CalcError::Fatal);
        }
        self.accumulator = result;
        Ok(())
    }

    fn fail(&mut self, err: CalcError) -> Result<(), CalcError> {
        warn!("{}, resetting calculator", err);
        self.reset();
        Err(err)
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Calculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_string())
    }
}

fn zero() -> Buffer {
    let mut buffer = Buffer::new();
    buffer.push('0').ok();
    buffer
}
