//! Keypad calculator input engine.
//!
//! [`Calculator`] consumes one keypad token at a time (digits, `00`, `.`,
//! `+ - * /`, `=` and clear) and keeps a pocket-calculator display: digit
//! limits while typing, chained operators that evaluate immediately, floored
//! results and thousands-separated output.
//!
//! ```
//! use padcalc::Calculator;
//!
//! let mut calc = Calculator::new();
//! for token in ["4", "+", "6", "="] {
//!     calc.press(token).unwrap();
//! }
//! assert_eq!(calc.display_string().as_str(), "10");
//! ```
#![cfg_attr(not(test), no_std)]

mod calculator;
pub mod error;
pub mod keyboard;
mod utils;

pub use calculator::{
    BUFFER_CAPACITY, CLEAR_CHAR, Calculator, Config, DISPLAY_CAPACITY, DisplayString, Input,
    MAX_FRACTION_DIGITS, MAX_INTEGER_DIGITS, Operator,
};
pub use error::{CalcError, ConfigError};
pub use keyboard::Key;
