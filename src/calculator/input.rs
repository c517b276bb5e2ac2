// Classification of keypad tokens

use rust_decimal::Decimal;

/// Character that clears the calculator
pub const CLEAR_CHAR: char = 'C';

/// Arithmetic operator waiting for its right-hand operand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Apply the operator. Division by zero yields zero; `None` means the
    /// result does not fit in a `Decimal`.
    pub(crate) fn apply(self, lhs: Decimal, rhs: Decimal) -> Option<Decimal> {
        match self {
            Self::Add => lhs.checked_add(rhs),
            Self::Subtract => lhs.checked_sub(rhs),
            Self::Multiply => lhs.checked_mul(rhs),
            Self::Divide if rhs.is_zero() => Some(Decimal::ZERO),
            Self::Divide => lhs.checked_div(rhs),
        }
    }
}

/// One logical keypress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Input {
    Digit(u8),
    /// The "00" shortcut key
    DoubleZero,
    Point,
    Operator(Operator),
    Equals,
    Clear,
    Unrecognized,
}

impl Input {
    /// Classify a token string. Only "00" may span two characters.
    pub fn from_token(token: &str) -> Self {
        let mut chars = token.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some('0'), Some('0'), None) => Self::DoubleZero,
            (Some(ch), None, None) => Self::from(ch),
            _ => Self::Unrecognized,
        }
    }
}

impl From<char> for Input {
    fn from(ch: char) -> Self {
        if let Some(digit) = ch.to_digit(10) {
            return Self::Digit(digit as u8);
        }

        match ch {
            '.' => Self::Point,
            '=' => Self::Equals,
            CLEAR_CHAR => Self::Clear,
            _ => Operator::from_char(ch).map_or(Self::Unrecognized, Self::Operator),
        }
    }
}
