// Calculator keypad layout and key-to-input mapping

use crate::calculator::{Input, Operator};

pub const ROWS: usize = 5;
pub const COLS: usize = 4;

/// Physical keys on the calculator keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    Clear,
    Divide,
    Multiply,
    Subtract,
    Add,
    Enter,
    Dot,
    D0,
    D00,
    D1,
    D2,
    D3,
    D4,
    D5,
    D6,
    D7,
    D8,
    D9,
}

/// Numpad matrix, row 0 on top. Add and Enter are two rows tall.
pub const KEYMAP: [[Option<Key>; COLS]; ROWS] = [
    [Some(Key::Clear), Some(Key::Divide), Some(Key::Multiply), Some(Key::Subtract)],
    [Some(Key::D7), Some(Key::D8), Some(Key::D9), Some(Key::Add)],
    [Some(Key::D4), Some(Key::D5), Some(Key::D6), Some(Key::Add)],
    [Some(Key::D1), Some(Key::D2), Some(Key::D3), Some(Key::Enter)],
    [Some(Key::D0), Some(Key::D00), Some(Key::Dot), Some(Key::Enter)],
];

impl Key {
    /// Key at a matrix position, if any
    pub fn at(row: usize, col: usize) -> Option<Self> {
        KEYMAP.get(row)?.get(col).copied().flatten()
    }

    /// Token accepted by [`Calculator::press`](crate::Calculator::press)
    pub fn token(self) -> &'static str {
        match self {
            Self::Clear => "C",
            Self::Divide => "/",
            Self::Multiply => "*",
            Self::Subtract => "-",
            Self::Add => "+",
            Self::Enter => "=",
            Self::Dot => ".",
            Self::D0 => "0",
            Self::D00 => "00",
            Self::D1 => "1",
            Self::D2 => "2",
            Self::D3 => "3",
            Self::D4 => "4",
            Self::D5 => "5",
            Self::D6 => "6",
            Self::D7 => "7",
            Self::D8 => "8",
            Self::D9 => "9",
        }
    }
}

impl From<Key> for Input {
    fn from(key: Key) -> Self {
        match key {
            Key::Clear => Input::Clear,
            Key::Divide => Input::Operator(Operator::Divide),
            Key::Multiply => Input::Operator(Operator::Multiply),
            Key::Subtract => Input::Operator(Operator::Subtract),
            Key::Add => Input::Operator(Operator::Add),
            Key::Enter => Input::Equals,
            Key::Dot => Input::Point,
            Key::D00 => Input::DoubleZero,
            Key::D0 => Input::Digit(0),
            Key::D1 => Input::Digit(1),
            Key::D2 => Input::Digit(2),
            Key::D3 => Input::Digit(3),
            Key::D4 => Input::Digit(4),
            Key::D5 => Input::Digit(5),
            Key::D6 => Input::Digit(6),
            Key::D7 => Input::Digit(7),
            Key::D8 => Input::Digit(8),
            Key::D9 => Input::Digit(9),
        }
    }
}
