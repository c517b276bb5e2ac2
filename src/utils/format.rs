// Text helpers shared by the calculator buffer and its display

use heapless::String;

/// Number of digits before the decimal point, ignoring a leading sign
pub fn integer_len(text: &str) -> usize {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    unsigned.split('.').next().map_or(0, str::len)
}

/// The text without a dangling decimal point, ready for parsing
pub fn numeric(text: &str) -> &str {
    text.strip_suffix('.').unwrap_or(text)
}

/// Strip trailing fraction zeros and the point itself if no fraction remains
pub fn trim_fraction<const N: usize>(text: &mut String<N>) {
    if !text.contains('.') {
        return;
    }

    while text.ends_with('0') {
        text.pop();
    }

    if text.ends_with('.') {
        text.pop();
    }
}

/// Format a buffer for display: thousands separators in the integer part,
/// at most `max_fraction` fraction digits, and a trailing point kept as typed.
pub fn group_digits<const N: usize>(text: &str, max_fraction: u8) -> String<N> {
    let mut out = String::new();

    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    out.push_str(sign).ok();

    let len = integer.len();
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',').ok();
        }
        out.push(ch).ok();
    }

    if let Some(fraction) = fraction {
        out.push('.').ok();
        for ch in fraction.chars().take(usize::from(max_fraction)) {
            out.push(ch).ok();
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grouped(text: &str) -> String<48> {
        group_digits(text, 3)
    }

    #[test]
    fn test_integer_len() {
        assert_eq!(integer_len("0"), 1);
        assert_eq!(integer_len("12.5"), 2);
        assert_eq!(integer_len("-1234"), 4);
        assert_eq!(integer_len("7."), 1);
    }

    #[test]
    fn test_numeric_drops_dangling_point() {
        assert_eq!(numeric("12."), "12");
        assert_eq!(numeric("12.5"), "12.5");
        assert_eq!(numeric("0"), "0");
    }

    fn trimmed(text: &str) -> String<16> {
        let mut out = String::new();
        out.push_str(text).unwrap();
        trim_fraction(&mut out);
        out
    }

    #[test]
    fn test_trim_fraction() {
        assert_eq!(trimmed("2.500").as_str(), "2.5");
        assert_eq!(trimmed("3.000").as_str(), "3");
        assert_eq!(trimmed("1000").as_str(), "1000");
        assert_eq!(trimmed("-0.50").as_str(), "-0.5");
    }

    #[test]
    fn test_group_digits() {
        assert_eq!(grouped("0").as_str(), "0");
        assert_eq!(grouped("999").as_str(), "999");
        assert_eq!(grouped("1000").as_str(), "1,000");
        assert_eq!(grouped("12345678901234").as_str(), "12,345,678,901,234");
        assert_eq!(grouped("-1234567").as_str(), "-1,234,567");
    }

    #[test]
    fn test_group_digits_fraction() {
        assert_eq!(grouped("1234.5").as_str(), "1,234.5");
        assert_eq!(grouped("12.").as_str(), "12.");
        assert_eq!(grouped("0.120").as_str(), "0.120");
        assert_eq!(group_digits::<48>("0.12345", 3).as_str(), "0.123");
        assert_eq!(group_digits::<48>("5.25", 0).as_str(), "5.");
    }
}
