use core::fmt::Write;

use heapless::String;

use crate::rate::Rate;

/// Longest rendering: `u32::MAX` has ten digits.
pub const RATE_TEXT_LEN: usize = 10;

pub type RateText = String<RATE_TEXT_LEN>;

/// Renders the rate in base 10, left aligned and unpadded. An unavailable
/// rate renders as `unavailable`, truncated to fit.
pub fn render_rate(rate: Rate, unavailable: &str) -> RateText {
    let mut text = RateText::new();
    match rate {
        // Ten digits always fit, so the write cannot fail.
        Rate::Rpm(rpm) => {
            let _ = write!(text, "{}", rpm);
        }
        Rate::Unavailable => {
            for c in unavailable.chars() {
                if text.push(c).is_err() {
                    break;
                }
            }
        }
    }
    text
}

/// The longest prefix of `text` that fits in `columns` character cells.
pub fn fit_columns(text: &str, columns: usize) -> &str {
    match text.char_indices().nth(columns) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_decimal_without_padding() {
        assert_eq!(render_rate(Rate::Rpm(0), "---").as_str(), "0");
        assert_eq!(render_rate(Rate::Rpm(50), "---").as_str(), "50");
        assert_eq!(render_rate(Rate::Rpm(1_500), "---").as_str(), "1500");
        assert_eq!(render_rate(Rate::Rpm(u32::MAX), "---").as_str(), "4294967295");
    }

    #[test]
    fn renders_sentinel_for_unavailable_rate() {
        assert_eq!(render_rate(Rate::Unavailable, "---").as_str(), "---");
        assert_eq!(render_rate(Rate::Unavailable, "STALLED").as_str(), "STALLED");
    }

    #[test]
    fn long_sentinel_is_truncated() {
        let text = render_rate(Rate::Unavailable, "rate unavailable");
        assert_eq!(text.as_str(), "rate unava");
    }

    #[test]
    fn fit_columns_counts_characters() {
        assert_eq!(fit_columns("1500", 16), "1500");
        assert_eq!(fit_columns("0123456789abcdefXYZ", 16), "0123456789abcdef");
        assert_eq!(fit_columns("", 16), "");
        // Multi-byte characters take one cell each and are never split.
        assert_eq!(fit_columns("°°°°", 3), "°°°");
        assert_eq!(fit_columns("ab°", 2), "ab");
        assert_eq!(fit_columns("ab°", 3), "ab°");
    }
}
