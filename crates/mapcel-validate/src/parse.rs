//! Lenient numeric parsing for coordinate cells.

/// Parses the longest leading decimal number in `value`.
///
/// Leading whitespace is skipped and anything after the number is ignored,
/// so `"12abc"` is 12 and `" -3.5e1 N"` is -35. An optional sign followed by
/// `Infinity` yields an infinity. Input without a leading number, including
/// the empty string, yields NaN.
pub fn parse_coordinate(value: &str) -> f64 {
    let trimmed = value.trim_start_matches(is_leading_space);
    let bytes = trimmed.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if trimmed[end..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    trimmed[..end].parse::<f64>().unwrap_or(f64::NAN)
}

fn is_leading_space(ch: char) -> bool {
    ch.is_whitespace() || ch == '\u{feff}'
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
