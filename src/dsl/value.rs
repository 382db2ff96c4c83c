//! Value grammar for element values such as `4.7k`, `10mA` or `2.2 Mohm`.

use crate::error::{NodalError, Result};

/// Parse a value string with an optional SI prefix and unit.
///
/// ```text
/// value  = digits ['.' digits] [ws] [prefix] [unit]
/// prefix = 'k' | 'K' | 'm' | 'u' | 'U' | 'M'
/// unit   = "ohm" (any case) | 'o' | 'h' | 'm' | 'V' | 'A' | 'I'
/// ```
///
/// `m` is milli and `M` is mega. A prefix letter is always taken as a
/// prefix when it can be, so `5m` is 5e-3 and `5mA` is 5e-3 as well.
pub fn parse_value(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    let invalid = || NodalError::invalid_value(text.trim());

    let number_len = scan_number(trimmed).ok_or_else(invalid)?;
    let (number, rest) = trimmed.split_at(number_len);
    let rest = rest.trim_start();

    let (multiplier, unit) = split_prefix(rest);
    if !is_unit(unit) {
        return Err(invalid());
    }

    let base = number.parse::<f64>().map_err(|_| invalid())?;
    Ok(base * multiplier)
}

/// Length of the leading `digits ['.' digits]` run, if there is one.
fn scan_number(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    if i == 0 {
        return None;
    }

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j == frac_start {
            return None;
        }
        i = j;
    }

    Some(i)
}

fn split_prefix(text: &str) -> (f64, &str) {
    let Some(first) = text.chars().next() else {
        return (1.0, text);
    };
    let multiplier = match first {
        'k' | 'K' => 1e3,
        'm' => 1e-3,
        'u' | 'U' => 1e-6,
        'M' => 1e6,
        _ => return (1.0, text),
    };
    let rest = &text[first.len_utf8()..];
    if is_unit(rest) {
        (multiplier, rest)
    } else {
        (1.0, text)
    }
}

fn is_unit(text: &str) -> bool {
    matches!(text, "" | "o" | "h" | "m" | "V" | "A" | "I") || text.eq_ignore_ascii_case("ohm")
}
