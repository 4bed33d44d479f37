/// Significant digits printed by default, as with a default C++ stream.
pub const DEFAULT_PRECISION: u8 = 6;
/// Largest precision that still changes the printed digits of an `f64`.
pub const MAX_PRECISION: u8 = 17;

/// Parses the longest numeric prefix of `text`, falling back to `0.0`.
///
/// Leading whitespace is skipped and an optional sign is accepted. The prefix
/// is made of decimal digits with at most one `.`, optionally followed by an
/// exponent; an `e` that is not followed by digits is left unconsumed. The
/// words `inf`, `infinity` and `nan` are recognised in any case. When no
/// digits can be read the result is `0.0`; there is no error.
///
/// ## Parameters
/// - `text`: The text to read a number from.
///
/// ## Returns
/// The value of the numeric prefix, or `0.0` if there is none.
///
/// ## Example
/// ```
/// use splitcalc::util::num::lenient_f64;
///
/// assert_eq!(lenient_f64("311"), 311.0);
/// assert_eq!(lenient_f64(".5"), 0.5);
/// assert_eq!(lenient_f64("3..4"), 3.0);
/// assert_eq!(lenient_f64("12abc"), 12.0);
/// assert_eq!(lenient_f64("2e"), 2.0);
/// assert_eq!(lenient_f64("."), 0.0);
/// assert_eq!(lenient_f64(""), 0.0);
/// ```
#[must_use]
pub fn lenient_f64(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();

    let sign_len = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let negative = bytes.first() == Some(&b'-');

    if let Some(value) = special_value(&s[sign_len..]) {
        return if negative { -value } else { value };
    }

    let mut end = sign_len;
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }

    if int_digits + frac_digits == 0 {
        return 0.0;
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

    s[..end].parse().unwrap_or(0.0)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn special_value(s: &str) -> Option<f64> {
    let starts_with = |word: &str| s.get(..word.len()).is_some_and(|p| p.eq_ignore_ascii_case(word));

    if starts_with("inf") {
        Some(f64::INFINITY)
    } else if starts_with("nan") {
        Some(f64::NAN)
    } else {
        None
    }
}

/// Formats `value` the way `printf("%g")` does.
///
/// The value is rounded to `precision` significant digits. Fixed notation is
/// used when the decimal exponent lies in `-4..precision`, scientific notation
/// (`1e+06`) otherwise. Trailing zeros and a trailing decimal point are
/// removed.
///
/// ## Parameters
/// - `value`: The number to format.
/// - `precision`: Significant digits; `0` is treated as `1`.
///
/// ## Returns
/// The formatted number.
///
/// ## Example
/// ```
/// use splitcalc::util::num::format_general;
///
/// assert_eq!(format_general(13.0, 6), "13");
/// assert_eq!(format_general(10.0 / 3.0, 6), "3.33333");
/// assert_eq!(format_general(1_000_000.0, 6), "1e+06");
/// assert_eq!(format_general(0.0001, 6), "0.0001");
/// assert_eq!(format_general(0.00001, 6), "1e-05");
/// ```
#[must_use]
pub fn format_general(value: f64, precision: u8) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let precision = precision.max(1);
    let scientific = format!("{:.*e}", usize::from(precision - 1), value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= i32::from(precision) {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", strip_trailing_zeros(mantissa), exponent.unsigned_abs())
    } else {
        let decimals = usize::try_from(i32::from(precision) - 1 - exponent).unwrap_or(0);
        strip_trailing_zeros(&format!("{value:.decimals$}")).to_string()
    }
}

fn strip_trailing_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
