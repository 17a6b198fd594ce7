use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NumberError {
    #[error("{0:?} is not a number")]
    NotANumber(String),
    #[error("{0} is not a non-negative integer")]
    NotAnInteger(String),
    #[error("{0} does not fit in 64 bits")]
    OutOfRange(String),
}

/// Normalizes a dynamodb number (an arbitrary precision decimal string) into an integer.
/// Integral decimals such as `1024.0` or `1.024E3` are accepted. The string is scaled
/// exactly, every digit after the decimal point must be zero.
pub fn normalize_integer(raw: &str) -> Result<u64, NumberError> {
    let raw = raw.trim();
    let not_a_number = || NumberError::NotANumber(raw.to_string());

    let (negative, unsigned) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (
            mantissa,
            exponent.parse::<i64>().map_err(|_| not_a_number())?,
        ),
        None => (unsigned, 0),
    };

    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction) {
        return Err(not_a_number());
    }

    let digits: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes())
        .map(|b| b - b'0')
        .collect();

    // position of the decimal point within `digits` once the exponent is applied
    let point = (whole.len() as i64).saturating_add(exponent);
    let split = point.clamp(0, digits.len() as i64) as usize;
    let (integral, fractional) = digits.split_at(split);

    if fractional.iter().any(|&d| d != 0) {
        return Err(NumberError::NotAnInteger(raw.to_string()));
    }

    let out_of_range = || NumberError::OutOfRange(raw.to_string());
    let mut value: u64 = 0;
    for &digit in integral {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(digit)))
            .ok_or_else(out_of_range)?;
    }

    if value != 0 {
        let trailing_zeros = point - split as i64;
        for _ in 0..trailing_zeros {
            value = value.checked_mul(10).ok_or_else(out_of_range)?;
        }
    }

    if negative && value != 0 {
        return Err(NumberError::NotAnInteger(raw.to_string()));
    }

    Ok(value)
}
