//! Decimal string <-> base unit conversion.
//!
//! Conversion is exact: an amount with more fractional digits than the asset
//! supports is rejected unless the extra digits are all zero.

use crate::errors::AmountError;

/// 1 ZEC = 10^8 zatoshis.
pub const ZEC_DECIMALS: u32 = 8;

/// 1 SOL = 10^9 lamports.
pub const SOL_DECIMALS: u32 = 9;

fn pow10(exp: u32) -> Result<u128, AmountError> {
    10u128.checked_pow(exp).ok_or(AmountError::Overflow)
}

/// Convert a human-readable decimal amount (`"1.5"`) into base units of an
/// asset with `decimals` fractional digits.
pub fn to_base_units(amount: &str, decimals: u32) -> Result<u128, AmountError> {
    let trimmed = amount.trim();
    if trimmed.is_empty() {
        return Err(AmountError::Empty);
    }
    if trimmed.starts_with('-') {
        return Err(AmountError::Negative);
    }

    let (whole_raw, frac_raw) = trimmed.split_once('.').unwrap_or((trimmed, ""));

    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if (whole_raw.is_empty() && frac_raw.is_empty()) || !all_digits(whole_raw) || !all_digits(frac_raw)
    {
        return Err(AmountError::NotNumeric(trimmed.to_string()));
    }

    // Trailing zeros past the asset precision carry no value.
    let frac = frac_raw.trim_end_matches('0');
    if frac.len() > decimals as usize {
        return Err(AmountError::TooManyDecimals {
            decimals,
            fractional: frac.len(),
        });
    }

    let scale = pow10(decimals)?;

    let whole = if whole_raw.is_empty() {
        0
    } else {
        whole_raw
            .parse::<u128>()
            .map_err(|_| AmountError::Overflow)?
    };

    let frac_scaled = if frac.is_empty() {
        0
    } else {
        let padded = format!("{frac:0<width$}", width = decimals as usize);
        padded.parse::<u128>().map_err(|_| AmountError::Overflow)?
    };

    whole
        .checked_mul(scale)
        .and_then(|w| w.checked_add(frac_scaled))
        .ok_or(AmountError::Overflow)
}

/// Render base units as a decimal string without trailing zeros.
pub fn from_base_units(units: u128, decimals: u32) -> String {
    if decimals == 0 {
        return units.to_string();
    }

    let digits = format!("{units:0>width$}", width = decimals as usize + 1);
    let (whole, frac) = digits.split_at(digits.len() - decimals as usize);
    let frac = frac.trim_end_matches('0');

    if frac.is_empty() {
        whole.to_string()
    } else {
        format!("{whole}.{frac}")
    }
}

pub fn zec_to_zatoshis(amount: &str) -> Result<u128, AmountError> {
    to_base_units(amount, ZEC_DECIMALS)
}

/// Whole-ZEC integer input, scaled by 10^8.
pub fn whole_zec_to_zatoshis(zec: u128) -> Result<u128, AmountError> {
    zec.checked_mul(pow10(ZEC_DECIMALS)?)
        .ok_or(AmountError::Overflow)
}

pub fn sol_to_lamports(amount: &str) -> Result<u128, AmountError> {
    to_base_units(amount, SOL_DECIMALS)
}
