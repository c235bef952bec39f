//! Human-readable byte sizes: `"230"`, `"1 K"`, `"2 Gi"`.

use crate::app::error::FinderError;

/// Recognised unit suffixes and their multipliers.
const UNITS: [(&str, i64); 6] = [
    ("K", 1_000),
    ("Ki", 1_024),
    ("M", 1_000_000),
    ("Mi", 1_024 * 1_024),
    ("G", 1_000_000_000),
    ("Gi", 1_024 * 1_024 * 1_024),
];

/// Parses a size into a byte count.
///
/// The number and the unit are separated by exactly one space; a unit glued
/// to the number (`"12G"`) or any other spacing is rejected.
pub fn parse_size(text: &str) -> Result<i64, FinderError> {
    let parts: Vec<&str> = text.split(' ').collect();

    let (number, unit) = match parts.as_slice() {
        [number] => (*number, None),
        [number, unit] => (*number, Some(*unit)),
        _ => return Err(FinderError::MalformedSize(text.to_string())),
    };

    let value: i64 = number
        .parse()
        .map_err(|source| FinderError::InvalidSizeNumber {
            text: text.to_string(),
            source,
        })?;

    let Some(unit) = unit else {
        return Ok(value);
    };

    let multiplier = UNITS
        .iter()
        .find(|(name, _)| *name == unit)
        .map(|(_, factor)| *factor)
        .ok_or_else(|| FinderError::UnknownSizeUnit {
            text: text.to_string(),
            unit: unit.to_string(),
        })?;

    value
        .checked_mul(multiplier)
        .ok_or_else(|| FinderError::SizeOverflow(text.to_string()))
}
