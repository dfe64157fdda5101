use crate::domain::models::DigitString;
use crate::services::tables::{number_constraints, MAX_DIGITS};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("{}", number_constraints())]
pub struct InvalidNumberError;

/// Strips comma separators and leading zeros, then validates the remainder.
///
/// An all-zero input strips down to the empty string and is rejected along
/// with it; "0" is not spelled as "zero".
pub fn sanitize(raw: &str) -> Result<DigitString, InvalidNumberError> {
    let separators_removed: String = raw.chars().filter(|c| *c != ',').collect();
    let digits = separators_removed.trim_start_matches('0');

    if digits.is_empty()
        || digits.len() > MAX_DIGITS
        || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(InvalidNumberError);
    }

    Ok(DigitString::new_unchecked(digits.to_string()))
}
