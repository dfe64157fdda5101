use crate::domain::models::SpellResult;
use crate::services::assemble::assemble;
use crate::services::buckets::bucketize;
use crate::services::sanitize::{sanitize, InvalidNumberError};

/// Converts a raw digit string into its spelled-out forms:
/// sanitize → bucketize → translate → assemble.
pub fn spell(raw: &str) -> Result<SpellResult, InvalidNumberError> {
    let number = sanitize(raw)?;
    let buckets = bucketize(&number);
    Ok(assemble(&buckets, number.digit_count()))
}
