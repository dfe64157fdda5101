use crate::domain::models::{Bucket, SpellResult};
use crate::services::buckets::translate;
use crate::services::tables::SCALE_NAMES;

/// Joins per-bucket words with scale names and builds the mixed
/// word-and-digit form in the same pass.
///
/// The scale name attaches to the bucket whose non-zero value raised the
/// `show_scale_name` flag, in the same iteration. Zero buckets contribute
/// nothing but still consume their scale-name slot.
pub fn assemble(buckets: &[Bucket], digit_count: usize) -> SpellResult {
    let mut words: Vec<String> = Vec::new();
    let mut words_and_digits: Vec<String> = Vec::new();
    let mut show_scale_name = false;

    for (position, bucket) in buckets.iter().enumerate() {
        let scale_index = buckets.len() - 1 - position;
        let (fragment, value) = translate(*bucket);

        if value != 0 {
            show_scale_name = true;
            words_and_digits.push(value.to_string());
        }

        if !fragment.is_empty() {
            words.push(fragment);
        }

        if show_scale_name {
            let scale = SCALE_NAMES[scale_index];
            if !scale.is_empty() {
                words.push(scale.to_string());
                words_and_digits.push(scale.to_string());
            }
            show_scale_name = false;
        }
    }

    SpellResult {
        words: words.join(" "),
        words_and_digits: words_and_digits.join(" "),
        digit_count,
    }
}
