use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Sanitized digit string: ASCII digits only, no separators, no leading
/// zero, 1..=MAX_DIGITS characters. Only `services::sanitize` constructs one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitString(String);

impl DigitString {
    pub(crate) fn new_unchecked(digits: String) -> Self {
        Self(digits)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn digit_count(&self) -> usize {
        self.0.len()
    }
}

/// One zero-padded 3-digit group of the input, value in 0..=999. Its
/// position among the groups selects the scale name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket(u16);

impl Bucket {
    pub(crate) fn new(value: u16) -> Self {
        Self(value)
    }

    pub fn value(self) -> u16 {
        self.0
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SpellResult {
    pub words: String,
    pub words_and_digits: String,
    pub digit_count: usize,
}
