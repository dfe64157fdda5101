use crate::domain::models::{Bucket, DigitString};
use crate::services::tables::{ONES, TEENS, TENS};

/// Left-pads the digit string to a multiple of 3 and slices it into 3-digit
/// groups, most significant first. Padding is 0, 1 or 2 zero characters.
pub fn bucketize(number: &DigitString) -> Vec<Bucket> {
    let pad = match number.digit_count() % 3 {
        1 => "00",
        2 => "0",
        _ => "",
    };
    let padded = format!("{pad}{}", number.as_str());

    padded
        .as_bytes()
        .chunks(3)
        .map(|group| {
            let value = group
                .iter()
                .fold(0u16, |acc, &b| acc * 10 + u16::from(b - b'0'));
            Bucket::new(value)
        })
        .collect()
}

/// Converts one bucket to its word fragment and numeric value.
///
/// The hundreds digit, the teens/tens range and the ones digit each
/// contribute one table entry; 11..=19 consumes the ones digit outright.
pub fn translate(bucket: Bucket) -> (String, u16) {
    let value = bucket.value();
    let mut fragments: Vec<&str> = Vec::new();

    if value > 99 {
        fragments.push(ONES[usize::from(value / 100)]);
        fragments.push("hundred");
    }

    let mut rest = value % 100;
    if (11..=19).contains(&rest) {
        fragments.push(TEENS[usize::from(rest - 10)]);
        rest = 0;
    } else if rest >= 10 {
        fragments.push(TENS[usize::from(rest / 10)]);
    }

    let ones_digit = rest % 10;
    if ones_digit > 0 {
        fragments.push(ONES[usize::from(ones_digit)]);
    }

    (fragments.join(" "), value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::sanitize::sanitize;

    fn values(raw: &str) -> Vec<u16> {
        bucketize(&sanitize(raw).unwrap())
            .iter()
            .map(|b| b.value())
            .collect()
    }

    fn words(value: u16) -> String {
        translate(Bucket::new(value)).0
    }

    #[test]
    fn pads_short_leading_groups_with_zeros() {
        assert_eq!(values("7"), vec![7]);
        assert_eq!(values("12"), vec![12]);
        assert_eq!(values("123"), vec![123]);
        assert_eq!(values("1234"), vec![1, 234]);
        assert_eq!(values("12345"), vec![12, 345]);
        assert_eq!(values("1234567"), vec![1, 234, 567]);
    }

    #[test]
    fn translates_ones_tens_and_hundreds() {
        assert_eq!(words(0), "");
        assert_eq!(words(7), "seven");
        assert_eq!(words(10), "ten");
        assert_eq!(words(21), "twenty one");
        assert_eq!(words(100), "one hundred");
        assert_eq!(words(110), "one hundred ten");
        assert_eq!(words(123), "one hundred twenty three");
        assert_eq!(words(999), "nine hundred ninety nine");
    }

    #[test]
    fn teens_consume_the_ones_digit() {
        assert_eq!(words(11), "eleven");
        assert_eq!(words(15), "fifteen");
        assert_eq!(words(19), "nineteen");
        assert_eq!(words(111), "one hundred eleven");
    }

    #[test]
    fn keeps_the_numeric_value() {
        assert_eq!(translate(Bucket::new(456)).1, 456);
    }
}
