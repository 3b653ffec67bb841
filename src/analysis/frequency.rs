use std::fmt;

/// Number of letters tracked by a profile (`a` through `z`).
pub const LETTER_COUNT: usize = 26;

/// Relative frequency of the letters `a`..`z` within a text, in percent.
///
/// When the source text contains at least one ASCII letter the values sum to
/// 100 (up to floating-point rounding). A text without ASCII letters yields
/// an all-zero profile.
#[derive(Clone, Copy, PartialEq)]
pub struct LetterFrequencyProfile {
    values: [f64; LETTER_COUNT],
}

impl LetterFrequencyProfile {
    /// Profile with every letter at 0%.
    pub const fn zero() -> Self {
        Self {
            values: [0.0; LETTER_COUNT],
        }
    }

    /// Build a profile from raw percentages, indexed `a` = 0 .. `z` = 25.
    pub const fn from_values(values: [f64; LETTER_COUNT]) -> Self {
        Self { values }
    }

    /// Compute the relative letter frequencies of `text`.
    ///
    /// The text is lowercased first; anything that is not `a`..`z` afterwards
    /// (digits, punctuation, other alphabets, ideographs) is left out of both
    /// the counts and the denominator.
    pub fn from_text(text: &str) -> Self {
        let mut counts = [0usize; LETTER_COUNT];
        let mut total = 0usize;

        for ch in text.chars().flat_map(char::to_lowercase) {
            if let Some(idx) = letter_index(ch) {
                counts[idx] += 1;
                total += 1;
            }
        }

        if total == 0 {
            return Self::zero();
        }

        let mut values = [0f64; LETTER_COUNT];
        for (value, &count) in values.iter_mut().zip(counts.iter()) {
            *value = (count * 100) as f64 / total as f64;
        }
        Self { values }
    }

    /// Frequency of `letter` in percent. Case-insensitive; returns 0 for
    /// anything outside `A`..`Z` / `a`..`z`.
    pub fn get(&self, letter: char) -> f64 {
        letter_index(letter.to_ascii_lowercase())
            .map(|idx| self.values[idx])
            .unwrap_or(0.0)
    }

    pub(crate) fn set(&mut self, letter: char, value: f64) -> bool {
        match letter_index(letter.to_ascii_lowercase()) {
            Some(idx) => {
                self.values[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Iterate over `(letter, percentage)` pairs in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        ('a'..='z').zip(self.values.iter().copied())
    }

    pub fn values(&self) -> &[f64; LETTER_COUNT] {
        &self.values
    }

    /// Sum of all percentages: ~100 for texts with letters, 0 otherwise.
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Mean squared difference to `other` over all 26 letters.
    pub fn distance(&self, other: &Self) -> f64 {
        let sum: f64 = self
            .values
            .iter()
            .zip(other.values.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum();
        sum / LETTER_COUNT as f64
    }
}

impl Default for LetterFrequencyProfile {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for LetterFrequencyProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Shorthand for [`LetterFrequencyProfile::from_text`].
pub fn letter_frequencies(text: &str) -> LetterFrequencyProfile {
    LetterFrequencyProfile::from_text(text)
}

/// All characters of `text` within `A`..`Z` or `a`..`z`, in order and with
/// their original case.
pub fn ascii_letters(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars().filter(char::is_ascii_alphabetic)
}

fn letter_index(ch: char) -> Option<usize> {
    if ch.is_ascii_lowercase() {
        Some((ch as u8 - b'a') as usize)
    } else {
        None
    }
}
