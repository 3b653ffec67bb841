use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use super::classifier::Language;
use super::frequency::LetterFrequencyProfile;

#[derive(thiserror::Error, Debug)]
pub enum ProfileError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid reference profile: {0}")]
    Config(String),
}

/// Published letter frequencies for English (Wikipedia), `a`..`z`.
pub const ENGLISH_FREQUENCIES: [f64; 26] = [
    8.167, 1.492, 2.782, 4.253, 12.702, 2.228, 2.015, 6.094, 6.966, 0.153, 0.772, 4.025, 2.406,
    6.749, 7.507, 1.929, 0.095, 5.987, 6.327, 9.056, 2.758, 0.978, 2.360, 0.150, 1.974, 0.074,
];

/// Published letter frequencies for Dutch (Wikipedia), `a`..`z`.
pub const DUTCH_FREQUENCIES: [f64; 26] = [
    7.486, 1.584, 1.242, 5.933, 18.91, 0.805, 3.403, 2.380, 6.499, 1.46, 2.248, 3.568, 2.213,
    10.032, 6.063, 1.57, 0.009, 6.411, 3.73, 6.79, 1.99, 2.85, 1.52, 0.036, 0.035, 1.39,
];

/// Reference letter-frequency profile per language.
///
/// Immutable once built; the classifier takes it by value at construction so
/// tests can substitute synthetic tables. Iteration follows [`Language`]
/// order, English first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReferenceProfiles {
    profiles: BTreeMap<Language, LetterFrequencyProfile>,
}

impl ReferenceProfiles {
    /// Empty set of profiles. A classifier built from it always answers
    /// English.
    pub fn new() -> Self {
        Self::default()
    }

    /// The published Wikipedia tables for every supported language.
    pub fn builtin() -> Self {
        Self::new()
            .with(
                Language::English,
                LetterFrequencyProfile::from_values(ENGLISH_FREQUENCIES),
            )
            .with(
                Language::Dutch,
                LetterFrequencyProfile::from_values(DUTCH_FREQUENCIES),
            )
    }

    /// Add or replace the profile for `language`.
    pub fn with(mut self, language: Language, profile: LetterFrequencyProfile) -> Self {
        self.profiles.insert(language, profile);
        self
    }

    pub fn get(&self, language: Language) -> Option<&LetterFrequencyProfile> {
        self.profiles.get(&language)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Language, &LetterFrequencyProfile)> {
        self.profiles.iter().map(|(lang, profile)| (*lang, profile))
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Load reference profiles from a JSON file.
    ///
    /// The file must be an object keyed by language name, each value an
    /// object mapping single letters to percentages:
    ///
    /// ```json
    /// { "english": { "a": 8.167, "b": 1.492 }, "dutch": { "a": 7.486 } }
    /// ```
    ///
    /// Letters that are not listed count as 0%.
    pub fn load(path: &Path) -> Result<Self, ProfileError> {
        let content = std::fs::read_to_string(path)?;
        let profiles = Self::from_json_str(&content)?;
        log::info!(
            "Loaded {} reference profiles from {}",
            profiles.len(),
            path.display()
        );
        Ok(profiles)
    }

    /// Parse reference profiles from a JSON string. See [`ReferenceProfiles::load`].
    pub fn from_json_str(json: &str) -> Result<Self, ProfileError> {
        let json: serde_json::Value = serde_json::from_str(json)?;
        let languages = json
            .as_object()
            .ok_or_else(|| ProfileError::Config("top level must be an object".to_string()))?;

        let mut profiles = Self::new();
        for (name, table) in languages {
            let language: Language = name
                .parse()
                .map_err(|_| ProfileError::Config(format!("unknown language {name:?}")))?;
            if profiles.profiles.contains_key(&language) {
                return Err(ProfileError::Config(format!(
                    "{name:?}: duplicate profile for {language}"
                )));
            }
            let table = table.as_object().ok_or_else(|| {
                ProfileError::Config(format!("profile for {name:?} must be an object"))
            })?;

            let mut profile = LetterFrequencyProfile::zero();
            let mut seen = BTreeSet::new();
            for (key, value) in table {
                let letter = single_char(key).ok_or_else(|| {
                    ProfileError::Config(format!("{name}: key {key:?} is not a single letter"))
                })?;
                let value = value.as_f64().ok_or_else(|| {
                    ProfileError::Config(format!("{name}: non-numeric value for {key:?}"))
                })?;
                if !value.is_finite() || value < 0.0 {
                    return Err(ProfileError::Config(format!(
                        "{name}: {key:?} must be a non-negative percentage, got {value}"
                    )));
                }
                if !profile.set(letter, value) {
                    return Err(ProfileError::Config(format!(
                        "{name}: {key:?} is not an ASCII letter"
                    )));
                }
                if !seen.insert(letter.to_ascii_lowercase()) {
                    return Err(ProfileError::Config(format!(
                        "{name}: letter {key:?} listed twice"
                    )));
                }
            }
            profiles.profiles.insert(language, profile);
        }

        for language in Language::ALL {
            if profiles.get(language).is_none() {
                log::warn!("No reference profile for {language}; it will never be detected");
            }
        }

        Ok(profiles)
    }
}

fn single_char(key: &str) -> Option<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}
