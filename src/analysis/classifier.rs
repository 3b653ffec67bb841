use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::frequency::LetterFrequencyProfile;
use super::profiles::ReferenceProfiles;

/// A language the classifier can recognise.
///
/// The declaration order is the tie-break order: when two languages are
/// equally close, the earlier one wins. English is also the answer when no
/// reference profile is available at all.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Dutch,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Dutch];

    pub fn name(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Dutch => "dutch",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown language: {0}")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "dutch" | "nl" => Ok(Language::Dutch),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

/// Letter-frequency language classifier.
///
/// Scores each reference profile by the mean squared difference to the
/// text's own profile and picks the closest one. This needs a few dozen
/// letters to be meaningful; classification of short fragments is close to
/// arbitrary.
#[derive(Debug, Clone)]
pub struct LanguageClassifier {
    profiles: ReferenceProfiles,
}

impl Default for LanguageClassifier {
    fn default() -> Self {
        Self::new(ReferenceProfiles::builtin())
    }
}

impl LanguageClassifier {
    pub fn new(profiles: ReferenceProfiles) -> Self {
        Self { profiles }
    }

    pub fn profiles(&self) -> &ReferenceProfiles {
        &self.profiles
    }

    /// Distance from `text` to every reference profile, in [`Language`] order.
    pub fn distances(&self, text: &str) -> Vec<(Language, f64)> {
        let observed = LetterFrequencyProfile::from_text(text);
        self.distances_to(&observed)
    }

    fn distances_to(&self, observed: &LetterFrequencyProfile) -> Vec<(Language, f64)> {
        self.profiles
            .iter()
            .map(|(language, reference)| (language, reference.distance(observed)))
            .collect()
    }

    /// The language whose reference profile is closest to `text`.
    pub fn classify(&self, text: &str) -> Language {
        let distances = self.distances(text);

        let mut closest = Language::default();
        let mut lowest = f64::INFINITY;
        for &(language, distance) in &distances {
            // Strictly lower only, so ties keep the earlier language.
            if distance < lowest {
                closest = language;
                lowest = distance;
            }
        }

        log::debug!("Classified as {closest} (distances: {distances:?})");
        closest
    }
}
