//! Assigning a synthesis voice to every segment of a text.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::analysis::{Language, LanguageClassifier};
use crate::script::{segment, Segment};

/// Voice names used for each supported language and for ideographic text.
///
/// The defaults are macOS system voices.
///
/// ```rust
/// use allonsay::router::VoiceMapBuilder;
///
/// let voices = VoiceMapBuilder::default()
///     .english("Daniel")
///     .build()
///     .unwrap();
/// assert_eq!(voices.english, "Daniel");
/// assert_eq!(voices.dutch, "Claire");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into), default)]
#[serde(default)]
pub struct VoiceMap {
    pub english: String,
    pub dutch: String,
    /// Voice for CJK ideographs (Cantonese by default).
    pub ideographic: String,
}

impl Default for VoiceMap {
    fn default() -> Self {
        Self {
            english: "Samantha".to_string(),
            dutch: "Claire".to_string(),
            ideographic: "Sin-ji".to_string(),
        }
    }
}

impl VoiceMap {
    pub fn for_language(&self, language: Language) -> &str {
        match language {
            Language::English => &self.english,
            Language::Dutch => &self.dutch,
        }
    }
}

/// A segment of the input together with the voice that should read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceAssignment {
    #[serde(flatten)]
    pub segment: Segment,
    pub voice: String,
}

impl VoiceAssignment {
    pub fn text(&self) -> &str {
        &self.segment.text
    }
}

/// Splits text into script runs and picks a voice for each.
///
/// The language is detected once for the whole input, because letter
/// frequencies of short fragments are too noisy. Every non-ideographic
/// segment then gets that language's voice; ideographic segments always get
/// the ideographic voice.
#[derive(Debug, Clone, Default)]
pub struct VoiceRouter {
    classifier: LanguageClassifier,
    voices: VoiceMap,
}

impl VoiceRouter {
    pub fn new(classifier: LanguageClassifier, voices: VoiceMap) -> Self {
        Self { classifier, voices }
    }

    pub fn voices(&self) -> &VoiceMap {
        &self.voices
    }

    pub fn classifier(&self) -> &LanguageClassifier {
        &self.classifier
    }

    /// Voice for `segment`, given the language detected for the whole text.
    pub fn voice_for(&self, segment: &Segment, language: Language) -> &str {
        if segment.is_ideographic {
            &self.voices.ideographic
        } else {
            self.voices.for_language(language)
        }
    }

    /// Voice assignments for `text`, in reading order.
    pub fn route(&self, text: &str) -> Vec<VoiceAssignment> {
        let segments = segment(text);
        if segments.is_empty() {
            return Vec::new();
        }

        let language = self.classifier.classify(text);
        log::debug!(
            "Routing {} segments, surrounding language {language}",
            segments.len()
        );

        segments
            .into_iter()
            .map(|segment| {
                let voice = self.voice_for(&segment, language).to_string();
                VoiceAssignment { segment, voice }
            })
            .collect()
    }
}
