//! # allonsay
//!
//! Read mixed English, Dutch and Chinese text aloud with the right voice for
//! each part.
//!
//! ## Features
//!
//! - **Language detection**: English vs. Dutch by letter frequency
//! - **Script segmentation**: lossless split into CJK and non-CJK runs
//! - **Voice routing**: one voice per segment, configurable names
//! - **Speech backends**: macOS `say`, batched into a single process
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! allonsay = "2026.10"
//! ```
//!
//! ```rust
//! let assignments = allonsay::route("You can change trains at 美孚 station");
//!
//! let parts: Vec<(&str, &str)> = assignments
//!     .iter()
//!     .map(|a| (a.text(), a.voice.as_str()))
//!     .collect();
//! assert_eq!(
//!     parts,
//!     [
//!         ("You can change trains at ", "Samantha"),
//!         ("美孚", "Sin-ji"),
//!         (" station", "Samantha"),
//!     ]
//! );
//! ```
//!
//! The language is detected once for the whole text and applied to every
//! non-ideographic segment. Letter frequencies need a few dozen letters to
//! be reliable, so very short inputs may be read with the wrong voice.

pub mod analysis;
pub mod router;
pub mod script;
pub mod speech;

pub use analysis::{Language, LanguageClassifier, LetterFrequencyProfile, ReferenceProfiles};
pub use router::{VoiceAssignment, VoiceMap, VoiceMapBuilder, VoiceRouter};
pub use script::{is_ideographic, segment, Segment};
pub use speech::{SpeechBackend, SpeechError};

/// Route `text` with the built-in reference profiles and default voices.
pub fn route(text: &str) -> Vec<VoiceAssignment> {
    VoiceRouter::default().route(text)
}
