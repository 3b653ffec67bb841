//! Letter-frequency language detection.
//!
//! A text is reduced to the relative frequency of the letters `a`..`z`
//! ([`LetterFrequencyProfile`]) and compared against one published reference
//! profile per [`Language`]. The closest reference wins.
//!
//! # Example
//!
//! ```rust
//! use allonsay::analysis::{Language, LanguageClassifier};
//!
//! let classifier = LanguageClassifier::default();
//! let language = classifier.classify(
//!     "De Universiteit van Amsterdam is een van de meest vooraanstaande \
//!      onderzoeksuniversiteiten in Europa",
//! );
//! assert_eq!(language, Language::Dutch);
//! ```
//!
//! # Custom reference tables
//!
//! Reference profiles are plain configuration. Load them from JSON, or
//! assemble them by hand:
//!
//! ```rust
//! use allonsay::analysis::{Language, LanguageClassifier, LetterFrequencyProfile, ReferenceProfiles};
//!
//! let profiles = ReferenceProfiles::new()
//!     .with(Language::English, LetterFrequencyProfile::from_text("the theory"))
//!     .with(Language::Dutch, LetterFrequencyProfile::from_text("zeer zwaar"));
//! let classifier = LanguageClassifier::new(profiles);
//! assert_eq!(classifier.classify("zwezerik"), Language::Dutch);
//! ```

pub mod classifier;
pub mod frequency;
pub mod profiles;

pub use classifier::{Language, LanguageClassifier, UnknownLanguage};
pub use frequency::{ascii_letters, letter_frequencies, LetterFrequencyProfile};
pub use profiles::{ProfileError, ReferenceProfiles};
