//! Speech backends that read routed text aloud.
//!
//! A backend receives the ordered [`VoiceAssignment`]s produced by
//! [`VoiceRouter`](crate::router::VoiceRouter) and is responsible for
//! invoking an actual synthesizer with the right voice for each segment.
//!
//! # Available Backends
//!
//! Enable backends via Cargo features:
//! - `say` - macOS `say` command (enabled by default)

#[cfg(feature = "say")]
pub mod say;

use crate::router::VoiceAssignment;

#[derive(thiserror::Error, Debug)]
pub enum SpeechError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Speech backend not found: {0}")]
    BackendNotFound(String),
    #[error("Speech backend failed: {0}")]
    BackendFailed(String),
}

/// Common interface for speech backends.
pub trait SpeechBackend {
    /// Speak every assignment, in order, with its assigned voice.
    fn speak(&mut self, assignments: &[VoiceAssignment]) -> Result<(), SpeechError>;

    /// Route `text` with `router` and speak the result.
    ///
    /// Default implementation calls `VoiceRouter::route()` then `speak()`.
    fn speak_text(
        &mut self,
        router: &crate::router::VoiceRouter,
        text: &str,
    ) -> Result<(), SpeechError> {
        self.speak(&router.route(text))
    }
}
