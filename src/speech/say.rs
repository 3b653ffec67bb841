//! macOS `say` backend.
//!
//! Every segment becomes one `say -v <voice> -- <text>` call. All calls are
//! chained into a single `sh -c` invocation: starting a new process per
//! segment leaves audible pauses wherever the sentence switches voice.
//!
//! Voices and texts are handed to the shell as positional parameters, never
//! spliced into the script itself, so quotes, `$` and backticks in the input
//! are spoken rather than interpreted. Texts follow `--`, so a leading `-`
//! is never read as a `say` option.
//!
//! ```rust,no_run
//! use allonsay::router::VoiceRouter;
//! use allonsay::speech::{say::SayBackend, SpeechBackend};
//!
//! let router = VoiceRouter::default();
//! let mut backend = SayBackend::new();
//! backend.speak(&router.route("You can change trains at 美孚 station"))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::path::PathBuf;
use std::process::{Command, Stdio};

use super::{SpeechBackend, SpeechError};
use crate::router::VoiceAssignment;

/// Name the script sees as `$0`.
const SCRIPT_NAME: &str = "allonsay";

/// Speaks through the macOS `say` command.
#[derive(Debug, Clone)]
pub struct SayBackend {
    say_bin: PathBuf,
    shell: PathBuf,
}

impl Default for SayBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// A single shell invocation speaking a list of segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SayScript {
    /// Script passed to `sh -c`.
    pub script: String,
    /// Positional parameters, starting at `$1`.
    pub args: Vec<String>,
}

impl SayScript {
    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }
}

impl SayBackend {
    /// Use `say` and `sh` from PATH.
    pub fn new() -> Self {
        Self {
            say_bin: PathBuf::from("say"),
            shell: PathBuf::from("sh"),
        }
    }

    /// Use explicit `say` and shell binaries. Either can be `None` to fall
    /// back to the PATH default.
    pub fn with_binaries(say_bin: Option<PathBuf>, shell: Option<PathBuf>) -> Self {
        let defaults = Self::new();
        Self {
            say_bin: say_bin.unwrap_or(defaults.say_bin),
            shell: shell.unwrap_or(defaults.shell),
        }
    }

    /// Build the shell script for `assignments`.
    ///
    /// Whitespace-only segments are skipped. `$1` holds the `say` binary;
    /// each spoken segment adds its voice and text as the next two
    /// parameters.
    pub fn script(&self, assignments: &[VoiceAssignment]) -> SayScript {
        let mut commands = Vec::new();
        let mut args = vec![self.say_bin.to_string_lossy().into_owned()];

        for assignment in assignments {
            if assignment.text().trim().is_empty() {
                continue;
            }
            let voice_idx = args.len() + 1;
            commands.push(format!(
                "\"$1\" -v \"${{{voice_idx}}}\" -- \"${{{}}}\"",
                voice_idx + 1
            ));
            args.push(assignment.voice.clone());
            args.push(assignment.text().to_string());
        }

        if commands.is_empty() {
            args.clear();
        }

        SayScript {
            script: commands.join("; "),
            args,
        }
    }

    fn run(&self, script: &SayScript) -> Result<(), SpeechError> {
        log::debug!("Running {}: {}", self.shell.display(), script.script);

        let child = Command::new(&self.shell)
            .arg("-c")
            .arg(&script.script)
            .arg(SCRIPT_NAME)
            .args(&script.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    SpeechError::BackendNotFound(self.shell.display().to_string())
                } else {
                    SpeechError::Io(e)
                }
            })?;

        let output = child.wait_with_output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SpeechError::BackendFailed(format!(
                "{} exited with code {:?}: {stderr}",
                self.say_bin.display(),
                output.status.code()
            )));
        }

        Ok(())
    }
}

impl SpeechBackend for SayBackend {
    fn speak(&mut self, assignments: &[VoiceAssignment]) -> Result<(), SpeechError> {
        let script = self.script(assignments);
        if script.is_empty() {
            log::debug!("Nothing to speak");
            return Ok(());
        }
        self.run(&script)
    }
}

#[cfg(test)]
mod tests {
    use super::SayBackend;
    use crate::router::VoiceRouter;
    use crate::speech::{SpeechBackend, SpeechError};
    use std::path::PathBuf;
    use std::process::Command;

    fn has_shell() -> bool {
        Command::new("sh").arg("-c").arg("exit 0").output().is_ok()
    }

    #[test]
    fn chains_segments_into_one_script() {
        let assignments = VoiceRouter::default().route("You can change trains at 美孚 station");
        let script = SayBackend::new().script(&assignments);
        assert_eq!(
            script.script,
            "\"$1\" -v \"${2}\" -- \"${3}\"; \"$1\" -v \"${4}\" -- \"${5}\"; \"$1\" -v \"${6}\" -- \"${7}\""
        );
        assert_eq!(
            script.args,
            vec![
                "say",
                "Samantha",
                "You can change trains at ",
                "Sin-ji",
                "美孚",
                "Samantha",
                " station",
            ]
        );
    }

    #[test]
    fn input_never_reaches_the_script_text() {
        let text = "Say \"hi\"; rm -rf $HOME `date`";
        let assignments = VoiceRouter::default().route(text);
        let script = SayBackend::new().script(&assignments);
        assert!(!script.script.contains("rm"));
        assert!(!script.script.contains("HOME"));
        assert_eq!(script.args.last().map(String::as_str), Some(text));
    }

    #[test]
    fn dashed_text_is_not_read_as_an_option() {
        let text = "-o/tmp/out.aiff hello there";
        let script = SayBackend::new().script(&VoiceRouter::default().route(text));
        assert_eq!(script.script, "\"$1\" -v \"${2}\" -- \"${3}\"");
        assert_eq!(script.args, vec!["say", "Samantha", text]);
    }

    #[cfg(unix)]
    #[test]
    fn dashed_text_reaches_say_after_the_separator() {
        use std::os::unix::fs::PermissionsExt;

        if !has_shell() {
            return;
        }

        // Fake `say`: any parsed -o fails, and the text must be the only operand.
        let fake_say = std::env::temp_dir().join(format!("allonsay-say-{}", std::process::id()));
        std::fs::write(
            &fake_say,
            "#!/bin/sh\n\
             while getopts v:o: opt; do [ \"$opt\" = o ] && exit 3; done\n\
             shift $((OPTIND - 1))\n\
             [ \"$#\" = 1 ] && [ \"$1\" = \"-o/tmp/out.aiff hi\" ]\n",
        )
        .unwrap();
        std::fs::set_permissions(&fake_say, std::fs::Permissions::from_mode(0o755)).unwrap();

        let mut backend = SayBackend::with_binaries(Some(fake_say.clone()), None);
        let result = backend.speak_text(&VoiceRouter::default(), "-o/tmp/out.aiff hi");
        let _ = std::fs::remove_file(&fake_say);
        result.expect("text after -- should be spoken, not parsed");
    }

    #[test]
    fn skips_whitespace_segments() {
        let assignments = VoiceRouter::default().route("美孚 \n 九龍塘");
        assert_eq!(assignments.len(), 3);
        let script = SayBackend::new().script(&assignments);
        assert_eq!(script.args, vec!["say", "Sin-ji", "美孚", "Sin-ji", "九龍塘"]);
    }

    #[test]
    fn nothing_to_speak_yields_empty_script() {
        let backend = SayBackend::new();
        assert!(backend.script(&[]).is_empty());
        let script = backend.script(&VoiceRouter::default().route("  "));
        assert!(script.is_empty());
        assert!(script.args.is_empty());
    }

    #[test]
    fn uses_configured_say_binary() {
        let backend = SayBackend::with_binaries(Some(PathBuf::from("/opt/bin/say")), None);
        let script = backend.script(&VoiceRouter::default().route("Hong Kong"));
        assert_eq!(script.args[0], "/opt/bin/say");
    }

    #[test]
    fn empty_input_starts_no_process() {
        let mut backend = SayBackend::with_binaries(None, Some(PathBuf::from("/nonexistent/sh")));
        assert!(backend.speak(&[]).is_ok());
    }

    #[test]
    fn missing_shell_is_reported() {
        let mut backend = SayBackend::with_binaries(None, Some(PathBuf::from("/nonexistent/sh")));
        let err = backend
            .speak_text(&VoiceRouter::default(), "Hong Kong")
            .unwrap_err();
        assert!(matches!(err, SpeechError::BackendNotFound(_)));
    }

    #[test]
    fn runs_every_segment_through_the_shell() {
        if !has_shell() {
            return;
        }

        // `true` accepts and ignores any arguments.
        let mut backend = SayBackend::with_binaries(Some(PathBuf::from("true")), None);
        backend
            .speak_text(&VoiceRouter::default(), "Trains to 美孚 \"now\"")
            .expect("shell should run");
    }

    #[test]
    fn failing_backend_is_reported() {
        if !has_shell() {
            return;
        }

        let mut backend = SayBackend::with_binaries(Some(PathBuf::from("false")), None);
        let err = backend
            .speak_text(&VoiceRouter::default(), "Hong Kong")
            .unwrap_err();
        assert!(matches!(err, SpeechError::BackendFailed(_)));
    }
}
