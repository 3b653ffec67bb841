use std::path::PathBuf;

use allonsay::{
    speech::say::SayBackend, LanguageClassifier, ReferenceProfiles, SpeechBackend,
    VoiceAssignment, VoiceMapBuilder, VoiceRouter,
};
use clap::Parser;

/// Read mixed English, Dutch and Chinese text aloud.
#[derive(Parser, Debug)]
#[command(name = "allonsay", version, about)]
struct Args {
    /// Print the voice assignments as JSON instead of speaking them
    #[arg(long)]
    json: bool,

    /// Voice for English text
    #[arg(long, env = "ALLONSAY_ENGLISH_VOICE")]
    english_voice: Option<String>,

    /// Voice for Dutch text
    #[arg(long, env = "ALLONSAY_DUTCH_VOICE")]
    dutch_voice: Option<String>,

    /// Voice for Chinese characters
    #[arg(long, env = "ALLONSAY_IDEOGRAPHIC_VOICE")]
    ideographic_voice: Option<String>,

    /// JSON file with reference letter frequencies
    #[arg(long, env = "ALLONSAY_PROFILES")]
    profiles: Option<PathBuf>,

    /// Path to the `say` binary
    #[arg(long, env = "ALLONSAY_SAY_BIN")]
    say_bin: Option<PathBuf>,

    /// Text to read aloud
    #[arg(allow_hyphen_values = true)]
    text: Option<String>,

    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    rest: Vec<String>,
}

impl Args {
    /// Voice assignments for the text argument, or `None` when there is
    /// nothing to say.
    fn plan(&self) -> Result<Option<Vec<VoiceAssignment>>, Box<dyn std::error::Error>> {
        let Some(text) = self.text.as_deref().filter(|t| !t.is_empty()) else {
            return Ok(None);
        };
        if !self.rest.is_empty() {
            log::debug!("Ignoring extra arguments {:?}", self.rest);
        }
        Ok(Some(self.router()?.route(text)))
    }

    fn router(&self) -> Result<VoiceRouter, Box<dyn std::error::Error>> {
        let mut voices = VoiceMapBuilder::default();
        if let Some(voice) = &self.english_voice {
            voices.english(voice.as_str());
        }
        if let Some(voice) = &self.dutch_voice {
            voices.dutch(voice.as_str());
        }
        if let Some(voice) = &self.ideographic_voice {
            voices.ideographic(voice.as_str());
        }

        let profiles = match &self.profiles {
            Some(path) => ReferenceProfiles::load(path)?,
            None => ReferenceProfiles::builtin(),
        };

        Ok(VoiceRouter::new(
            LanguageClassifier::new(profiles),
            voices.build()?,
        ))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();

    // No text is not an error; there is simply nothing to say.
    let Some(assignments) = args.plan()? else {
        return Ok(());
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&assignments)?);
        return Ok(());
    }

    let mut backend = SayBackend::with_binaries(args.say_bin.clone(), None);
    backend.speak(&assignments)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Args;
    use allonsay::speech::say::SayBackend;
    use clap::Parser;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).expect("arguments should parse")
    }

    #[test]
    fn no_argument_has_nothing_to_say() {
        assert!(args(&["allonsay"]).plan().unwrap().is_none());
    }

    #[test]
    fn empty_argument_has_nothing_to_say() {
        assert!(args(&["allonsay", ""]).plan().unwrap().is_none());
    }

    #[test]
    fn whitespace_argument_speaks_nothing() {
        let assignments = args(&["allonsay", " "]).plan().unwrap().unwrap();
        assert_eq!(assignments.len(), 1);
        assert!(SayBackend::new().script(&assignments).is_empty());
    }

    #[test]
    fn extra_arguments_are_ignored() {
        let parsed = args(&["allonsay", " ", "Allons-y!"]);
        assert_eq!(parsed.text.as_deref(), Some(" "));
        assert_eq!(parsed.rest, vec!["Allons-y!"]);
        let assignments = parsed.plan().unwrap().unwrap();
        assert_eq!(assignments.len(), 1);
        assert_eq!(assignments[0].text(), " ");
    }

    #[test]
    fn json_flag_before_text() {
        let parsed = args(&["allonsay", "--json", "香港大學"]);
        assert!(parsed.json);
        let assignments = parsed.plan().unwrap().unwrap();
        assert_eq!(assignments[0].voice, "Sin-ji");
    }

    #[test]
    fn text_may_start_with_a_dash() {
        let parsed = args(&["allonsay", "-o/tmp/x hello there"]);
        assert_eq!(parsed.text.as_deref(), Some("-o/tmp/x hello there"));
    }

    #[test]
    fn voice_flags_override_defaults() {
        let parsed = args(&["allonsay", "--dutch-voice", "Xander", "Nederlandse Spoorwegen"]);
        let assignments = parsed.plan().unwrap().unwrap();
        assert_eq!(assignments[0].voice, "Xander");
    }

    #[test]
    fn missing_profiles_file_is_an_error() {
        let parsed = args(&[
            "allonsay",
            "--profiles",
            "/nonexistent/profiles.json",
            "Hong Kong",
        ]);
        assert!(parsed.plan().is_err());
    }
}
