use std::process::{Command, Stdio};
use std::sync::Arc;
use std::thread;

use flash_core::model::VocabEntry;

use crate::error::SpeechError;

/// Platform capability: say this text out loud.
///
/// Implementations must not block on playback.
pub trait SpeechSynthesizer: Send + Sync {
    /// # Errors
    ///
    /// Returns `SpeechError` if the request could not be submitted.
    fn speak(&self, text: &str) -> Result<(), SpeechError>;
}

/// Runs an external text-to-speech program with the text as last argument.
#[derive(Clone, Debug)]
pub struct SystemSpeech {
    program: String,
    args: Vec<String>,
}

impl SystemSpeech {
    /// `command[0]` is the program, the rest are leading arguments.
    #[must_use]
    pub fn from_command(command: &[String]) -> Option<Self> {
        let (program, args) = command.split_first()?;
        Some(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }
}

impl SpeechSynthesizer for SystemSpeech {
    fn speak(&self, text: &str) -> Result<(), SpeechError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| SpeechError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        // Reap the child off the UI thread.
        thread::spawn(move || {
            let _ = child.wait();
        });
        Ok(())
    }
}

/// Speech disabled.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentSpeech;

impl SpeechSynthesizer for SilentSpeech {
    fn speak(&self, _text: &str) -> Result<(), SpeechError> {
        Err(SpeechError::Unavailable)
    }
}

/// Fire-and-forget pronunciation of the current card.
#[derive(Clone)]
pub struct SpeechTrigger {
    synth: Arc<dyn SpeechSynthesizer>,
}

impl SpeechTrigger {
    #[must_use]
    pub fn new(synth: Arc<dyn SpeechSynthesizer>) -> Self {
        Self { synth }
    }

    #[must_use]
    pub fn silent() -> Self {
        Self::new(Arc::new(SilentSpeech))
    }

    /// Build from a configured command line; `None` gives a silent trigger.
    #[must_use]
    pub fn from_command(command: Option<&[String]>) -> Self {
        match command.and_then(SystemSpeech::from_command) {
            Some(system) => Self::new(Arc::new(system)),
            None => Self::silent(),
        }
    }

    /// Submit `entry.word()` for speech. Failures are logged and dropped.
    pub fn speak(&self, entry: &VocabEntry) {
        if let Err(err) = self.synth.speak(entry.word()) {
            tracing::warn!(word = entry.word(), error = %err, "speech request failed");
        }
    }
}
