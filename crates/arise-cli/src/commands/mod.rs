pub mod allocate;
pub mod awaken;
pub mod complete;
pub mod connect;
pub mod quests;
pub mod remind;
pub mod status;
pub mod watch;

use arise_core::{AriseConfig, Engine, Feedback, FileStore};

/// An engine backed by the data directory and the terminal.
pub type CliEngine<'a> = Engine<FileStore, &'a dyn Feedback>;

/// Settings shared by every command.
pub struct Context {
    config: AriseConfig,
    feedback: Box<dyn Feedback>,
}

impl Context {
    pub fn new(config: AriseConfig, feedback: Box<dyn Feedback>) -> Self {
        Self { config, feedback }
    }

    pub fn config(&self) -> &AriseConfig {
        &self.config
    }

    /// Load the saved state into a fresh engine.
    pub fn engine(&self) -> CliEngine<'_> {
        Engine::with_config(
            self.config.file_store(),
            self.feedback.as_ref(),
            self.config.clone(),
        )
    }
}

/// Fail unless a player name has been registered.
fn require_registered(engine: &CliEngine<'_>) -> Result<(), String> {
    if engine.player().is_registered() {
        Ok(())
    } else {
        Err("no player registered yet; run `arise awaken <name>` first".into())
    }
}
