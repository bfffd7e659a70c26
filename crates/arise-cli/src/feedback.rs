use colored::Colorize;

use arise_core::{AriseResult, Cue, Feedback, Notice};

/// Renders cues and notices as highlighted terminal lines.
pub struct TerminalFeedback;

impl Feedback for TerminalFeedback {
    fn play(&self, cue: Cue) -> AriseResult<()> {
        match cue {
            Cue::Click => {}
            Cue::Success => println!("  {}", "QUEST COMPLETE".green().bold()),
            Cue::LevelUp => println!("  {}", "LEVEL UP!".yellow().bold()),
        }
        Ok(())
    }

    fn notify(&self, notice: &Notice) -> AriseResult<()> {
        println!(
            "  {} {}",
            format!("[{}]", notice.title).red().bold(),
            notice.body
        );
        Ok(())
    }
}
