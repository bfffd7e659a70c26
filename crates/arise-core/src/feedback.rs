//! Fire-and-forget sound cues and notifications.
//!
//! The engine asks the presentation layer to play cues and raise notices
//! through a [`Feedback`] port. Delivery is best effort: the engine logs
//! failures and carries on.

use std::fmt;

use crate::error::AriseResult;

/// A named sound effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// A button press.
    Click,
    /// A quest was completed.
    Success,
    /// A level was gained.
    LevelUp,
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Click => write!(f, "click"),
            Self::Success => write!(f, "success"),
            Self::LevelUp => write!(f, "levelUp"),
        }
    }
}

/// A titled platform notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Headline.
    pub title: String,
    /// Message text.
    pub body: String,
}

impl Notice {
    /// Create a notice.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Confirmation that notifications reach the player.
    pub fn connection_established() -> Self {
        Self::new("SYSTEM CONNECTED", "Notification Link Established.")
    }

    /// Evening warning that the daily quest is still open.
    pub fn daily_reminder() -> Self {
        Self::new(
            "SYSTEM ALERT",
            "Daily Quest 'Player Enhancement' is incomplete. Penalty Zone imminent.",
        )
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.title, self.body)
    }
}

/// Delivers cues and notices to the player.
pub trait Feedback {
    /// Play a sound cue.
    fn play(&self, cue: Cue) -> AriseResult<()>;

    /// Raise a notification.
    fn notify(&self, notice: &Notice) -> AriseResult<()>;
}

/// Feedback that goes nowhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Feedback for Silent {
    fn play(&self, _cue: Cue) -> AriseResult<()> {
        Ok(())
    }

    fn notify(&self, _notice: &Notice) -> AriseResult<()> {
        Ok(())
    }
}

impl<F: Feedback + ?Sized> Feedback for &F {
    fn play(&self, cue: Cue) -> AriseResult<()> {
        (**self).play(cue)
    }

    fn notify(&self, notice: &Notice) -> AriseResult<()> {
        (**self).notify(notice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cue_names() {
        assert_eq!(Cue::Click.to_string(), "click");
        assert_eq!(Cue::Success.to_string(), "success");
        assert_eq!(Cue::LevelUp.to_string(), "levelUp");
    }

    #[test]
    fn silent_accepts_everything() {
        assert!(Silent.play(Cue::LevelUp).is_ok());
        assert!(Silent.notify(&Notice::daily_reminder()).is_ok());
    }

    #[test]
    fn notice_display() {
        assert_eq!(
            Notice::connection_established().to_string(),
            "[SYSTEM CONNECTED] Notification Link Established."
        );
    }
}
