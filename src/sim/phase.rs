//! Run lifecycle phases and their transitions
//!
//! Transitions are pure: they take the current phase and an event and return the next
//! phase, or `None` when the event is not valid from that phase.

use serde::{Deserialize, Serialize};

use super::collision::RunOutcome;

/// Current screen / phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen
    #[default]
    Menu,
    /// Active run
    Playing,
    /// Target reached
    LevelComplete,
    /// Run failed (boundary, obstacle or timer)
    GameOver,
    /// Best-time listing
    ProgressView,
}

/// Player commands issued from the menus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    StartLevel,
    ViewProgress,
    Back,
    Replay,
    TryAgain,
    MainMenu,
    /// Wipes stored progress; does not change phase
    ResetProgress,
}

impl Command {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['_', '-', ' '], "").as_str() {
            "startlevel" | "start" => Some(Command::StartLevel),
            "viewprogress" | "progress" => Some(Command::ViewProgress),
            "back" => Some(Command::Back),
            "replay" => Some(Command::Replay),
            "tryagain" | "retry" => Some(Command::TryAgain),
            "mainmenu" | "menu" => Some(Command::MainMenu),
            "resetprogress" | "reset" => Some(Command::ResetProgress),
            _ => None,
        }
    }
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Menu => "menu",
            GamePhase::Playing => "playing",
            GamePhase::LevelComplete => "levelComplete",
            GamePhase::GameOver => "gameOver",
            GamePhase::ProgressView => "progress",
        }
    }

    /// Next phase for a menu command
    pub fn on_command(self, command: Command) -> Option<GamePhase> {
        use Command::*;
        use GamePhase::*;
        match (self, command) {
            (Menu, StartLevel) => Some(Playing),
            (Menu, ViewProgress) => Some(ProgressView),
            (ProgressView, Back) => Some(Menu),
            (LevelComplete, Replay) => Some(Playing),
            (LevelComplete, MainMenu) => Some(Menu),
            (GameOver, TryAgain) => Some(Playing),
            (GameOver, MainMenu) => Some(Menu),
            _ => None,
        }
    }

    /// Next phase for a run outcome reported by the tick pipeline
    pub fn on_outcome(self, outcome: RunOutcome) -> Option<GamePhase> {
        match self {
            GamePhase::Playing if outcome.is_success() => Some(GamePhase::LevelComplete),
            GamePhase::Playing => Some(GamePhase::GameOver),
            _ => None,
        }
    }

    /// Whether a command may be issued from this phase, including phase-preserving ones
    pub fn accepts(self, command: Command) -> bool {
        match command {
            Command::ResetProgress => self == GamePhase::Menu,
            _ => self.on_command(command).is_some(),
        }
    }
}
