use serde::{Deserialize, Serialize};

/// An inning of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inning {
    pub number: u64,
    /// `true` for the top half of the inning.
    #[serde(default)]
    pub top: bool,
}

/// A single recorded play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    pub inning: Inning,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// Everything a [`crate::LineParser`] accumulated over a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub plays: Vec<Play>,
    /// Number of lines the parser accepted, plays or not.
    pub lines: usize,
}

impl Game {
    /// The inning number of the first recorded play.
    pub fn first_inning_number(&self) -> Option<u64> {
        self.plays.first().map(|play| play.inning.number)
    }
}
