use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use std::fmt;

// Task struct holding the in memory representation of a task
// Fields are public like everywhere else in this crate, the dispatcher
// edits name and status in place after looking the task up by id
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: u32,
    pub name: String,
    pub status: Status,
}

// The three lifecycle states a task can be in. Deriving ValueEnum next to
// the serde derives means clap accepts exactly the spellings that end up in
// the data file (todo, in-progress, done), one source of truth for both
// boundaries instead of a string we validate twice
#[derive(Serialize, Deserialize, ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Todo,
    InProgress,
    Done,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Todo => write!(f, "todo"),
            Self::InProgress => write!(f, "in-progress"),
            Self::Done => write!(f, "done"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_with_the_cli_spelling() {
        assert_eq!(serde_json::to_string(&Status::Todo).unwrap(), "\"todo\"");
        assert_eq!(
            serde_json::to_string(&Status::InProgress).unwrap(),
            "\"in-progress\""
        );
        assert_eq!(serde_json::to_string(&Status::Done).unwrap(), "\"done\"");
    }

    #[test]
    fn unknown_status_is_rejected_on_decode() {
        let result: Result<Status, _> = serde_json::from_str("\"paused\"");
        assert!(result.is_err());
    }

    #[test]
    fn display_matches_the_serialized_form() {
        assert_eq!(Status::Todo.to_string(), "todo");
        assert_eq!(Status::InProgress.to_string(), "in-progress");
        assert_eq!(Status::Done.to_string(), "done");
    }
}
