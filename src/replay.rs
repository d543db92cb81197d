//! Scripted navigation for the `replay` command
//!
//! Each command string is one navigation call against a freshly mounted
//! workflow. Rejected commands are collected rather than aborting the run.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::notifications::Notifier;
use crate::wizard::{WizardHandle, WorkflowCursor, WorkflowKind};
use crate::workflows;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayCommand {
    GoToStep(u32),
    NextStep,
    PrevStep,
    GoToSubStep(u32),
    NextSubStep,
    PrevSubStep,
    Product(u32),
    Remount,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("'{command}' needs a number, got '{got}'")]
    BadNumber { command: String, got: String },
    #[error("'{0}' needs a number")]
    MissingNumber(String),
}

fn number(command: &str, arg: Option<&str>) -> Result<u32, ParseCommandError> {
    let arg = arg.ok_or_else(|| ParseCommandError::MissingNumber(command.to_string()))?;
    arg.parse().map_err(|_| ParseCommandError::BadNumber {
        command: command.to_string(),
        got: arg.to_string(),
    })
}

impl FromStr for ReplayCommand {
    type Err = ParseCommandError;

    /// Accepts `goto N`, `next`, `prev`, `sub N`, `next-sub`, `prev-sub`,
    /// `product N` and `remount`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let command = parts.next().ok_or(ParseCommandError::Empty)?.to_ascii_lowercase();
        let arg = parts.next();

        match command.as_str() {
            "goto" | "step" => Ok(ReplayCommand::GoToStep(number(&command, arg)?)),
            "next" => Ok(ReplayCommand::NextStep),
            "prev" | "back" => Ok(ReplayCommand::PrevStep),
            "sub" => Ok(ReplayCommand::GoToSubStep(number(&command, arg)?)),
            "next-sub" => Ok(ReplayCommand::NextSubStep),
            "prev-sub" => Ok(ReplayCommand::PrevSubStep),
            "product" => Ok(ReplayCommand::Product(number(&command, arg)?)),
            "remount" | "reload" => Ok(ReplayCommand::Remount),
            _ => Err(ParseCommandError::Unknown(s.trim().to_string())),
        }
    }
}

impl fmt::Display for ReplayCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplayCommand::GoToStep(n) => write!(f, "goto {n}"),
            ReplayCommand::NextStep => f.write_str("next"),
            ReplayCommand::PrevStep => f.write_str("prev"),
            ReplayCommand::GoToSubStep(n) => write!(f, "sub {n}"),
            ReplayCommand::NextSubStep => f.write_str("next-sub"),
            ReplayCommand::PrevSubStep => f.write_str("prev-sub"),
            ReplayCommand::Product(n) => write!(f, "product {n}"),
            ReplayCommand::Remount => f.write_str("remount"),
        }
    }
}

/// A command that did not apply, and why
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    pub command: String,
    pub reason: String,
}

#[derive(Debug, Serialize)]
pub struct ReplayOutcome {
    pub cursor: WorkflowCursor,
    pub rejected: Vec<Rejection>,
    pub snapshot: serde_json::Value,
}

/// Apply one command to a mounted workflow
pub fn apply(
    handle: &mut dyn WizardHandle,
    command: ReplayCommand,
    notifier: &Notifier,
) -> Result<(), String> {
    let result = match command {
        ReplayCommand::GoToStep(n) => handle.go_to_step(n).map(drop),
        ReplayCommand::NextStep => handle.next_step().map(drop),
        ReplayCommand::PrevStep => handle.prev_step().map(drop),
        ReplayCommand::GoToSubStep(n) => handle.go_to_sub_step(n).map(drop),
        ReplayCommand::NextSubStep => handle.next_sub_step().map(drop),
        ReplayCommand::PrevSubStep => handle.prev_sub_step().map(drop),
        ReplayCommand::Product(n) => {
            return handle
                .select_product(n, notifier)
                .map(drop)
                .map_err(|e| e.to_string())
        }
        ReplayCommand::Remount => {
            handle.remount();
            Ok(())
        }
    };
    result.map_err(|e| e.to_string())
}

/// Mount `kind` and run `commands` against it in order.
pub fn run(
    kind: WorkflowKind,
    commands: &[String],
    notifier: &Notifier,
) -> serde_json::Result<ReplayOutcome> {
    let mut handle = workflows::mount(kind);
    let mut rejected = Vec::new();

    for raw in commands {
        let outcome = raw
            .parse::<ReplayCommand>()
            .map_err(|e| e.to_string())
            .and_then(|command| apply(handle.as_mut(), command, notifier));

        if let Err(reason) = outcome {
            tracing::debug!(command = %raw, %reason, "replay command rejected");
            rejected.push(Rejection {
                command: raw.clone(),
                reason,
            });
        }
    }

    Ok(ReplayOutcome {
        cursor: handle.cursor(),
        rejected,
        snapshot: handle.snapshot_json()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commands(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("goto 3".parse(), Ok(ReplayCommand::GoToStep(3)));
        assert_eq!("NEXT".parse(), Ok(ReplayCommand::NextStep));
        assert_eq!("sub 2".parse(), Ok(ReplayCommand::GoToSubStep(2)));
        assert_eq!("product 4".parse(), Ok(ReplayCommand::Product(4)));
        assert_eq!("reload".parse(), Ok(ReplayCommand::Remount));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<ReplayCommand>(), Err(ParseCommandError::Empty));
        assert_eq!(
            "goto".parse::<ReplayCommand>(),
            Err(ParseCommandError::MissingNumber("goto".to_string()))
        );
        assert!(matches!(
            "goto x".parse::<ReplayCommand>(),
            Err(ParseCommandError::BadNumber { .. })
        ));
        assert!(matches!(
            "jump 2".parse::<ReplayCommand>(),
            Err(ParseCommandError::Unknown(_))
        ));
    }

    #[test]
    fn test_display_parses_back() {
        for command in [
            ReplayCommand::GoToStep(2),
            ReplayCommand::PrevSubStep,
            ReplayCommand::Product(6),
            ReplayCommand::Remount,
        ] {
            assert_eq!(command.to_string().parse(), Ok(command));
        }
    }

    #[test]
    fn test_run_reports_rejections_and_continues() {
        let outcome = run(
            WorkflowKind::Order,
            &commands(&["goto 3", "goto 99", "sub 2", "prev"]),
            &Notifier::disabled(),
        )
        .unwrap();

        assert_eq!(outcome.cursor, WorkflowCursor { step: 2, sub_step: 1 });
        assert_eq!(outcome.rejected.len(), 1);
        assert_eq!(outcome.rejected[0].command, "goto 99");
        assert_eq!(outcome.snapshot["workflow"], "order");
        assert_eq!(outcome.snapshot["step_title"], "Prescription");
    }

    #[test]
    fn test_run_product_records_selection() {
        let outcome = run(
            WorkflowKind::Order,
            &commands(&["product 4", "goto 3", "product 4"]),
            &Notifier::disabled(),
        )
        .unwrap();

        // the first attempt is made before reaching the product step
        assert_eq!(outcome.rejected.len(), 1);
        assert_eq!(outcome.rejected[0].command, "product 4");
        assert_eq!(outcome.cursor, WorkflowCursor { step: 3, sub_step: 2 });
        assert_eq!(outcome.snapshot["selection"]["value"], 4);
        assert_eq!(outcome.snapshot["sub_step_label"], "Accessories");
    }
}
