//! The `Workflow` trait and the closed set of counter workflows
//!
//! A workflow describes its steps, its typed draft bag, and which sub-step of
//! its product step each product kind opens. [`WorkflowStore`] is generic over
//! it, so every business process shares the same cursor and bag plumbing.
//!
//! [`WorkflowStore`]: super::WorkflowStore

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::cursor::StepBounds;
use super::dispatch::ProductKind;

/// The counter workflows shipped with optic-desk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkflowKind {
    Order,
    SalesReturn,
    StockTransferOut,
    StockTransferIn,
    Offer,
    Grn,
}

impl WorkflowKind {
    pub fn all() -> &'static [WorkflowKind] {
        &[
            WorkflowKind::Order,
            WorkflowKind::SalesReturn,
            WorkflowKind::StockTransferOut,
            WorkflowKind::StockTransferIn,
            WorkflowKind::Offer,
            WorkflowKind::Grn,
        ]
    }

    /// Identifier used on the command line and in config files
    pub fn slug(&self) -> &'static str {
        match self {
            WorkflowKind::Order => "order",
            WorkflowKind::SalesReturn => "sales-return",
            WorkflowKind::StockTransferOut => "stock-transfer-out",
            WorkflowKind::StockTransferIn => "stock-transfer-in",
            WorkflowKind::Offer => "offer",
            WorkflowKind::Grn => "grn",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkflowKind::Order => "Order",
            WorkflowKind::SalesReturn => "Sales Return",
            WorkflowKind::StockTransferOut => "Stock Transfer Out",
            WorkflowKind::StockTransferIn => "Stock Transfer In",
            WorkflowKind::Offer => "Offer",
            WorkflowKind::Grn => "Goods Receipt Note",
        }
    }

    /// The workflow after this one, wrapping around
    pub fn cycle_next(&self) -> WorkflowKind {
        let all = Self::all();
        let index = all.iter().position(|k| k == self).unwrap_or(0);
        all[(index + 1) % all.len()]
    }
}

impl fmt::Display for WorkflowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown workflow '{0}' (expected one of: order, sales-return, stock-transfer-out, stock-transfer-in, offer, grn)")]
pub struct ParseWorkflowError(pub String);

impl FromStr for WorkflowKind {
    type Err = ParseWorkflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        WorkflowKind::all()
            .iter()
            .copied()
            .find(|kind| kind.slug() == normalized)
            .ok_or_else(|| ParseWorkflowError(s.to_string()))
    }
}

/// One top-level step of a workflow
pub trait WorkflowStep: Copy + Eq + fmt::Debug + 'static {
    /// Short title shown in the step indicator
    fn title(self) -> &'static str;

    /// What the panel for this step asks the user to do
    fn prompt(self) -> &'static str;

    fn sub_steps(self) -> u32 {
        1
    }
}

/// Typed per-workflow draft record.
///
/// Fields start empty and are overwritten one at a time through `apply`.
pub trait DraftBag: Default + Clone + fmt::Debug + Serialize {
    /// Closed set of setters for this bag
    type Field: fmt::Debug;

    /// Overwrite the one field carried by `field`; everything else is left
    /// untouched.
    fn apply(&mut self, field: Self::Field);

    /// `(name, value)` pairs for every field that has been set
    fn summary(&self) -> Vec<(&'static str, String)>;

    fn is_empty(&self) -> bool {
        self.summary().is_empty()
    }
}

/// A multi-step counter workflow
pub trait Workflow: 'static {
    const KIND: WorkflowKind;

    type Step: WorkflowStep;
    type Draft: DraftBag;

    /// Steps in display order; step `n` is `steps()[n - 1]`
    fn steps() -> &'static [Self::Step];

    /// The step whose sub-steps are selected by product kind, if any
    fn product_step() -> Option<Self::Step> {
        None
    }

    /// Sub-step of the product step that handles `kind`
    fn product_sub_step(_kind: ProductKind) -> Option<u32> {
        None
    }

    fn step_at(step: u32) -> Option<Self::Step> {
        let index = usize::try_from(step.checked_sub(1)?).ok()?;
        Self::steps().get(index).copied()
    }

    fn step_number(step: Self::Step) -> Option<u32> {
        Self::steps()
            .iter()
            .position(|s| *s == step)
            .map(|index| index as u32 + 1)
    }

    /// Label of a sub-step: the picker, a product panel, or a plain counter
    fn sub_step_label(step: u32, sub_step: u32) -> Option<String> {
        let current = Self::step_at(step)?;
        if Self::product_step() == Some(current) {
            if sub_step == 1 {
                return Some("Choose product type".to_string());
            }
            return ProductKind::all()
                .iter()
                .find(|kind| Self::product_sub_step(**kind) == Some(sub_step))
                .map(|kind| kind.label().to_string());
        }
        if current.sub_steps() > 1 {
            return Some(format!("Part {} of {}", sub_step, current.sub_steps()));
        }
        None
    }
}

impl<S: WorkflowStep> StepBounds for [S] {
    fn total_steps(&self) -> u32 {
        self.len() as u32
    }

    fn sub_steps(&self, step: u32) -> u32 {
        step.checked_sub(1)
            .and_then(|index| self.get(index as usize))
            .map_or(1, |s| s.sub_steps())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workflow_kind_parse() {
        assert_eq!("order".parse::<WorkflowKind>(), Ok(WorkflowKind::Order));
        assert_eq!(
            "Sales_Return".parse::<WorkflowKind>(),
            Ok(WorkflowKind::SalesReturn)
        );
        assert_eq!(" grn ".parse::<WorkflowKind>(), Ok(WorkflowKind::Grn));
        assert!("invoice".parse::<WorkflowKind>().is_err());
    }

    #[test]
    fn test_workflow_kind_slug_round_trips_through_display() {
        for kind in WorkflowKind::all() {
            assert_eq!(kind.to_string().parse::<WorkflowKind>(), Ok(*kind));
        }
    }

    #[test]
    fn test_cycle_next_wraps() {
        assert_eq!(WorkflowKind::Order.cycle_next(), WorkflowKind::SalesReturn);
        assert_eq!(WorkflowKind::Grn.cycle_next(), WorkflowKind::Order);
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&WorkflowKind::StockTransferIn).unwrap();
        assert_eq!(json, "\"stock-transfer-in\"");
    }
}
