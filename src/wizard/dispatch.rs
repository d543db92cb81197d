//! Product-kind dispatcher
//!
//! Counter staff pick a product kind on a workflow's product step; the
//! dispatcher turns that choice into the sub-step holding the matching panel.
//! This is the one place in the wizard that reports failure with a toast.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::cursor::{NavigationError, WorkflowCursor};
use super::store::WorkflowStore;
use super::workflow::{Workflow, WorkflowKind};
use crate::notifications::Notifier;

/// Product families sold at the counter.
///
/// Codes are the values used by the product picker: 1 through 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductKind {
    FrameSunglass,
    OpticalLens,
    ContactLens,
    Accessory,
    Bulk,
    FrameLensCombo,
}

impl ProductKind {
    pub fn all() -> &'static [ProductKind] {
        &[
            ProductKind::FrameSunglass,
            ProductKind::OpticalLens,
            ProductKind::ContactLens,
            ProductKind::Accessory,
            ProductKind::Bulk,
            ProductKind::FrameLensCombo,
        ]
    }

    pub fn code(&self) -> u32 {
        match self {
            ProductKind::FrameSunglass => 1,
            ProductKind::OpticalLens => 2,
            ProductKind::ContactLens => 3,
            ProductKind::Accessory => 4,
            ProductKind::Bulk => 5,
            ProductKind::FrameLensCombo => 6,
        }
    }

    pub fn from_code(code: u32) -> Option<ProductKind> {
        Self::all().iter().copied().find(|kind| kind.code() == code)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProductKind::FrameSunglass => "Frame / Sunglass",
            ProductKind::OpticalLens => "Optical Lens",
            ProductKind::ContactLens => "Contact Lens",
            ProductKind::Accessory => "Accessories",
            ProductKind::Bulk => "Bulk",
            ProductKind::FrameLensCombo => "Frame + Lens",
        }
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The `{ value, label }` pair the product picker hands back
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSelection {
    pub value: u32,
    pub label: String,
}

impl ProductSelection {
    pub fn kind(&self) -> Option<ProductKind> {
        ProductKind::from_code(self.value)
    }
}

impl From<ProductKind> for ProductSelection {
    fn from(kind: ProductKind) -> Self {
        Self {
            value: kind.code(),
            label: kind.label().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("Invalid product type {0}")]
    UnknownProduct(u32),

    #[error("{kind} is not available in the {workflow} workflow")]
    Unsupported {
        kind: ProductKind,
        workflow: WorkflowKind,
    },

    #[error("the {0} workflow has no product step")]
    NoProductStep(WorkflowKind),

    #[error("Choose a product on step {product_step}; this is step {step}")]
    NotOnProductStep { step: u32, product_step: u32 },

    #[error(transparent)]
    Navigation(#[from] NavigationError),
}

/// Where a product code lands in workflow `W`: `(step, sub_step, kind)`.
pub fn resolve<W: Workflow>(value: u32) -> Result<(u32, u32, ProductKind), DispatchError> {
    let step = W::product_step()
        .and_then(W::step_number)
        .ok_or(DispatchError::NoProductStep(W::KIND))?;
    let kind = ProductKind::from_code(value).ok_or(DispatchError::UnknownProduct(value))?;
    let sub_step = W::product_sub_step(kind).ok_or(DispatchError::Unsupported {
        kind,
        workflow: W::KIND,
    })?;
    Ok((step, sub_step, kind))
}

/// Open the panel for product code `value`.
///
/// Only valid while the cursor is on the product step. On success the
/// sub-step moves to the matching panel and the selection is recorded. On
/// failure exactly one error toast is raised and the cursor and selection are
/// left as they were.
pub fn dispatch_product<W: Workflow>(
    store: &mut WorkflowStore<W>,
    value: u32,
    notifier: &Notifier,
) -> Result<WorkflowCursor, DispatchError> {
    let outcome = resolve::<W>(value).and_then(|(step, sub_step, kind)| {
        if store.current_step() != step {
            return Err(DispatchError::NotOnProductStep {
                step: store.current_step(),
                product_step: step,
            });
        }
        store
            .enter_product(sub_step, ProductSelection::from(kind))
            .map_err(DispatchError::from)
    });

    if let Err(ref err) = outcome {
        tracing::debug!(workflow = %W::KIND, value, error = %err, "product dispatch rejected");
        notifier.error(err.to_string());
    }
    outcome
}
