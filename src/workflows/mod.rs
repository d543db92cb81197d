//! Concrete counter workflows
//!
//! Each workflow is a marker type implementing [`Workflow`]. [`mount`] turns a
//! [`WorkflowKind`] into a type-erased store for the screen and the CLI.

mod common;
mod grn;
mod offer;
mod order;
mod sales_return;
mod stock_transfer;

use serde::Serialize;

use crate::wizard::{
    ProductKind, WizardHandle, Workflow, WorkflowKind, WorkflowStep, WorkflowStore,
};

pub use common::{EntityRef, ProductLine};
pub use grn::{Grn, GrnDraft, GrnField, GrnStep};
pub use offer::{Offer, OfferDraft, OfferField, OfferStep};
pub use order::{Order, OrderDraft, OrderField, OrderStep};
pub use sales_return::{SalesReturn, SalesReturnDraft, SalesReturnField, SalesReturnStep};
pub use stock_transfer::{
    StockTransferIn, StockTransferOut, TransferInDraft, TransferInField, TransferInStep,
    TransferOutDraft, TransferOutField, TransferOutStep,
};

/// Mount a fresh store for `kind`
pub fn mount(kind: WorkflowKind) -> Box<dyn WizardHandle> {
    match kind {
        WorkflowKind::Order => Box::new(WorkflowStore::<Order>::mount()),
        WorkflowKind::SalesReturn => Box::new(WorkflowStore::<SalesReturn>::mount()),
        WorkflowKind::StockTransferOut => Box::new(WorkflowStore::<StockTransferOut>::mount()),
        WorkflowKind::StockTransferIn => Box::new(WorkflowStore::<StockTransferIn>::mount()),
        WorkflowKind::Offer => Box::new(WorkflowStore::<Offer>::mount()),
        WorkflowKind::Grn => Box::new(WorkflowStore::<Grn>::mount()),
    }
}

/// Static description of a workflow, for listings
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowDescription {
    pub kind: WorkflowKind,
    pub label: &'static str,
    pub steps: Vec<StepDescription>,
    /// Product kinds the product step accepts, with their sub-step
    pub products: Vec<(ProductKind, u32)>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StepDescription {
    pub number: u32,
    pub title: &'static str,
    pub sub_steps: u32,
    pub product_step: bool,
}

fn describe_workflow<W: Workflow>() -> WorkflowDescription {
    let product_step = W::product_step();
    let steps = W::steps()
        .iter()
        .zip(1u32..)
        .map(|(step, number)| StepDescription {
            number,
            title: step.title(),
            sub_steps: step.sub_steps(),
            product_step: product_step == Some(*step),
        })
        .collect();
    let products = ProductKind::all()
        .iter()
        .filter_map(|kind| W::product_sub_step(*kind).map(|sub| (*kind, sub)))
        .collect();

    WorkflowDescription {
        kind: W::KIND,
        label: W::KIND.label(),
        steps,
        products: if product_step.is_some() {
            products
        } else {
            Vec::new()
        },
    }
}

pub fn describe(kind: WorkflowKind) -> WorkflowDescription {
    match kind {
        WorkflowKind::Order => describe_workflow::<Order>(),
        WorkflowKind::SalesReturn => describe_workflow::<SalesReturn>(),
        WorkflowKind::StockTransferOut => describe_workflow::<StockTransferOut>(),
        WorkflowKind::StockTransferIn => describe_workflow::<StockTransferIn>(),
        WorkflowKind::Offer => describe_workflow::<Offer>(),
        WorkflowKind::Grn => describe_workflow::<Grn>(),
    }
}
