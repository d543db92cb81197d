//! Stock transfers between store locations, outbound and inbound

use serde::Serialize;

use super::common::{EntityRef, ProductLine, Summary};
use crate::wizard::{DraftBag, ProductKind, ServerDraft, Workflow, WorkflowKind, WorkflowStep};

// ─── Transfer Out ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct StockTransferOut;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferOutStep {
    Locations,
    Products,
    Review,
    Dispatch,
}

impl WorkflowStep for TransferOutStep {
    fn title(self) -> &'static str {
        match self {
            TransferOutStep::Locations => "Locations",
            TransferOutStep::Products => "Products",
            TransferOutStep::Review => "Review",
            TransferOutStep::Dispatch => "Dispatch",
        }
    }

    fn prompt(self) -> &'static str {
        match self {
            TransferOutStep::Locations => "Choose the sending and receiving locations",
            TransferOutStep::Products => "Scan or pick the stock leaving this location",
            TransferOutStep::Review => "Check quantities against the pick list",
            TransferOutStep::Dispatch => "Mark the transfer as dispatched",
        }
    }

    fn sub_steps(self) -> u32 {
        match self {
            TransferOutStep::Products => 6,
            _ => 1,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TransferOutDraft {
    pub from_location: Option<EntityRef>,
    pub to_location: Option<EntityRef>,
    pub remarks: Option<String>,
    pub lines: Vec<ProductLine>,
    pub server_draft: Option<ServerDraft>,
}

#[derive(Debug, Clone)]
pub enum TransferOutField {
    FromLocation(EntityRef),
    ToLocation(EntityRef),
    Remarks(String),
    Lines(Vec<ProductLine>),
    ServerDraft(ServerDraft),
}

impl DraftBag for TransferOutDraft {
    type Field = TransferOutField;

    fn apply(&mut self, field: TransferOutField) {
        match field {
            TransferOutField::FromLocation(v) => self.from_location = Some(v),
            TransferOutField::ToLocation(v) => self.to_location = Some(v),
            TransferOutField::Remarks(v) => self.remarks = Some(v),
            TransferOutField::Lines(v) => self.lines = v,
            TransferOutField::ServerDraft(v) => self.server_draft = Some(v),
        }
    }

    fn summary(&self) -> Vec<(&'static str, String)> {
        Summary::default()
            .field("from", self.from_location.as_ref())
            .field("to", self.to_location.as_ref())
            .field("remarks", self.remarks.as_ref())
            .lines("products", &self.lines)
            .server_draft(self.server_draft.as_ref())
            .build()
    }
}

impl Workflow for StockTransferOut {
    const KIND: WorkflowKind = WorkflowKind::StockTransferOut;

    type Step = TransferOutStep;
    type Draft = TransferOutDraft;

    fn steps() -> &'static [TransferOutStep] {
        &[
            TransferOutStep::Locations,
            TransferOutStep::Products,
            TransferOutStep::Review,
            TransferOutStep::Dispatch,
        ]
    }

    fn product_step() -> Option<TransferOutStep> {
        Some(TransferOutStep::Products)
    }

    fn product_sub_step(kind: ProductKind) -> Option<u32> {
        match kind {
            ProductKind::FrameSunglass => Some(2),
            ProductKind::OpticalLens => Some(3),
            ProductKind::ContactLens => Some(4),
            ProductKind::Accessory => Some(5),
            ProductKind::Bulk => Some(6),
            ProductKind::FrameLensCombo => None,
        }
    }
}

// ─── Transfer In ────────────────────────────────────────────────────────────

/// Receiving side of a transfer. Products come from the dispatched transfer,
/// so there is no product picker.
#[derive(Debug, Clone, Copy)]
pub struct StockTransferIn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferInStep {
    Transfer,
    Receive,
    Confirm,
}

impl WorkflowStep for TransferInStep {
    fn title(self) -> &'static str {
        match self {
            TransferInStep::Transfer => "Transfer",
            TransferInStep::Receive => "Receive",
            TransferInStep::Confirm => "Confirm",
        }
    }

    fn prompt(self) -> &'static str {
        match self {
            TransferInStep::Transfer => "Pick the incoming transfer for this location",
            TransferInStep::Receive => "Count what arrived against what was sent",
            TransferInStep::Confirm => "Accept the transfer into stock",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TransferInDraft {
    pub to_location: Option<EntityRef>,
    pub transfer_number: Option<String>,
    pub received: Vec<ProductLine>,
    pub server_draft: Option<ServerDraft>,
}

#[derive(Debug, Clone)]
pub enum TransferInField {
    ToLocation(EntityRef),
    TransferNumber(String),
    Received(Vec<ProductLine>),
    ServerDraft(ServerDraft),
}

impl DraftBag for TransferInDraft {
    type Field = TransferInField;

    fn apply(&mut self, field: TransferInField) {
        match field {
            TransferInField::ToLocation(v) => self.to_location = Some(v),
            TransferInField::TransferNumber(v) => self.transfer_number = Some(v),
            TransferInField::Received(v) => self.received = v,
            TransferInField::ServerDraft(v) => self.server_draft = Some(v),
        }
    }

    fn summary(&self) -> Vec<(&'static str, String)> {
        Summary::default()
            .field("location", self.to_location.as_ref())
            .field("transfer", self.transfer_number.as_ref())
            .lines("received", &self.received)
            .server_draft(self.server_draft.as_ref())
            .build()
    }
}

impl Workflow for StockTransferIn {
    const KIND: WorkflowKind = WorkflowKind::StockTransferIn;

    type Step = TransferInStep;
    type Draft = TransferInDraft;

    fn steps() -> &'static [TransferInStep] {
        &[
            TransferInStep::Transfer,
            TransferInStep::Receive,
            TransferInStep::Confirm,
        ]
    }
}
