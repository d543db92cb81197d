//! Order creation: customer through completed sale

use serde::Serialize;

use super::common::{EntityRef, ProductLine, Summary};
use crate::wizard::{DraftBag, ProductKind, ServerDraft, Workflow, WorkflowKind, WorkflowStep};

#[derive(Debug, Clone, Copy)]
pub struct Order;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStep {
    Customer,
    Prescription,
    Products,
    Measurements,
    Payment,
    Review,
    Complete,
}

impl WorkflowStep for OrderStep {
    fn title(self) -> &'static str {
        match self {
            OrderStep::Customer => "Customer",
            OrderStep::Prescription => "Prescription",
            OrderStep::Products => "Products",
            OrderStep::Measurements => "Measurements",
            OrderStep::Payment => "Payment",
            OrderStep::Review => "Review",
            OrderStep::Complete => "Complete",
        }
    }

    fn prompt(self) -> &'static str {
        match self {
            OrderStep::Customer => "Search or create the customer and pick the patient",
            OrderStep::Prescription => "Attach an existing prescription or record a new one",
            OrderStep::Products => "Add frames, lenses and accessories to the order",
            OrderStep::Measurements => "Record fitting measurements (PD, heights)",
            OrderStep::Payment => "Take the advance and choose the payment mode",
            OrderStep::Review => "Check the order totals before saving",
            OrderStep::Complete => "Order saved; print or start a new one",
        }
    }

    fn sub_steps(self) -> u32 {
        match self {
            // picker + five product panels
            OrderStep::Products => 6,
            _ => 1,
        }
    }
}

/// In-progress order
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrderDraft {
    pub customer: Option<EntityRef>,
    pub patient: Option<EntityRef>,
    pub location: Option<EntityRef>,
    pub prescription_id: Option<u64>,
    pub lines: Vec<ProductLine>,
    pub server_draft: Option<ServerDraft>,
}

#[derive(Debug, Clone)]
pub enum OrderField {
    Customer(EntityRef),
    Patient(EntityRef),
    Location(EntityRef),
    Prescription(u64),
    Lines(Vec<ProductLine>),
    ServerDraft(ServerDraft),
}

impl DraftBag for OrderDraft {
    type Field = OrderField;

    fn apply(&mut self, field: OrderField) {
        match field {
            OrderField::Customer(v) => self.customer = Some(v),
            OrderField::Patient(v) => self.patient = Some(v),
            OrderField::Location(v) => self.location = Some(v),
            OrderField::Prescription(v) => self.prescription_id = Some(v),
            OrderField::Lines(v) => self.lines = v,
            OrderField::ServerDraft(v) => self.server_draft = Some(v),
        }
    }

    fn summary(&self) -> Vec<(&'static str, String)> {
        Summary::default()
            .field("customer", self.customer.as_ref())
            .field("patient", self.patient.as_ref())
            .field("location", self.location.as_ref())
            .field("prescription", self.prescription_id.as_ref())
            .lines("products", &self.lines)
            .server_draft(self.server_draft.as_ref())
            .build()
    }
}

impl Workflow for Order {
    const KIND: WorkflowKind = WorkflowKind::Order;

    type Step = OrderStep;
    type Draft = OrderDraft;

    fn steps() -> &'static [OrderStep] {
        &[
            OrderStep::Customer,
            OrderStep::Prescription,
            OrderStep::Products,
            OrderStep::Measurements,
            OrderStep::Payment,
            OrderStep::Review,
            OrderStep::Complete,
        ]
    }

    fn product_step() -> Option<OrderStep> {
        Some(OrderStep::Products)
    }

    fn product_sub_step(kind: ProductKind) -> Option<u32> {
        match kind {
            ProductKind::Accessory => Some(2),
            ProductKind::FrameSunglass => Some(3),
            ProductKind::FrameLensCombo => Some(4),
            ProductKind::OpticalLens => Some(5),
            ProductKind::ContactLens => Some(6),
            ProductKind::Bulk => None,
        }
    }
}
