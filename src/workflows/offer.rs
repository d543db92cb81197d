//! Customer offer (quotation) creation

use chrono::NaiveDate;
use serde::Serialize;

use super::common::{EntityRef, ProductLine, Summary};
use crate::wizard::{DraftBag, ProductKind, ServerDraft, Workflow, WorkflowKind, WorkflowStep};

#[derive(Debug, Clone, Copy)]
pub struct Offer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OfferStep {
    Customer,
    Details,
    Products,
    Review,
    Complete,
}

impl WorkflowStep for OfferStep {
    fn title(self) -> &'static str {
        match self {
            OfferStep::Customer => "Customer",
            OfferStep::Details => "Details",
            OfferStep::Products => "Products",
            OfferStep::Review => "Review",
            OfferStep::Complete => "Complete",
        }
    }

    fn prompt(self) -> &'static str {
        match self {
            OfferStep::Customer => "Choose who the offer is for",
            OfferStep::Details => "Name the offer and set its validity and discount",
            OfferStep::Products => "Add the products covered by the offer",
            OfferStep::Review => "Check the offer before sharing it",
            OfferStep::Complete => "Offer saved",
        }
    }

    fn sub_steps(self) -> u32 {
        match self {
            OfferStep::Products => 6,
            _ => 1,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct OfferDraft {
    pub customer: Option<EntityRef>,
    pub name: Option<String>,
    pub valid_until: Option<NaiveDate>,
    pub discount_percent: Option<u8>,
    pub lines: Vec<ProductLine>,
    pub server_draft: Option<ServerDraft>,
}

#[derive(Debug, Clone)]
pub enum OfferField {
    Customer(EntityRef),
    Name(String),
    ValidUntil(NaiveDate),
    /// Stored as entered; the server validates pricing
    DiscountPercent(u8),
    Lines(Vec<ProductLine>),
    ServerDraft(ServerDraft),
}

impl DraftBag for OfferDraft {
    type Field = OfferField;

    fn apply(&mut self, field: OfferField) {
        match field {
            OfferField::Customer(v) => self.customer = Some(v),
            OfferField::Name(v) => self.name = Some(v),
            OfferField::ValidUntil(v) => self.valid_until = Some(v),
            OfferField::DiscountPercent(v) => self.discount_percent = Some(v),
            OfferField::Lines(v) => self.lines = v,
            OfferField::ServerDraft(v) => self.server_draft = Some(v),
        }
    }

    fn summary(&self) -> Vec<(&'static str, String)> {
        let discount = self.discount_percent.map(|d| format!("{d}%"));
        Summary::default()
            .field("customer", self.customer.as_ref())
            .field("offer", self.name.as_ref())
            .field("valid until", self.valid_until.as_ref())
            .field("discount", discount.as_ref())
            .lines("products", &self.lines)
            .server_draft(self.server_draft.as_ref())
            .build()
    }
}

impl Workflow for Offer {
    const KIND: WorkflowKind = WorkflowKind::Offer;

    type Step = OfferStep;
    type Draft = OfferDraft;

    fn steps() -> &'static [OfferStep] {
        &[
            OfferStep::Customer,
            OfferStep::Details,
            OfferStep::Products,
            OfferStep::Review,
            OfferStep::Complete,
        ]
    }

    fn product_step() -> Option<OfferStep> {
        Some(OfferStep::Products)
    }

    fn product_sub_step(kind: ProductKind) -> Option<u32> {
        match kind {
            ProductKind::FrameSunglass => Some(2),
            ProductKind::OpticalLens => Some(3),
            ProductKind::ContactLens => Some(4),
            ProductKind::Accessory => Some(5),
            ProductKind::FrameLensCombo => Some(6),
            ProductKind::Bulk => None,
        }
    }
}
