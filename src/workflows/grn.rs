//! Goods receipt note: stock received from a vendor

use serde::Serialize;

use super::common::{EntityRef, ProductLine, Summary};
use crate::wizard::{DraftBag, ProductKind, ServerDraft, Workflow, WorkflowKind, WorkflowStep};

#[derive(Debug, Clone, Copy)]
pub struct Grn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrnStep {
    Vendor,
    Invoice,
    Products,
    Confirm,
}

impl WorkflowStep for GrnStep {
    fn title(self) -> &'static str {
        match self {
            GrnStep::Vendor => "Vendor",
            GrnStep::Invoice => "Invoice",
            GrnStep::Products => "Products",
            GrnStep::Confirm => "Confirm",
        }
    }

    fn prompt(self) -> &'static str {
        match self {
            GrnStep::Vendor => "Choose the vendor and the receiving location",
            GrnStep::Invoice => "Enter the vendor invoice or purchase order",
            GrnStep::Products => "Record the received items",
            GrnStep::Confirm => "Post the receipt into stock",
        }
    }

    fn sub_steps(self) -> u32 {
        match self {
            GrnStep::Products => 6,
            _ => 1,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct GrnDraft {
    pub vendor: Option<EntityRef>,
    pub location: Option<EntityRef>,
    pub vendor_invoice: Option<String>,
    pub lines: Vec<ProductLine>,
    pub server_draft: Option<ServerDraft>,
}

#[derive(Debug, Clone)]
pub enum GrnField {
    Vendor(EntityRef),
    Location(EntityRef),
    VendorInvoice(String),
    Lines(Vec<ProductLine>),
    ServerDraft(ServerDraft),
}

impl DraftBag for GrnDraft {
    type Field = GrnField;

    fn apply(&mut self, field: GrnField) {
        match field {
            GrnField::Vendor(v) => self.vendor = Some(v),
            GrnField::Location(v) => self.location = Some(v),
            GrnField::VendorInvoice(v) => self.vendor_invoice = Some(v),
            GrnField::Lines(v) => self.lines = v,
            GrnField::ServerDraft(v) => self.server_draft = Some(v),
        }
    }

    fn summary(&self) -> Vec<(&'static str, String)> {
        Summary::default()
            .field("vendor", self.vendor.as_ref())
            .field("location", self.location.as_ref())
            .field("vendor invoice", self.vendor_invoice.as_ref())
            .lines("received", &self.lines)
            .server_draft(self.server_draft.as_ref())
            .build()
    }
}

impl Workflow for Grn {
    const KIND: WorkflowKind = WorkflowKind::Grn;

    type Step = GrnStep;
    type Draft = GrnDraft;

    fn steps() -> &'static [GrnStep] {
        &[
            GrnStep::Vendor,
            GrnStep::Invoice,
            GrnStep::Products,
            GrnStep::Confirm,
        ]
    }

    fn product_step() -> Option<GrnStep> {
        Some(GrnStep::Products)
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::Notifier;
    use crate::wizard::WorkflowStore;

    #[test]
    fn test_bulk_receipt_uses_last_panel() {
        let mut store = WorkflowStore::<Grn>::mount();
        store.go_to_step(3).unwrap();
        store
            .select_product(ProductKind::Bulk.code(), &Notifier::disabled())
            .unwrap();
        assert_eq!(store.current_step(), 3);
        assert_eq!(store.current_sub_step(), 6);
    }

    #[test]
    fn test_summary_lists_vendor_invoice() {
        let mut draft = GrnDraft::default();
        assert!(draft.is_empty());

        draft.apply(GrnField::VendorInvoice("VI-2231".to_string()));
        let summary = draft.summary();
        assert_eq!(summary, vec![("vendor invoice", "VI-2231".to_string())]);
    }
}
