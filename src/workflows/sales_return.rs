//! Sales return against an earlier invoice

use serde::Serialize;

use super::common::{EntityRef, ProductLine, Summary};
use crate::wizard::{DraftBag, ProductKind, ServerDraft, Workflow, WorkflowKind, WorkflowStep};

#[derive(Debug, Clone, Copy)]
pub struct SalesReturn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SalesReturnStep {
    Customer,
    Invoice,
    Products,
    Confirm,
}

impl WorkflowStep for SalesReturnStep {
    fn title(self) -> &'static str {
        match self {
            SalesReturnStep::Customer => "Customer",
            SalesReturnStep::Invoice => "Invoice",
            SalesReturnStep::Products => "Products",
            SalesReturnStep::Confirm => "Confirm",
        }
    }

    fn prompt(self) -> &'static str {
        match self {
            SalesReturnStep::Customer => "Find the customer returning goods",
            SalesReturnStep::Invoice => "Pick the invoice the return is made against",
            SalesReturnStep::Products => "Select the returned items and quantities",
            SalesReturnStep::Confirm => "Confirm the return and the credit issued",
        }
    }

    fn sub_steps(self) -> u32 {
        match self {
            SalesReturnStep::Products => 5,
            _ => 1,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SalesReturnDraft {
    pub customer: Option<EntityRef>,
    pub location: Option<EntityRef>,
    pub invoice_number: Option<String>,
    pub reason: Option<String>,
    pub lines: Vec<ProductLine>,
    pub server_draft: Option<ServerDraft>,
}

#[derive(Debug, Clone)]
pub enum SalesReturnField {
    Customer(EntityRef),
    Location(EntityRef),
    InvoiceNumber(String),
    Reason(String),
    Lines(Vec<ProductLine>),
    ServerDraft(ServerDraft),
}

impl DraftBag for SalesReturnDraft {
    type Field = SalesReturnField;

    fn apply(&mut self, field: SalesReturnField) {
        match field {
            SalesReturnField::Customer(v) => self.customer = Some(v),
            SalesReturnField::Location(v) => self.location = Some(v),
            SalesReturnField::InvoiceNumber(v) => self.invoice_number = Some(v),
            SalesReturnField::Reason(v) => self.reason = Some(v),
            SalesReturnField::Lines(v) => self.lines = v,
            SalesReturnField::ServerDraft(v) => self.server_draft = Some(v),
        }
    }

    fn summary(&self) -> Vec<(&'static str, String)> {
        Summary::default()
            .field("customer", self.customer.as_ref())
            .field("location", self.location.as_ref())
            .field("invoice", self.invoice_number.as_ref())
            .field("reason", self.reason.as_ref())
            .lines("returned", &self.lines)
            .server_draft(self.server_draft.as_ref())
            .build()
    }
}

impl Workflow for SalesReturn {
    const KIND: WorkflowKind = WorkflowKind::SalesReturn;

    type Step = SalesReturnStep;
    type Draft = SalesReturnDraft;

    fn steps() -> &'static [SalesReturnStep] {
        &[
            SalesReturnStep::Customer,
            SalesReturnStep::Invoice,
            SalesReturnStep::Products,
            SalesReturnStep::Confirm,
        ]
    }

    fn product_step() -> Option<SalesReturnStep> {
        Some(SalesReturnStep::Products)
    }

    fn product_sub_step(kind: ProductKind) -> Option<u32> {
        match kind {
            ProductKind::FrameSunglass => Some(2),
            ProductKind::OpticalLens => Some(3),
            ProductKind::ContactLens => Some(4),
            ProductKind::Accessory => Some(5),
            ProductKind::Bulk | ProductKind::FrameLensCombo => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::Notifier;
    use crate::wizard::{DispatchError, WorkflowCursor, WorkflowStore};

    #[test]
    fn test_combo_is_not_returnable_as_a_unit() {
        let mut store = WorkflowStore::<SalesReturn>::mount();
        store.go_to_step(3).unwrap();
        let err = store
            .select_product(ProductKind::FrameLensCombo.code(), &Notifier::disabled())
            .unwrap_err();
        assert!(matches!(err, DispatchError::Unsupported { .. }));
        assert_eq!(store.cursor(), WorkflowCursor { step: 3, sub_step: 1 });
    }

    #[test]
    fn test_contact_lens_opens_fourth_panel() {
        let mut store = WorkflowStore::<SalesReturn>::mount();
        store.go_to_step(3).unwrap();
        let cursor = store
            .select_product(ProductKind::ContactLens.code(), &Notifier::disabled())
            .unwrap();
        assert_eq!(cursor, WorkflowCursor { step: 3, sub_step: 4 });
    }
}
