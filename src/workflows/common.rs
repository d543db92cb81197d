//! Value types shared by the workflow draft bags

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::wizard::{ProductKind, ServerDraft};

/// Reference to a server-side record picked at the counter (customer,
/// patient, location, vendor)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: u64,
    pub name: String,
}

impl EntityRef {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{})", self.name, self.id)
    }
}

/// One product row added on a product step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductLine {
    pub product_id: u64,
    pub kind: ProductKind,
    pub description: String,
    pub quantity: u32,
}

impl ProductLine {
    pub fn new(
        product_id: u64,
        kind: ProductKind,
        description: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self {
            product_id,
            kind,
            description: description.into(),
            quantity,
        }
    }
}

/// Collects `(name, value)` rows for a draft summary, skipping unset fields.
#[derive(Default)]
pub(crate) struct Summary {
    rows: Vec<(&'static str, String)>,
}

impl Summary {
    pub(crate) fn field(mut self, name: &'static str, value: Option<&impl fmt::Display>) -> Self {
        if let Some(value) = value {
            self.rows.push((name, value.to_string()));
        }
        self
    }

    pub(crate) fn lines(mut self, name: &'static str, lines: &[ProductLine]) -> Self {
        if !lines.is_empty() {
            let units: u32 = lines.iter().map(|l| l.quantity).sum();
            self.rows
                .push((name, format!("{} line(s), {} unit(s)", lines.len(), units)));
        }
        self
    }

    pub(crate) fn server_draft(mut self, draft: Option<&ServerDraft>) -> Self {
        if let Some(draft) = draft {
            self.rows.push(("server draft", draft.describe()));
        }
        self
    }

    pub(crate) fn build(self) -> Vec<(&'static str, String)> {
        self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_ref_display() {
        assert_eq!(EntityRef::new(12, "Asha Rao").to_string(), "Asha Rao (#12)");
    }

    #[test]
    fn test_summary_skips_unset_fields() {
        let customer = EntityRef::new(1, "A");
        let rows = Summary::default()
            .field("customer", Some(&customer))
            .field("patient", None::<&EntityRef>)
            .lines("products", &[])
            .build();
        assert_eq!(rows, vec![("customer", "A (#1)".to_string())]);
    }

    #[test]
    fn test_summary_counts_units() {
        let lines = vec![
            ProductLine::new(1, ProductKind::Accessory, "Lens cloth", 3),
            ProductLine::new(2, ProductKind::FrameSunglass, "Aviator", 1),
        ];
        let rows = Summary::default().lines("products", &lines).build();
        assert_eq!(rows[0].1, "2 line(s), 4 unit(s)");
    }
}
