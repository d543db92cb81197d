//! optic-desk - counter wizards for optical retail
//!
//! Each business workflow (order, sales return, stock transfer out/in, offer,
//! goods receipt) is a multi-step wizard. A mounted [`wizard::WorkflowStore`]
//! owns the wizard's cursor and draft bag; the product dispatcher routes a
//! chosen product type to the matching sub-step.

pub mod app;
pub mod config;
pub mod logging;
pub mod notifications;
pub mod replay;
pub mod ui;
pub mod wizard;
pub mod workflows;

pub use wizard::{WizardHandle, WorkflowCursor, WorkflowKind, WorkflowStore};
