//! Wizard core: cursor, typed draft bags, store and product dispatcher

mod cursor;
mod dispatch;
mod mirror;
mod store;
mod workflow;


pub use cursor::{NavigationError, StepBounds, WorkflowCursor};
pub use dispatch::{dispatch_product, resolve, DispatchError, ProductKind, ProductSelection};
pub use mirror::ServerDraft;
pub use store::{FieldOf, WizardHandle, WorkflowSnapshot, WorkflowStore};
pub use workflow::{DraftBag, ParseWorkflowError, Workflow, WorkflowKind, WorkflowStep};
