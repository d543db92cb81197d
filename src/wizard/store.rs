//! Workflow store: one cursor and one draft bag per mounted workflow
//!
//! Mounting creates a fresh store; remounting throws the old one away. Nothing
//! survives a remount.

use std::marker::PhantomData;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::cursor::{NavigationError, StepBounds, WorkflowCursor};
use super::dispatch::{self, DispatchError, ProductSelection};
use super::workflow::{DraftBag, Workflow, WorkflowKind, WorkflowStep};
use crate::notifications::Notifier;

/// Setter type for workflow `W`'s draft bag
pub type FieldOf<W> = <<W as Workflow>::Draft as DraftBag>::Field;

/// State shared by all steps of one mounted workflow
#[derive(Debug, Clone)]
pub struct WorkflowStore<W: Workflow> {
    instance_id: Uuid,
    mounted_at: DateTime<Utc>,
    cursor: WorkflowCursor,
    draft: W::Draft,
    selection: Option<ProductSelection>,
    _workflow: PhantomData<fn() -> W>,
}

/// Read-only, serializable view of a store
#[derive(Debug, Serialize)]
pub struct WorkflowSnapshot<'a, D: Serialize> {
    pub workflow: WorkflowKind,
    pub instance_id: Uuid,
    pub mounted_at: DateTime<Utc>,
    pub cursor: WorkflowCursor,
    pub total_steps: u32,
    pub step_title: Option<&'static str>,
    pub sub_step_label: Option<String>,
    pub selection: Option<&'a ProductSelection>,
    pub draft: &'a D,
}

impl<W: Workflow> Default for WorkflowStore<W> {
    fn default() -> Self {
        Self::mount()
    }
}

impl<W: Workflow> WorkflowStore<W> {
    pub fn mount() -> Self {
        let store = Self {
            instance_id: Uuid::new_v4(),
            mounted_at: Utc::now(),
            cursor: WorkflowCursor::START,
            draft: W::Draft::default(),
            selection: None,
            _workflow: PhantomData,
        };
        tracing::debug!(workflow = %W::KIND, instance = %store.instance_id, "workflow mounted");
        store
    }

    /// Discard all progress and start over
    pub fn remount(&mut self) {
        tracing::debug!(workflow = %W::KIND, instance = %self.instance_id, "workflow unmounted");
        *self = Self::mount();
    }

    pub fn instance_id(&self) -> Uuid {
        self.instance_id
    }

    pub fn mounted_at(&self) -> DateTime<Utc> {
        self.mounted_at
    }

    pub fn cursor(&self) -> WorkflowCursor {
        self.cursor
    }

    pub fn current_step(&self) -> u32 {
        self.cursor.step
    }

    pub fn current_sub_step(&self) -> u32 {
        self.cursor.sub_step
    }

    pub fn total_steps(&self) -> u32 {
        W::steps().total_steps()
    }

    /// Sub-step count of the current step
    pub fn sub_steps(&self) -> u32 {
        W::steps().sub_steps(self.cursor.step)
    }

    /// The step the cursor is on
    pub fn step(&self) -> Option<W::Step> {
        W::step_at(self.cursor.step)
    }

    pub fn draft(&self) -> &W::Draft {
        &self.draft
    }

    pub fn selection(&self) -> Option<&ProductSelection> {
        self.selection.as_ref()
    }

    fn navigate(
        &mut self,
        op: &'static str,
        f: impl FnOnce(WorkflowCursor) -> Result<WorkflowCursor, NavigationError>,
    ) -> Result<WorkflowCursor, NavigationError> {
        match f(self.cursor) {
            Ok(next) => {
                tracing::debug!(
                    workflow = %W::KIND,
                    op,
                    step = next.step,
                    sub_step = next.sub_step,
                    "cursor moved"
                );
                self.cursor = next;
                Ok(next)
            }
            Err(err) => {
                tracing::debug!(workflow = %W::KIND, op, error = %err, "navigation rejected");
                Err(err)
            }
        }
    }

    pub fn go_to_step(&mut self, n: u32) -> Result<WorkflowCursor, NavigationError> {
        self.navigate("go_to_step", |c| c.go_to_step(n, W::steps()))
    }

    pub fn next_step(&mut self) -> Result<WorkflowCursor, NavigationError> {
        self.navigate("next_step", |c| c.next_step(W::steps()))
    }

    pub fn prev_step(&mut self) -> Result<WorkflowCursor, NavigationError> {
        self.navigate("prev_step", WorkflowCursor::prev_step)
    }

    pub fn go_to_sub_step(&mut self, n: u32) -> Result<WorkflowCursor, NavigationError> {
        self.navigate("go_to_sub_step", |c| c.go_to_sub_step(n, W::steps()))
    }

    pub fn next_sub_step(&mut self) -> Result<WorkflowCursor, NavigationError> {
        self.navigate("next_sub_step", |c| c.next_sub_step(W::steps()))
    }

    pub fn prev_sub_step(&mut self) -> Result<WorkflowCursor, NavigationError> {
        self.navigate("prev_sub_step", WorkflowCursor::prev_sub_step)
    }

    /// Overwrite one draft field; other fields are kept
    pub fn set(&mut self, field: FieldOf<W>) {
        tracing::debug!(workflow = %W::KIND, field = ?field, "draft field set");
        self.draft.apply(field);
    }

    /// Open a product panel on the current step and remember which product
    /// was chosen.
    pub(crate) fn enter_product(
        &mut self,
        sub_step: u32,
        selection: ProductSelection,
    ) -> Result<WorkflowCursor, NavigationError> {
        let cursor = self.navigate("select_product", |c| {
            c.go_to_sub_step(sub_step, W::steps())
        })?;
        self.selection = Some(selection);
        Ok(cursor)
    }

    /// Dispatch product code `value`; see [`dispatch::dispatch_product`]
    pub fn select_product(
        &mut self,
        value: u32,
        notifier: &Notifier,
    ) -> Result<WorkflowCursor, DispatchError> {
        dispatch::dispatch_product(self, value, notifier)
    }

    pub fn snapshot(&self) -> WorkflowSnapshot<'_, W::Draft> {
        WorkflowSnapshot {
            workflow: W::KIND,
            instance_id: self.instance_id,
            mounted_at: self.mounted_at,
            cursor: self.cursor,
            total_steps: self.total_steps(),
            step_title: self.step().map(|s| s.title()),
            sub_step_label: W::sub_step_label(self.cursor.step, self.cursor.sub_step),
            selection: self.selection.as_ref(),
            draft: &self.draft,
        }
    }
}

/// Object-safe handle over any mounted workflow.
///
/// Lets the screen and the replay command drive whichever workflow is mounted
/// without knowing its concrete type.
pub trait WizardHandle: Send {
    fn kind(&self) -> WorkflowKind;
    fn cursor(&self) -> WorkflowCursor;
    fn total_steps(&self) -> u32;
    fn sub_steps(&self) -> u32;
    fn step_titles(&self) -> Vec<&'static str>;
    fn step_title(&self) -> Option<&'static str>;
    fn step_prompt(&self) -> Option<&'static str>;
    fn sub_step_label(&self) -> Option<String>;
    fn selection(&self) -> Option<&ProductSelection>;
    fn draft_summary(&self) -> Vec<(&'static str, String)>;
    fn progress(&self) -> f64;

    fn go_to_step(&mut self, n: u32) -> Result<WorkflowCursor, NavigationError>;
    fn next_step(&mut self) -> Result<WorkflowCursor, NavigationError>;
    fn prev_step(&mut self) -> Result<WorkflowCursor, NavigationError>;
    fn go_to_sub_step(&mut self, n: u32) -> Result<WorkflowCursor, NavigationError>;
    fn next_sub_step(&mut self) -> Result<WorkflowCursor, NavigationError>;
    fn prev_sub_step(&mut self) -> Result<WorkflowCursor, NavigationError>;
    fn select_product(
        &mut self,
        value: u32,
        notifier: &Notifier,
    ) -> Result<WorkflowCursor, DispatchError>;
    fn remount(&mut self);

    fn snapshot_json(&self) -> serde_json::Result<serde_json::Value>;
}

impl<W> WizardHandle for WorkflowStore<W>
where
    W: Workflow,
    W::Draft: Send,
{
    fn kind(&self) -> WorkflowKind {
        W::KIND
    }

    fn cursor(&self) -> WorkflowCursor {
        self.cursor
    }

    fn total_steps(&self) -> u32 {
        WorkflowStore::total_steps(self)
    }

    fn sub_steps(&self) -> u32 {
        WorkflowStore::sub_steps(self)
    }

    fn step_titles(&self) -> Vec<&'static str> {
        W::steps().iter().map(|s| s.title()).collect()
    }

    fn step_title(&self) -> Option<&'static str> {
        self.step().map(|s| s.title())
    }

    fn step_prompt(&self) -> Option<&'static str> {
        self.step().map(|s| s.prompt())
    }

    fn sub_step_label(&self) -> Option<String> {
        W::sub_step_label(self.cursor.step, self.cursor.sub_step)
    }

    fn selection(&self) -> Option<&ProductSelection> {
        self.selection.as_ref()
    }

    fn draft_summary(&self) -> Vec<(&'static str, String)> {
        self.draft.summary()
    }

    fn progress(&self) -> f64 {
        self.cursor.progress(W::steps())
    }

    fn go_to_step(&mut self, n: u32) -> Result<WorkflowCursor, NavigationError> {
        WorkflowStore::go_to_step(self, n)
    }

    fn next_step(&mut self) -> Result<WorkflowCursor, NavigationError> {
        WorkflowStore::next_step(self)
    }

    fn prev_step(&mut self) -> Result<WorkflowCursor, NavigationError> {
        WorkflowStore::prev_step(self)
    }

    fn go_to_sub_step(&mut self, n: u32) -> Result<WorkflowCursor, NavigationError> {
        WorkflowStore::go_to_sub_step(self, n)
    }

    fn next_sub_step(&mut self) -> Result<WorkflowCursor, NavigationError> {
        WorkflowStore::next_sub_step(self)
    }

    fn prev_sub_step(&mut self) -> Result<WorkflowCursor, NavigationError> {
        WorkflowStore::prev_sub_step(self)
    }

    fn select_product(
        &mut self,
        value: u32,
        notifier: &Notifier,
    ) -> Result<WorkflowCursor, DispatchError> {
        WorkflowStore::select_product(self, value, notifier)
    }

    fn remount(&mut self) {
        WorkflowStore::remount(self);
    }

    fn snapshot_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self.snapshot())
    }
}
