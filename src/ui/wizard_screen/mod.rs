//! Wizard screen: hosts one mounted workflow and turns key presses into
//! navigation calls.

use std::sync::Arc;

use crossterm::event::KeyCode;
use ratatui::Frame;

use crate::notifications::{Notifier, ToastQueue};
use crate::ui::dialogs::HelpDialog;
use crate::wizard::{WizardHandle, WorkflowKind};
use crate::workflows;

mod render;


/// What the app loop should do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenResult {
    Continue,
    Quit,
}

pub struct WizardScreen {
    handle: Box<dyn WizardHandle>,
    /// Set after `s`; the next digit is dispatched as a product code
    pub(crate) pending_product: bool,
    /// Reason the last navigation key was refused, cleared on the next move
    pub(crate) status_line: Option<String>,
    pub help: HelpDialog,
    toasts: Arc<ToastQueue>,
}

impl WizardScreen {
    pub fn new(kind: WorkflowKind, toasts: Arc<ToastQueue>) -> Self {
        Self {
            handle: workflows::mount(kind),
            pending_product: false,
            status_line: None,
            help: HelpDialog::new(),
            toasts,
        }
    }

    pub fn handle(&self) -> &dyn WizardHandle {
        self.handle.as_ref()
    }

    pub fn kind(&self) -> WorkflowKind {
        self.handle.kind()
    }

    /// Unmount the current workflow and mount `kind` in its place
    pub fn switch_workflow(&mut self, kind: WorkflowKind) {
        tracing::info!(from = %self.handle.kind(), to = %kind, "switching workflow");
        self.handle = workflows::mount(kind);
        self.reset_transient();
    }

    /// Start the current workflow over
    pub fn remount(&mut self) {
        self.handle.remount();
        self.reset_transient();
    }

    /// Toasts and prompts belong to the old mount
    fn reset_transient(&mut self) {
        self.pending_product = false;
        self.status_line = None;
        self.toasts.clear();
    }

    pub fn handle_key(&mut self, key: KeyCode, notifier: &Notifier) -> ScreenResult {
        if self.help.visible {
            self.help.toggle();
            return ScreenResult::Continue;
        }

        if self.pending_product {
            self.pending_product = false;
            match key {
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    let value = c.to_digit(10).unwrap_or_default();
                    match self.handle.select_product(value, notifier) {
                        Ok(_) => self.status_line = None,
                        // the notifier has already raised the toast
                        Err(err) => self.status_line = Some(err.to_string()),
                    }
                }
                _ => self.status_line = Some("Product selection cancelled".to_string()),
            }
            return ScreenResult::Continue;
        }

        let moved = match key {
            KeyCode::Char('q') | KeyCode::Esc => return ScreenResult::Quit,
            KeyCode::Char('?') => {
                self.help.toggle();
                return ScreenResult::Continue;
            }
            KeyCode::Char('s') => {
                self.pending_product = true;
                self.status_line = Some("Product type? (1-6)".to_string());
                return ScreenResult::Continue;
            }
            KeyCode::Tab => {
                self.switch_workflow(self.handle.kind().cycle_next());
                return ScreenResult::Continue;
            }
            KeyCode::Char('r') => {
                self.remount();
                return ScreenResult::Continue;
            }
            KeyCode::Char('n') | KeyCode::Right => self.handle.next_step(),
            KeyCode::Char('p') | KeyCode::Left => self.handle.prev_step(),
            KeyCode::Down => self.handle.next_sub_step(),
            KeyCode::Up => self.handle.prev_sub_step(),
            KeyCode::Char(c @ '1'..='9') => {
                let n = c.to_digit(10).unwrap_or_default();
                self.handle.go_to_step(n)
            }
            _ => return ScreenResult::Continue,
        };

        self.status_line = moved.err().map(|err| err.to_string());
        ScreenResult::Continue
    }

    pub fn render(&self, frame: &mut Frame) {
        self.render_screen(frame);
        self.help.render(frame);
    }
}
