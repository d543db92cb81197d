use anyhow::Result;
use chrono::Utc;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::notifications::{Notifier, ToastQueue};
use crate::ui::terminal_guard::{self, TerminalGuard};
use crate::ui::{ScreenResult, WizardScreen};
use crate::wizard::WorkflowKind;

pub struct App {
    config: Config,
    screen: WizardScreen,
    notifier: Notifier,
    toasts: Arc<ToastQueue>,
    should_quit: bool,
}

impl App {
    /// Build the app with `workflow` mounted, or the configured default
    pub fn new(config: Config, workflow: Option<WorkflowKind>) -> Self {
        let toasts = Arc::new(ToastQueue::new(
            config.ui.max_toasts,
            chrono::Duration::milliseconds(
                i64::try_from(config.ui.toast_ttl_ms).unwrap_or(i64::MAX),
            ),
        ));
        let notifier = Notifier::from_config(&config, toasts.clone());
        let kind = workflow.unwrap_or(config.wizard.default_workflow);
        tracing::info!(workflow = %kind, sinks = notifier.sink_count(), "starting wizard");

        Self {
            screen: WizardScreen::new(kind, toasts.clone()),
            config,
            notifier,
            toasts,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        terminal_guard::install_panic_hook();
        let guard = TerminalGuard::enter()?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

        let tick_rate = Duration::from_millis(self.config.ui.refresh_rate_ms);

        let result = self.event_loop(&mut terminal, tick_rate).await;

        // A loop error takes precedence over a restore error
        let restored = guard.restore();
        result.and(restored)
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        tick_rate: Duration,
    ) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|f| self.screen.render(f))?;

            if let Some(Event::Key(key)) = next_event(tick_rate).await? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key.code);
                }
            }

            // Expired toasts leave the screen on the next tick
            self.toasts.prune(Utc::now());
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyCode) {
        if self.screen.handle_key(key, &self.notifier) == ScreenResult::Quit {
            tracing::info!(workflow = %self.screen.kind(), "quitting");
            self.should_quit = true;
        }
    }

    pub fn screen(&self) -> &WizardScreen {
        &self.screen
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

/// Wait up to `timeout` for a terminal event without blocking the runtime
async fn next_event(timeout: Duration) -> Result<Option<Event>> {
    let event = tokio::task::spawn_blocking(move || -> io::Result<Option<Event>> {
        if event::poll(timeout)? {
            event::read().map(Some)
        } else {
            Ok(None)
        }
    })
    .await??;
    Ok(event)
}
