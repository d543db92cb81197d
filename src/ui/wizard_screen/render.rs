use chrono::Utc;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Tabs, Wrap},
    Frame,
};

use super::WizardScreen;
use crate::notifications::{Toast, ToastLevel};
use crate::ui::keybindings::footer_shortcuts;
use crate::wizard::WorkflowKind;

fn toast_color(level: ToastLevel) -> Color {
    match level {
        ToastLevel::Info => Color::Cyan,
        ToastLevel::Success => Color::Green,
        ToastLevel::Warning => Color::Yellow,
        ToastLevel::Error => Color::Red,
    }
}

impl WizardScreen {
    pub(crate) fn render_screen(&self, frame: &mut Frame) {
        let toasts = self.toasts.visible(Utc::now());
        let toast_height = if toasts.is_empty() {
            0
        } else {
            u16::try_from(toasts.len()).unwrap_or(u16::MAX).saturating_add(2)
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),            // Workflow tabs
                Constraint::Length(3),            // Step tabs
                Constraint::Length(3),            // Progress
                Constraint::Min(8),               // Step panel + draft
                Constraint::Length(toast_height), // Toasts
                Constraint::Length(1),            // Footer
            ])
            .split(frame.area());

        self.render_workflow_tabs(frame, chunks[0]);
        self.render_step_tabs(frame, chunks[1]);
        self.render_progress(frame, chunks[2]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[3]);
        self.render_step_panel(frame, body[0]);
        self.render_draft(frame, body[1]);

        if !toasts.is_empty() {
            render_toasts(frame, chunks[4], &toasts);
        }
        self.render_footer(frame, chunks[5]);
    }

    fn render_workflow_tabs(&self, frame: &mut Frame, area: Rect) {
        let current = self.handle.kind();
        let titles: Vec<Line> = WorkflowKind::all()
            .iter()
            .map(|kind| Line::from(kind.label()))
            .collect();
        let selected = WorkflowKind::all()
            .iter()
            .position(|kind| *kind == current)
            .unwrap_or(0);

        let tabs = Tabs::new(titles)
            .block(Block::default().borders(Borders::ALL).title(" optic-desk "))
            .select(selected)
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(tabs, area);
    }

    fn render_step_tabs(&self, frame: &mut Frame, area: Rect) {
        let titles: Vec<Line> = self
            .handle
            .step_titles()
            .into_iter()
            .zip(1u32..)
            .map(|(title, number)| Line::from(format!("{number}. {title}")))
            .collect();
        let selected = usize::try_from(self.handle.cursor().step.saturating_sub(1)).unwrap_or(0);

        let tabs = Tabs::new(titles)
            .block(Block::default().borders(Borders::ALL).title(" Steps "))
            .select(selected)
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(tabs, area);
    }

    fn render_progress(&self, frame: &mut Frame, area: Rect) {
        let cursor = self.handle.cursor();
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL))
            .gauge_style(Style::default().fg(Color::Green))
            .ratio(self.handle.progress().clamp(0.0, 1.0))
            .label(format!(
                "Step {} of {}",
                cursor.step,
                self.handle.total_steps()
            ));
        frame.render_widget(gauge, area);
    }

    fn render_step_panel(&self, frame: &mut Frame, area: Rect) {
        let cursor = self.handle.cursor();
        let title = self.handle.step_title().unwrap_or("Unknown step");

        let mut lines = vec![
            Line::from(Span::styled(
                title,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        if let Some(prompt) = self.handle.step_prompt() {
            lines.push(Line::from(prompt));
            lines.push(Line::from(""));
        }

        let sub_steps = self.handle.sub_steps();
        if sub_steps > 1 {
            let mut sub_line = vec![Span::styled(
                format!("Sub-step {} of {}", cursor.sub_step, sub_steps),
                Style::default().fg(Color::Yellow),
            )];
            if let Some(label) = self.handle.sub_step_label() {
                sub_line.push(Span::raw(format!(": {label}")));
            }
            lines.push(Line::from(sub_line));
        }

        if let Some(selection) = self.handle.selection() {
            lines.push(Line::from(vec![
                Span::styled("Product type: ", Style::default().fg(Color::Gray)),
                Span::raw(format!("{} ({})", selection.label, selection.value)),
            ]));
        }

        let panel = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", self.handle.kind().label()))
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(panel, area);
    }

    fn render_draft(&self, frame: &mut Frame, area: Rect) {
        let summary = self.handle.draft_summary();
        let items: Vec<ListItem> = if summary.is_empty() {
            vec![ListItem::new(Span::styled(
                "Nothing entered yet",
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            summary
                .into_iter()
                .map(|(label, value)| {
                    ListItem::new(Line::from(vec![
                        Span::styled(format!("{label}: "), Style::default().fg(Color::Gray)),
                        Span::raw(value),
                    ]))
                })
                .collect()
        };

        let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Draft "));
        frame.render_widget(list, area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let line = match &self.status_line {
            Some(status) => Line::from(Span::styled(
                status.as_str(),
                Style::default().fg(Color::Yellow),
            )),
            None => {
                let mut spans = Vec::new();
                for shortcut in footer_shortcuts() {
                    if !spans.is_empty() {
                        spans.push(Span::raw("  "));
                    }
                    spans.push(Span::styled(
                        shortcut.key_display(),
                        Style::default().fg(Color::Yellow),
                    ));
                    spans.push(Span::raw(format!(" {}", shortcut.description)));
                }
                Line::from(spans)
            }
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}

fn render_toasts(frame: &mut Frame, area: Rect, toasts: &[Toast]) {
    let items: Vec<ListItem> = toasts
        .iter()
        .rev()
        .map(|toast| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("[{}] ", toast.level.label()),
                    Style::default().fg(toast_color(toast.level)),
                ),
                Span::raw(toast.message.as_str()),
            ]))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Messages "));
    frame.render_widget(list, area);
}
