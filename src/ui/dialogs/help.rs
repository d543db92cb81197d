use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::centered_rect;
use crate::ui::keybindings::{shortcuts_by_category, Shortcut};
use crate::wizard::ProductKind;

/// Overlay listing every shortcut plus the product codes accepted after `s`
#[derive(Debug, Default)]
pub struct HelpDialog {
    pub visible: bool,
}

fn heading(text: &str) -> Line<'_> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

fn shortcut_line(shortcut: &Shortcut) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {}", shortcut.key_display_padded()),
            Style::default().fg(Color::Yellow),
        ),
        Span::raw(shortcut.description),
    ])
}

impl HelpDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub(crate) fn lines() -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        for (category, shortcuts) in shortcuts_by_category() {
            lines.push(heading(category.display_name()));
            lines.extend(shortcuts.into_iter().map(shortcut_line));
            lines.push(Line::default());
        }

        lines.push(heading("Product codes"));
        lines.extend(ProductKind::all().iter().map(|kind| {
            Line::from(format!("  s {}      {}", kind.code(), kind.label()))
        }));
        lines
    }

    pub fn render(&self, frame: &mut Frame) {
        if !self.visible {
            return;
        }

        let area = centered_rect(60, 80, frame.area());
        frame.render_widget(Clear, area);

        let block = Block::default()
            .title(" Keys (any key closes) ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        frame.render_widget(Paragraph::new(Self::lines()).block(block), area);
    }
}
