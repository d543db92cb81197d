//! Keyboard shortcuts for the wizard screen.
//!
//! Single registry consumed by the footer hint line and the help dialog.

use crossterm::event::KeyCode;

/// A keyboard shortcut definition
#[derive(Debug, Clone)]
pub struct Shortcut {
    /// Primary key for this shortcut
    pub key: KeyCode,
    /// Alternative key (e.g. an arrow key)
    pub alt_key: Option<KeyCode>,
    /// Last key of a range starting at `key` (`1-9`)
    pub through: Option<KeyCode>,
    pub description: &'static str,
    pub category: ShortcutCategory,
    /// Shown in the footer hint line as well as the help dialog
    pub footer: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortcutCategory {
    General,
    Steps,
    SubSteps,
    Products,
}

impl ShortcutCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            ShortcutCategory::General => "General",
            ShortcutCategory::Steps => "Steps",
            ShortcutCategory::SubSteps => "Sub-steps",
            ShortcutCategory::Products => "Products",
        }
    }

    /// All categories in display order
    pub fn all() -> &'static [ShortcutCategory] {
        &[
            ShortcutCategory::Steps,
            ShortcutCategory::SubSteps,
            ShortcutCategory::Products,
            ShortcutCategory::General,
        ]
    }
}

impl Shortcut {
    /// Format key for display (e.g., "q", "Tab", "n/→")
    pub fn key_display(&self) -> String {
        let primary = format_keycode(&self.key);
        match (&self.through, &self.alt_key) {
            (Some(last), _) => format!("{}-{}", primary, format_keycode(last)),
            (None, Some(alt)) => format!("{}/{}", primary, format_keycode(alt)),
            (None, None) => primary,
        }
    }

    /// Format key for the help dialog (left-padded to 9 chars)
    pub fn key_display_padded(&self) -> String {
        format!("{:<9}", self.key_display())
    }
}

/// Format a KeyCode for display
fn format_keycode(key: &KeyCode) -> String {
    match key {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => format!("{:?}", key),
    }
}

pub static SHORTCUTS: &[Shortcut] = &[
    // Steps
    Shortcut {
        key: KeyCode::Char('n'),
        alt_key: Some(KeyCode::Right),
        through: None,
        description: "Next step",
        category: ShortcutCategory::Steps,
        footer: true,
    },
    Shortcut {
        key: KeyCode::Char('p'),
        alt_key: Some(KeyCode::Left),
        through: None,
        description: "Previous step",
        category: ShortcutCategory::Steps,
        footer: true,
    },
    Shortcut {
        key: KeyCode::Char('1'),
        alt_key: None,
        through: Some(KeyCode::Char('9')),
        description: "Jump to step",
        category: ShortcutCategory::Steps,
        footer: false,
    },
    // Sub-steps
    Shortcut {
        key: KeyCode::Down,
        alt_key: None,
        through: None,
        description: "Next sub-step",
        category: ShortcutCategory::SubSteps,
        footer: true,
    },
    Shortcut {
        key: KeyCode::Up,
        alt_key: None,
        through: None,
        description: "Previous sub-step",
        category: ShortcutCategory::SubSteps,
        footer: true,
    },
    // Products
    Shortcut {
        key: KeyCode::Char('s'),
        alt_key: None,
        through: None,
        description: "Select product type (then 1-9)",
        category: ShortcutCategory::Products,
        footer: true,
    },
    // General
    Shortcut {
        key: KeyCode::Tab,
        alt_key: None,
        through: None,
        description: "Switch workflow",
        category: ShortcutCategory::General,
        footer: true,
    },
    Shortcut {
        key: KeyCode::Char('r'),
        alt_key: None,
        through: None,
        description: "Start over",
        category: ShortcutCategory::General,
        footer: false,
    },
    Shortcut {
        key: KeyCode::Char('?'),
        alt_key: None,
        through: None,
        description: "Toggle help",
        category: ShortcutCategory::General,
        footer: true,
    },
    Shortcut {
        key: KeyCode::Char('q'),
        alt_key: Some(KeyCode::Esc),
        through: None,
        description: "Quit",
        category: ShortcutCategory::General,
        footer: true,
    },
];

/// Shortcuts grouped by category, in display order
pub fn shortcuts_by_category() -> Vec<(ShortcutCategory, Vec<&'static Shortcut>)> {
    let mut result = Vec::new();
    for category in ShortcutCategory::all() {
        let shortcuts: Vec<&Shortcut> = SHORTCUTS
            .iter()
            .filter(|s| s.category == *category)
            .collect();
        if !shortcuts.is_empty() {
            result.push((*category, shortcuts));
        }
    }
    result
}

/// Shortcuts shown in the footer hint line
pub fn footer_shortcuts() -> impl Iterator<Item = &'static Shortcut> {
    SHORTCUTS.iter().filter(|s| s.footer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_shortcuts_have_descriptions() {
        for shortcut in SHORTCUTS {
            assert!(
                !shortcut.description.is_empty(),
                "Shortcut {:?} has empty description",
                shortcut.key
            );
        }
    }

    #[test]
    fn test_key_display_with_alt() {
        let shortcut = &SHORTCUTS[0];
        assert_eq!(shortcut.key_display(), "n/→");
        assert_eq!(shortcut.key_display_padded(), "n/→      ");
    }

    #[test]
    fn test_key_display_range() {
        let jump = SHORTCUTS
            .iter()
            .find(|s| s.description == "Jump to step")
            .unwrap();
        assert_eq!(jump.key_display(), "1-9");
    }

    #[test]
    fn test_key_display_special_keys() {
        assert_eq!(format_keycode(&KeyCode::Esc), "Esc");
        assert_eq!(format_keycode(&KeyCode::Tab), "Tab");
        assert_eq!(format_keycode(&KeyCode::Down), "↓");
        assert_eq!(format_keycode(&KeyCode::F(2)), "F2");
    }

    #[test]
    fn test_every_category_has_shortcuts() {
        let grouped = shortcuts_by_category();
        assert_eq!(grouped.len(), ShortcutCategory::all().len());
        assert_eq!(grouped[0].0, ShortcutCategory::Steps);
    }

    #[test]
    fn test_footer_includes_quit() {
        assert!(footer_shortcuts().any(|s| s.description == "Quit"));
        assert!(footer_shortcuts().all(|s| s.footer));
    }
}
