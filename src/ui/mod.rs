pub mod dialogs;
pub mod keybindings;
pub mod terminal_guard;
pub mod wizard_screen;

pub use dialogs::HelpDialog;
pub use wizard_screen::{ScreenResult, WizardScreen};
