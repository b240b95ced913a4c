//! Command surface: viewer actions and their keyboard shortcuts.

use iced::keyboard::key::Named;
use iced::keyboard::{Key, Modifiers};

/// Everything the toolbar and the keyboard can ask the viewer to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Pick a PDF file and open it
    Open,
    /// Move to previous page
    PrevPage,
    /// Move to next page
    NextPage,
    /// Increase the zoom scale by one step
    ZoomIn,
    /// Decrease the zoom scale by one step
    ZoomOut,
    /// Return the zoom scale to 100%
    ZoomReset,
    /// Show the about dialog
    About,
    /// Terminate the event loop
    Quit,
}

impl Command {
    /// Toolbar order, left to right.
    pub const TOOLBAR: [Command; 8] = [
        Command::Open,
        Command::PrevPage,
        Command::NextPage,
        Command::ZoomIn,
        Command::ZoomOut,
        Command::ZoomReset,
        Command::About,
        Command::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Command::Open => "Open",
            Command::PrevPage => "Previous",
            Command::NextPage => "Next",
            Command::ZoomIn => "Zoom In",
            Command::ZoomOut => "Zoom Out",
            Command::ZoomReset => "Zoom 100%",
            Command::About => "About",
            Command::Quit => "Quit",
        }
    }

    pub fn tooltip(&self) -> &'static str {
        match self {
            Command::Open => "Open a PDF file (Ctrl+O)",
            Command::PrevPage => "Previous page (Ctrl+P)",
            Command::NextPage => "Next page (Ctrl+N)",
            Command::ZoomIn => "Zoom in (Ctrl++)",
            Command::ZoomOut => "Zoom out (Ctrl+-)",
            Command::ZoomReset => "Reset zoom to 100%",
            Command::About => "About this application",
            Command::Quit => "Quit (Ctrl+Q)",
        }
    }
}

/// Map a key press to a command.
pub fn shortcut(key: Key<&str>, modifiers: Modifiers) -> Option<Command> {
    if modifiers.command() {
        return match key {
            Key::Character("o") => Some(Command::Open),
            Key::Character("n") => Some(Command::NextPage),
            Key::Character("p") => Some(Command::PrevPage),
            Key::Character("+") | Key::Character("=") => Some(Command::ZoomIn),
            Key::Character("-") => Some(Command::ZoomOut),
            Key::Character("0") => Some(Command::ZoomReset),
            Key::Character("q") => Some(Command::Quit),
            _ => None,
        };
    }

    match key {
        Key::Named(Named::ArrowRight) | Key::Named(Named::PageDown) => Some(Command::NextPage),
        Key::Named(Named::ArrowLeft) | Key::Named(Named::PageUp) => Some(Command::PrevPage),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The command modifier is the logo key on macOS and control elsewhere.
    fn ctrl() -> Modifiers {
        if cfg!(target_os = "macos") {
            Modifiers::LOGO
        } else {
            Modifiers::CTRL
        }
    }

    #[test]
    fn control_shortcuts_map_to_commands() {
        assert_eq!(shortcut(Key::Character("o"), ctrl()), Some(Command::Open));
        assert_eq!(
            shortcut(Key::Character("n"), ctrl()),
            Some(Command::NextPage)
        );
        assert_eq!(
            shortcut(Key::Character("p"), ctrl()),
            Some(Command::PrevPage)
        );
        assert_eq!(shortcut(Key::Character("+"), ctrl()), Some(Command::ZoomIn));
        assert_eq!(shortcut(Key::Character("="), ctrl()), Some(Command::ZoomIn));
        assert_eq!(
            shortcut(Key::Character("-"), ctrl()),
            Some(Command::ZoomOut)
        );
        assert_eq!(
            shortcut(Key::Character("0"), ctrl()),
            Some(Command::ZoomReset)
        );
        assert_eq!(shortcut(Key::Character("q"), ctrl()), Some(Command::Quit));
    }

    #[test]
    fn bare_navigation_keys_map_without_modifiers() {
        let none = Modifiers::empty();
        assert_eq!(
            shortcut(Key::Named(Named::ArrowRight), none),
            Some(Command::NextPage)
        );
        assert_eq!(
            shortcut(Key::Named(Named::PageDown), none),
            Some(Command::NextPage)
        );
        assert_eq!(
            shortcut(Key::Named(Named::ArrowLeft), none),
            Some(Command::PrevPage)
        );
        assert_eq!(
            shortcut(Key::Named(Named::PageUp), none),
            Some(Command::PrevPage)
        );
    }

    #[test]
    fn unbound_keys_map_to_nothing() {
        assert_eq!(shortcut(Key::Character("x"), Modifiers::empty()), None);
        assert_eq!(shortcut(Key::Character("x"), ctrl()), None);
        assert_eq!(shortcut(Key::Named(Named::Enter), Modifiers::empty()), None);
    }
}
