//! UI components and viewer application.

use iced::keyboard;
use iced::widget::{button, column, container, image, row, scrollable, text, tooltip};
use iced::{Element, Length, Subscription, Task};
use log::{error, info, warn};
use std::path::{Path, PathBuf};
use std::process;

use crate::input::{self, Command};
use crate::nav::NavState;
use crate::pdf::{Document, PdfError};

#[derive(Debug, Clone)]
pub enum Message {
    Command(Command),
    Keyboard(keyboard::Event),
}

/// Main viewer window.
///
/// Owns the document and the navigation state for the lifetime of the
/// window; both are replaced wholesale when a new file is opened. All
/// mutation happens synchronously on the UI thread inside `update`.
pub struct ViewerApp {
    document: Option<Document>,
    total_pages: u16,
    nav: NavState,
    current_image: Option<image::Handle>,
    canvas: (u32, u32),
    load_error: Option<String>,
}

impl ViewerApp {
    /// Create the viewer, opening `initial_file` if one was given on the
    /// command line.
    pub fn new(initial_file: Option<PathBuf>) -> (Self, Task<Message>) {
        let mut app = Self {
            document: None,
            total_pages: 0,
            nav: NavState::new(),
            current_image: None,
            canvas: (0, 0),
            load_error: None,
        };

        if let Some(path) = initial_file {
            app.open_path(&path);
        }

        (app, Task::none())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Command(command) => self.run_command(command),
            Message::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
                if let Some(command) = input::shortcut(key.as_ref(), modifiers) {
                    self.run_command(command);
                }
            }
            Message::Keyboard(_) => {}
        }

        Task::none()
    }

    /// Single source of truth for which commands are currently available.
    /// `view` derives every toolbar button from this, and `run_command`
    /// refuses anything it rejects.
    fn is_enabled(&self, command: Command) -> bool {
        match command {
            Command::Open | Command::About | Command::Quit => true,
            _ if self.document.is_none() => false,
            Command::PrevPage => self.nav.can_prev_page(),
            Command::NextPage => self.nav.can_next_page(self.total_pages as usize),
            Command::ZoomIn => self.nav.can_zoom_in(),
            Command::ZoomOut => self.nav.can_zoom_out(),
            Command::ZoomReset => self.nav.can_zoom_reset(),
        }
    }

    fn run_command(&mut self, command: Command) {
        if !self.is_enabled(command) {
            return;
        }

        match command {
            Command::Open => self.open_dialog(),
            Command::PrevPage => {
                if self.nav.prev_page() {
                    self.refresh_page();
                }
            }
            Command::NextPage => {
                if self.nav.next_page(self.total_pages as usize) {
                    self.refresh_page();
                }
            }
            Command::ZoomIn => {
                if self.nav.zoom_in() {
                    self.refresh_page();
                }
            }
            Command::ZoomOut => {
                if self.nav.zoom_out() {
                    self.refresh_page();
                }
            }
            Command::ZoomReset => {
                if self.nav.zoom_reset() {
                    self.refresh_page();
                }
            }
            Command::About => Self::about_dialog(),
            Command::Quit => process::exit(0),
        }
    }

    /// Modal file chooser filtered to PDF files. Cancelling changes nothing.
    fn open_dialog(&mut self) {
        let picked = rfd::FileDialog::new()
            .add_filter("PDF files", &["pdf"])
            .pick_file();

        if let Some(path) = picked {
            self.open_path(&path);
        }
    }

    fn open_path(&mut self, path: &Path) {
        self.handle_load(Document::open(path));

        if let Some(message) = self.load_error.clone() {
            Self::error_dialog(&message);
        }
    }

    /// Install the result of a load attempt. On failure the previous
    /// document stays in place and only the status line records the error.
    fn handle_load(&mut self, result: Result<Document, PdfError>) {
        match result {
            Ok(document) => {
                info!(
                    "opened {} ({} pages)",
                    document.uri(),
                    document.page_count()
                );
                self.total_pages = document.page_count();
                self.document = Some(document);
                self.nav.reset_page();
                self.load_error = None;
                self.refresh_page();
            }
            Err(e) => {
                error!("{e}");
                self.load_error = Some(e.to_string());
            }
        }
    }

    /// Re-render the current page at the current scale and resize the
    /// canvas to match it.
    fn refresh_page(&mut self) {
        let Some(document) = &self.document else {
            self.current_image = None;
            self.canvas = (0, 0);
            return;
        };

        if self.total_pages == 0 {
            self.current_image = None;
            self.canvas = (0, 0);
            return;
        }

        match document.render_page(self.nav.page_index() as u16, self.nav.scale()) {
            Ok(page) => {
                self.canvas = (page.width, page.height);
                self.current_image = Some(image::Handle::from_rgba(
                    page.width,
                    page.height,
                    page.pixels,
                ));
            }
            Err(e) => {
                warn!("{e}");
                self.current_image = None;
                self.canvas = (0, 0);
            }
        }
    }

    fn about_dialog() {
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Info)
            .set_title(concat!(
                env!("CARGO_PKG_NAME"),
                " ",
                env!("CARGO_PKG_VERSION")
            ))
            .set_description(env!("CARGO_PKG_DESCRIPTION"))
            .show();
    }

    fn error_dialog(message: &str) {
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Error)
            .set_title("Could not open document")
            .set_description(message)
            .show();
    }

    pub fn title(&self) -> String {
        match &self.document {
            Some(document) => format!("{} - Folio", document.file_name()),
            None => String::from("Folio"),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        column![self.toolbar(), self.content(), self.status_bar()].into()
    }

    fn toolbar(&self) -> Element<'_, Message> {
        let buttons = Command::TOOLBAR.iter().map(|&command| {
            let action = button(text(command.label()).size(14))
                .on_press_maybe(self.is_enabled(command).then_some(Message::Command(command)));

            tooltip(
                action,
                text(command.tooltip()).size(12),
                tooltip::Position::Bottom,
            )
            .style(container::rounded_box)
            .into()
        });

        container(row(buttons).spacing(4).padding(4))
            .width(Length::Fill)
            .into()
    }

    fn content(&self) -> Element<'_, Message> {
        let body: Element<'_, Message> = if let Some(handle) = &self.current_image {
            let (width, height) = self.canvas;
            image(handle.clone())
                .width(Length::Fixed(width as f32))
                .height(Length::Fixed(height as f32))
                .into()
        } else if let Some(message) = &self.load_error {
            text(message.clone()).size(16).into()
        } else {
            text("Open a PDF file to get started.").size(16).into()
        };

        scrollable(container(body).padding(16))
            .direction(scrollable::Direction::Both {
                vertical: scrollable::Scrollbar::new(),
                horizontal: scrollable::Scrollbar::new(),
            })
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn status_bar(&self) -> Element<'_, Message> {
        let status = match &self.document {
            Some(document) if self.total_pages > 0 => format!(
                "{} | page {} / {} | {:.0}%",
                document.file_name(),
                self.nav.page_index() + 1,
                self.total_pages,
                self.nav.scale() * 100.0
            ),
            Some(document) => format!("{} | no pages", document.file_name()),
            None => String::from("No document"),
        };

        let mut line = row![text(status).size(14).color(iced::Color::WHITE)].spacing(12);

        if let Some(message) = &self.load_error {
            line = line.push(
                text(message.clone())
                    .size(14)
                    .color(iced::Color::from_rgb8(220, 90, 90)),
            );
        }

        container(line)
            .width(Length::Fill)
            .padding(5)
            .style(|_theme| container::Style {
                background: Some(iced::Color::from_rgb8(30, 30, 30).into()),
                ..container::Style::default()
            })
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        keyboard::listen().map(Message::Keyboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_app() -> ViewerApp {
        ViewerApp::new(None).0
    }

    #[test]
    fn without_a_document_only_window_commands_are_enabled() {
        let app = empty_app();

        assert!(app.is_enabled(Command::Open));
        assert!(app.is_enabled(Command::About));
        assert!(app.is_enabled(Command::Quit));

        assert!(!app.is_enabled(Command::PrevPage));
        assert!(!app.is_enabled(Command::NextPage));
        assert!(!app.is_enabled(Command::ZoomIn));
        assert!(!app.is_enabled(Command::ZoomOut));
        assert!(!app.is_enabled(Command::ZoomReset));
    }

    #[test]
    fn disabled_commands_are_ignored() {
        let mut app = empty_app();

        app.run_command(Command::NextPage);
        app.run_command(Command::PrevPage);
        app.run_command(Command::ZoomIn);

        assert_eq!(app.nav.page_index(), 0);
        assert_eq!(app.nav.scale(), 1.0);
        assert!(app.current_image.is_none());
    }

    #[test]
    fn failed_load_keeps_previous_state() {
        let mut app = empty_app();
        app.nav.zoom_in();
        let scale = app.nav.scale();

        app.handle_load(Document::open(Path::new("/no/such/file.pdf")));

        assert!(app.document.is_none());
        assert_eq!(app.total_pages, 0);
        assert_eq!(app.nav.scale(), scale);
        assert!(app.current_image.is_none());
        assert!(app.load_error.is_some());
    }

    #[test]
    fn startup_without_a_file_shows_no_error() {
        let app = empty_app();
        assert!(app.load_error.is_none());
        assert_eq!(app.title(), "Folio");
    }
}
