use clap::Parser;
use folio::ui::ViewerApp;
use iced::Size;
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::path::PathBuf;

/// Minimal desktop PDF viewer.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// PDF file to open at startup
    file: Option<PathBuf>,
}

pub fn main() -> iced::Result {
    let args = Args::parse();

    if let Err(e) = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("could not initialize logging: {e}");
    }

    iced::application(
        move || ViewerApp::new(args.file.clone()),
        ViewerApp::update,
        ViewerApp::view,
    )
    .title(ViewerApp::title)
    .subscription(ViewerApp::subscription)
    .window_size(Size::new(640.0, 480.0))
    .run()
}
