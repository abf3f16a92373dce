//! Slate demo application entry point

use slate_ui::Settings;

mod screens;

use screens::ScrollableScreen;

fn main() {
    let settings = Settings::default()
        .title("Slate - Scrollable Component Demo")
        .size(800, 600)
        .log_level(log::LevelFilter::Info);

    if let Err(e) = slate_ui::run_with_settings(ScrollableScreen::new(), settings) {
        eprintln!("Application error: {e}");
        std::process::exit(1);
    }
}
