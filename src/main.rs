use clap::Parser;
use quickread::app::{App, AppEvent};
use quickread::cli::{init_logging, Cli};
use quickread::engine::{Clock, MonotonicClock};
use quickread::ui::{Theme, TuiManager};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;
    init_logging(config.logging.file.as_deref(), &config.logging.level)?;

    // Load any requested text before the terminal is taken over
    let preloaded = cli.preload()?;

    let theme = Theme::from_config(&config.theme);
    let clock = MonotonicClock::new();
    let mut app = App::with_config(config);

    let mut tui = TuiManager::new(theme)?;
    if let Some(loaded) = preloaded {
        app.set_text(loaded.text);
        app.handle_event(AppEvent::Start, clock.now_ms());
    }

    tui.run_event_loop(&mut app, &clock)?;

    log::info!("quickread exiting");
    Ok(())
}
