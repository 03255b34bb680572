use std::fs::{self, File};
use std::sync::Arc;
use std::time::Duration;

use casebook_data::Dataset;
use casebook_tui::input::command_for;
use casebook_tui::terminal::TerminalGuard;
use casebook_tui::{App, AppError, DashboardConfig, paths};
use log::{error, info};
use simplelog::{Config, WriteLogger};

const POLL: Duration = Duration::from_millis(250);

fn init_logging(config: &DashboardConfig) -> Result<(), AppError> {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else {
        return Ok(());
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    WriteLogger::init(config.log_level, Config::default(), File::create(&path)?)?;
    Ok(())
}

fn run() -> Result<(), AppError> {
    let _ = dotenvy::dotenv();
    let config = DashboardConfig::from_env()?;
    init_logging(&config)?;
    info!("starting with today={} page size={}", config.today, config.page_size);

    let data = Dataset::load()?;
    data.validate()?;
    let mut app = App::new(Arc::new(data), &config);

    let mut terminal = TerminalGuard::new()?;
    while app.is_running() {
        let (width, height) = terminal.size()?;
        let frame = app.frame(width, height);
        terminal.draw(&frame, width)?;

        for event in terminal.poll(POLL)? {
            if let Some(command) = command_for(&event) {
                app.handle(command);
            }
        }
    }
    info!("exiting");
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
