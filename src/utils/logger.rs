use colored::{Color, ColoredString, Colorize};
use env_logger::Builder;
use log::Level;
use std::io::Write;

pub fn setup_logging(verbose: bool) {
    use log::LevelFilter;

    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    Builder::from_default_env()
        .filter_level(LevelFilter::Warn) // Default: only warnings from dependencies
        .filter_module(env!("CARGO_PKG_NAME"), level) // Our crate: use requested level
        .format(|buf, record| {
            let name = env!("CARGO_PKG_NAME");
            let line = match record.level() {
                Level::Error | Level::Warn => {
                    let level_str = match record.level() {
                        Level::Warn => "WARN".yellow(),
                        Level::Error => "ERROR".red(),
                        _ => unreachable!(),
                    };
                    format!("[{} {}] {}", name.cyan(), level_str, record.args())
                }
                _ => format!("[{}] {}", name.cyan(), record.args()),
            };
            writeln!(buf, "{}", line)
        })
        .init();
}

/// Colors for the run summary line.
pub struct Colors;

impl Colors {
    pub const SORTED: Color = Color::Green;
    pub const SKIPPED: Color = Color::Yellow;

    pub fn colorize(color: Color, text: &str) -> ColoredString {
        text.color(color)
    }
}
