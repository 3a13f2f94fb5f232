//! Console event output

use colored::Colorize;
use log::debug;

use crate::events::{Event, EventSink, Level};

/// Prints events to stdout and mirrors them to the debug log
pub struct ConsoleSink;

impl EventSink for ConsoleSink {
    fn emit(&self, event: Event) {
        debug!("[{}] {:?}: {}", event.stage, event.level, event.message);

        match event.level {
            Level::Info => println!("{}", event.message),
            Level::Success => println!("{} {}", "✓".green(), event.message),
            Level::Warn => println!("{} {}", "⚠".yellow(), event.message.yellow()),
            Level::Error => println!("{} {}", "✗".red(), event.message.red()),
        }
    }
}
