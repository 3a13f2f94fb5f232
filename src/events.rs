//! Structured progress events
//!
//! Each stage of an inventory run reports progress as `{stage, level, message}`
//! events through an [`EventSink`]. The CLI prints them; tests record them.

use std::fmt;
#[cfg(test)]
use std::sync::Mutex;

/// Pipeline stage that produced an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Login,
    Discovery,
    Report,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Login => "login",
            Stage::Discovery => "discovery",
            Stage::Report => "report",
        };
        f.write_str(name)
    }
}

/// Event severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warn,
    Error,
}

/// A single progress or diagnostic event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub stage: Stage,
    pub level: Level,
    pub message: String,
}

/// Receiver for progress events
pub trait EventSink: Send + Sync {
    fn emit(&self, event: Event);

    fn info(&self, stage: Stage, message: impl Into<String>)
    where
        Self: Sized,
    {
        self.emit(Event {
            stage,
            level: Level::Info,
            message: message.into(),
        });
    }

    fn success(&self, stage: Stage, message: impl Into<String>)
    where
        Self: Sized,
    {
        self.emit(Event {
            stage,
            level: Level::Success,
            message: message.into(),
        });
    }

    fn warn(&self, stage: Stage, message: impl Into<String>)
    where
        Self: Sized,
    {
        self.emit(Event {
            stage,
            level: Level::Warn,
            message: message.into(),
        });
    }

    fn error(&self, stage: Stage, message: impl Into<String>)
    where
        Self: Sized,
    {
        self.emit(Event {
            stage,
            level: Level::Error,
            message: message.into(),
        });
    }
}

/// Sink that keeps every event in memory, in emission order.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<Event>>,
}

#[cfg(test)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events emitted so far.
    pub fn events(&self) -> Vec<Event> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    /// Events emitted at the given level.
    pub fn at_level(&self, level: Level) -> Vec<Event> {
        self.events()
            .into_iter()
            .filter(|e| e.level == level)
            .collect()
    }
}

#[cfg(test)]
impl EventSink for RecordingSink {
    fn emit(&self, event: Event) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_keeps_order() {
        let sink = RecordingSink::new();
        sink.info(Stage::Login, "first");
        sink.warn(Stage::Discovery, "second");
        sink.error(Stage::Report, "third");

        let events = sink.events();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].message, "first");
        assert_eq!(events[1].level, Level::Warn);
        assert_eq!(events[2].stage, Stage::Report);
    }

    #[test]
    fn test_at_level_filters() {
        let sink = RecordingSink::new();
        sink.info(Stage::Discovery, "a");
        sink.error(Stage::Discovery, "b");
        sink.success(Stage::Login, "c");

        let errors = sink.at_level(Level::Error);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "b");
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(Stage::Discovery.to_string(), "discovery");
        assert_eq!(Stage::Login.to_string(), "login");
    }
}
