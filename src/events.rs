//! Pipeline lifecycle events and the sinks that receive them.
//!
//! The pipeline never logs on its own. It reports what it does to an injected
//! [`EventSink`]; [`LogSink`] turns the events into `log` records.

use std::path::PathBuf;
use std::sync::Mutex;

use log::info;

/// Something the pipeline started or finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    /// Record generation is about to start
    GenerationStarted {
        /// Requested record count
        count: i64,
    },
    /// Record generation completed
    GenerationFinished {
        /// Number of records produced
        count: usize,
    },
    /// An artifact write is about to start
    WriteStarted {
        /// Format identifier
        format: String,
        /// Destination path
        path: PathBuf,
    },
    /// An artifact write completed
    WriteFinished {
        /// Format identifier
        format: String,
        /// Destination path
        path: PathBuf,
        /// Size of the committed artifact
        bytes: u64,
    },
    /// An artifact read is about to start
    ReadStarted {
        /// Format identifier
        format: String,
        /// Source path
        path: PathBuf,
    },
    /// An artifact was decoded
    ReadFinished {
        /// Format identifier
        format: String,
        /// Source path
        path: PathBuf,
        /// Number of records decoded
        rows: usize,
    },
}

/// Receiver of [`PipelineEvent`]s.
///
/// Sinks are shared across concurrent writes, hence `Send + Sync`.
pub trait EventSink: Send + Sync {
    /// Handle one event
    fn emit(&self, event: &PipelineEvent);
}

/// Forwards events to the `log` facade as `Start.`/`End.` lines
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn emit(&self, event: &PipelineEvent) {
        match event {
            PipelineEvent::GenerationStarted { count } => {
                info!("Start. Generating {} records", count);
            }
            PipelineEvent::GenerationFinished { count } => {
                info!("End. Generated {} records", count);
            }
            PipelineEvent::WriteStarted { format, path } => {
                info!("Start. Writing {} to {}", format, path.display());
            }
            PipelineEvent::WriteFinished { format, path, bytes } => {
                info!("End. Wrote {} to {} ({} bytes)", format, path.display(), bytes);
            }
            PipelineEvent::ReadStarted { format, path } => {
                info!("Start. Reading {} from {}", format, path.display());
            }
            PipelineEvent::ReadFinished { format, path, rows } => {
                info!("End. Read {} records of {} from {}", rows, format, path.display());
            }
        }
    }
}

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, _event: &PipelineEvent) {}
}

/// Keeps events in memory, in arrival order
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<PipelineEvent>>,
}

impl RecordingSink {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the events received so far
    pub fn events(&self) -> Vec<PipelineEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: &PipelineEvent) {
        let mut events = match self.events.lock() {
            Ok(events) => events,
            Err(poisoned) => poisoned.into_inner(),
        };
        events.push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_keeps_order() {
        let sink = RecordingSink::new();
        sink.emit(&PipelineEvent::GenerationStarted { count: 3 });
        sink.emit(&PipelineEvent::GenerationFinished { count: 3 });

        assert_eq!(
            sink.events(),
            vec![
                PipelineEvent::GenerationStarted { count: 3 },
                PipelineEvent::GenerationFinished { count: 3 },
            ]
        );
    }

    #[test]
    fn test_sinks_are_object_safe() {
        let sinks: Vec<Box<dyn EventSink>> = vec![Box::new(LogSink), Box::new(NullSink)];
        for sink in &sinks {
            sink.emit(&PipelineEvent::WriteStarted {
                format: "csv".to_string(),
                path: PathBuf::from("data/data.csv"),
            });
            sink.emit(&PipelineEvent::ReadFinished {
                format: "csv".to_string(),
                path: PathBuf::from("data/data.csv"),
                rows: 0,
            });
        }
    }
}
