use std::{
    fs::{File, OpenOptions},
    io::Write,
    sync::Mutex,
};

use crate::trace::trace::{RunHeader, TraceEvent, now_ms};

/// JSONL sink for composition traces.
///
/// Events of one traversal are collected in a [`TraceRun`] and appended in a
/// single write, preceded by a [`RunHeader`] naming the tree. Runs from
/// several invocations can share one file.
pub struct TraceLogger {
    sink: Option<Mutex<File>>,
}

impl TraceLogger {
    pub fn open(path: &str) -> Self {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => Self {
                sink: Some(Mutex::new(f)),
            },
            Err(e) => {
                eprintln!("Warning: tracing disabled, cannot open '{}': {}", path, e);
                Self::disabled()
            }
        }
    }

    pub fn disabled() -> Self {
        Self { sink: None }
    }

    pub fn from_path(path: Option<&str>) -> Self {
        path.map_or_else(Self::disabled, Self::open)
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Start buffering events for one traversal of `source`.
    pub fn begin_run(&self, source: Option<&str>) -> TraceRun<'_> {
        TraceRun {
            logger: self,
            source: source.map(str::to_string),
            started_ms: now_ms(),
            events: Vec::new(),
        }
    }

    fn write_run(&self, header: &RunHeader, events: &[TraceEvent]) {
        let Some(sink) = &self.sink else { return };

        let lines = std::iter::once(serde_json::to_string(header))
            .chain(events.iter().map(serde_json::to_string));

        let mut buf = String::new();
        for line in lines {
            match line {
                Ok(json) => {
                    buf.push_str(&json);
                    buf.push('\n');
                }
                Err(e) => {
                    eprintln!("Warning: dropping trace run for {:?}: {}", header.source, e);
                    return;
                }
            }
        }

        // Runs are written whole; a poisoned lock holds no partial run.
        let mut file = sink.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Err(e) = file.write_all(buf.as_bytes()) {
            eprintln!("Warning: failed to append trace run: {}", e);
        }
    }
}

impl Default for TraceLogger {
    fn default() -> Self {
        Self::disabled()
    }
}

/// Events buffered for a single traversal; written by [`TraceRun::finish`].
pub struct TraceRun<'a> {
    logger: &'a TraceLogger,
    source: Option<String>,
    started_ms: u128,
    events: Vec<TraceEvent>,
}

impl TraceRun<'_> {
    pub fn is_enabled(&self) -> bool {
        self.logger.is_enabled()
    }

    pub fn record(&mut self, event: TraceEvent) {
        if self.is_enabled() {
            self.events.push(event);
        }
    }

    pub fn finish(self) {
        if !self.is_enabled() {
            return;
        }
        let header = RunHeader {
            timestamp_ms: self.started_ms,
            source: self.source,
            events: self.events.len(),
        };
        self.logger.write_run(&header, &self.events);
    }
}
