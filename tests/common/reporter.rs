//! Reporter recording every line for assertions

use pr_automerge::report::Reporter;
use std::sync::Mutex;

/// One reported line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogLine {
    Info(String),
    Warning(String),
    Debug(String),
}

#[derive(Default)]
pub struct RecordingReporter {
    lines: Mutex<Vec<LogLine>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<LogLine> {
        self.lines.lock().unwrap().clone()
    }

    pub fn infos(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter_map(|l| match l {
                LogLine::Info(m) => Some(m),
                _ => None,
            })
            .collect()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter_map(|l| match l {
                LogLine::Warning(m) => Some(m),
                _ => None,
            })
            .collect()
    }

    pub fn debugs(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter_map(|l| match l {
                LogLine::Debug(m) => Some(m),
                _ => None,
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().unwrap().is_empty()
    }
}

impl Reporter for RecordingReporter {
    fn info(&self, message: &str) {
        self.lines
            .lock()
            .unwrap()
            .push(LogLine::Info(message.to_string()));
    }

    fn warning(&self, message: &str) {
        self.lines
            .lock()
            .unwrap()
            .push(LogLine::Warning(message.to_string()));
    }

    fn debug(&self, message: &str) {
        self.lines
            .lock()
            .unwrap()
            .push(LogLine::Debug(message.to_string()));
    }
}
