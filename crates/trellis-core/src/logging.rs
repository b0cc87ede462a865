use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

impl LogEntry {
    pub fn new(message: String) -> Self {
        Self {
            timestamp: Utc::now(),
            message,
        }
    }

    /// `HH:MM:SS message`, as shown in the footer.
    pub fn display_line(&self) -> String {
        format!("{} {}", self.timestamp.format("%H:%M:%S"), self.message)
    }
}

pub trait Loggable {
    fn add_log(&mut self, message: String);
    fn get_logs(&self) -> &[LogEntry];

    fn latest_log(&self) -> Option<&LogEntry> {
        self.get_logs().last()
    }
}
