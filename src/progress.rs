//! Bounded progress log shown in the console panels.
//!
//! A ring buffer of short text lines: the worker's progress messages, result
//! labels and error text. Oldest lines are dropped when the buffer is full.
//! Lines are stored whole; the console panel clips them to its width.
//!
//! # Usage
//!
//! ```
//! use throughput_dashboard::progress::ProgressLog;
//!
//! let mut log = ProgressLog::new();
//! log.push("Starting WIFI speed test...");
//! log.push("Running download test...");
//! assert_eq!(log.last(), Some("Running download test..."));
//! ```

use heapless::Deque;

// =============================================================================
// Progress Log Configuration
// =============================================================================

/// Maximum number of lines kept. One full run produces seven.
pub const LOG_BUFFER_SIZE: usize = 12;

// =============================================================================
// Progress Log Ring Buffer
// =============================================================================

/// Ring buffer of console lines, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ProgressLog {
    buffer: Deque<String, LOG_BUFFER_SIZE>,
}

impl ProgressLog {
    /// Create an empty log.
    pub const fn new() -> Self {
        Self { buffer: Deque::new() }
    }

    /// Append a line. If the buffer is full, the oldest line is dropped.
    pub fn push(&mut self, msg: &str) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }

        self.buffer.push_back(msg.to_owned()).ok();
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Iterate over lines, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.buffer.iter().map(|line| line.as_str())
    }

    /// Newest line, if any.
    pub fn last(&self) -> Option<&str> {
        self.buffer.back().map(|line| line.as_str())
    }

    /// Whether any line equals `needle` exactly.
    pub fn contains(&self, needle: &str) -> bool {
        self.iter().any(|line| line == needle)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}
