//! In-process capture sink.
//!
//! Stands in for the platform subsystem wherever records need to be
//! inspected after the fact, such as in tests or in hosts that ship logs
//! elsewhere. Handles are small integers; `1` is the default handle.

use std::ffi::CStr;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::handle::LogHandle;
use crate::severity::Severity;
use crate::sink::Sink;

/// Default handle issued by every [`MemorySink`].
pub const MEMORY_DEFAULT_HANDLE: LogHandle = LogHandle::from_raw(1);

// Created handles start after the default.
const FIRST_CREATED_HANDLE: usize = 2;

/// One record as the sink received it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedRecord {
    pub handle: usize,
    /// `subsystem:category` of the handle, `None` for the default handle.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    pub severity: Severity,
    pub body: String,
}

#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<CapturedRecord>>,
    tags: Mutex<Vec<String>>,
    disabled: Mutex<Vec<Severity>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop records of `severity` from now on, the way a platform profile would.
    pub fn disable(&self, severity: Severity) {
        let mut disabled = self.disabled.lock();
        if !disabled.contains(&severity) {
            disabled.push(severity);
        }
    }

    /// Snapshot of everything captured so far, in arrival order.
    #[must_use]
    pub fn records(&self) -> Vec<CapturedRecord> {
        self.records.lock().clone()
    }

    /// Remove and return everything captured so far.
    pub fn take(&self) -> Vec<CapturedRecord> {
        std::mem::take(&mut *self.records.lock())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Tag registered for `handle`, if it was created by this sink.
    #[must_use]
    pub fn tag_of(&self, handle: LogHandle) -> Option<String> {
        let index = handle.as_raw().checked_sub(FIRST_CREATED_HANDLE)?;
        self.tags.lock().get(index).cloned()
    }

    /// Captured records as JSON lines.
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        let records = self.records.lock();
        let mut out = String::new();
        for record in records.iter() {
            out.push_str(&serde_json::to_string(record)?);
            out.push('\n');
        }
        Ok(out)
    }
}

impl Sink for MemorySink {
    fn default_handle(&self) -> LogHandle {
        MEMORY_DEFAULT_HANDLE
    }

    fn emit(&self, handle: LogHandle, severity: Severity, message: &CStr) {
        if !self.type_enabled(handle, severity) {
            return;
        }
        let record = CapturedRecord {
            handle: handle.as_raw(),
            tag: self.tag_of(handle),
            severity,
            body: message.to_string_lossy().into_owned(),
        };
        self.records.lock().push(record);
    }

    fn type_enabled(&self, _handle: LogHandle, severity: Severity) -> bool {
        !self.disabled.lock().contains(&severity)
    }

    fn create_handle(&self, subsystem: &CStr, category: &CStr) -> Option<LogHandle> {
        let tag = format!(
            "{}:{}",
            subsystem.to_string_lossy(),
            category.to_string_lossy()
        );
        let mut tags = self.tags.lock();
        let index = match tags.iter().position(|existing| *existing == tag) {
            Some(index) => index,
            None => {
                tags.push(tag);
                tags.len() - 1
            }
        };
        Some(LogHandle::from_raw(FIRST_CREATED_HANDLE + index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_in_arrival_order() {
        let sink = MemorySink::new();
        sink.emit(MEMORY_DEFAULT_HANDLE, Severity::Info, c"first");
        sink.emit(MEMORY_DEFAULT_HANDLE, Severity::Error, c"second");

        let records = sink.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].body, "first");
        assert_eq!(records[0].severity, Severity::Info);
        assert_eq!(records[1].body, "second");
        assert_eq!(records[1].severity, Severity::Error);
        assert_eq!(records[0].tag, None);
    }

    #[test]
    fn created_handles_are_tagged_and_reused() {
        let sink = MemorySink::new();
        let net = sink.create_handle(c"com.example", c"net").unwrap();
        let disk = sink.create_handle(c"com.example", c"disk").unwrap();
        let net_again = sink.create_handle(c"com.example", c"net").unwrap();

        assert_ne!(net, MEMORY_DEFAULT_HANDLE);
        assert_ne!(net, disk);
        assert_eq!(net, net_again);
        assert_eq!(sink.tag_of(disk).as_deref(), Some("com.example:disk"));
        assert_eq!(sink.tag_of(MEMORY_DEFAULT_HANDLE), None);
    }

    #[test]
    fn disabled_tier_is_dropped() {
        let sink = MemorySink::new();
        sink.disable(Severity::Debug);
        assert!(!sink.type_enabled(MEMORY_DEFAULT_HANDLE, Severity::Debug));
        sink.emit(MEMORY_DEFAULT_HANDLE, Severity::Debug, c"noise");
        sink.emit(MEMORY_DEFAULT_HANDLE, Severity::Fault, c"signal");
        let records = sink.take();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].body, "signal");
        assert!(sink.is_empty());
    }

    #[test]
    fn jsonl_has_one_line_per_record() {
        let sink = MemorySink::new();
        let handle = sink.create_handle(c"com.example", c"net").unwrap();
        sink.emit(MEMORY_DEFAULT_HANDLE, Severity::Info, c"hello");
        sink.emit(handle, Severity::Fault, c"down");

        let jsonl = sink.to_jsonl().unwrap();
        let lines: Vec<&str> = jsonl.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["severity"], "info");
        assert_eq!(first["body"], "hello");
        assert!(first.get("tag").is_none());

        let second: CapturedRecord = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second.tag.as_deref(), Some("com.example:net"));
        assert_eq!(second.severity, Severity::Fault);
    }
}
