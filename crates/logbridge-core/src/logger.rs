//! `log` facade adapter.
//!
//! [`BridgeLogger`] turns `log::Record`s into bridge emits against one fixed
//! handle, applying the level-to-tier mapping from [`Severity::from_level`].

use log::{LevelFilter, Log, Metadata, Record};

use crate::bridge::Bridge;
use crate::error::BridgeError;
use crate::format::message_from_args;
use crate::handle::LogHandle;
use crate::severity::Severity;
use crate::sink::Sink;

pub struct BridgeLogger<S> {
    bridge: Bridge<S>,
    handle: LogHandle,
    max_level: LevelFilter,
}

impl<S: Sink> BridgeLogger<S> {
    pub fn new(sink: S, handle: LogHandle, max_level: LevelFilter) -> Self {
        Self {
            bridge: Bridge::new(sink),
            handle,
            max_level,
        }
    }

    /// Logger writing to the sink's default handle.
    pub fn with_default_handle(sink: S, max_level: LevelFilter) -> Self {
        let handle = sink.default_handle();
        Self::new(sink, handle, max_level)
    }

    #[must_use]
    pub fn handle(&self) -> LogHandle {
        self.handle
    }

    #[must_use]
    pub fn max_level(&self) -> LevelFilter {
        self.max_level
    }

    /// Install as the process-wide `log` logger and set the global max level.
    pub fn install(self) -> Result<(), BridgeError>
    where
        S: 'static,
    {
        let max_level = self.max_level;
        log::set_boxed_logger(Box::new(self)).map_err(|_| BridgeError::LoggerAlreadySet)?;
        log::set_max_level(max_level);
        Ok(())
    }
}

impl<S: Sink> Log for BridgeLogger<S> {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = message_from_args(*record.args());
        self.bridge
            .emit_with(self.handle, Severity::from_level(record.level()), &message);
    }

    fn flush(&self) {}
}
