//! Route `log` records to the platform default handle.
//!
//! Run: cargo run -p logbridge-abi --example logging_default

use log::{debug, error, info, trace, warn};

fn main() {
    if let Err(err) = logbridge::logger::init() {
        eprintln!("logbridge: {err}");
        return;
    }

    trace!("Trace level message from logbridge examples");
    debug!("Debug level message from logbridge examples");
    info!("Info level message from logbridge examples");
    warn!("Warn level message from logbridge examples");
    error!("Error level message from logbridge examples");
}
