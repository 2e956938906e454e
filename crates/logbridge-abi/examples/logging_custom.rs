//! Route `log` records to a handle tagged with a subsystem and category, and
//! call the C surface directly for comparison.
//!
//! Run: cargo run -p logbridge-abi --example logging_custom

use log::{error, info, warn};

fn main() {
    if let Err(err) = logbridge::logger::init_custom("com.example.logbridge", "examples") {
        eprintln!("logbridge: {err}");
        return;
    }

    info!("Info level message from logbridge examples");
    warn!("Warn level message from logbridge examples");
    error!("Error level message from logbridge examples");

    let handle = logbridge::handle_abi::logbridge_default_handle();
    unsafe {
        logbridge::emit_abi::logbridge_emit(
            handle,
            logbridge_core::Severity::Fault.type_code(),
            c"Fault level message straight through the C surface".as_ptr(),
        );
    }
}
