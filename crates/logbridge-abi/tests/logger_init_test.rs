//! Integration test: installing the `log` facade over the platform backend.
//!
//! `log` accepts one logger per process, so this binary holds a single test
//! that walks the whole install sequence.
//!
//! Run: cargo test -p logbridge-abi --test logger_init_test

use log::LevelFilter;
use logbridge::bridge;
use logbridge::logger::{init, init_from_env, init_with_config};
use logbridge_core::config::{CATEGORY_ENV, LEVEL_ENV, SUBSYSTEM_ENV};
use logbridge_core::{BridgeConfig, BridgeError};

#[test]
fn init_from_env_installs_custom_subsystem_logger() {
    // SAFETY: single test in this binary; no other thread reads the environment.
    unsafe {
        std::env::set_var(SUBSYSTEM_ENV, "com.example.logbridge");
        std::env::set_var(CATEGORY_ENV, "logger");
        std::env::set_var(LEVEL_ENV, "info");
    }

    // Rejected before anything is installed.
    let bad = BridgeConfig::default().with_subsystem("com.ex\0ample", "logger");
    assert_eq!(
        init_with_config(&bad),
        Err(BridgeError::InteriorNul { field: "subsystem" })
    );

    let expected = bridge().create_handle("com.example.logbridge", "logger").unwrap();

    assert_eq!(init_from_env(), Ok(()));
    assert_eq!(log::max_level(), LevelFilter::Info);
    assert_eq!(
        bridge().create_handle("com.example.logbridge", "logger").unwrap(),
        expected
    );

    log::info!("logger init test: info through custom subsystem");
    log::error!("logger init test: error with {} in the body", "%s %n");
    log::debug!("logger init test: filtered by max level");

    assert_eq!(init(), Err(BridgeError::LoggerAlreadySet));
    assert_eq!(
        init_with_config(&BridgeConfig::default()),
        Err(BridgeError::LoggerAlreadySet)
    );
}
