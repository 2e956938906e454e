fn main() {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_default();
    let target_os = std::env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    let version_script = format!("{manifest_dir}/version_scripts/liblogbridge.map");
    // ld64 has no version scripts; Apple builds export every public symbol.
    if target_os != "macos" && target_os != "ios" && std::path::Path::new(&version_script).exists()
    {
        println!("cargo:rustc-cdylib-link-arg=-Wl,--version-script={version_script}");
    }
    println!("cargo:rerun-if-changed=version_scripts/liblogbridge.map");
}
