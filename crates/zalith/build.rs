use std::env;
use std::path::PathBuf;

fn main() {
    let target = env::var("TARGET").unwrap_or_default();

    if target.contains("android") {
        // Android-specific build configuration
        println!("cargo:rustc-link-lib=log");

        // Set up paths for Android NDK when one is configured
        if let Ok(ndk_home) = env::var("ANDROID_NDK_HOME").or_else(|_| env::var("NDK_HOME")) {
            let target_arch = if target.contains("aarch64") {
                "arm64-v8a"
            } else if target.contains("armv7") {
                "armeabi-v7a"
            } else if target.contains("i686") {
                "x86"
            } else {
                "x86_64"
            };

            println!(
                "cargo:rustc-link-search=native={}/toolchains/llvm/prebuilt/linux-x86_64/sysroot/usr/lib/{}",
                ndk_home, target_arch
            );
        }
    }

    generate_header();
}

/// Emit the C header the runtime's GLFW shim includes.
fn generate_header() {
    let crate_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".into()));
    let source = crate_dir.join("src/native_abi.rs");
    println!("cargo:rerun-if-changed={}", source.display());

    let result = cbindgen::Builder::new()
        .with_src(&source)
        .with_language(cbindgen::Language::C)
        .with_include_guard("ZALITH_BRIDGE_H")
        .generate();

    match result {
        Ok(bindings) => {
            let header = crate_dir.join("include/zalith_bridge.h");
            // false means unchanged or not written; only the latter leaves no header
            if !bindings.write_to_file(&header) && !header.is_file() {
                println!("cargo:warning=failed to write {}", header.display());
            }
        }
        Err(e) => println!("cargo:warning=cbindgen failed, header not updated: {}", e),
    }
}
