use std::env;

fn main() {
    println!("cargo:rerun-if-env-changed=PKG_CONFIG_PATH");
    println!("cargo:rerun-if-env-changed=GSTREAMER_1_0_ROOT_MSVC_X86_64");

    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    if target_os != "windows" {
        return;
    }

    if env::var_os("PKG_CONFIG_PATH").is_some() {
        return;
    }

    match env::var("GSTREAMER_1_0_ROOT_MSVC_X86_64") {
        Ok(root) => {
            println!(
                "cargo:warning=Detected GStreamer at {root}. Set PKG_CONFIG_PATH={root}lib\\pkgconfig so the gstreamer-sys crates can locate gstreamer-1.0.pc."
            );
        }
        Err(_) => {
            println!(
                "cargo:warning=PKG_CONFIG_PATH is not set. On Windows, install the GStreamer MSVC runtime and development packages and point PKG_CONFIG_PATH at <gstreamer>\\lib\\pkgconfig for reliable builds."
            );
        }
    }
}
