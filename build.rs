//! Build script for the project8x8 HAL
//!
//! Handles:
//! - Optional vendor core library linking (Arduino-ESP32 / ESP-IDF)

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=PROJECT8X8_VENDOR_LIB_DIR");

    // The Arduino core is normally linked by the sketch build; this lets a
    // standalone firmware build point at a prebuilt copy instead.
    if let Ok(dir) = std::env::var("PROJECT8X8_VENDOR_LIB_DIR") {
        println!("cargo:rustc-link-search={dir}");
    }
}
