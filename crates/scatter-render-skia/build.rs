// File: crates/scatter-render-skia/build.rs
// Summary: Build script to link required Windows system libraries for Skia/ICU when rasterizing.

fn main() {
    let windows = std::env::var("CARGO_CFG_TARGET_OS").is_ok_and(|os| os == "windows");
    if windows && std::env::var_os("CARGO_FEATURE_RASTER").is_some() {
        // Needed for RegOpenKeyExW, RegQueryInfoKeyW, etc.
        println!("cargo:rustc-link-lib=advapi32");
    }
}
