fn main() {
    // Get toolchain version - prefer env var (pinned by reproducible CI builds)
    // over asking the compiler. Empty when neither source is available.
    let rustc_version = std::env::var("RUSTC_VERSION").unwrap_or_else(|_| {
        let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
        std::process::Command::new(rustc)
            .arg("--version")
            .output()
            .ok()
            .and_then(|output| {
                // "rustc 1.75.0 (82e1608df 2023-12-21)" -> "1.75.0"
                String::from_utf8_lossy(&output.stdout)
                    .split_whitespace()
                    .nth(1)
                    .map(str::to_string)
            })
            .unwrap_or_default()
    });

    println!("cargo:rustc-env=RUSTC_VERSION={}", rustc_version);
}
