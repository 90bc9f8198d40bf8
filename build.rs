use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    // Restamp the build id whenever the bundled front-end changes.
    println!("cargo:rerun-if-changed=static");

    // Logged at startup so it's obvious which binary is running.
    let build_id = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "dev".to_string());
    println!("cargo:rustc-env=ROSTER_BUILD_ID={}", build_id);
}

