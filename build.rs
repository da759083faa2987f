use std::process::Command;

/// Build-time settings baked into the bundle through `option_env!`.
const CONFIG_VARS: [&str; 4] = [
    "ROSTER_API_BASE_URL",
    "ROSTER_STRIPE_KEY",
    "ROSTER_PAGE_SIZE",
    "ROSTER_LOG",
];

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");
    for var in CONFIG_VARS {
        println!("cargo:rerun-if-env-changed={var}");
    }

    let sha = short_sha().unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=ROSTER_WEB_GIT_SHA={sha}");
}

fn short_sha() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short=12", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }

    let sha = String::from_utf8(output.stdout).ok()?;
    let sha = sha.trim();
    (!sha.is_empty()).then(|| sha.to_string())
}
