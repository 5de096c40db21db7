//! Embeds the commit hash and build date for the --version banner.

use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

fn resolve_commit() -> String {
    // CI sets BUILD_COMMIT; local builds ask git directly.
    env::var("BUILD_COMMIT").unwrap_or_else(|_| {
        Command::new("git")
            .args(["rev-parse", "--short=7", "HEAD"])
            .output()
            .ok()
            .and_then(|out| String::from_utf8(out.stdout).ok())
            .map(|hash| hash.trim().to_string())
            .unwrap_or_else(|| "unknown".to_string())
    })
}

fn resolve_date() -> String {
    env::var("BUILD_DATE").unwrap_or_else(|_| chrono::Utc::now().format("%Y-%m-%d").to_string())
}

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("build_info.rs");

    fs::write(
        &dest,
        format!(
            "pub const BUILD_COMMIT: &str = \"{}\";\npub const BUILD_DATE: &str = \"{}\";\n",
            resolve_commit(),
            resolve_date(),
        ),
    )
    .unwrap();

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-env-changed=BUILD_COMMIT");
    println!("cargo:rerun-if-env-changed=BUILD_DATE");
}
