use std::env;
use std::process::Command;

fn main() {
    let opt_level = env::var("OPT_LEVEL").unwrap_or_else(|_| "0".to_string());
    let is_optimized = opt_level != "0";

    let git_commit_hash = if is_optimized {
        Command::new("git")
            .arg("rev-parse")
            .arg("HEAD")
            .output()
            .ok()
            .filter(|output| output.status.success())
            .and_then(|output| String::from_utf8(output.stdout).ok())
    } else {
        None
    };

    let version = match git_commit_hash {
        Some(hash) if !hash.trim().is_empty() => hash,
        _ => "Development build".into(),
    };

    println!("cargo:rustc-env=RELEASE={}", version.trim());
}
