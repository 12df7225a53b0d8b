use std::env;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-env-changed=SYNTAX_INDEX_APP_HINT");

    let hint = env::var("SYNTAX_INDEX_APP_HINT").ok();

    if let Some(raw_hint) = hint {
        let candidate = PathBuf::from(raw_hint);
        let canonical = candidate.canonicalize().unwrap_or(candidate);

        println!(
            "cargo:rustc-env=SYNTAX_INDEX_APP_HINT={}",
            canonical.display()
        );
    }
}
