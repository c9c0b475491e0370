//! Build script for the Spotify auth helper.
//!
//! Copies `.env.example` from the crate root into the local data directory,
//! next to where the binary looks for its `.env` file, so users have a
//! template in the right place after installation.

use std::{env, fs, path::PathBuf};

/// Copies `.env.example` to `<data_local_dir>/spotify-auth-helper/.env.example`.
///
/// Nothing here is required to build the crate, so every failure is only
/// reported as a cargo warning.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("spotify-auth-helper");

    if env_example_path.is_file() {
        let copied = fs::create_dir_all(&out_dir)
            .and_then(|_| fs::copy(&env_example_path, out_dir.join(".env.example")));
        if let Err(e) = copied {
            println!(
                "cargo:warning=could not copy .env.example to {}: {}",
                out_dir.display(),
                e
            );
        }
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
