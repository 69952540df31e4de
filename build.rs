//! Build script for the MoodDrop CLI.
//!
//! Copies `.env.example` from the crate root into the user's local data
//! directory (`<data_local_dir>/mooddrop/.env.example`) so a configuration
//! template sits next to the `.env` file the binary loads at startup.
//!
//! A missing template only produces a cargo warning; failing to create the
//! target directory or write the file fails the build.

use std::{env, fs, path::PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let template = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("mooddrop");
    fs::create_dir_all(&out_dir)?;

    if template.is_file() {
        fs::copy(&template, out_dir.join(".env.example"))?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            template.display()
        );
    }

    Ok(())
}
