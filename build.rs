use std::ffi::OsStr;
use std::fs;
use std::io::{self, Error, ErrorKind};
use std::path::Path;

// Reject malformed settings files at build time.
fn validate_toml_files(dir: &Path) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            validate_toml_files(&path)?;
        } else if path.extension() == Some(OsStr::new("toml")) {
            // Indicate to cargo that the build script must re-run when this settings
            // file is modified.
            // See https://doc.rust-lang.org/cargo/reference/build-scripts.html#rerun-if-changed
            println!("cargo:rerun-if-changed={}", path.display());

            let content = fs::read_to_string(&path)?;
            content.parse::<toml::Value>().map_err(|e| {
                Error::new(
                    ErrorKind::InvalidData,
                    format!("{}: invalid toml: {}", path.display(), e),
                )
            })?;
        }
    }
    Ok(())
}

fn main() {
    if let Err(e) = validate_toml_files(Path::new("config")) {
        eprintln!("=> Failure in TOML validation!\n=> {}", e);
        panic!("");
    }
}
