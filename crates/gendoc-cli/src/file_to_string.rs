use anyhow::{Context, Result};
use gendoc_engine::to_c_literal;
use std::{env, ffi::OsString, fs, path::Path, process};

mod logging;

fn run(input: &Path) -> Result<String> {
    let bytes = fs::read(input).with_context(|| format!("Failed to read {}", input.display()))?;
    log::debug!("Read {} bytes from {}", bytes.len(), input.display());
    Ok(to_c_literal(&bytes))
}

fn main() {
    logging::init();

    let args: Vec<OsString> = env::args_os().collect();
    if args.len() != 2 {
        let program_name = args
            .first()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "file-to-string".to_string());
        eprintln!("Usage: {program_name} <input>");
        eprintln!("Prints the contents of <input> as a C string literal.");
        process::exit(1);
    }

    match run(Path::new(&args[1])) {
        Ok(literal) => println!("{literal}"),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}
