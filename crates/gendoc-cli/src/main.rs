use anyhow::{Context, Result};
use gendoc_config::Config;
use gendoc_engine::{GenerateOptions, WriteOutcome, generate};
use std::{env, ffi::OsString, path::PathBuf, process};

mod logging;

fn usage(program_name: &str) {
    eprintln!("Usage: {program_name} [source-root]");
    eprintln!(
        "Scans source-root (default: {}) for /*- ... -*/ blocks and writes {}",
        gendoc_config::DEFAULT_ROOT,
        gendoc_config::DEFAULT_OUTPUT
    );
}

fn run(root_arg: Option<PathBuf>) -> Result<WriteOutcome> {
    let config_path = Config::config_path();
    let config = Config::load()
        .with_context(|| format!("Failed to load {}", config_path.display()))?;
    match &config {
        Some(_) => log::debug!("Loaded config from {}", config_path.display()),
        None => log::debug!("No {} found, using defaults", config_path.display()),
    }
    let config = config.unwrap_or_default();

    let root = root_arg.unwrap_or_else(|| config.root_or_default());
    let options = GenerateOptions {
        output: config.output_or_default(),
        extensions: config.extensions_or_default(),
    };

    Ok(generate(&root, &options)?)
}

fn main() {
    logging::init();

    let args: Vec<OsString> = env::args_os().collect();
    let program_name = args
        .first()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "gendoc".to_string());

    let root_arg = match args.get(1..).unwrap_or_default() {
        [] => None,
        [flag] if flag == "-h" || flag == "--help" => {
            usage(&program_name);
            return;
        }
        [root] => Some(PathBuf::from(root)),
        _ => {
            usage(&program_name);
            process::exit(1);
        }
    };

    if let Err(e) = run(root_arg) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
