//! testgen - pytest + Selenium test scripts from plain-language scenarios

mod config;
mod console;
mod error;
mod logging;

use anyhow::Context;
use config::{Overrides, Settings};
use std::env;
use std::io;
use std::path::PathBuf;
use testgen_core::EscapePolicy;
use testgen_core::session::generate_once;
use testgen_core::storage::write_script;

fn print_usage() {
    eprintln!("Usage: testgen [OPTIONS]");
    eprintln!();
    eprintln!("Without options, starts the interactive menu.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -d, --describe <TEXT>     Generate one script for TEXT and exit");
    eprintln!("  -o, --output-dir <DIR>    Directory for generated files (default: .)");
    eprintln!("  --ext <EXT>               Extension of generated files (default: py)");
    eprintln!("  --escape <POLICY>         verbatim (default) or python");
    eprintln!("  --delay-ms <N>            Pause before showing each generated script");
    eprintln!("  --no-color                Disable colored output");
    eprintln!("  --config <FILE>           Read settings from FILE");
    eprintln!("  --no-config               Ignore the user config file");
    eprintln!("  -v, --verbose             Debug logging on stderr");
    eprintln!("  -h, --help                Print help");
}

fn require_value(args: &[String], i: usize, flag: &str, what: &str) -> String {
    match args.get(i) {
        Some(value) => value.clone(),
        None => {
            eprintln!("Error: {} requires {}", flag, what);
            std::process::exit(1);
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut overrides = Overrides::default();
    let mut describe: Option<String> = None;
    let mut config_file: Option<PathBuf> = None;
    let mut no_config = false;
    let mut verbose = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "-d" | "--describe" => {
                i += 1;
                describe = Some(require_value(&args, i, "--describe", "a description"));
            }
            "-o" | "--output-dir" => {
                i += 1;
                overrides.output_dir = Some(PathBuf::from(require_value(
                    &args,
                    i,
                    "--output-dir",
                    "a directory",
                )));
            }
            "--ext" => {
                i += 1;
                let raw = require_value(&args, i, "--ext", "an extension");
                match config::validate_extension(&raw) {
                    Ok(ext) => overrides.extension = Some(ext),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        std::process::exit(1);
                    }
                }
            }
            "--escape" => {
                i += 1;
                let raw = require_value(&args, i, "--escape", "a policy");
                match raw.parse::<EscapePolicy>() {
                    Ok(policy) => overrides.escape = Some(policy),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        std::process::exit(1);
                    }
                }
            }
            "--delay-ms" => {
                i += 1;
                let raw = require_value(&args, i, "--delay-ms", "a number");
                match raw.parse::<u64>() {
                    Ok(ms) => overrides.delay_ms = Some(ms),
                    Err(_) => {
                        eprintln!("Error: --delay-ms expects milliseconds, got '{}'", raw);
                        std::process::exit(1);
                    }
                }
            }
            "--no-color" => overrides.color = Some(false),
            "--config" => {
                i += 1;
                config_file = Some(PathBuf::from(require_value(
                    &args,
                    i,
                    "--config",
                    "a file path",
                )));
            }
            "--no-config" => no_config = true,
            "-v" | "--verbose" => verbose = true,
            arg => {
                eprintln!("Error: Unknown option: {}", arg);
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    logging::init(verbose);

    let (mut settings, warnings) = config::load_settings(config_file.as_ref(), no_config);
    for warning in warnings {
        eprintln!("Warning: {}", warning);
    }
    settings.apply(&overrides);
    if env::var_os("NO_COLOR").is_some() {
        settings.color = false;
    }

    if let Some(description) = describe {
        match generate_one(&settings, &description) {
            Ok(path) => println!("{}", path.display()),
            Err(e) => {
                eprintln!("Error: {:#}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let mut app = console::App::new(settings, io::stdin().lock(), io::stdout().lock());
    if let Err(e) = app.run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Non-interactive mode: one script, numbered 1.
fn generate_one(settings: &Settings, description: &str) -> anyhow::Result<PathBuf> {
    let script = generate_once(description, settings.escape)?;
    let path = write_script(&settings.output_dir, 1, &script, &settings.extension)
        .context("Could not save test #1")?;
    Ok(path)
}
