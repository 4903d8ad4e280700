// Copyright 2026 Open Nexus OS Contributors
// SPDX-License-Identifier: Apache-2.0
#![forbid(unsafe_code)]

//! CONTEXT: Showcase binary printing one line per fancy-print severity
//! OWNERS: @runtime
//! STATUS: Functional
//! API_STABILITY: Unstable
//! TEST_COVERAGE: CLI tests in `source/apps/fancy-print-demo/tests/`

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use nexus_fancy_print::{
    bridge, f_debug, f_error, f_info, f_success, f_warning, install, Config, ConfigError,
};

#[derive(Debug, Parser)]
#[command(name = "fancy-print-demo", about = "Prints a sample line for every severity")]
struct Args {
    /// TOML config file. Falls back to $FANCY_PRINT_CONFIG.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Drop tag, location and color; print only the message.
    #[arg(long)]
    plain: bool,
    /// Keep the columns but emit no ANSI escapes.
    #[arg(long)]
    no_color: bool,
}

fn resolve(args: &Args) -> Result<Config, ConfigError> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::from_env()?.unwrap_or_default(),
    };
    if args.plain {
        config.fancy = false;
    }
    if args.no_color {
        config.color = false;
    }
    Ok(config)
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = match resolve(&args) {
        Ok(config) => config,
        Err(err) => {
            f_error!("fancy-print-demo: ", err);
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = install(config) {
        f_error!("fancy-print-demo: ", err);
        return ExitCode::FAILURE;
    }
    if let Err(err) = bridge::init() {
        f_warning!("fancy-print-demo: log bridge unavailable: ", err);
    }

    f_success!("Yes! You succesfully compiled FancyPrint!");
    f_info!("FancyPrint makes your application prints to the terminal much nicer!");
    f_info!("You can put in whatever you normally could put in a stream, such as integers: ", 10);
    f_info!("There are all types of print types possible: ");
    f_debug!("This is a fancy debug message!");
    f_warning!("Warnings are nicely visible");
    f_error!("Errors are even more visible");
    log::warn!("Records from the log crate use the same layout");

    ExitCode::SUCCESS
}
