// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use clap::Parser;
use snoozers::Cli;

fn main() {
    // A missing .env file is normal.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    snoozers::logging::init(cli.verbose);
    if let Err(e) = snoozers::run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
