// This file is part of Gear.
//
// Copyright (C) 2025 Gear Technologies Inc.
// SPDX-License-Identifier: GPL-3.0-or-later WITH Classpath-exception-2.0
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! sigcodec command-line tool.

use anyhow::{Result, anyhow};
use clap::Parser;
use sigcodec::cli::{SigCodecCli, display_result_with_format, execute_command};
use std::{env, io};
use tracing_subscriber::EnvFilter;

fn init_logger(verbosity: u8) -> Result<()> {
    let name = env!("CARGO_PKG_NAME");
    let filter = if env::var(EnvFilter::DEFAULT_ENV).is_ok() {
        EnvFilter::from_default_env()
    } else {
        match verbosity {
            0 => format!("{name}=info").into(),
            1 => format!("{name}=debug").into(),
            2 => "debug".into(),
            _ => "trace".into(),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .try_init()
        .map_err(|err| anyhow!("{err}"))
}

fn main() -> Result<()> {
    let cli = SigCodecCli::parse();
    init_logger(cli.verbosity)?;

    let result = execute_command(cli.command)?;
    display_result_with_format(&result, cli.format);

    Ok(())
}
