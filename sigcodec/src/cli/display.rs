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

//! Display utilities for CLI output formatting.

use super::{commands::OutputFormat, handlers::*};
use colored::Colorize;

/// Display a command result with the desired format.
pub fn display_result_with_format(result: &CommandResult, format: OutputFormat) {
    match format {
        OutputFormat::Human => display_result(result),
        OutputFormat::Plain => display_plain(result),
        OutputFormat::Json => display_json(result),
    }
}

/// Human-friendly output.
pub fn display_result(result: &CommandResult) {
    match result {
        CommandResult::Decode(r) => display_decode(r),
        CommandResult::Encode(r) => display_encode(r),
        CommandResult::Recovery(r) => display_recovery(r),
    }
}

fn display_plain(result: &CommandResult) {
    match serde_json::to_string_pretty(result) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("Failed to render result: {err}"),
    }
}

fn display_json(result: &CommandResult) {
    match serde_json::to_string(result) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("Failed to render result: {err}"),
    }
}

fn display_decode(r: &DecodeResult) {
    println!("{}", "✓ Decoded signature".green().bold());
    println!("  {} {}", "Mode:".bright_blue(), r.mode);
    println!(
        "  {} {} (compact {})",
        "V:".bright_blue(),
        r.v,
        r.compact_v
    );
    println!("  {} {}", "R:".bright_blue(), r.r);
    println!("  {} {}", "S:".bright_blue(), r.s);
    if let Some(public_key) = &r.public_key {
        println!("  {} {}", "Public key:".bright_blue(), public_key);
    }
}

fn display_encode(r: &EncodeResult) {
    println!("{}", "✓ Encoded signature".green().bold());
    println!("  {} {}", "Mode:".bright_blue(), r.mode);
    println!("  {} {}", "Signature:".bright_blue(), r.signature);
}

fn display_recovery(r: &RecoveryResult) {
    println!(
        "{} {} -> {} ({})",
        "✓".green().bold(),
        r.input,
        r.value,
        r.convention
    );
}
