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

//! Command definitions for the sigcodec CLI.
//!
//! These types can be used directly with clap or integrated into other CLI applications.

use crate::{error::Convention, mode::SignatureMode};
use clap::{Parser, Subcommand, ValueEnum};

/// Root CLI structure
#[derive(Parser, Debug, Clone)]
#[command(name = "sigcodec", version)]
#[command(about = "Encode and decode recoverable ECDSA signatures in the fixed v || r || s [|| pub] hex layout", long_about = None)]
pub struct SigCodecCli {
    /// Output format.
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Increase verbosity level, maximum is 3.
    #[arg(short, long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: SigCodecCommands,
}

/// How results are printed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored, human-friendly output.
    #[default]
    Human,
    /// Pretty-printed JSON.
    Plain,
    /// Single-line JSON.
    Json,
}

/// Top-level commands
#[derive(Subcommand, Debug, Clone)]
pub enum SigCodecCommands {
    #[command(about = "Decode a hex signature into its components")]
    Decode {
        #[arg(help = "Signature (hex, optional 0x prefix)")]
        signature: String,
        #[arg(
            short,
            long,
            default_value_t = SignatureMode::Standard,
            help = "Signature mode: standard (ecdsa) or recoverable-with-key (guomi, sm2)"
        )]
        mode: SignatureMode,
    },
    #[command(about = "Encode signature components into hex")]
    Encode {
        #[arg(long, help = "Recovery byte")]
        recovery: u8,
        #[arg(
            long,
            help = "Treat the recovery byte as legacy (27..=30) instead of compact (0..=3)",
            default_value_t = false
        )]
        legacy: bool,
        #[arg(short, long, help = "r scalar (big-endian hex, left-padded to 32 bytes)")]
        r: String,
        #[arg(short, long, help = "s scalar (big-endian hex, left-padded to 32 bytes)")]
        s: String,
        #[arg(
            short,
            long,
            help = "Public key (hex, 64 bytes or 65 bytes with 0x04 tag)"
        )]
        public_key: Option<String>,
        #[arg(
            short,
            long,
            default_value_t = SignatureMode::Standard,
            help = "Signature mode: standard (ecdsa) or recoverable-with-key (guomi, sm2)"
        )]
        mode: SignatureMode,
    },
    #[command(about = "Convert a recovery byte between compact and legacy conventions")]
    Recovery {
        #[arg(help = "Recovery byte to convert")]
        value: u8,
        #[arg(
            long,
            value_enum,
            help = "Target convention: `compact` takes a legacy byte (27..=30), `legacy` takes any wire byte and adds 27 (wrapping)"
        )]
        to: Convention,
    },
}
