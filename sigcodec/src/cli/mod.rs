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

//! Command-line interface.
//!
//! Split into clap definitions ([`commands`]), handlers returning structured
//! results ([`handlers`]) and printers ([`display`]), so the commands can be
//! embedded into other binaries.

pub mod commands;
pub mod display;
pub mod handlers;

pub use commands::{OutputFormat, SigCodecCli, SigCodecCommands};
pub use display::{display_result, display_result_with_format};
pub use handlers::{
    CommandResult, DecodeResult, EncodeResult, RecoveryResult, execute_command,
};
