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

//! Error types returned by the codec.

use crate::mode::SignatureMode;
use derive_more::Display;

/// Signature component a width check failed for.
#[derive(Clone, Copy, Debug, Display, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Field {
    #[display("r")]
    R,
    #[display("s")]
    S,
    #[display("public key")]
    PublicKey,
}

/// Numbering convention of a recovery byte.
#[derive(Clone, Copy, Debug, Display, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Convention {
    /// `0..=3`, as stored on the wire.
    #[display("compact")]
    Compact,
    /// `27..=30`, as expected by pre-EIP-155 callers.
    #[display("legacy")]
    Legacy,
}

/// Errors produced while encoding or decoding a signature.
///
/// Every failure is returned before any output is produced.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CodecError {
    /// Input is not a valid hex string.
    #[error("malformed hex: {0}")]
    MalformedHex(#[from] hex::FromHexError),
    /// Decoded byte count does not match the mode.
    #[error("invalid {mode} signature length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        mode: SignatureMode,
        expected: usize,
        actual: usize,
    },
    /// A component does not have its fixed width, or the public key presence
    /// does not match the mode.
    #[error("invalid {field} length: expected {expected} bytes, got {actual}")]
    FieldLengthMismatch {
        field: Field,
        expected: usize,
        actual: usize,
    },
    /// Recovery byte is out of range for its convention.
    #[error("invalid {convention} recovery byte: {value}")]
    InvalidRecoveryByte { value: u8, convention: Convention },
    /// Unrecognized signature mode name or number.
    #[error("unknown signature mode: {0}")]
    UnknownMode(String),
}

/// Codec result.
pub type Result<T, E = CodecError> = core::result::Result<T, E>;
