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

//! Signature mode discriminant.

use crate::{
    error::CodecError,
    fields::{PUBLIC_KEY_SIZE, RECOVERY_BYTE_SIZE, SCALAR_SIZE},
};
use core::str::FromStr;
use derive_more::Display;

/// Size of the part shared by every mode: recovery byte, `r` and `s`.
pub const HEADER_SIZE: usize = RECOVERY_BYTE_SIZE + 2 * SCALAR_SIZE;
/// Encoded size of a [`SignatureMode::Standard`] signature.
pub const STANDARD_SIZE: usize = HEADER_SIZE;
/// Encoded size of a [`SignatureMode::RecoverableWithKey`] signature.
pub const KEYED_SIZE: usize = HEADER_SIZE + PUBLIC_KEY_SIZE;

/// Which wire layout a signature uses.
///
/// The mode is always supplied out of band by the caller, the byte stream
/// carries no marker for it.
#[derive(Clone, Copy, Debug, Default, Display, Hash, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum SignatureMode {
    /// `v || r || s`, the public key is recovered from the signature.
    #[default]
    #[display("standard")]
    Standard,
    /// `v || r || s || pub`, for curves (SM2 "guomi") that need the public key
    /// shipped next to the signature.
    #[display("recoverable-with-key")]
    RecoverableWithKey,
}

impl SignatureMode {
    /// Size of the embedded public key, zero when there is none.
    pub const fn public_key_len(self) -> usize {
        match self {
            Self::Standard => 0,
            Self::RecoverableWithKey => PUBLIC_KEY_SIZE,
        }
    }

    pub const fn has_public_key(self) -> bool {
        matches!(self, Self::RecoverableWithKey)
    }

    /// Size of the encoded signature in bytes.
    pub const fn encoded_len(self) -> usize {
        HEADER_SIZE + self.public_key_len()
    }

    /// Size of the encoded signature in hex characters.
    pub const fn hex_len(self) -> usize {
        2 * self.encoded_len()
    }
}

/// Numeric "encrypt type" used by signing services: `0` for plain ECDSA,
/// `1` for the key-recovery curve.
impl TryFrom<u8> for SignatureMode {
    type Error = CodecError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Standard),
            1 => Ok(Self::RecoverableWithKey),
            _ => Err(CodecError::UnknownMode(value.to_string())),
        }
    }
}

impl From<SignatureMode> for u8 {
    fn from(mode: SignatureMode) -> u8 {
        match mode {
            SignatureMode::Standard => 0,
            SignatureMode::RecoverableWithKey => 1,
        }
    }
}

impl FromStr for SignatureMode {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" | "ecdsa" | "0" => Ok(Self::Standard),
            "recoverable-with-key" | "guomi" | "sm2" | "1" => Ok(Self::RecoverableWithKey),
            _ => Err(CodecError::UnknownMode(s.into())),
        }
    }
}
