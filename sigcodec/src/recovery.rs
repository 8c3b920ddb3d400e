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

//! Recovery byte and its two numbering conventions.
//!
//! Signers disagree on how `v` is numbered. Newer SDKs emit the compact
//! recovery id (`0`, `1`, rarely `2`/`3`), older ones add 27 to it the way
//! pre-EIP-155 Ethereum signatures do. The wire format always carries the
//! compact form, and [`RecoveryId`] stores it that way too; the offset is
//! applied only by [`RecoveryId::from_legacy`] and [`RecoveryId::to_legacy`].
//!
//! Some old signers wrote the legacy value itself to the wire, so a wire
//! byte is taken as is by [`RecoveryId::from_wire`]. Only the caller-side
//! constructors check ranges.

use crate::error::{CodecError, Convention, Result};
use derive_more::Display;

/// Offset between the legacy and compact conventions.
pub const LEGACY_OFFSET: u8 = 27;
/// Largest compact recovery id an ECDSA signature can have.
pub const MAX_COMPACT: u8 = 3;

/// Recovery id, stored as the byte written on the wire.
#[derive(Clone, Copy, Debug, Default, Display, Hash, Ord, PartialEq, PartialOrd, Eq)]
#[display("{_0}")]
pub struct RecoveryId(u8);

impl RecoveryId {
    /// Takes a wire byte without any range check.
    pub const fn from_wire(v: u8) -> Self {
        Self(v)
    }

    /// Creates a recovery id from its compact (`0..=3`) form.
    ///
    /// Bytes read off the wire go through [`RecoveryId::from_wire`] instead.
    pub fn from_compact(v: u8) -> Result<Self> {
        if v > MAX_COMPACT {
            return Err(CodecError::InvalidRecoveryByte {
                value: v,
                convention: Convention::Compact,
            });
        }

        Ok(Self(v))
    }

    /// Creates a recovery id from its legacy (`27..=30`) form.
    pub fn from_legacy(v: u8) -> Result<Self> {
        match v.checked_sub(LEGACY_OFFSET) {
            Some(compact) if compact <= MAX_COMPACT => Ok(Self(compact)),
            _ => Err(CodecError::InvalidRecoveryByte {
                value: v,
                convention: Convention::Legacy,
            }),
        }
    }

    /// Creates a recovery id from a value in the given convention.
    pub fn from_convention(v: u8, convention: Convention) -> Result<Self> {
        match convention {
            Convention::Compact => Self::from_compact(v),
            Convention::Legacy => Self::from_legacy(v),
        }
    }

    /// Value as written on the wire.
    pub const fn to_compact(self) -> u8 {
        self.0
    }

    /// Wire byte plus 27, wrapping on overflow.
    pub const fn to_legacy(self) -> u8 {
        self.0.wrapping_add(LEGACY_OFFSET)
    }

    /// Whether the id is a valid ECDSA recovery id (`0..=3`).
    pub const fn is_compact(self) -> bool {
        self.0 <= MAX_COMPACT
    }

    pub const fn to_convention(self, convention: Convention) -> u8 {
        match convention {
            Convention::Compact => self.to_compact(),
            Convention::Legacy => self.to_legacy(),
        }
    }
}
