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

//! Fixed-width signature components.
//!
//! Widths are carried by the array types, so a value that exists always has
//! the size the wire layout expects.

use derive_more::{AsRef, Display, From, Into};

/// Size of the recovery byte on the wire.
pub const RECOVERY_BYTE_SIZE: usize = 1;
/// Size of each of the `r` and `s` scalars.
pub const SCALAR_SIZE: usize = 32;
/// Size of the uncompressed public key fragment (`x || y`, without the SEC1 tag).
pub const PUBLIC_KEY_SIZE: usize = 64;

/// SEC1 tag of an uncompressed curve point.
const SEC1_UNCOMPRESSED_TAG: u8 = 0x04;

/// Big-endian 32-byte scalar, used for both `r` and `s`.
#[derive(
    Clone,
    Copy,
    Default,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Eq,
    From,
    Into,
    AsRef,
    derive_more::Debug,
    Display,
)]
#[as_ref(forward)]
#[debug("0x{}", hex::encode(self.0))]
#[display("{}", hex::encode(self.0))]
pub struct Scalar([u8; SCALAR_SIZE]);

impl Scalar {
    /// Creates a scalar from exactly [`SCALAR_SIZE`] bytes.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        bytes.try_into().ok().map(Self)
    }

    /// Creates a scalar from a big-endian magnitude of any width.
    ///
    /// Shorter inputs are left-padded with zeros. Longer inputs are accepted
    /// only when every excess leading byte is zero, which is what a
    /// sign-extended big integer serializer produces.
    pub fn from_be_slice_padded(bytes: &[u8]) -> Option<Self> {
        let (excess, magnitude) = bytes.split_at(bytes.len().saturating_sub(SCALAR_SIZE));
        if excess.iter().any(|&byte| byte != 0) {
            return None;
        }

        let mut scalar = [0u8; SCALAR_SIZE];
        scalar[SCALAR_SIZE - magnitude.len()..].copy_from_slice(magnitude);

        Some(Self(scalar))
    }

    pub const fn to_bytes(self) -> [u8; SCALAR_SIZE] {
        self.0
    }
}

/// Uncompressed public key embedded by key-recovery curves.
#[derive(
    Clone, Copy, Hash, Ord, PartialEq, PartialOrd, Eq, From, Into, AsRef, derive_more::Debug, Display,
)]
#[as_ref(forward)]
#[debug("0x{}", hex::encode(self.0))]
#[display("{}", hex::encode(self.0))]
pub struct PublicKeyFragment([u8; PUBLIC_KEY_SIZE]);

impl PublicKeyFragment {
    /// Creates a fragment from exactly [`PUBLIC_KEY_SIZE`] bytes.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        bytes.try_into().ok().map(Self)
    }

    /// Accepts either the bare 64-byte `x || y` form or the 65-byte SEC1
    /// uncompressed encoding (`0x04 || x || y`).
    pub fn from_sec1_uncompressed(bytes: &[u8]) -> Option<Self> {
        match bytes.split_first() {
            Some((&SEC1_UNCOMPRESSED_TAG, point)) if point.len() == PUBLIC_KEY_SIZE => {
                Self::from_slice(point)
            }
            _ => Self::from_slice(bytes),
        }
    }

    pub const fn to_bytes(self) -> [u8; PUBLIC_KEY_SIZE] {
        self.0
    }
}
