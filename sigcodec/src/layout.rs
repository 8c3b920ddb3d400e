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

//! Mode-dependent part of the wire layout.
//!
//! A [`Signature`](crate::Signature) is parameterized by one of the two
//! layouts below, which makes the presence of the public key a property of
//! the type: a [`Standard`] signature has no key field at all, a
//! [`RecoverableWithKey`] one always has exactly 64 bytes of it.

use crate::{
    error::{CodecError, Field, Result},
    fields::{PUBLIC_KEY_SIZE, PublicKeyFragment},
    mode::{KEYED_SIZE, STANDARD_SIZE, SignatureMode},
};
use core::{fmt::Debug, hash::Hash};

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Standard {}
    impl Sealed for super::RecoverableWithKey {}
}

/// Wire layout of a signature.
pub trait Layout:
    sealed::Sealed + Clone + Copy + Debug + Default + Hash + Eq + Send + Sync + 'static
{
    /// Runtime discriminant matching this layout.
    const MODE: SignatureMode;

    /// Encoded size in bytes.
    const SIZE: usize;

    /// Embedded public key, `()` when the layout has none.
    type PublicKey: Copy + Debug + Hash + Eq + Send + Sync + 'static;

    /// Stack buffer holding an encoded signature.
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Copy;

    fn zeroed() -> Self::Bytes;

    fn public_key_bytes(public_key: &Self::PublicKey) -> &[u8];

    /// Reads the public key from the bytes following `s`.
    fn public_key_from_bytes(bytes: &[u8]) -> Result<Self::PublicKey>;

    fn public_key_fragment(public_key: &Self::PublicKey) -> Option<&PublicKeyFragment>;
}

/// `v || r || s`.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct Standard;

impl Layout for Standard {
    const MODE: SignatureMode = SignatureMode::Standard;
    const SIZE: usize = STANDARD_SIZE;

    type PublicKey = ();
    type Bytes = [u8; STANDARD_SIZE];

    fn zeroed() -> Self::Bytes {
        [0; STANDARD_SIZE]
    }

    fn public_key_bytes(_public_key: &()) -> &[u8] {
        &[]
    }

    fn public_key_from_bytes(bytes: &[u8]) -> Result<()> {
        if !bytes.is_empty() {
            return Err(CodecError::FieldLengthMismatch {
                field: Field::PublicKey,
                expected: 0,
                actual: bytes.len(),
            });
        }

        Ok(())
    }

    fn public_key_fragment(_public_key: &()) -> Option<&PublicKeyFragment> {
        None
    }
}

/// `v || r || s || pub`.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct RecoverableWithKey;

impl Layout for RecoverableWithKey {
    const MODE: SignatureMode = SignatureMode::RecoverableWithKey;
    const SIZE: usize = KEYED_SIZE;

    type PublicKey = PublicKeyFragment;
    type Bytes = [u8; KEYED_SIZE];

    fn zeroed() -> Self::Bytes {
        [0; KEYED_SIZE]
    }

    fn public_key_bytes(public_key: &PublicKeyFragment) -> &[u8] {
        public_key.as_ref()
    }

    fn public_key_from_bytes(bytes: &[u8]) -> Result<PublicKeyFragment> {
        PublicKeyFragment::from_slice(bytes).ok_or(CodecError::FieldLengthMismatch {
            field: Field::PublicKey,
            expected: PUBLIC_KEY_SIZE,
            actual: bytes.len(),
        })
    }

    fn public_key_fragment(public_key: &PublicKeyFragment) -> Option<&PublicKeyFragment> {
        Some(public_key)
    }
}
