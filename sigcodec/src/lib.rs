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

//! Fixed-layout codec for recoverable ECDSA signatures.
//!
//! A signature travels as lower-case hex of
//! `v (1) || r (32) || s (32) [|| pub (64)]`, where the trailing public key
//! is present only for curves that need it shipped alongside the signature
//! (SM2, a.k.a. "guomi"). The caller picks the layout with
//! [`SignatureMode`]; nothing in the bytes identifies it.
//!
//! `v` is written in compact form (`0..=3`), but any wire byte decodes and
//! re-encodes unchanged. Decoded signatures expose both the wire value and
//! the legacy `+27` value, see [`recovery`].
//!
//! ```
//! use sigcodec::{SignatureMode, decode, encode};
//!
//! let hex = format!("00{}{}", "11".repeat(32), "22".repeat(32));
//! let sig = decode(&hex, SignatureMode::Standard).unwrap();
//!
//! assert_eq!(sig.legacy_v(), 27);
//! assert!(sig.public_key_fragment().is_none());
//! assert_eq!(encode(&sig, SignatureMode::Standard).unwrap(), hex);
//! ```
//!
//! The codec only moves bytes around: it never signs, verifies or recovers
//! keys.

#![doc(html_logo_url = "https://gear-tech.io/logo.png")]
#![doc(html_favicon_url = "https://gear-tech.io/favicon.ico")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod codec;
pub mod error;
pub mod fields;
pub mod layout;
pub mod mode;
pub mod recovery;
pub mod signature;

#[cfg(feature = "cli")]
pub mod cli;

pub use codec::{decode, decode_bytes, encode, encode_bytes};
pub use error::{CodecError, Convention, Field, Result};
pub use fields::{PUBLIC_KEY_SIZE, PublicKeyFragment, SCALAR_SIZE, Scalar};
pub use layout::{Layout, RecoverableWithKey, Standard};
pub use mode::SignatureMode;
pub use recovery::{LEGACY_OFFSET, RecoveryId};
pub use signature::{AnySignature, KeyedSignature, Signature, StandardSignature};
