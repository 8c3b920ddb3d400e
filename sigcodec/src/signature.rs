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

//! Signature value type and its fixed wire layout.
//!
//! ```text
//! byte  0          compact recovery id
//! bytes 1..33      r
//! bytes 33..65     s
//! bytes 65..129    public key (RecoverableWithKey only)
//! ```

use crate::{
    error::{CodecError, Field, Result},
    fields::{PublicKeyFragment, RECOVERY_BYTE_SIZE, SCALAR_SIZE, Scalar},
    layout::{Layout, RecoverableWithKey, Standard},
    mode::{HEADER_SIZE, SignatureMode},
    recovery::RecoveryId,
};
use core::{fmt, ops::Range, str::FromStr};
use derive_more::{Display, From};

const RECOVERY_BYTE_IDX: usize = 0;
const R_RANGE: Range<usize> = RECOVERY_BYTE_SIZE..RECOVERY_BYTE_SIZE + SCALAR_SIZE;
const S_RANGE: Range<usize> = R_RANGE.end..R_RANGE.end + SCALAR_SIZE;

/// Signature without an embedded public key.
pub type StandardSignature = Signature<Standard>;
/// Signature carrying a 64-byte public key.
pub type KeyedSignature = Signature<RecoverableWithKey>;

/// Strips an optional `0x`/`0X` prefix.
pub(crate) fn strip_hex_prefix(input: &str) -> &str {
    input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input)
}

/// A recoverable ECDSA signature in a fixed wire layout.
///
/// The recovery id is kept as the wire byte, so decoding never rejects it
/// and encoding writes it back unchanged. Callers holding a legacy
/// `27..=30` value convert it with [`RecoveryId::from_legacy`] and read it
/// back with [`Signature::legacy_v`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature<L: Layout> {
    recovery_id: RecoveryId,
    r: Scalar,
    s: Scalar,
    public_key: L::PublicKey,
}

impl<L: Layout> Signature<L> {
    pub const MODE: SignatureMode = L::MODE;
    pub const SIZE: usize = L::SIZE;

    pub const fn mode(&self) -> SignatureMode {
        L::MODE
    }

    pub const fn recovery_id(&self) -> RecoveryId {
        self.recovery_id
    }

    /// Recovery byte as stored on the wire.
    pub const fn compact_v(&self) -> u8 {
        self.recovery_id.to_compact()
    }

    /// Wire byte plus 27, wrapping on overflow.
    pub const fn legacy_v(&self) -> u8 {
        self.recovery_id.to_legacy()
    }

    pub const fn r(&self) -> Scalar {
        self.r
    }

    pub const fn s(&self) -> Scalar {
        self.s
    }

    /// Embedded public key, `None` for layouts without one.
    pub fn public_key_fragment(&self) -> Option<&PublicKeyFragment> {
        L::public_key_fragment(&self.public_key)
    }

    /// Decodes a signature from its raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != L::SIZE {
            return Err(CodecError::InvalidLength {
                mode: L::MODE,
                expected: L::SIZE,
                actual: bytes.len(),
            });
        }

        let (header, public_key) = bytes.split_at(HEADER_SIZE);

        Ok(Self {
            recovery_id: RecoveryId::from_wire(header[RECOVERY_BYTE_IDX]),
            r: scalar(Field::R, &header[R_RANGE])?,
            s: scalar(Field::S, &header[S_RANGE])?,
            public_key: L::public_key_from_bytes(public_key)?,
        })
    }

    /// Decodes a signature from hex, with or without a `0x` prefix.
    pub fn from_hex(input: &str) -> Result<Self> {
        let bytes = hex::decode(strip_hex_prefix(input))?;
        Self::from_bytes(&bytes)
    }

    pub fn to_bytes(&self) -> L::Bytes {
        let mut bytes = L::zeroed();
        let (header, public_key) = bytes.as_mut().split_at_mut(HEADER_SIZE);

        header[RECOVERY_BYTE_IDX] = self.recovery_id.to_compact();
        header[R_RANGE].copy_from_slice(self.r.as_ref());
        header[S_RANGE].copy_from_slice(self.s.as_ref());
        public_key.copy_from_slice(L::public_key_bytes(&self.public_key));

        bytes
    }

    /// Lower-case hex of the encoded bytes, without a prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    pub fn into_parts(self) -> (RecoveryId, Scalar, Scalar, L::PublicKey) {
        (self.recovery_id, self.r, self.s, self.public_key)
    }
}

fn scalar(field: Field, bytes: &[u8]) -> Result<Scalar> {
    Scalar::from_slice(bytes).ok_or(CodecError::FieldLengthMismatch {
        field,
        expected: SCALAR_SIZE,
        actual: bytes.len(),
    })
}

impl Signature<Standard> {
    pub const fn new(recovery_id: RecoveryId, r: Scalar, s: Scalar) -> Self {
        Self {
            recovery_id,
            r,
            s,
            public_key: (),
        }
    }

    /// Builds a signature from raw component slices, checking their widths.
    pub fn from_slices(recovery_id: RecoveryId, r: &[u8], s: &[u8]) -> Result<Self> {
        Ok(Self::new(
            recovery_id,
            scalar(Field::R, r)?,
            scalar(Field::S, s)?,
        ))
    }

    pub const fn with_public_key(self, public_key: PublicKeyFragment) -> KeyedSignature {
        Signature::<RecoverableWithKey>::new(self.recovery_id, self.r, self.s, public_key)
    }
}

impl Signature<RecoverableWithKey> {
    pub const fn new(
        recovery_id: RecoveryId,
        r: Scalar,
        s: Scalar,
        public_key: PublicKeyFragment,
    ) -> Self {
        Self {
            recovery_id,
            r,
            s,
            public_key,
        }
    }

    /// Builds a signature from raw component slices, checking their widths.
    pub fn from_slices(
        recovery_id: RecoveryId,
        r: &[u8],
        s: &[u8],
        public_key: &[u8],
    ) -> Result<Self> {
        Ok(Self::new(
            recovery_id,
            scalar(Field::R, r)?,
            scalar(Field::S, s)?,
            RecoverableWithKey::public_key_from_bytes(public_key)?,
        ))
    }

    pub const fn public_key(&self) -> PublicKeyFragment {
        self.public_key
    }

    pub const fn without_public_key(self) -> StandardSignature {
        Signature::<Standard>::new(self.recovery_id, self.r, self.s)
    }
}

impl<L: Layout> fmt::Debug for Signature<L> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl<L: Layout> fmt::Display for Signature<L> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl<L: Layout> FromStr for Signature<L> {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl<L: Layout> TryFrom<&[u8]> for Signature<L> {
    type Error = CodecError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

impl<L: Layout> From<Signature<L>> for Vec<u8> {
    fn from(signature: Signature<L>) -> Vec<u8> {
        signature.to_bytes().as_ref().to_vec()
    }
}

/// Signature whose layout is only known at runtime.
#[derive(Clone, Copy, Debug, Display, From, Hash, PartialEq, Eq)]
pub enum AnySignature {
    Standard(StandardSignature),
    RecoverableWithKey(KeyedSignature),
}

impl AnySignature {
    pub fn from_bytes(bytes: &[u8], mode: SignatureMode) -> Result<Self> {
        Ok(match mode {
            SignatureMode::Standard => StandardSignature::from_bytes(bytes)?.into(),
            SignatureMode::RecoverableWithKey => KeyedSignature::from_bytes(bytes)?.into(),
        })
    }

    pub fn from_hex(input: &str, mode: SignatureMode) -> Result<Self> {
        let bytes = hex::decode(strip_hex_prefix(input))?;
        Self::from_bytes(&bytes, mode)
    }

    pub const fn mode(&self) -> SignatureMode {
        match self {
            Self::Standard(_) => SignatureMode::Standard,
            Self::RecoverableWithKey(_) => SignatureMode::RecoverableWithKey,
        }
    }

    pub const fn recovery_id(&self) -> RecoveryId {
        match self {
            Self::Standard(sig) => sig.recovery_id(),
            Self::RecoverableWithKey(sig) => sig.recovery_id(),
        }
    }

    pub const fn compact_v(&self) -> u8 {
        self.recovery_id().to_compact()
    }

    pub const fn legacy_v(&self) -> u8 {
        self.recovery_id().to_legacy()
    }

    pub const fn r(&self) -> Scalar {
        match self {
            Self::Standard(sig) => sig.r(),
            Self::RecoverableWithKey(sig) => sig.r(),
        }
    }

    pub const fn s(&self) -> Scalar {
        match self {
            Self::Standard(sig) => sig.s(),
            Self::RecoverableWithKey(sig) => sig.s(),
        }
    }

    pub fn public_key_fragment(&self) -> Option<&PublicKeyFragment> {
        match self {
            Self::Standard(sig) => sig.public_key_fragment(),
            Self::RecoverableWithKey(sig) => sig.public_key_fragment(),
        }
    }

    pub fn to_vec(&self) -> Vec<u8> {
        match *self {
            Self::Standard(sig) => sig.into(),
            Self::RecoverableWithKey(sig) => sig.into(),
        }
    }

    pub fn to_hex(&self) -> String {
        match self {
            Self::Standard(sig) => sig.to_hex(),
            Self::RecoverableWithKey(sig) => sig.to_hex(),
        }
    }
}

#[cfg(feature = "serde")]
impl<L: Layout> serde::Serialize for Signature<L> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de, L: Layout> serde::Deserialize<'de> for Signature<L> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let hex_string: String = serde::Deserialize::deserialize(deserializer)?;
        Self::from_hex(&hex_string).map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for AnySignature {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "codec")]
mod scale {
    use super::*;
    use parity_scale_codec::{
        Decode, Encode, Error as ScaleError, Input as CodecInput, MaxEncodedLen,
        Output as CodecOutput,
    };

    impl<L: Layout> Decode for Signature<L> {
        fn decode<I: CodecInput>(input: &mut I) -> core::result::Result<Self, ScaleError> {
            let mut bytes = L::zeroed();
            input.read(bytes.as_mut())?;
            Self::from_bytes(bytes.as_ref()).map_err(|_| ScaleError::from("Invalid signature bytes"))
        }
    }

    impl<L: Layout> Encode for Signature<L> {
        fn encode_to<T: CodecOutput + ?Sized>(&self, dest: &mut T) {
            dest.write(self.to_bytes().as_ref());
        }

        fn encoded_size(&self) -> usize {
            L::SIZE
        }
    }

    impl<L: Layout> MaxEncodedLen for Signature<L> {
        fn max_encoded_len() -> usize {
            L::SIZE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::PUBLIC_KEY_SIZE;
    use hex_literal::hex;

    fn standard_bytes(v: u8) -> Vec<u8> {
        let mut bytes = vec![v];
        bytes.extend_from_slice(&[0x11; SCALAR_SIZE]);
        bytes.extend_from_slice(&[0x22; SCALAR_SIZE]);
        bytes
    }

    fn keyed_bytes(v: u8) -> Vec<u8> {
        let mut bytes = standard_bytes(v);
        bytes.extend((0..PUBLIC_KEY_SIZE).map(|i| i as u8));
        bytes
    }

    #[test]
    fn decode_standard() {
        let sig = StandardSignature::from_bytes(&standard_bytes(0)).unwrap();

        assert_eq!(sig.legacy_v(), 27);
        assert_eq!(sig.compact_v(), 0);
        assert_eq!(sig.r().to_bytes(), [0x11; SCALAR_SIZE]);
        assert_eq!(sig.s().to_bytes(), [0x22; SCALAR_SIZE]);
        assert!(sig.public_key_fragment().is_none());
    }

    #[test]
    fn decode_keyed() {
        let bytes = keyed_bytes(1);
        let sig = KeyedSignature::from_bytes(&bytes).unwrap();

        assert_eq!(sig.legacy_v(), 28);
        assert_eq!(sig.public_key().to_bytes().as_slice(), &bytes[65..129]);
        assert_eq!(sig.public_key_fragment(), Some(&sig.public_key()));
    }

    #[test]
    fn encode_writes_compact_byte() {
        let sig = StandardSignature::new(
            RecoveryId::from_legacy(27).unwrap(),
            [0x11; SCALAR_SIZE].into(),
            [0x22; SCALAR_SIZE].into(),
        );

        let bytes = sig.to_bytes();
        assert_eq!(bytes[0], 0x00);
        assert_eq!(bytes.as_slice(), standard_bytes(0).as_slice());

        let hex = sig.to_hex();
        assert_eq!(hex.len(), 130);
        assert!(hex.starts_with("00"));
    }

    #[test]
    fn layouts_reject_each_other() {
        assert_eq!(
            StandardSignature::from_bytes(&keyed_bytes(0)),
            Err(CodecError::InvalidLength {
                mode: SignatureMode::Standard,
                expected: 65,
                actual: 129
            })
        );
        assert_eq!(
            KeyedSignature::from_bytes(&standard_bytes(0)),
            Err(CodecError::InvalidLength {
                mode: SignatureMode::RecoverableWithKey,
                expected: 129,
                actual: 65
            })
        );
    }

    #[test]
    fn legacy_wire_byte_is_kept() {
        let bytes = standard_bytes(0x1b);
        let sig = StandardSignature::from_bytes(&bytes).unwrap();

        assert_eq!(sig.compact_v(), 27);
        assert_eq!(sig.legacy_v(), 54);
        assert!(!sig.recovery_id().is_compact());
        assert_eq!(sig.to_bytes().as_slice(), bytes.as_slice());

        let sig = KeyedSignature::from_bytes(&keyed_bytes(u8::MAX)).unwrap();
        assert_eq!(sig.compact_v(), u8::MAX);
        assert_eq!(sig.legacy_v(), 26);
        assert_eq!(Vec::from(sig), keyed_bytes(u8::MAX));
    }

    #[test]
    fn hex_prefix_is_optional() {
        let plain = hex::encode(standard_bytes(1));
        let prefixed = format!("0x{plain}");
        let upper = format!("0X{}", plain.to_uppercase());

        let sig = StandardSignature::from_hex(&plain).unwrap();
        assert_eq!(StandardSignature::from_hex(&prefixed), Ok(sig));
        assert_eq!(StandardSignature::from_hex(&upper), Ok(sig));
        assert_eq!(plain.parse::<StandardSignature>(), Ok(sig));

        // Output is always bare and lower-case.
        assert_eq!(sig.to_hex(), plain);
        assert_eq!(sig.to_string(), plain);
        assert_eq!(format!("{sig:?}"), prefixed);
    }

    #[test]
    fn slices_are_width_checked() {
        let id = RecoveryId::from_compact(0).unwrap();

        assert_eq!(
            StandardSignature::from_slices(id, &[0; 31], &[0; 32]),
            Err(CodecError::FieldLengthMismatch {
                field: Field::R,
                expected: 32,
                actual: 31
            })
        );
        assert_eq!(
            StandardSignature::from_slices(id, &[0; 32], &[0; 33]),
            Err(CodecError::FieldLengthMismatch {
                field: Field::S,
                expected: 32,
                actual: 33
            })
        );
        assert_eq!(
            KeyedSignature::from_slices(id, &[0; 32], &[0; 32], &[]),
            Err(CodecError::FieldLengthMismatch {
                field: Field::PublicKey,
                expected: 64,
                actual: 0
            })
        );
        assert!(KeyedSignature::from_slices(id, &[0; 32], &[0; 32], &[0; 64]).is_ok());
    }

    #[test]
    fn key_can_be_attached_and_dropped() {
        let standard = StandardSignature::from_bytes(&standard_bytes(2)).unwrap();
        let key = PublicKeyFragment::from([0x55; PUBLIC_KEY_SIZE]);

        let keyed = standard.with_public_key(key);
        assert_eq!(keyed.legacy_v(), 29);
        assert_eq!(keyed.public_key(), key);
        assert_eq!(keyed.without_public_key(), standard);

        let (recovery_id, r, s, public_key) = keyed.into_parts();
        assert_eq!(recovery_id.to_compact(), 2);
        assert_eq!(r, standard.r());
        assert_eq!(s, standard.s());
        assert_eq!(public_key, key);
    }

    #[test]
    fn any_signature_dispatch() {
        let sig = AnySignature::from_bytes(&keyed_bytes(1), SignatureMode::RecoverableWithKey)
            .unwrap();
        assert_eq!(sig.mode(), SignatureMode::RecoverableWithKey);
        assert_eq!(sig.legacy_v(), 28);
        assert_eq!(sig.to_vec(), keyed_bytes(1));
        assert_eq!(sig.public_key_fragment().map(|key| key.to_bytes()[1]), Some(1));

        let sig = AnySignature::from_hex(&hex::encode(standard_bytes(0)), SignatureMode::Standard)
            .unwrap();
        assert_eq!(sig.mode(), SignatureMode::Standard);
        assert_eq!(sig.public_key_fragment(), None);
        assert_eq!(sig.to_string(), hex::encode(standard_bytes(0)));
    }

    #[test]
    fn known_vector() {
        let bytes = hex!(
            "01"
            "b91467e570a6466aa9e9876cbcd013baba02900b8979d43fe208a4a4f339f5fd"
            "6007e74cd82e037b800186422fc2da167c747ef045e5d18a5f5d4300f8e1a029"
        );

        let sig = StandardSignature::from_bytes(&bytes).unwrap();
        assert_eq!(sig.legacy_v(), 28);
        assert_eq!(
            sig.r().to_string(),
            "b91467e570a6466aa9e9876cbcd013baba02900b8979d43fe208a4a4f339f5fd"
        );
        assert_eq!(sig.to_bytes(), bytes);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_wire_hex() {
        let sig = KeyedSignature::from_bytes(&keyed_bytes(0)).unwrap();

        let json = serde_json::to_string(&sig).unwrap();
        assert_eq!(json, format!("\"{}\"", hex::encode(keyed_bytes(0))));
        assert_eq!(serde_json::from_str::<KeyedSignature>(&json).unwrap(), sig);

        let prefixed = format!("\"0x{}\"", hex::encode(keyed_bytes(0)));
        assert_eq!(serde_json::from_str::<KeyedSignature>(&prefixed).unwrap(), sig);

        assert!(serde_json::from_str::<StandardSignature>(&json).is_err());
    }

    #[cfg(feature = "codec")]
    #[test]
    fn scale_codec_is_raw_bytes() {
        use parity_scale_codec::{Decode, Encode, MaxEncodedLen};

        let sig = KeyedSignature::from_bytes(&keyed_bytes(1)).unwrap();
        let encoded = sig.encode();

        assert_eq!(encoded, keyed_bytes(1));
        assert_eq!(KeyedSignature::max_encoded_len(), 129);
        assert_eq!(KeyedSignature::decode(&mut encoded.as_slice()).unwrap(), sig);
        assert!(StandardSignature::decode(&mut &encoded[..10]).is_err());
    }
}
