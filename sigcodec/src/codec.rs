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

//! Mode-dispatched encode and decode.
//!
//! These are the entry points for callers that learn the [`SignatureMode`]
//! at runtime. Callers that know the layout statically can use
//! [`Signature::from_hex`](crate::Signature::from_hex) and
//! [`Signature::to_hex`](crate::Signature::to_hex) directly.

use crate::{
    error::{CodecError, Field, Result},
    mode::SignatureMode,
    signature::AnySignature,
};

/// Decodes a hex signature in the given mode.
///
/// The returned signature reports the wire recovery byte through
/// [`AnySignature::compact_v`] and its `+27` form through
/// [`AnySignature::legacy_v`].
pub fn decode(input: &str, mode: SignatureMode) -> Result<AnySignature> {
    AnySignature::from_hex(input, mode)
}

pub fn decode_bytes(bytes: &[u8], mode: SignatureMode) -> Result<AnySignature> {
    AnySignature::from_bytes(bytes, mode)
}

/// Encodes a signature into lower-case, unprefixed hex.
///
/// Fails with [`CodecError::FieldLengthMismatch`] on the public key when the
/// signature's layout does not match `mode`.
pub fn encode(signature: &AnySignature, mode: SignatureMode) -> Result<String> {
    ensure_mode(signature, mode)?;
    Ok(signature.to_hex())
}

pub fn encode_bytes(signature: &AnySignature, mode: SignatureMode) -> Result<Vec<u8>> {
    ensure_mode(signature, mode)?;
    Ok(signature.to_vec())
}

fn ensure_mode(signature: &AnySignature, mode: SignatureMode) -> Result<()> {
    if signature.mode() != mode {
        return Err(CodecError::FieldLengthMismatch {
            field: Field::PublicKey,
            expected: mode.public_key_len(),
            actual: signature.mode().public_key_len(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{fields::PublicKeyFragment, recovery::RecoveryId, signature::StandardSignature};

    fn standard() -> AnySignature {
        StandardSignature::new(
            RecoveryId::from_compact(1).unwrap(),
            [0x11; 32].into(),
            [0x22; 32].into(),
        )
        .into()
    }

    #[test]
    fn empty_input_is_invalid_length() {
        assert_eq!(
            decode("", SignatureMode::Standard),
            Err(CodecError::InvalidLength {
                mode: SignatureMode::Standard,
                expected: 65,
                actual: 0
            })
        );
    }

    #[test]
    fn non_hex_input_is_malformed() {
        let input = format!("zz{}", "00".repeat(64));
        assert!(matches!(
            decode(&input, SignatureMode::Standard),
            Err(CodecError::MalformedHex(_))
        ));

        assert!(matches!(
            decode("0x123", SignatureMode::Standard),
            Err(CodecError::MalformedHex(hex::FromHexError::OddLength))
        ));
    }

    #[test]
    fn encode_checks_mode() {
        let sig = standard();

        assert_eq!(
            encode(&sig, SignatureMode::RecoverableWithKey),
            Err(CodecError::FieldLengthMismatch {
                field: Field::PublicKey,
                expected: 64,
                actual: 0
            })
        );

        let AnySignature::Standard(inner) = sig else {
            unreachable!()
        };
        let keyed: AnySignature = inner
            .with_public_key(PublicKeyFragment::from([0x33; 64]))
            .into();
        assert_eq!(
            encode_bytes(&keyed, SignatureMode::Standard),
            Err(CodecError::FieldLengthMismatch {
                field: Field::PublicKey,
                expected: 0,
                actual: 64
            })
        );
    }

    #[test]
    fn legacy_wire_byte_round_trips() {
        let input = format!("1b{}{}", "11".repeat(32), "22".repeat(32));

        let sig = decode(&input, SignatureMode::Standard).unwrap();
        assert_eq!(sig.compact_v(), 27);
        assert_eq!(sig.legacy_v(), 54);
        assert_eq!(encode(&sig, SignatureMode::Standard), Ok(input));
    }

    #[test]
    fn encode_decode_bytes() {
        let sig = standard();
        let bytes = encode_bytes(&sig, SignatureMode::Standard).unwrap();

        assert_eq!(bytes.len(), 65);
        assert_eq!(bytes[0], 1);
        assert_eq!(decode_bytes(&bytes, SignatureMode::Standard), Ok(sig));
    }
}
