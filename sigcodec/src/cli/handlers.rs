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

//! Command handlers for the sigcodec CLI.
//!
//! These handlers execute the commands and return structured results.
//! They don't print directly, allowing integrators to customize output formatting.

use super::commands::SigCodecCommands;
use crate::{
    codec,
    error::Convention,
    fields::{PublicKeyFragment, SCALAR_SIZE, Scalar},
    mode::SignatureMode,
    recovery::RecoveryId,
    signature::{AnySignature, KeyedSignature, StandardSignature, strip_hex_prefix},
};
use anyhow::{Context, Result};
use serde::Serialize;

/// Result of decoding a signature.
#[derive(Debug, Clone, Serialize)]
pub struct DecodeResult {
    pub mode: SignatureMode,
    /// Recovery byte in the legacy (`+27`) convention.
    pub v: u8,
    /// Recovery byte as found on the wire.
    pub compact_v: u8,
    pub r: String,
    pub s: String,
    pub public_key: Option<String>,
}

/// Result of encoding a signature.
#[derive(Debug, Clone, Serialize)]
pub struct EncodeResult {
    pub mode: SignatureMode,
    pub signature: String,
}

/// Result of a recovery byte conversion.
#[derive(Debug, Clone, Serialize)]
pub struct RecoveryResult {
    pub input: u8,
    pub convention: Convention,
    pub value: u8,
}

/// Result of any sigcodec command.
#[derive(Debug, Clone, Serialize)]
pub enum CommandResult {
    Decode(DecodeResult),
    Encode(EncodeResult),
    Recovery(RecoveryResult),
}

/// Execute a sigcodec command.
pub fn execute_command(command: SigCodecCommands) -> Result<CommandResult> {
    match command {
        SigCodecCommands::Decode { signature, mode } => {
            decode_command(&signature, mode).map(CommandResult::Decode)
        }
        SigCodecCommands::Encode {
            recovery,
            legacy,
            r,
            s,
            public_key,
            mode,
        } => encode_command(recovery, legacy, &r, &s, public_key.as_deref(), mode)
            .map(CommandResult::Encode),
        SigCodecCommands::Recovery { value, to } => {
            recovery_command(value, to).map(CommandResult::Recovery)
        }
    }
}

fn decode_command(signature: &str, mode: SignatureMode) -> Result<DecodeResult> {
    tracing::debug!(%mode, len = signature.len(), "Decoding signature");

    let signature = codec::decode(signature, mode).context("Failed to decode signature")?;

    Ok(DecodeResult {
        mode,
        v: signature.legacy_v(),
        compact_v: signature.compact_v(),
        r: signature.r().to_string(),
        s: signature.s().to_string(),
        public_key: signature.public_key_fragment().map(ToString::to_string),
    })
}

fn encode_command(
    recovery: u8,
    legacy: bool,
    r: &str,
    s: &str,
    public_key: Option<&str>,
    mode: SignatureMode,
) -> Result<EncodeResult> {
    let convention = if legacy {
        Convention::Legacy
    } else {
        Convention::Compact
    };
    let recovery_id = RecoveryId::from_convention(recovery, convention)?;
    let r = scalar_from_hex(r, "r")?;
    let s = scalar_from_hex(s, "s")?;

    tracing::debug!(%mode, %recovery_id, %convention, "Encoding signature");

    let signature = StandardSignature::new(recovery_id, r, s);
    let signature: AnySignature = match public_key {
        Some(public_key) => keyed(signature, public_key)?.into(),
        None => signature.into(),
    };

    let signature = codec::encode(&signature, mode).context("Failed to encode signature")?;

    Ok(EncodeResult { mode, signature })
}

fn recovery_command(value: u8, to: Convention) -> Result<RecoveryResult> {
    // Wire bytes convert like `decode` reports them; legacy input must be 27..=30.
    let recovery_id = match to {
        Convention::Compact => RecoveryId::from_legacy(value)?,
        Convention::Legacy => RecoveryId::from_wire(value),
    };

    Ok(RecoveryResult {
        input: value,
        convention: to,
        value: recovery_id.to_convention(to),
    })
}

fn keyed(signature: StandardSignature, public_key: &str) -> Result<KeyedSignature> {
    let bytes = decode_hex(public_key, "public key")?;
    let public_key = PublicKeyFragment::from_sec1_uncompressed(&bytes).with_context(|| {
        format!(
            "Invalid public key length: expected 64 or 65 bytes, got {}",
            bytes.len()
        )
    })?;

    Ok(signature.with_public_key(public_key))
}

fn scalar_from_hex(hex_str: &str, label: &str) -> Result<Scalar> {
    let bytes = decode_hex(hex_str, label)?;
    Scalar::from_be_slice_padded(&bytes)
        .with_context(|| format!("{label} does not fit into {SCALAR_SIZE} bytes"))
}

fn decode_hex(hex_str: &str, label: &str) -> Result<Vec<u8>> {
    hex::decode(strip_hex_prefix(hex_str)).with_context(|| format!("Invalid {label} hex"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_reports_both_conventions() {
        let input = format!("01{}{}", "11".repeat(32), "22".repeat(32));

        let result = decode_command(&input, SignatureMode::Standard).unwrap();
        assert_eq!(result.v, 28);
        assert_eq!(result.compact_v, 1);
        assert_eq!(result.r, "11".repeat(32));
        assert!(result.public_key.is_none());
    }

    #[test]
    fn encode_pads_short_scalars() {
        let result =
            encode_command(27, true, "0x01", "02", None, SignatureMode::Standard).unwrap();

        let expected = format!(
            "00{}01{}02",
            "00".repeat(31),
            "00".repeat(31)
        );
        assert_eq!(result.signature, expected);
    }

    #[test]
    fn encode_with_tagged_public_key() {
        let key = format!("04{}", "ab".repeat(64));

        let result = encode_command(
            1,
            false,
            &"11".repeat(32),
            &"22".repeat(32),
            Some(key.as_str()),
            SignatureMode::RecoverableWithKey,
        )
        .unwrap();

        assert_eq!(result.signature.len(), 258);
        assert!(result.signature.ends_with(&"ab".repeat(64)));
    }

    #[test]
    fn encode_rejects_key_in_standard_mode() {
        let err = encode_command(
            0,
            false,
            "11",
            "22",
            Some("ab".repeat(64).as_str()),
            SignatureMode::Standard,
        )
        .unwrap_err();

        assert!(format!("{err:#}").contains("invalid public key length"));
    }

    #[test]
    fn recovery_conversion() {
        let result = recovery_command(28, Convention::Compact).unwrap();
        assert_eq!(result.value, 1);

        let result = recovery_command(2, Convention::Legacy).unwrap();
        assert_eq!(result.value, 29);

        assert!(recovery_command(2, Convention::Compact).is_err());
        assert!(recovery_command(31, Convention::Compact).is_err());
    }

    #[test]
    fn recovery_to_legacy_takes_any_wire_byte() {
        let result = recovery_command(27, Convention::Legacy).unwrap();
        assert_eq!(result.value, 54);

        let result = recovery_command(u8::MAX, Convention::Legacy).unwrap();
        assert_eq!(result.value, 26);
    }

    #[test]
    fn decode_keeps_legacy_wire_byte() {
        let input = format!("1b{}{}", "11".repeat(32), "22".repeat(32));

        let result = decode_command(&input, SignatureMode::Standard).unwrap();
        assert_eq!(result.compact_v, 27);
        assert_eq!(result.v, 54);
    }
}
