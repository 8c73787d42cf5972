//! Per-plane address string decoding.
//!
//! Decoded bytes are later matched byte-for-byte against on-chain
//! account/program identifiers, so nothing here normalizes, truncates, or
//! re-encodes — each plane's canonical alphabet and checksum scheme is
//! preserved exactly.

use std::sync::LazyLock;

use bech32::{Bech32, Hrp};

use fis_types::constants::{EVM_ADDRESS_LEN, SVM_PUBKEY_LEN};
use fis_types::error::FisError;
use fis_types::plane::Plane;

/// Human-readable part of native account addresses.
pub const ACCOUNT_HRP: &str = "lux";

static HRP: LazyLock<Hrp> = LazyLock::new(|| Hrp::parse(ACCOUNT_HRP).expect("hrp literal is valid"));

/// Decode a human-supplied address string into the binary representation
/// required by `plane`.
///
/// Malformed input on any plane yields a recoverable
/// [`FisError::InvalidAddress`] naming the plane and the offending string.
pub fn resolve_address(contract: &str, plane: Plane) -> Result<Vec<u8>, FisError> {
    match plane {
        Plane::Cosmos | Plane::Wasm => decode_bech32(contract, plane),
        Plane::Evm => decode_evm(contract),
        Plane::Svm => decode_svm(contract),
    }
}

/// Render plane-encoded address bytes back into the plane's canonical
/// string form. The inverse of [`resolve_address`] for tooling and logs.
pub fn encode_address(bytes: &[u8], plane: Plane) -> Result<String, FisError> {
    match plane {
        Plane::Cosmos | Plane::Wasm => {
            bech32::encode::<Bech32>(*HRP, bytes).map_err(|e| FisError::InvalidAddress {
                plane,
                input: hex::encode(bytes),
                reason: e.to_string(),
            })
        }
        Plane::Evm => Ok(format!("0x{}", hex::encode(bytes))),
        Plane::Svm => Ok(bs58::encode(bytes).into_string()),
    }
}

fn decode_bech32(contract: &str, plane: Plane) -> Result<Vec<u8>, FisError> {
    let (_hrp, bytes) = bech32::decode(contract).map_err(|e| FisError::InvalidAddress {
        plane,
        input: contract.to_string(),
        reason: e.to_string(),
    })?;
    Ok(bytes)
}

fn decode_evm(contract: &str) -> Result<Vec<u8>, FisError> {
    let stripped = contract.strip_prefix("0x").unwrap_or(contract);
    let bytes = hex::decode(stripped).map_err(|e| FisError::InvalidAddress {
        plane: Plane::Evm,
        input: contract.to_string(),
        reason: e.to_string(),
    })?;
    if bytes.len() != EVM_ADDRESS_LEN {
        return Err(FisError::InvalidAddress {
            plane: Plane::Evm,
            input: contract.to_string(),
            reason: format!("expected {} bytes, got {}", EVM_ADDRESS_LEN, bytes.len()),
        });
    }
    Ok(bytes)
}

fn decode_svm(contract: &str) -> Result<Vec<u8>, FisError> {
    let bytes = bs58::decode(contract)
        .into_vec()
        .map_err(|e| FisError::InvalidAddress {
            plane: Plane::Svm,
            input: contract.to_string(),
            reason: e.to_string(),
        })?;
    if bytes.len() != SVM_PUBKEY_LEN {
        return Err(FisError::InvalidAddress {
            plane: Plane::Svm,
            input: contract.to_string(),
            reason: format!("expected {} bytes, got {}", SVM_PUBKEY_LEN, bytes.len()),
        });
    }
    Ok(bytes)
}
