//! Module-owned authority addresses.
//!
//! Each plane has one authority account the interop module acts through.
//! The addresses are derived from fixed seed strings and computed once per
//! process, before first use. Seeds are protocol constants: changing one
//! changes every derived address and breaks byte-for-byte matching against
//! chain state.

use std::sync::LazyLock;

use fis_types::constants::{EVM_ADDRESS_LEN, SVM_PUBKEY_LEN};
use fis_types::plane::Plane;

const COSMOS_AUTHORITY_SEED: &[u8] = b"fis/authority/cosmos";
const EVM_AUTHORITY_SEED: &[u8] = b"fis/authority/evm";
const WASM_AUTHORITY_SEED: &[u8] = b"fis/authority/wasm";
const SVM_AUTHORITY_SEED: &[u8] = b"fis/authority/svm";

/// Native-ledger module account width.
const COSMOS_ADDRESS_LEN: usize = 20;
/// WASM contract account width.
const WASM_ADDRESS_LEN: usize = 32;

static COSMOS_AUTHORITY: LazyLock<Vec<u8>> =
    LazyLock::new(|| derive(COSMOS_AUTHORITY_SEED, COSMOS_ADDRESS_LEN));
static EVM_AUTHORITY: LazyLock<Vec<u8>> =
    LazyLock::new(|| derive(EVM_AUTHORITY_SEED, EVM_ADDRESS_LEN));
static WASM_AUTHORITY: LazyLock<Vec<u8>> =
    LazyLock::new(|| derive(WASM_AUTHORITY_SEED, WASM_ADDRESS_LEN));
static SVM_AUTHORITY: LazyLock<Vec<u8>> =
    LazyLock::new(|| derive(SVM_AUTHORITY_SEED, SVM_PUBKEY_LEN));

/// The module authority address for `plane`, in that plane's binary form.
pub fn plane_authority(plane: Plane) -> &'static [u8] {
    match plane {
        Plane::Cosmos => &COSMOS_AUTHORITY,
        Plane::Evm => &EVM_AUTHORITY,
        Plane::Wasm => &WASM_AUTHORITY,
        Plane::Svm => &SVM_AUTHORITY,
    }
}

/// Truncated BLAKE3 of the seed, at the plane's address width.
fn derive(seed: &[u8], len: usize) -> Vec<u8> {
    blake3::hash(seed).as_bytes()[..len].to_vec()
}
