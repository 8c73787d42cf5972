//! Address codecs for the Flux Interop System.
//!
//! Converts human-supplied address strings into the binary representation a
//! target plane expects (bech32, hex, or base58), and derives the
//! process-wide module authority addresses from fixed seeds.

pub mod address;
pub mod authority;
