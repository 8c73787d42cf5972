use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

/// An execution/address environment addressable through the interop envelope.
///
/// The variant order fixes the borsh discriminants and is part of the wire
/// contract — never reorder.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    BorshSerialize,
    BorshDeserialize,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Plane {
    /// The native ledger (bank, staking, governance modules).
    Cosmos,
    /// The embedded Ethereum virtual machine.
    Evm,
    /// The embedded WASM virtual machine.
    Wasm,
    /// The embedded Solana virtual machine.
    Svm,
}

impl Plane {
    /// All planes, in wire order. Useful for exhaustive table tests.
    pub const ALL: [Plane; 4] = [Plane::Cosmos, Plane::Evm, Plane::Wasm, Plane::Svm];

    /// Short lowercase identifier (for CLI/config/log fields).
    pub fn as_str(&self) -> &'static str {
        match self {
            Plane::Cosmos => "cosmos",
            Plane::Evm => "evm",
            Plane::Wasm => "wasm",
            Plane::Svm => "svm",
        }
    }

    /// Parse from a string identifier.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "cosmos" => Some(Plane::Cosmos),
            "evm" => Some(Plane::Evm),
            "wasm" => Some(Plane::Wasm),
            "svm" => Some(Plane::Svm),
            _ => None,
        }
    }
}

impl std::fmt::Display for Plane {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        for plane in Plane::ALL {
            assert_eq!(Plane::parse(plane.as_str()), Some(plane));
        }
        assert_eq!(Plane::parse("solana"), None);
        assert_eq!(Plane::parse(""), None);
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(Plane::Svm.to_string(), "svm");
        assert_eq!(Plane::Cosmos.to_string(), "cosmos");
    }
}
