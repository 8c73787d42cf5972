// ─── Address Widths ──────────────────────────────────────────────────────────

/// Length of a decoded EVM contract/account address in bytes.
pub const EVM_ADDRESS_LEN: usize = 20;

/// Length of a decoded SVM public key in bytes.
pub const SVM_PUBKEY_LEN: usize = 32;

// ─── Envelope Parameters ─────────────────────────────────────────────────────

/// Maximum number of instructions in a single transaction or query envelope.
pub const MAX_INSTRUCTIONS: usize = 64;

// ─── Wire Framing ────────────────────────────────────────────────────────────

/// Current message frame version.
pub const FRAME_VERSION: u8 = 1;
