use thiserror::Error;

use crate::plane::Plane;

/// All error codes for the interop envelope, address codec, and template
/// scanner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FisError {
    // ─── Address Encoding Errors ─────────────────────────────────────────────
    #[error("invalid {plane} address '{input}': {reason}")]
    InvalidAddress {
        plane: Plane,
        input: String,
        reason: String,
    },

    #[error("plane {plane} does not support {action}")]
    UnsupportedPlane { plane: Plane, action: String },

    // ─── Template Validation Errors ──────────────────────────────────────────
    #[error("invalid template variable '${{{fragment}}}': {reason}")]
    InvalidTemplateVariable { fragment: String, reason: String },

    #[error("unbound template variable: {name}")]
    UnboundTemplateVariable { name: String },

    // ─── Instruction Validation Errors ───────────────────────────────────────
    #[error("action {action} targets plane {expected}, not {actual}")]
    ActionPlaneMismatch {
        action: String,
        expected: Plane,
        actual: Plane,
    },

    #[error("action {action} requires a target address")]
    MissingAddress { action: String },

    #[error("action {action} is plane-global and must not carry a target address")]
    UnexpectedAddress { action: String },

    #[error("query action {action} expects at least {required} inputs, got {actual}")]
    NotEnoughInputs {
        action: String,
        required: usize,
        actual: usize,
    },

    #[error("too many instructions: {count} > {max}")]
    TooManyInstructions { count: usize, max: usize },

    // ─── Protocol Shape Errors ───────────────────────────────────────────────
    #[error("response count mismatch: expected {expected}, got {actual}")]
    ResponseCountMismatch { expected: usize, actual: usize },
}
