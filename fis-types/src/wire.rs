use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::constants::FRAME_VERSION;
use crate::envelope::{FisQueryRequest, FisQueryResponse, FisTransaction, FisTransactionResponse};

/// Top-level interop message carried over the RPC channel.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub enum FisMessage {
    /// A batched transaction envelope.
    Transaction(FisTransaction),
    /// A batched read-only query.
    QueryRequest(FisQueryRequest),
    /// Positionally-correlated transaction results.
    TransactionResponse(FisTransactionResponse),
    /// Positionally-correlated query results.
    QueryResponse(FisQueryResponse),
}

impl FisMessage {
    /// Returns a stable discriminant byte for this message variant.
    /// Used by [`MessageFrame`] for forward-compatible type tagging.
    pub fn discriminant(&self) -> u8 {
        match self {
            FisMessage::Transaction(_) => 0,
            FisMessage::QueryRequest(_) => 1,
            FisMessage::TransactionResponse(_) => 2,
            FisMessage::QueryResponse(_) => 3,
        }
    }
}

/// Versioned frame for interop messages. Wraps borsh-encoded payloads so
/// that consumers can skip unknown `message_type` values instead of
/// failing the whole stream.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct MessageFrame {
    /// Frame version (currently 1).
    pub version: u8,
    /// Known message type discriminator. Corresponds to the `FisMessage`
    /// enum variant index.
    pub message_type: u8,
    /// Borsh-encoded inner message payload.
    pub payload: Vec<u8>,
}

impl MessageFrame {
    /// Wrap a `FisMessage` into a versioned frame.
    pub fn wrap(msg: &FisMessage) -> Result<Self, std::io::Error> {
        let message_type = msg.discriminant();
        let payload = borsh::to_vec(msg)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(Self {
            version: FRAME_VERSION,
            message_type,
            payload,
        })
    }

    /// Unwrap the frame back into a `FisMessage`.
    ///
    /// Returns `None` if the `message_type` is unknown or the payload does
    /// not decode (forward-compatible skip).
    pub fn unwrap_message(&self) -> Option<FisMessage> {
        if self.message_type > 3 {
            return None;
        }
        FisMessage::try_from_slice(&self.payload).ok()
    }
}
