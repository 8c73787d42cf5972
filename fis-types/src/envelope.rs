use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::constants::MAX_INSTRUCTIONS;
use crate::error::FisError;
use crate::instruction::{Instruction, QueryInstruction};

/// A batched, ordered set of per-plane instructions submitted as one chain
/// transaction. Insertion order is the execution order; later instructions
/// may embed values produced by earlier ones (the caller substitutes before
/// submission, the envelope only preserves order).
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct FisTransaction {
    /// Human-readable sender account string. Instruction targets carry
    /// plane-encoded bytes; the envelope sender never does.
    pub sender: String,
    /// Instructions in execution order.
    pub instructions: Vec<Instruction>,
}

impl FisTransaction {
    /// Validate the batch bound and every instruction.
    pub fn validate(&self) -> Result<(), FisError> {
        if self.instructions.len() > MAX_INSTRUCTIONS {
            return Err(FisError::TooManyInstructions {
                count: self.instructions.len(),
                max: MAX_INSTRUCTIONS,
            });
        }
        for instruction in &self.instructions {
            instruction.validate()?;
        }
        Ok(())
    }
}

/// A batched, ordered set of read-only queries submitted as one request.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct FisQueryRequest {
    /// Query instructions in query order.
    pub instructions: Vec<QueryInstruction>,
}

impl FisQueryRequest {
    /// Validate the batch bound and every query instruction.
    pub fn validate(&self) -> Result<(), FisError> {
        if self.instructions.len() > MAX_INSTRUCTIONS {
            return Err(FisError::TooManyInstructions {
                count: self.instructions.len(),
                max: MAX_INSTRUCTIONS,
            });
        }
        for instruction in &self.instructions {
            instruction.validate()?;
        }
        Ok(())
    }
}

/// The result of one executed instruction.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct InstructionResponse {
    /// Opaque, action-specific output payload.
    pub output: Vec<u8>,
}

/// The result of one query instruction. Multi-valued, mirroring the
/// multi-value shape of [`QueryInstruction::input`].
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct QueryInstructionResponse {
    /// Ordered, action-specific output payloads.
    pub output: Vec<Vec<u8>>,
}

/// One result per submitted instruction, positionally aligned with the
/// request list. There are no instruction IDs: index i corresponds to
/// request index i, which is why callers must never reorder or deduplicate
/// instructions between construction and submission.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct FisTransactionResponse {
    pub responses: Vec<InstructionResponse>,
}

impl FisTransactionResponse {
    /// Pair each response with the instruction that produced it.
    ///
    /// A length mismatch means the caller has desynchronized from the
    /// execution backend and must treat the whole exchange as fatal.
    pub fn correlate<'a>(
        &'a self,
        request: &'a FisTransaction,
    ) -> Result<Vec<(&'a Instruction, &'a InstructionResponse)>, FisError> {
        if request.instructions.len() != self.responses.len() {
            return Err(FisError::ResponseCountMismatch {
                expected: request.instructions.len(),
                actual: self.responses.len(),
            });
        }
        Ok(request.instructions.iter().zip(self.responses.iter()).collect())
    }
}

/// One result per submitted query instruction, positionally aligned.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct FisQueryResponse {
    pub responses: Vec<QueryInstructionResponse>,
}

impl FisQueryResponse {
    /// Pair each response with the query instruction that produced it.
    /// Fails with [`FisError::ResponseCountMismatch`] on length inequality.
    pub fn correlate<'a>(
        &'a self,
        request: &'a FisQueryRequest,
    ) -> Result<Vec<(&'a QueryInstruction, &'a QueryInstructionResponse)>, FisError> {
        if request.instructions.len() != self.responses.len() {
            return Err(FisError::ResponseCountMismatch {
                expected: request.instructions.len(),
                actual: self.responses.len(),
            });
        }
        Ok(request.instructions.iter().zip(self.responses.iter()).collect())
    }
}
