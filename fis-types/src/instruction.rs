use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::error::FisError;
use crate::plane::Plane;

/// A state-changing operation family. Every action executes on exactly one
/// plane; [`Action::plane`] is the authoritative mapping.
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
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Invoke a native-ledger message (e.g. a bank transfer).
    CosmosInvoke,
    /// Deploy EVM bytecode.
    EvmDeploy,
    /// Execute a call against a deployed EVM contract.
    EvmExecute,
    /// Execute a WASM contract.
    WasmExecute,
    /// Execute a pre-built SVM transaction (accounts are carried in the msg).
    SvmTransaction,
}

impl Action {
    /// The plane this action executes on.
    pub fn plane(&self) -> Plane {
        match self {
            Action::CosmosInvoke => Plane::Cosmos,
            Action::EvmDeploy | Action::EvmExecute => Plane::Evm,
            Action::WasmExecute => Plane::Wasm,
            Action::SvmTransaction => Plane::Svm,
        }
    }

    /// Whether the action targets a specific contract/account address.
    /// Plane-global actions carry an empty address instead.
    pub fn requires_address(&self) -> bool {
        match self {
            Action::EvmExecute | Action::WasmExecute => true,
            Action::CosmosInvoke | Action::EvmDeploy | Action::SvmTransaction => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::CosmosInvoke => "cosmos_invoke",
            Action::EvmDeploy => "evm_deploy",
            Action::EvmExecute => "evm_execute",
            Action::WasmExecute => "wasm_execute",
            Action::SvmTransaction => "svm_transaction",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A read path selector for query instructions.
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
#[serde(rename_all = "snake_case")]
pub enum QueryAction {
    /// Raw sub-query: input is an RPC path followed by a marshaled request.
    Raw,
    /// Key-value store read: input is a namespace followed by an encoded key.
    KvRead,
    /// Read events emitted at a given height/key.
    EventRead,
    /// Plane-native VM query (contract view call, account read).
    VmQuery,
    /// Balance read for the account in the address field.
    BalanceRead,
}

impl QueryAction {
    /// Minimum number of input payloads the action consumes. The meaning of
    /// each payload is action-specific and opaque to the envelope.
    pub fn min_inputs(&self) -> usize {
        match self {
            QueryAction::Raw | QueryAction::KvRead => 2,
            QueryAction::EventRead | QueryAction::VmQuery | QueryAction::BalanceRead => 1,
        }
    }

    /// Whether a plane exposes a read path for this action. KV reads exist
    /// only where a multistore does; VM queries only where a VM does.
    pub fn supported_on(&self, plane: Plane) -> bool {
        match self {
            QueryAction::Raw | QueryAction::EventRead | QueryAction::BalanceRead => true,
            QueryAction::KvRead => matches!(plane, Plane::Cosmos | Plane::Wasm),
            QueryAction::VmQuery => matches!(plane, Plane::Evm | Plane::Wasm | Plane::Svm),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryAction::Raw => "raw",
            QueryAction::KvRead => "kv_read",
            QueryAction::EventRead => "event_read",
            QueryAction::VmQuery => "vm_query",
            QueryAction::BalanceRead => "balance_read",
        }
    }
}

impl std::fmt::Display for QueryAction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One state-changing operation targeted at a specific plane.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct Instruction {
    /// The plane this instruction executes on.
    pub plane: Plane,
    /// The operation family.
    pub action: Action,
    /// Already-encoded binary contract/account address for the plane.
    /// Empty when the action is plane-global.
    pub address: Vec<u8>,
    /// Opaque, action-specific message payload.
    pub msg: Vec<u8>,
}

impl Instruction {
    /// Check plane/action agreement and address presence.
    ///
    /// The address bytes themselves are not inspected here — they were
    /// produced by the address codec and are matched byte-for-byte on-chain.
    pub fn validate(&self) -> Result<(), FisError> {
        if self.action.plane() != self.plane {
            return Err(FisError::ActionPlaneMismatch {
                action: self.action.to_string(),
                expected: self.action.plane(),
                actual: self.plane,
            });
        }
        if self.action.requires_address() && self.address.is_empty() {
            return Err(FisError::MissingAddress {
                action: self.action.to_string(),
            });
        }
        if !self.action.requires_address() && !self.address.is_empty() {
            return Err(FisError::UnexpectedAddress {
                action: self.action.to_string(),
            });
        }
        Ok(())
    }
}

/// One read-only operation targeted at a specific plane.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize)]
pub struct QueryInstruction {
    /// The plane this query reads from.
    pub plane: Plane,
    /// The read path.
    pub action: QueryAction,
    /// Already-encoded binary address, when the read targets an account.
    pub address: Vec<u8>,
    /// Ordered, action-specific input payloads.
    pub input: Vec<Vec<u8>>,
}

impl QueryInstruction {
    /// Check that the plane exposes the read path and the input arity holds.
    pub fn validate(&self) -> Result<(), FisError> {
        if !self.action.supported_on(self.plane) {
            return Err(FisError::UnsupportedPlane {
                plane: self.plane,
                action: self.action.to_string(),
            });
        }
        let required = self.action.min_inputs();
        if self.input.len() < required {
            return Err(FisError::NotEnoughInputs {
                action: self.action.to_string(),
                required,
                actual: self.input.len(),
            });
        }
        Ok(())
    }
}
