pub mod constants;
pub mod envelope;
pub mod error;
pub mod instruction;
pub mod plane;
pub mod template;
pub mod wire;
