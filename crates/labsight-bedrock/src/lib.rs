//! labsight-bedrock
//!
//! Question answering through the Bedrock Converse API.

pub mod converse;
pub mod error;

pub use converse::{BedrockGenerator, DEFAULT_MODEL_ID};
