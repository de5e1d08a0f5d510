//! Types shared by all configuration aggregates

pub mod code;

pub use code::{CodeSequence, DocumentCode, ParameterCode, CODE_WIDTH, DOCUMENT_PREFIX};
