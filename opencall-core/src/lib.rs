#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod parser;
pub mod types;

pub use crate::catalog::{list_operations, OperationEntry};
pub use crate::error::{ParseError, SelectorError};
pub use crate::parser::{detect_format, parse_document_str, DocumentFormat};
pub use crate::types::SpecDocument;
