pub mod document;
pub mod operation;
pub mod parameter;
pub mod security;

pub use document::{Components, Server, SpecDocument};
pub use operation::{Operation, OperationRef, PathItem};
pub use parameter::{ParameterKind, RequestParameter};
pub use security::{ApiKeyAuth, ApiKeyLocation, DeclaredAuth, SecurityScheme};
