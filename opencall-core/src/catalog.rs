use serde::Serialize;

use crate::types::{OperationRef, SpecDocument};

/// One selectable operation, rendered for a host's option list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationEntry {
    /// Human-readable label: `"<METHOD> <path> - <summary-or-operationId>"`.
    pub name: String,
    /// Opaque selector the host hands back later, `method:path`.
    pub value: String,
}

/// Enumerate every (path, method) pair in the document's paths map, in
/// document path order.
pub fn list_operations(doc: &SpecDocument) -> Vec<OperationEntry> {
    let mut out = Vec::new();
    for (path, item) in &doc.paths {
        for (method, op) in item.operations() {
            let summary = op.summary.as_deref().filter(|s| !s.is_empty());
            let describe = summary.or(op.operation_id.as_deref()).unwrap_or_default();
            out.push(OperationEntry {
                name: format!("{} {} - {}", method.to_ascii_uppercase(), path, describe),
                value: OperationRef::new(method, path).selector(),
            });
        }
    }
    out
}
