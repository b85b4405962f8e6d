pub mod call;
pub mod operations;

use opencall_exec::CallError;

use crate::exit_codes;

pub(crate) fn exit_code_for(e: &CallError) -> i32 {
    match e {
        CallError::Validation(_) | CallError::Configuration(_) => exit_codes::VALIDATION_FAILED,
        CallError::Request(_) => exit_codes::CALL_FAILED,
        _ => exit_codes::RUNTIME_ERROR,
    }
}
