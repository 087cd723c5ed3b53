//! Error handling and exit codes.

use arithseq_core::constants::exit_codes;
use arithseq_core::SequenceError;

/// Exit code for an engine error.
pub fn handle_error(err: &SequenceError) -> i32 {
    match err {
        SequenceError::InvalidArgument(_) => exit_codes::ERROR_INVALID_ARGUMENT,
    }
}

/// Exit code for any application error.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<SequenceError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}
