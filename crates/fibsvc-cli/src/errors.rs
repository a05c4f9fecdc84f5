//! Error handling and exit codes.

use fibsvc_core::constants::exit_codes;
use fibsvc_core::FibError;

/// Map a command failure to the process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<FibError>() {
        Some(FibError::Store(_)) => exit_codes::ERROR_STORE,
        _ => exit_codes::ERROR_GENERIC,
    }
}
