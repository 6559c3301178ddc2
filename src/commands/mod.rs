pub mod format;
pub mod repair;
pub mod resolve;

pub use format::{exit_code_for_error, run_format};
pub use repair::{NO_FILES_MESSAGE, Outcome, check_and_repair};
pub use resolve::{CandidateSet, Mode, resolve_explicit, resolve_full_scan};
