//! Local branch management
//!
//! - `info`: Branch and Head types, parsing of the typed branch listing
//! - `inspector`: Read-only queries (repository presence, other branches)
//! - `operator`: Checkout and best-effort delete

mod info;
mod inspector;
mod operator;

pub use info::{Branch, Head};
pub(crate) use info::{parse_branch_records, BRANCH_FORMAT};
pub use inspector::Inspector;
pub use operator::{DeleteFailure, DeleteReport, Operator};
