//! Version tokens and their ordering
//!
//! - [`token`]: the `Literal | Latest` token parsed from URLs and config
//! - [`compare`]: permissive dotted-numeric comparison
//! - [`error`]: token parsing errors

pub mod compare;
pub mod error;
pub mod token;

pub use compare::compare_versions;
pub use error::VersionError;
pub use token::{LATEST_ALIAS, VersionToken};
