//! Supported documentation locales

pub mod table;
pub mod types;

pub use table::LocaleTable;
pub use types::{DropdownStyle, LocaleDescriptor, MountPoint};
