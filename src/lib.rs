//! Language switcher for documentation published on several sites
//!
//! Given the URL of a documentation page, work out which translations of the
//! same page exist at a compatible version and where they live, then render a
//! dropdown in the markup style of the host site.
//!
//! - [`version`]: version tokens and permissive comparison
//! - [`locale`]: the immutable table of supported locales
//! - [`page`]: version/section extraction from the current URL
//! - [`switcher`]: resolution, rendering and mounting
//! - [`config`]: JSON configuration and data directories
//! - [`logging`]: file-based tracing setup

pub mod config;
pub mod locale;
pub mod logging;
pub mod page;
pub mod switcher;
pub mod version;
