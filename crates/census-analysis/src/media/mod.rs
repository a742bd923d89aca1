//! Media/disk validator: stored media links versus the files in the year's folder.

pub mod check;
pub mod paths;

pub use check::{check_media, MediaCheckResult};
pub use paths::{default_directory_name, resolve_stored_path, MediaLayout};
