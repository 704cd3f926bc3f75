//! Subcommand implementations. Each writes its result to the given writer
//! so the output can be captured.

pub mod article;
pub mod check;
pub mod init;
pub mod metadata;
pub mod sitemap;
