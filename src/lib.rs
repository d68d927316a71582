pub mod config;
pub mod import;
pub mod meet;
pub mod output;
pub mod scoring;
