pub mod config;
pub mod nav;
pub mod sources;
