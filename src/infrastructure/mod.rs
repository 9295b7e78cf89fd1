pub mod api;
pub mod bootstrap;
pub mod config;
pub mod csv;
pub mod stats;
