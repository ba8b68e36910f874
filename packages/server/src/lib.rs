//! Application boundary for the research pipeline: configuration,
//! provider wiring, and the health surface.

pub mod config;
pub mod factory;
pub mod routes;

pub use config::Config;
pub use factory::build_pipeline;
