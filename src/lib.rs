pub mod config;
pub mod launch;
pub mod overlay;
pub mod shell;
pub mod surface;
mod telemetry;

pub use telemetry::init_tracing;
