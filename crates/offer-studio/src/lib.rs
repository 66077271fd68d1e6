pub mod batch;
pub mod config;
pub mod error;
pub mod offers;
pub mod targeting;
pub mod telemetry;
