pub mod assembler;
pub mod config;
pub mod display;
pub mod emitter;
pub mod error;
pub mod generate;
pub mod lang;
pub mod models;
pub mod naming;
pub mod report;

pub use config::GeneratorConfig;
pub use generate::{check, run};
pub use report::RunState;
