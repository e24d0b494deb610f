pub mod types;
pub mod config;
pub mod inputs;
pub mod diag;
pub mod storage;
pub mod projects;
pub mod gate;
pub mod starfield;
pub mod scene;
pub mod engine;
pub mod render;

pub use engine::ProfileEngine;
pub use config::EngineConfig;
pub use types::*;
