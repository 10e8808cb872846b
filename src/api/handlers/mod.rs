// src/api/handlers/mod.rs
mod health;
mod execute;

pub use health::health_check;
pub use execute::{execute_submission, json_error_handler};
