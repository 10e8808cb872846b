// src/lib.rs
pub mod config;
pub mod errors;
pub mod normalize;
pub mod runner;
pub mod models;
pub mod banner;
pub mod api;
