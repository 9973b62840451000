// src/lib.rs
pub mod cli;
pub mod commands;
pub mod errors;
pub mod fmt;
pub mod frontend;
pub mod transform;
