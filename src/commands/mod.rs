// src/commands/mod.rs
pub mod sort;
