// src/core/mod.rs

pub mod sounds;
pub mod table;
pub mod types;
