// src/core/mod.rs
pub mod classifier;
pub mod profile;
pub mod scoring;
pub mod tokenizer;
pub mod types;
