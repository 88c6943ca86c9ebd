// File: src/core/mod.rs
pub mod active;
pub mod engine;
pub mod letters;
mod mood;
pub mod passive;
pub mod render;
pub mod root;
mod stem;
pub mod types;
pub mod vowels;
mod word;
