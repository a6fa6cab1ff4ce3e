pub mod cli;
pub mod config;
pub mod editor;
pub mod error;
pub mod gemini;
pub mod photo;
pub mod render;
