//! Teach-Spark: classroom video feedback for teachers.
//!
//! Collects a teacher's classroom profile, resolves a transcript for a
//! submitted YouTube video, and asks an LLM for structured pedagogical
//! feedback. Every provider-facing step degrades to fixed sample data
//! instead of failing, so the pipeline always produces a renderable result.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod server;

pub use config::Config;
pub use error::{Error, Result};
