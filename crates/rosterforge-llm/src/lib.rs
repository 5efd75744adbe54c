//! Generation-service boundary.
//!
//! Outbound natural-language prompts in, free text or JSON-structured
//! text out. Callers never see a parsing failure: structured requests
//! are retried a bounded number of times and then fall back to a
//! caller-supplied default.

pub mod client;
pub mod error;
pub mod parse;

pub use client::{OpenAiClient, TextGenerator};
pub use error::{LlmError, Result};
pub use parse::request_structured;
