//! Persistence sinks for synthesized rosters.
//!
//! Two destinations share one row serialization: a relational store
//! using the external simulation schema (tri-state booleans, one
//! transaction per entity group) and a workbook of CSV sheets (native
//! booleans, append-only across runs). Both double as identifier
//! sources for the allocator.

pub mod error;
pub mod relational;
pub mod rows;
pub mod workbook;
pub mod writer;

pub use error::{Result, SinkError};
pub use relational::SqliteSink;
pub use workbook::WorkbookSink;
pub use writer::{CommitReport, DualSinkWriter, RecordSink, SinkFailure};
