//! Output module
//!
//! Where printed titles go.
//!
//! # Overview
//!
//! The paginator never writes to stdout directly. It hands every title to a
//! [`TitleSink`]; the binary uses a [`LineSink`] over stdout, tests collect
//! into a `Vec<String>`.

mod writer;

pub use writer::{LineSink, TitleSink};
