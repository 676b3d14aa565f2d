//! # hrml
//!
//! A parser for HRML, a small HTML-like markup language, together with a
//! query engine that resolves dotted tag paths to attribute values.
//!
//! See the [hrml module](hrml) for the processing pipeline.

pub mod hrml;
