//! Application layer
//!
//! Use cases that orchestrate the editor domain to implement the
//! operations exposed over HTTP.

pub mod editor;
