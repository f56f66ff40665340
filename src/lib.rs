//! billforge - browser-based invoice editor with live preview and PDF export.
//!
//! The crate is split into four layers:
//! - `domain`: the invoice document model, the pure computation engine and
//!   the editor session state machine
//! - `application`: one use case per editor operation
//! - `adapters`: the actix-web surface (handlers, routes, templates)
//! - `infrastructure`: configuration, the in-memory session store and the
//!   wkhtmltopdf export pipeline

pub mod adapters;
pub mod application;
pub mod domain;
pub mod infrastructure;
