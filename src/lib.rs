//! Gigfolio Docs Library
//!
//! Content-serving backend for the Gigfolio documentation site. The
//! frontend owns layout and presentation; this crate owns locating topic
//! files, parsing them into renderable blocks, memoizing the results, and
//! exposing them over HTTP.
//!
//! # Modules
//!
//! - `content`: identifier resolution, memoizing store, navigation catalog
//! - `markup`: front-matter and markdown parsing into renderable blocks
//! - `routes`: HTTP API surface
//! - `config` / `state` / `error`: service plumbing

pub mod config;
pub mod content;
pub mod error;
pub mod markup;
pub mod routes;
pub mod state;
