//! Recipe Storage Module
//!
//! Holds the in-memory recipe collection and everything around its
//! lifecycle: loading the dataset at startup, exposing it read-only to the
//! handlers, and the simple whole-store queries (list, exact-name lookup,
//! random pick).
//!
//! ## Core Concepts
//! - **Load once**: the dataset is read a single time before the server
//!   accepts requests; a broken or empty dataset aborts startup.
//! - **Immutable after load**: `RecipeStore` is shared behind an `Arc` and
//!   never written to, so request handling needs no locks.
//! - **Order is meaning**: dataset order is preserved and defines the output
//!   order of listings and search results.
//!
//! ## Submodules
//! - **`loader`**: dataset parsing and validation (embedded or from disk).
//! - **`memory`**: the `RecipeStore` shared by all handlers.
//! - **`handlers`**: HTTP handlers for `/list`, `/random` and `/detail`.
//! - **`types`**: the `Recipe` record and response payloads.

pub mod handlers;
pub mod loader;
pub mod memory;
pub mod types;
