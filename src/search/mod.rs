//! Search Service Module
//!
//! The core component responsible for answering recipe queries.
//!
//! ## Overview
//! Implements the two-stage filter behind `/search`: an exact-equality
//! category stage followed by a multi-keyword ingredient stage. Keywords
//! match by substring containment against individual ingredient entries
//! (so `飯` finds a recipe listing `白飯`), a recipe must satisfy every
//! keyword to be accepted, and each accepted recipe contributes one hit per
//! keyword to the fuzzy match counter reported alongside the results.
//!
//! ## Responsibilities
//! - **Filtering**: category equality and ingredient containment checks, in that order.
//! - **Tallying**: the fuzzy hit counter accumulated over accepted recipes.
//! - **API**: the `/search` endpoint handler and its response envelope.
//!
//! ## Submodules
//! - **`engine`**: the pure filter-and-tally function over the store.
//! - **`handlers`**: the HTTP request handler for the Axum web server.
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.

pub mod engine;
pub mod handlers;
pub mod types;
