//! Recipe Query Service Library
//!
//! This library crate defines the core modules of the recipe query API.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The service is composed of three loosely coupled subsystems:
//!
//! - **`search`**: The query logic. Implements the two-stage category +
//!   multi-ingredient fuzzy search and its response envelope.
//! - **`server`**: The HTTP surface. Assembles the axum route table and owns
//!   the service info endpoint.
//! - **`storage`**: The data layer. Loads the recipe dataset at startup and
//!   holds it in an immutable, ordered in-memory store shared by every
//!   handler.

pub mod search;
pub mod server;
pub mod storage;
