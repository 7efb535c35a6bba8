//! HTTP Server Module
//!
//! Assembles the public route table and owns the service info endpoint.
//! The router is built by a factory function so the binary and the endpoint
//! tests drive exactly the same application.
//!
//! ## Routes
//! - `GET /` - welcome message and service identity
//! - `GET /search` - category + multi-ingredient fuzzy search
//! - `GET /list` - every recipe in dataset order
//! - `GET /random` - one randomly recommended recipe
//! - `GET /detail` - exact-name lookup

pub mod routes;
