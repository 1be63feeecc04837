//! # Cantoria API Server Library
//!
//! HTTP surface for the Cantoria musician coordination service: a JSON REST
//! API over the in-memory registries in `cantoria-core`.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `routes`: API route handlers

pub mod app;
pub mod config;
pub mod error;
pub mod routes;
