//! # Cantoria Core Library
//!
//! This crate contains the domain model, storage abstractions, and business
//! rules shared by the Cantoria API server: a coordination service for a
//! church's volunteer musicians, their song repertoire, and dated event
//! schedules that assign musicians and songs.
//!
//! ## Module Organization
//!
//! - `models`: Domain entities and typed identifiers
//! - `store`: Repository traits and the in-memory stores
//! - `auth`: Seeded credentials, password hashing, session tokens, middleware
//! - `services`: Roster, repertoire, schedule ledger, and agenda views
//! - `seed`: Seed users and optional demo data
//! - `error`: Common error taxonomy

pub mod auth;
pub mod error;
pub mod models;
pub mod seed;
pub mod services;
pub mod store;

pub use error::Error;

/// Current version of the Cantoria core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
