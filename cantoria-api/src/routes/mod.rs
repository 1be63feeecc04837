//! API route handlers
//!
//! Handlers are grouped by resource:
//!
//! - `health`: Service health check
//! - `auth`: Login, session echo, logout
//! - `musicians`: Roster CRUD
//! - `songs`: Repertoire CRUD
//! - `schedules`: Ledger CRUD plus assignment and song-list operations
//! - `stats`: Derived counts for the dashboard

pub mod auth;
pub mod health;
pub mod musicians;
pub mod schedules;
pub mod songs;
pub mod stats;
