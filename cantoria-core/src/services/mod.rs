//! Business rules over the entity stores
//!
//! Each service owns one slice of behavior and is injected with the
//! repository traits it needs, so the rules never depend on how storage is
//! implemented:
//!
//! - `roster`: musician CRUD, with the referenced-delete guard
//! - `repertoire`: song CRUD, with the referenced-delete guard
//! - `ledger`: schedule CRUD plus assignment and song-list operations
//! - `agenda`: read-only derived views (upcoming/past, counts)
//!
//! The ledger and the delete guards are the only places two stores meet;
//! everything else is a thin validated pass-through.

pub mod agenda;
pub mod ledger;
pub mod repertoire;
pub mod roster;

pub use agenda::Agenda;
pub use ledger::Ledger;
pub use repertoire::Repertoire;
pub use roster::Roster;
