//! Core domain types for the Scrawl notes service.
//!
//! This crate holds the `Note` entity and the two write payloads that travel
//! through the HTTP layer, together with their validation rules. It has no
//! knowledge of the web framework or the persistence backend; both depend on
//! this crate, never the other way around.

mod note;

pub use note::{Note, NoteDraft, NotePatch};
