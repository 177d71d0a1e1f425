pub mod envelope;
pub mod routes;
pub mod server;
pub mod service;

mod docs;
mod error;

pub use error::{Result, WebError};
pub use server::{router, start_server};
pub use service::{AppState, NoteService};
