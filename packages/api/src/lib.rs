//! # API crate — client-side data access for Meu Pet Club
//!
//! Everything the frontends need to talk to the remote Meu Pet Club REST API
//! lives here. The crate is framework-free: it compiles for the browser
//! (wasm32) and natively, so the whole layer is testable with plain
//! `cargo test`.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`] — typed operations over the fixed REST origin, bearer-token injection |
//! | [`error`] | [`ApiError`] — network / HTTP-status / credential failure taxonomy |
//! | [`models`] | Wire types: [`Pet`], [`Owner`], [`User`], [`Role`], drafts and the session record |
//! | [`session`] | Durable [`SessionRecord`] storage: `localStorage` in the browser, a data-dir file natively |
//!
//! The server itself is an external collaborator reached only over HTTP; it
//! enforces authentication, authorization and email uniqueness, and assigns
//! identifiers and timestamps.

pub mod client;
pub mod error;
pub mod models;
pub mod session;

pub use client::{ApiClient, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use models::{NewUser, Owner, OwnerSummary, Pet, PetDraft, Role, SessionRecord, User};
