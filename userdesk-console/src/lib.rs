//! userdesk console library
//!
//! This crate contains the surfaces used by the `userdesk` executable in
//! `src/main.rs`: the application glue, the user update domain, and the
//! infrastructure adapters that talk to the user directory.
//!
//! Notes
//! - Public items are subject to change while the editor stabilizes.
//! - The library is exposed mainly to enable testing and internal reuse.

pub mod app;
pub mod common;
pub mod domains;
pub mod infra;
pub mod state;
pub mod subscriptions;
pub mod update;
pub mod view;
