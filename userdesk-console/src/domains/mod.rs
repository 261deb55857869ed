//! Domain modules for the console
//!
//! Each domain owns its messages, state and update handlers. The root
//! update routes `DomainMessage` variants here.

pub mod feedback;
pub mod user_update;
