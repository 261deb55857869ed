//! Request and response shapes exchanged with the user directory.
//!
//! The directory speaks GraphQL over HTTP. This crate owns the query
//! documents, the generic envelope, and the typed payloads for the two
//! operations the editor performs: fetching one user's details and
//! dispatching an update for that user.
#![allow(missing_docs)]

pub mod graphql;
pub mod prelude;
pub mod users;

pub use graphql::{GraphQlError, GraphQlRequest, GraphQlResponse};
pub use users::{
    UpdateUserAck, UpdateUserRequest, UpdateUserResponse, UserDetailsResponse,
    UserDetailsVariables, avatar_data_url,
};
