pub use crate::graphql::{
    GraphQlError, GraphQlRequest, GraphQlResponse, UPDATE_USER_MUTATION,
    USER_DETAILS,
};
pub use crate::users::{
    UpdateUserAck, UpdateUserRequest, UpdateUserResponse, UserDetailsResponse,
    UserDetailsVariables,
};
pub use userdesk_model::prelude::*;
