use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use userdesk_contracts::{
    UpdateUserAck, UpdateUserRequest, UpdateUserResponse, UserDetailsResponse,
    UserDetailsVariables,
    graphql::{UPDATE_USER_MUTATION, USER_DETAILS},
};
use userdesk_model::{UserID, UserSnapshot};

use crate::infra::api_client::ApiClient;

#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Fetch one user's details. `Ok(None)` when the id has no record.
    async fn fetch_user(&self, id: &UserID) -> Result<Option<UserSnapshot>>;

    /// Dispatch a full update for one user
    async fn update_user(&self, req: UpdateUserRequest) -> Result<UpdateUserAck>;
}

#[derive(Clone, Debug)]
pub struct GraphQlUserDirectory {
    client: Arc<ApiClient>,
}

impl GraphQlUserDirectory {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserDirectory for GraphQlUserDirectory {
    async fn fetch_user(&self, id: &UserID) -> Result<Option<UserSnapshot>> {
        let data: UserDetailsResponse = self
            .client
            .execute(
                USER_DETAILS,
                "UserDetails",
                UserDetailsVariables { id: id.as_str() },
            )
            .await?;
        Ok(data.user)
    }

    async fn update_user(&self, req: UpdateUserRequest) -> Result<UpdateUserAck> {
        let data: UpdateUserResponse = self
            .client
            .execute(UPDATE_USER_MUTATION, "UpdateUser", &req)
            .await?;
        // The directory may acknowledge without echoing the id
        Ok(data.update_user.unwrap_or_default())
    }
}
