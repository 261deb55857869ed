use serde::{Deserialize, Serialize};

pub const USER_DETAILS: &str = r#"query UserDetails($id: ID!) {
  user(id: $id) {
    image
    firstName
    lastName
    email
    role
    appLanguageCode
    userType
    pluginCreationAllowed
    adminApproved
    createdAt
    adminFor { _id }
    createdOrganizations { _id name }
    joinedOrganizations { _id name }
    organizationUserBelongsTo { _id name }
    organizationsBlockedBy { _id name }
    createdEvents { _id title }
    registeredEvents { _id title }
    eventAdmin { _id title }
    membershipRequests { _id }
  }
}"#;

pub const UPDATE_USER_MUTATION: &str = r#"mutation UpdateUser(
  $id: ID!
  $firstName: String!
  $lastName: String!
  $email: EmailAddress!
  $role: UserType!
  $appLanguageCode: String!
  $file: String
) {
  updateUser(
    id: $id
    data: {
      firstName: $firstName
      lastName: $lastName
      email: $email
      role: $role
      appLanguageCode: $appLanguageCode
    }
    file: $file
  ) {
    _id
  }
}"#;

/// Body of a GraphQL-over-HTTP POST.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest<'a, V> {
    pub query: &'a str,
    pub operation_name: &'a str,
    pub variables: V,
}

impl<'a, V: Serialize> GraphQlRequest<'a, V> {
    pub fn new(query: &'a str, operation_name: &'a str, variables: V) -> Self {
        Self {
            query,
            operation_name,
            variables,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    #[serde(default)]
    pub path: Vec<serde_json::Value>,
}

impl std::fmt::Display for GraphQlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            let path: Vec<String> =
                self.path.iter().map(|segment| segment.to_string()).collect();
            write!(f, "{} (at {})", self.message, path.join("."))
        }
    }
}

/// Standard GraphQL response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

impl<T> GraphQlResponse<T> {
    /// Split the envelope: any reported error wins over partial data.
    pub fn into_result(self) -> Result<Option<T>, Vec<GraphQlError>> {
        if self.errors.is_empty() {
            Ok(self.data)
        } else {
            Err(self.errors)
        }
    }
}
