use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize, Serializer};
use userdesk_model::{
    AvatarFile, DraftError, LanguageCode, UserDraft, UserID, UserRole,
    UserSnapshot,
};

#[derive(Debug, Clone, Serialize)]
pub struct UserDetailsVariables<'a> {
    pub id: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserDetailsResponse {
    pub user: Option<UserSnapshot>,
}

/// Full update for one user. Always carries every editable field, never a
/// diff against the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub id: UserID,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: UserRole,
    pub app_language_code: LanguageCode,
    #[serde(
        rename = "file",
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_avatar"
    )]
    pub avatar: Option<AvatarFile>,
}

impl UpdateUserRequest {
    pub fn from_draft(draft: &UserDraft) -> Result<Self, DraftError> {
        let (role, language) = draft.required_choices()?;
        Ok(Self {
            id: draft.id().clone(),
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            email: draft.email.clone(),
            role,
            app_language_code: language.clone(),
            avatar: draft.avatar.clone(),
        })
    }
}

/// Encode a staged avatar the way the directory expects uploads: a base64
/// data URL carrying the declared media type.
pub fn avatar_data_url(avatar: &AvatarFile) -> String {
    format!(
        "data:{};base64,{}",
        avatar.media_type(),
        STANDARD.encode(avatar.bytes())
    )
}

fn serialize_avatar<S>(
    avatar: &Option<AvatarFile>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match avatar {
        Some(file) => serializer.serialize_some(&avatar_data_url(file)),
        None => serializer.serialize_none(),
    }
}

/// Opaque acknowledgment of an accepted update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateUserAck {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserResponse {
    #[serde(rename = "updateUser")]
    pub update_user: Option<UpdateUserAck>,
}
