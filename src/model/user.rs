use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UserDto {
    pub id: String,
    pub name: Option<String>,
    pub email: String,
    pub image: Option<String>,
    /// Plan index as a string (`"0"`, `"1"`, `"2"`).
    pub plan: String,
}

/// Body of `POST /api/users`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNicknameDto {
    pub user_id: String,
    pub user_name: String,
}
