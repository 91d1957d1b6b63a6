use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct AccountPlanDto {
    pub index: u8,
    pub name: String,
    pub note_upload_count: u64,
    pub ai_generate_day: u64,
    pub ai_generate_chars: u64,
    pub image_upload_size: u64,
    pub pay: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlansDto {
    pub plans: Vec<AccountPlanDto>,
    /// Plan of the caller, absent when not logged in.
    pub active_index: Option<u8>,
}
