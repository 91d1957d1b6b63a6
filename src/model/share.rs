use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

/// A published note as returned to clients.
///
/// `data` is the JSON-encoded note payload exactly as it was published.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShareNoteDto {
    pub id: String,
    pub user_id: String,
    pub local_id: String,
    pub data: String,
    pub click: i32,
    pub keeps: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Body of `POST /api/share`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CreateShareDto {
    /// The note to publish. Stored exactly as sent.
    #[serde(default)]
    #[schema(value_type = Option<NoteContentDto>)]
    pub data: Option<Value>,
}

/// A note as stored in the client's local database (`ContentItem`).
///
/// Documents the usual shape of `CreateShareDto::data`. Only `id` is read by the
/// server; the note is published verbatim, including fields not listed here.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct NoteContentDto {
    pub id: String,
    pub title: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub content: Option<Value>,
    pub tag: Option<String>,
    pub created_at: Option<f64>,
    pub updated_at: Option<f64>,
}

/// `?id=` query shared by the share endpoints.
#[derive(Deserialize, Clone, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ShareIdQuery {
    /// Local note id for lookups, share id for delete and keep.
    pub id: Option<String>,
}
