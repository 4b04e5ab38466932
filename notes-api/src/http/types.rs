//! Request/Response types for the notes API

use chrono::{DateTime, Utc};
use notes_core::core_notes::{Note, NoteInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// ============================================================================
// Note Types
// ============================================================================

/// Body of `POST /api/notes`
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateNoteRequest {
    /// Note title, 1 to 256 characters after trimming
    pub title: Option<String>,
    /// Note body; omitted or null means empty
    pub content: Option<String>,
}

/// Body of `PUT /api/notes/{id}`; replaces title and content
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateNoteRequest {
    /// Note title, 1 to 256 characters after trimming
    pub title: Option<String>,
    /// Note body; omitted or null clears it
    pub content: Option<String>,
}

// A missing or null title becomes an empty one, which validation rejects as blank.
impl From<CreateNoteRequest> for NoteInput {
    fn from(req: CreateNoteRequest) -> Self {
        NoteInput::new(req.title.unwrap_or_default(), req.content)
    }
}

impl From<UpdateNoteRequest> for NoteInput {
    fn from(req: UpdateNoteRequest) -> Self {
        NoteInput::new(req.title.unwrap_or_default(), req.content)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NoteResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: *note.id.as_uuid(),
            title: note.title,
            content: note.content,
            created_at: note.created_at,
            updated_at: note.updated_at,
        }
    }
}

// ============================================================================
// Misc Types
// ============================================================================

/// Body of `GET /`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthMessage {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    /// Offending request field, for validation failures
    pub field: Option<String>,
    pub details: Option<String>,
}
