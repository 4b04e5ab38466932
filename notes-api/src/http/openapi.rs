//! OpenAPI document and Swagger UI

use super::handlers;
use super::types::{CreateNoteRequest, ErrorResponse, HealthMessage, NoteResponse, UpdateNoteRequest};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Notes Backend API",
        version = "v1",
        description = "Create, list, fetch, update and delete short text notes"
    ),
    paths(
        handlers::create_note,
        handlers::list_notes,
        handlers::get_note,
        handlers::update_note,
        handlers::delete_note,
        handlers::root_health,
    ),
    components(schemas(
        CreateNoteRequest,
        UpdateNoteRequest,
        NoteResponse,
        HealthMessage,
        ErrorResponse
    )),
    tags(
        (name = "Notes", description = "Note lifecycle"),
        (name = "Health", description = "Liveness")
    )
)]
pub struct ApiDoc;

/// Swagger UI at `/docs`, backed by the document served at `/openapi.json`
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi())
}
