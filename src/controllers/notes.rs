//! Notes REST API — list, create, delete.

use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::{web, HttpRequest, HttpResponse, Responder};

use crate::models::CreateNoteRequest;
use crate::AppState;

/// Fetch all notes, newest first.
async fn list_notes(state: web::Data<AppState>) -> impl Responder {
    match state.db.list_notes() {
        Ok(notes) => HttpResponse::Ok().json(notes),
        Err(e) => {
            log::error!("Failed to list notes: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "message": format!("Error fetching notes: {}", e)
            }))
        }
    }
}

/// Add a new note.
async fn add_note(
    state: web::Data<AppState>,
    body: web::Json<CreateNoteRequest>,
) -> impl Responder {
    let request = body.into_inner();

    // Presence-only check: empty strings are accepted on purpose.
    let (title, content) = match (request.title, request.content) {
        (Some(title), Some(content)) => (title, content),
        _ => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "message": "Title and content are required!"
            }));
        }
    };

    match state.db.create_note(&title, &content) {
        Ok(note) => HttpResponse::Created().json(note),
        Err(e) => {
            log::error!("Failed to add note: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "message": format!("Error adding note: {}", e)
            }))
        }
    }
}

/// Delete a note by its id.
async fn delete_note(state: web::Data<AppState>, path: web::Path<i64>) -> impl Responder {
    let note_id = path.into_inner();

    match state.db.delete_note(note_id) {
        Ok(true) => HttpResponse::Ok().json(serde_json::json!({
            "message": "Note deleted successfully!"
        })),
        Ok(false) => HttpResponse::NotFound().json(serde_json::json!({
            "message": "Note not found!"
        })),
        Err(e) => {
            log::error!("Failed to delete note {}: {}", note_id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "message": format!("Error deleting note: {}", e)
            }))
        }
    }
}

/// Malformed or wrong-typed JSON bodies get the same `{"message": ...}` shape
/// as every other error response.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = err.to_string();
    InternalError::from_response(
        err,
        HttpResponse::BadRequest().json(serde_json::json!({ "message": message })),
    )
    .into()
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/notes")
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .route("", web::get().to(list_notes))
            .route("", web::post().to(add_note))
            .route("/{id}", web::delete().to(delete_note)),
    );
}
