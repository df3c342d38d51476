use actix_web::{
    web::{self, Data, Json, Path},
    HttpResponse,
};
use uuid::Uuid;

use crate::dto::{
    BackgroundColorResponse, CreateTodoRequest, UpdateColorRequest, UpdateTodoRequest,
};
use crate::error::{AppError, Result};
use crate::server::AppState;

/// GET /todos
/// Current list and background color
async fn list_todos(app_state: Data<AppState>) -> Result<HttpResponse> {
    let snapshot = app_state.todo_service.snapshot().await;
    Ok(HttpResponse::Ok().json(snapshot))
}

/// POST /todos
/// Append a new todo item
async fn create_todo(
    app_state: Data<AppState>,
    payload: Json<CreateTodoRequest>,
) -> Result<HttpResponse> {
    let text = payload.text.as_deref().unwrap_or_default();
    let item = app_state.todo_service.add(text).await?;
    Ok(HttpResponse::Created().json(item))
}

/// PUT /todos/{id}
/// Set the completed flag of one item
async fn update_todo(
    app_state: Data<AppState>,
    path: Path<String>,
    payload: Json<UpdateTodoRequest>,
) -> Result<HttpResponse> {
    let id = parse_todo_id(&path)?;
    let item = app_state
        .todo_service
        .set_completed(id, payload.completed)
        .await?;
    Ok(HttpResponse::Ok().json(item))
}

/// DELETE /todos/{id}
/// Remove one item and return it
async fn delete_todo(app_state: Data<AppState>, path: Path<String>) -> Result<HttpResponse> {
    let id = parse_todo_id(&path)?;
    let item = app_state.todo_service.remove(id).await?;
    Ok(HttpResponse::Ok().json(item))
}

/// PUT /background-color
/// Replace the background color preference
async fn update_background_color(
    app_state: Data<AppState>,
    payload: Json<UpdateColorRequest>,
) -> Result<HttpResponse> {
    let color = payload.color.as_deref().unwrap_or_default();
    let background_color = app_state.todo_service.set_color(color).await?;
    Ok(HttpResponse::Ok().json(BackgroundColorResponse { background_color }))
}

// Identifiers are opaque tokens; anything that is not a well-formed UUID
// can never name an item.
fn parse_todo_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound(format!("Todo item '{raw}' not found")))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/todos", web::get().to(list_todos))
        .route("/todos", web::post().to(create_todo))
        .route("/todos/{id}", web::put().to(update_todo))
        .route("/todos/{id}", web::delete().to(delete_todo))
        .route("/background-color", web::put().to(update_background_color));
}
