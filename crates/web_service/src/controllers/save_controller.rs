use actix_web::{
    web::{self, Data, Json},
    HttpResponse,
};
use todo_core::models::{TodoSnapshot, DEFAULT_BACKGROUND_COLOR};

use crate::dto::{LoadRequest, LoadResponse, SaveRequest, SaveResponse};
use crate::error::Result;
use crate::server::AppState;

/// POST /save
///
/// A body carrying todos and/or backgroundColor is saved as shipped, so
/// clients may persist their own working copy; without one the live
/// server state is saved. Either way the live state is left untouched.
async fn save_todos(
    app_state: Data<AppState>,
    payload: Option<Json<SaveRequest>>,
) -> Result<HttpResponse> {
    let snapshot = match payload.map(Json::into_inner) {
        Some(body) if body.todos.is_some() || body.background_color.is_some() => TodoSnapshot {
            todos: body.todos.unwrap_or_default(),
            background_color: body
                .background_color
                .unwrap_or_else(|| DEFAULT_BACKGROUND_COLOR.to_string()),
        },
        _ => app_state.todo_service.snapshot().await,
    };

    let password = app_state.save_service.save(snapshot).await?;
    Ok(HttpResponse::Ok().json(SaveResponse {
        password,
        message: "Todo list saved successfully".to_string(),
    }))
}

/// POST /load
///
/// Replaces the live state with the loaded snapshot.
async fn load_todos(app_state: Data<AppState>, payload: Json<LoadRequest>) -> Result<HttpResponse> {
    let password = payload.password.as_deref().unwrap_or_default();
    let snapshot = app_state.save_service.load(password).await?;
    let snapshot = app_state.todo_service.restore(snapshot).await;

    Ok(HttpResponse::Ok().json(LoadResponse {
        todos: snapshot.todos,
        background_color: snapshot.background_color,
        message: "Todo list loaded successfully".to_string(),
    }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/save", web::post().to(save_todos))
        .route("/load", web::post().to(load_todos));
}
