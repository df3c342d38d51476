use std::path::PathBuf;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use log::{error, info};

use crate::controllers::{save_controller, system_controller, todo_controller};
use crate::services::{SaveService, TodoService};

/// Shared state handed to every handler.
pub struct AppState {
    pub todo_service: TodoService,
    pub save_service: SaveService,
}

const DEFAULT_WORKER_COUNT: usize = 4;

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.configure(todo_controller::config)
        .configure(save_controller::config)
        .configure(system_controller::config);
}

pub async fn run(data_dir: PathBuf, port: u16) -> Result<(), String> {
    info!("Starting todo web service...");

    let save_service = SaveService::new(data_dir);
    save_service
        .ensure_data_dir()
        .await
        .map_err(|e| format!("Failed to create data directory: {e}"))?;

    let app_state = web::Data::new(AppState {
        todo_service: TodoService::new(),
        save_service,
    });

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(Cors::permissive())
            .configure(app_config)
    })
    .workers(DEFAULT_WORKER_COUNT)
    .bind(format!("127.0.0.1:{port}"))
    .map_err(|e| format!("Failed to bind server: {e}"))?
    .run();

    info!("Todo web service listening on http://127.0.0.1:{port}");

    if let Err(e) = server.await {
        error!("Web server error: {}", e);
        return Err(format!("Web server error: {e}"));
    }

    Ok(())
}
