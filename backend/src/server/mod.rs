//! Server construction and middleware wiring.

mod config;

pub use config::{ConfigError, ServerConfig};

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use tracing::{info, warn};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::example_data;
use crate::inbound::http::projects::{
    create_project, delete_project, get_all_projects, get_project, save_project,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::tasks::{create_task, delete_task, get_all_tasks, get_task, save_task};
use crate::middleware::RequestLog;
use crate::outbound::persistence::MemoryProjectRepository;

/// Register every API route.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(create_project)
        .service(get_all_projects)
        .service(get_project)
        .service(save_project)
        .service(delete_project)
        .service(create_task)
        .service(get_all_tasks)
        .service(get_task)
        .service(save_task)
        .service(delete_task);
}

/// Build the application state, optionally seed example data, and run the
/// HTTP server until shutdown.
pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    let repository = Arc::new(MemoryProjectRepository::new());
    let state = web::Data::new(HttpState::new(repository));

    if config.seed_example_data {
        if let Err(error) = example_data::seed_on_startup(&state.projects).await {
            warn!(%error, "example data seeding failed; starting with an empty store");
        }
    }

    info!(bind_addr = %config.bind_addr, "starting server");
    HttpServer::new(move || {
        let app = App::new()
            .app_data(state.clone())
            .wrap(RequestLog)
            .configure(configure_api);
        #[cfg(debug_assertions)]
        let app =
            app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
        app
    })
    .bind(config.bind_addr)?
    .run()
    .await
}
