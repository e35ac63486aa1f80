pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::user;

use crate::api::openapi::ApiDoc;
use crate::config::AppConfig;
use crate::user::adapter::outgoing::jwt::JwtTokenService;
use crate::user::adapter::outgoing::security::password_hasher_from_config;
use crate::user::adapter::outgoing::user_query_postgres::UserQueryPostgres;
use crate::user::adapter::outgoing::user_repository_postgres::UserRepositoryPostgres;
use crate::user::application::ports::outgoing::TokenProvider;
use crate::user::application::services::{
    FetchUserService, LoginUserService, RegisterUserService, UpdateUserService,
};
use crate::user::application::use_cases::{
    fetch_user::FetchUserUseCase, login_user::LoginUserUseCase,
    register_user::RegisterUserUseCase, update_user::UpdateUserUseCase,
};

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_user_use_case: Arc<dyn RegisterUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn LoginUserUseCase + Send + Sync>,
    pub update_user_use_case: Arc<dyn UpdateUserUseCase + Send + Sync>,
    pub fetch_user_use_case: Arc<dyn FetchUserUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let environment = config::load_dotenv();

    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Invalid configuration");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    info!(
        app = %config.server.app_name,
        environment = %environment,
        bcrypt_cost = config.hasher.bcrypt_cost,
        "Starting application..."
    );

    let mut opt = ConnectOptions::new(config.database.url.clone());
    opt.max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect_timeout(config.database.connect_timeout)
        .acquire_timeout(config.database.connect_timeout)
        .idle_timeout(config.database.idle_timeout)
        .max_lifetime(config.database.max_lifetime)
        .sqlx_logging(false);

    let conn = Database::connect(opt).await.map_err(|e| {
        error!(error = %e, "Failed to connect to database");
        std::io::Error::new(std::io::ErrorKind::ConnectionRefused, e.to_string())
    })?;
    let db_arc = Arc::new(conn);

    let user_query = UserQueryPostgres::new(Arc::clone(&db_arc));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let password_hasher = password_hasher_from_config(&config.hasher);
    let token_provider: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(config.jwt.clone()));

    let state = AppState {
        register_user_use_case: Arc::new(RegisterUserService::new(
            user_query.clone(),
            user_repo.clone(),
            Arc::clone(&password_hasher),
        )),
        login_user_use_case: Arc::new(LoginUserService::new(
            user_query.clone(),
            Arc::clone(&password_hasher),
            Arc::clone(&token_provider),
        )),
        update_user_use_case: Arc::new(UpdateUserService::new(
            user_query.clone(),
            user_repo,
            password_hasher,
        )),
        fetch_user_use_case: Arc::new(FetchUserService::new(user_query)),
    };

    let server_url = config.server.bind_address();
    info!(address = %server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(shared::api::custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

/// `/api/auth/user` must be registered ahead of `/api/auth/{uuid}`.
pub(crate) fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Users
    cfg.service(crate::user::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::get_current_user_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::get_user_by_id_handler);
    cfg.service(crate::user::adapter::incoming::web::routes::update_user_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
        std::process::exit(1);
    }
}
