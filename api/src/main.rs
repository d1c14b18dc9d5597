use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use dotenvy::dotenv;
use log::{info, warn};

use ripple_api::{middleware, routes, AppState};
use ripple_core::services::notification::NotificationService;
use ripple_core::services::realtime::{ConnectionRegistry, RealtimeGateway};
use ripple_core::services::token::{TokenService, TokenServiceConfig};
use ripple_infra::database::{create_pool, MySqlNotificationStore, MySqlUserLookup};
use ripple_infra::RedisClient;
use ripple_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Ripple API server");

    let config = AppConfig::from_env();
    if config.auth.jwt.is_using_default_secret() {
        warn!("JWT_SECRET is not set; using the development default");
    }

    // Infrastructure
    let cache = RedisClient::new(&config.cache).await.map_err(startup_error)?;
    let pool = create_pool(&config.database).await.map_err(startup_error)?;

    // Core services
    let token_config = TokenServiceConfig::from_jwt(&config.auth.jwt);
    let registry = ConnectionRegistry::new();

    let tokens = TokenService::new(token_config.clone(), cache).map_err(startup_error)?;
    let gateway = RealtimeGateway::new(
        &token_config,
        registry.clone(),
        MySqlUserLookup::new(pool.clone()),
    )
    .map_err(startup_error)?;
    let notifications = NotificationService::new(
        MySqlNotificationStore::new(pool.clone()),
        MySqlUserLookup::new(pool),
        registry,
    );

    let state = web::Data::new(AppState {
        tokens,
        gateway,
        notifications,
        cookies: config.auth.cookies.clone(),
    });

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(middleware::cors::create_cors())
            .app_data(state.clone())
            .route("/health", web::get().to(health_check))
            .configure(routes::configure::<RedisClient, MySqlUserLookup, MySqlNotificationStore>)
            .default_service(web::route().to(|| async {
                HttpResponse::NotFound().json(serde_json::json!({
                    "error": "NOT_FOUND",
                    "message": "The requested resource was not found"
                }))
            }))
    })
    .bind(&bind_address)?;

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.run().await
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "ripple-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

fn startup_error(error: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, error.to_string())
}
