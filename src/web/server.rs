use axum::{
    http::{header, Method},
    Router,
};
use log::info;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::web::api::{create_router, AppState};

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub enable_cors: bool,
    pub max_sessions: usize,
    pub max_generated_nodes: usize,
    pub max_edge_factor: f64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3005,
            enable_cors: true,
            max_sessions: 1000,
            max_generated_nodes: 10_000,
            max_edge_factor: 16.0,
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Builds the application router for the given configuration
pub fn build_app(config: &ServerConfig) -> Router {
    let state = AppState::new(config.max_sessions)
        .with_generation_limits(config.max_generated_nodes, config.max_edge_factor);
    let app = create_router().with_state(state);

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);
        app.layer(ServiceBuilder::new().layer(cors).into_inner())
    } else {
        app
    }
}

/// Start the web server with custom configuration
pub async fn start_server_with_config(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_app(&config);

    let addr = config.addr();
    info!("Shortest path server starting on http://{}", addr);
    info!("Sessions capped at {}, CORS enabled: {}", config.max_sessions, config.enable_cors);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
