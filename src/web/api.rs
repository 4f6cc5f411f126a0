use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use log::{info, warn};
use ordered_float::OrderedFloat;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::bellman_ford::BellmanFord;
use crate::algorithm::johnson::Johnson;
use crate::data_structures::Weight;
use crate::graph::generators::{
    generate_negative_cycle_graph, generate_potential_graph, generate_random_graph,
};
use crate::graph::{DirectedGraph, Edge, Graph, Vertex};
use crate::web::models::*;
use crate::Error;

/// Error half of every handler result
pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, Session>>>,
    pub max_sessions: usize,
    /// Largest `node_count` accepted by the generate endpoint
    pub max_generated_nodes: usize,
    /// Largest `edge_factor` accepted by the generate endpoint
    pub max_edge_factor: f64,
}

impl AppState {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            max_sessions,
            max_generated_nodes: 10_000,
            max_edge_factor: 16.0,
        }
    }

    /// Bounds the size of graphs the generate endpoint may build
    pub fn with_generation_limits(mut self, max_nodes: usize, max_edge_factor: f64) -> Self {
        self.max_generated_nodes = max_nodes;
        self.max_edge_factor = max_edge_factor;
        self
    }

    fn check_generation_request(&self, request: &GraphGenerationRequest) -> Result<(), ApiError> {
        if request.node_count > self.max_generated_nodes {
            return Err(api_error(
                StatusCode::BAD_REQUEST,
                "graph_too_large",
                format!(
                    "node_count {} exceeds the limit of {}",
                    request.node_count, self.max_generated_nodes
                ),
            ));
        }
        if !(request.edge_factor >= 0.0 && request.edge_factor <= self.max_edge_factor) {
            return Err(api_error(
                StatusCode::BAD_REQUEST,
                "graph_too_large",
                format!(
                    "edge_factor {} must lie between 0 and {}",
                    request.edge_factor, self.max_edge_factor
                ),
            ));
        }
        Ok(())
    }

    fn sessions(&self) -> Result<MutexGuard<'_, HashMap<Uuid, Session>>, ApiError> {
        self.sessions.lock().map_err(|_| {
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "state_poisoned",
                "Session store is unavailable".to_string(),
            )
        })
    }

    fn session_graph(&self, session_id: Uuid) -> Result<Arc<ApiGraph>, ApiError> {
        self.sessions()?
            .get(&session_id)
            .map(|session| Arc::clone(&session.graph))
            .ok_or_else(session_not_found)
    }

    fn record_run(&self, session_id: Uuid, algorithm: &str) -> Result<(), ApiError> {
        if let Some(session) = self.sessions()?.get_mut(&session_id) {
            session.last_algorithm = Some(algorithm.to_string());
        }
        Ok(())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(1000)
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/graphs", post(create_graph))
        .route("/api/graphs/generate", post(generate_graph))
        .route("/api/graphs/:session_id", get(get_graph))
        .route("/api/algorithms/bellman-ford/:session_id", post(run_bellman_ford))
        .route("/api/algorithms/johnson/:session_id", post(run_johnson))
        .route("/api/sessions", get(list_sessions))
        .route("/api/sessions/:session_id", get(get_session))
        .route("/api/health", get(health_check))
}

/// Create a session from a submitted graph
pub async fn create_graph(
    State(state): State<AppState>,
    Json(web_graph): Json<WebGraph>,
) -> Result<Json<SessionInfo>, ApiError> {
    let graph = convert_web_graph_to_rust(&web_graph)
        .map_err(|err| api_error(StatusCode::BAD_REQUEST, "invalid_graph", err.to_string()))?;
    store_session(&state, web_graph, graph)
}

/// Generate a new graph
pub async fn generate_graph(
    State(state): State<AppState>,
    Json(request): Json<GraphGenerationRequest>,
) -> Result<Json<SessionInfo>, ApiError> {
    state.check_generation_request(&request)?;
    let seed = request.seed.unwrap_or_else(rand::random);
    let generated = match request.graph_type.as_str() {
        "random" => generate_random_graph(request.node_count, request.edge_factor, seed)
            .map(|graph| convert_graph_to_web(&graph, |w: OrderedFloat<f64>| w.into_inner())),
        "potential" => generate_potential_graph(request.node_count, request.edge_factor, seed)
            .map(|graph| convert_graph_to_web(&graph, |w: i64| w as f64)),
        "negative-cycle" => generate_negative_cycle_graph(request.node_count)
            .map(|graph| convert_graph_to_web(&graph, |w: i64| w as f64)),
        _ => {
            return Err(api_error(
                StatusCode::BAD_REQUEST,
                "invalid_graph_type",
                format!("Unknown graph type: {}", request.graph_type),
            ));
        }
    };

    let web_graph = generated.map_err(|err| {
        api_error(StatusCode::INTERNAL_SERVER_ERROR, "generation_failed", err.to_string())
    })?;
    let graph = convert_web_graph_to_rust(&web_graph).map_err(|err| {
        api_error(StatusCode::INTERNAL_SERVER_ERROR, "generation_failed", err.to_string())
    })?;

    info!(
        "Generated {} graph with {} vertices (seed {})",
        request.graph_type, request.node_count, seed
    );
    store_session(&state, web_graph, graph)
}

/// Get graph data for a session
pub async fn get_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<WebGraph>, ApiError> {
    let sessions = state.sessions()?;
    let web_graph = sessions
        .get(&session_id)
        .map(|session| session.web_graph.clone())
        .ok_or_else(session_not_found)?;
    Ok(Json(web_graph))
}

/// Run Bellman-Ford from a single source
pub async fn run_bellman_ford(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<SingleSourceRequest>,
) -> Result<Json<SingleSourceResponse>, ApiError> {
    let graph = state.session_graph(session_id)?;

    let start_time = Instant::now();
    let result = BellmanFord::new()
        .evaluate(&request.source, graph.as_ref())
        .map_err(algorithm_error)?;
    let execution_time = start_time.elapsed();

    let distances: HashMap<String, Option<f64>> = result
        .distances
        .iter()
        .map(|(v, d)| (v.clone(), d.finite().map(OrderedFloat::into_inner)))
        .collect();
    let reachable = distances.values().filter(|d| d.is_some()).count();

    state.record_run(session_id, "bellman-ford")?;

    Ok(Json(SingleSourceResponse {
        execution_id: Uuid::new_v4(),
        algorithm: "bellman-ford".to_string(),
        source: request.source,
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
        reachable,
        distances,
        predecessors: result.predecessors,
    }))
}

/// Run Johnson's algorithm over every pair of vertices
pub async fn run_johnson(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<AllPairsRequest>,
) -> Result<Json<AllPairsResponse>, ApiError> {
    let graph = state.session_graph(session_id)?;

    let start_time = Instant::now();
    let result = Johnson::new()
        .with_parallel(request.parallel)
        .all_pairs(graph.as_ref())
        .map_err(algorithm_error)?;
    let execution_time = start_time.elapsed();

    let distances: Vec<WebEdge> = result
        .into_iter()
        .map(|edge| WebEdge {
            source: edge.from,
            target: edge.to,
            weight: edge.weight.into_inner(),
        })
        .collect();

    state.record_run(session_id, "johnson")?;

    Ok(Json(AllPairsResponse {
        execution_id: Uuid::new_v4(),
        algorithm: "johnson".to_string(),
        parallel: request.parallel,
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
        pair_count: distances.len(),
        distances,
    }))
}

/// List all active sessions
pub async fn list_sessions(State(state): State<AppState>) -> Result<Json<Vec<Uuid>>, ApiError> {
    let session_ids = state.sessions()?.keys().cloned().collect();
    Ok(Json(session_ids))
}

/// Get session information
pub async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionInfo>, ApiError> {
    let sessions = state.sessions()?;
    let info = sessions
        .get(&session_id)
        .map(Session::info)
        .ok_or_else(session_not_found)?;
    Ok(Json(info))
}

/// Health check endpoint
pub async fn health_check() -> Result<Json<serde_json::Value>, ApiError> {
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    })))
}

// Helper functions

fn api_error(status: StatusCode, error: &str, message: String) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            message,
            details: None,
        }),
    )
}

fn session_not_found() -> ApiError {
    api_error(
        StatusCode::NOT_FOUND,
        "session_not_found",
        "Session not found".to_string(),
    )
}

fn algorithm_error(err: Error) -> ApiError {
    match err {
        Error::NegativeCycle { .. } => {
            api_error(StatusCode::UNPROCESSABLE_ENTITY, "negative_cycle", err.to_string())
        }
        Error::UnknownVertex(_) => api_error(StatusCode::NOT_FOUND, "unknown_vertex", err.to_string()),
        _ => api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "algorithm_execution_failed",
            format!("Algorithm execution failed: {}", err),
        ),
    }
}

fn store_session(
    state: &AppState,
    web_graph: WebGraph,
    graph: ApiGraph,
) -> Result<Json<SessionInfo>, ApiError> {
    let mut sessions = state.sessions()?;
    if sessions.len() >= state.max_sessions {
        warn!("Rejecting new session: {} sessions active", sessions.len());
        return Err(api_error(
            StatusCode::SERVICE_UNAVAILABLE,
            "session_limit",
            format!("At most {} sessions may be active", state.max_sessions),
        ));
    }

    let session = Session::new(web_graph, graph);
    let info = session.info();
    sessions.insert(session.id, session);
    Ok(Json(info))
}

fn convert_graph_to_web<T, W, F>(graph: &DirectedGraph<T, W>, to_f64: F) -> WebGraph
where
    T: Vertex + ToString,
    W: Weight,
    F: Fn(W) -> f64,
{
    WebGraph {
        vertices: graph.vertices().map(ToString::to_string).collect(),
        edges: graph
            .edges()
            .map(|edge| WebEdge {
                source: edge.from.to_string(),
                target: edge.to.to_string(),
                weight: to_f64(edge.weight),
            })
            .collect(),
    }
}

fn convert_web_graph_to_rust(web_graph: &WebGraph) -> crate::Result<ApiGraph> {
    DirectedGraph::new(
        web_graph.vertices.iter().cloned(),
        web_graph
            .edges
            .iter()
            .map(|edge| Edge::new(edge.source.clone(), edge.target.clone(), OrderedFloat(edge.weight))),
    )
}
