use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::graph::{DirectedGraph, Graph};

/// Graph type served by the API: string vertices, float weights
pub type ApiGraph = DirectedGraph<String, OrderedFloat<f64>>;

/// Represents an edge in the graph JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebEdge {
    pub source: String,
    pub target: String,
    pub weight: f64,
}

/// Represents a complete graph as submitted by clients
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WebGraph {
    pub vertices: Vec<String>,
    #[serde(default)]
    pub edges: Vec<WebEdge>,
}

/// Parameters for graph generation
#[derive(Debug, Deserialize)]
pub struct GraphGenerationRequest {
    pub graph_type: String,
    pub node_count: usize,
    #[serde(default = "default_edge_factor")]
    pub edge_factor: f64,
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_edge_factor() -> f64 { 3.0 }

/// Parameters for a single-source run
#[derive(Debug, Deserialize)]
pub struct SingleSourceRequest {
    pub source: String,
}

/// Parameters for an all-pairs run
#[derive(Debug, Default, Deserialize)]
pub struct AllPairsRequest {
    #[serde(default)]
    pub parallel: bool,
}

/// Response containing single-source results
///
/// Unreachable vertices map to `null`.
#[derive(Debug, Clone, Serialize)]
pub struct SingleSourceResponse {
    pub execution_id: Uuid,
    pub algorithm: String,
    pub source: String,
    pub execution_time_ms: f64,
    pub reachable: usize,
    pub distances: HashMap<String, Option<f64>>,
    pub predecessors: HashMap<String, String>,
}

/// Response containing all-pairs results
#[derive(Debug, Clone, Serialize)]
pub struct AllPairsResponse {
    pub execution_id: Uuid,
    pub algorithm: String,
    pub parallel: bool,
    pub execution_time_ms: f64,
    pub pair_count: usize,
    pub distances: Vec<WebEdge>,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

/// Session metadata returned to clients
#[derive(Debug, Clone, Serialize)]
pub struct SessionInfo {
    pub id: Uuid,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub last_algorithm: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Session holding an immutable graph and its submitted form
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub web_graph: WebGraph,
    pub graph: Arc<ApiGraph>,
    pub last_algorithm: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(web_graph: WebGraph, graph: ApiGraph) -> Self {
        Self {
            id: Uuid::new_v4(),
            web_graph,
            graph: Arc::new(graph),
            last_algorithm: None,
            created_at: Utc::now(),
        }
    }

    pub fn info(&self) -> SessionInfo {
        SessionInfo {
            id: self.id,
            vertex_count: self.graph.vertex_count(),
            edge_count: self.graph.edge_count(),
            last_algorithm: self.last_algorithm.clone(),
            created_at: self.created_at,
        }
    }
}
