use serde::{Deserialize, Serialize};

/// A directed, weighted edge `from -> to`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<T, W> {
    pub from: T,
    pub to: T,
    pub weight: W,
}

impl<T, W> Edge<T, W> {
    pub fn new(from: T, to: T, weight: W) -> Self {
        Edge { from, to, weight }
    }
}

impl<T, W> From<(T, T, W)> for Edge<T, W> {
    fn from((from, to, weight): (T, T, W)) -> Self {
        Edge { from, to, weight }
    }
}
