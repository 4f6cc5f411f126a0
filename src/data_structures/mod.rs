pub mod distance;
pub mod priority_queue;
pub mod weight;

pub use distance::Distance;
pub use priority_queue::BinaryHeapWrapper;
pub use weight::Weight;
