//! Signal classification and transition tracking.

pub mod classifier;
pub mod engine;
pub mod tracker;

pub use classifier::*;
pub use engine::*;
pub use tracker::*;
