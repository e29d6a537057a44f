pub mod catalog;
pub mod composition;
pub mod evaluator;
pub mod pool;
pub mod role_weights;
pub mod stats;
pub mod win_rate;
