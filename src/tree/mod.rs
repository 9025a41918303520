pub mod error;
pub mod loader;
pub mod propagate;
pub mod tree_model;
