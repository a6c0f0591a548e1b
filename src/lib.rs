// Domain layer - simulation core
pub mod domain;

// Application layer - playback scheduling
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod input;
pub mod rendering;
pub mod ui;

// Re-exports for convenience
pub use application::Playback;
pub use domain::{DEFAULT_DENSITY, LifeModel, ModelError, neighbors_of, transition};
pub use ui::Button;
