mod cell;
mod model;
mod topology;

pub use cell::{Cell, transition};
pub use model::{DEFAULT_DENSITY, LifeModel, ModelError};
pub use topology::neighbors_of;
