//! Chart aggregate: display settings in, derived view out.

pub mod entities;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
