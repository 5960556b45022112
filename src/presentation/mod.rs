//! Text and JSON handed to the external chart renderer.

pub mod panel_export;
pub mod price_badge;

pub use panel_export::*;
pub use price_badge::*;
