//! Reconciles the two visual surfaces with the current projection.
//!
//! Both surfaces are rebuilt from scratch on every pass, so after any render
//! each holds exactly one item per projected record.

pub mod list;
pub mod map;

pub use list::{ListEntry, ListView};
pub use map::{BaseLayer, CircleMarker, Layer, MapView, Popup, Viewport};
