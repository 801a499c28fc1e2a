//! The constellation view: wire types, the radial layout engine, and the
//! canvas component that draws one day's habit graph.

mod component;
pub mod layout;
mod render;
mod types;

pub use component::ConstellationCanvas;
pub use types::{Category, Constellation, ConstellationEdge, ConstellationNode};
