// src/types/mod.rs
pub mod bounds;

pub use bounds::*;

// Re-export häufig verwendete externe Typen
pub use geo::{Coord, coord};

// Einheitlicher Koordinatentyp für das gesamte Crate
pub type Point2D = Coord<f64>;
