// src/lib.rs

//! Topologie-Kern für Sicht- und Nebelflächen einer virtuellen Tischplatte.
//!
//! Wandelt eine Area mit impliziter Topologie (beliebige geschlossene
//! Randringe, wie sie beim inkrementellen booleschen Editieren von
//! Sichtblockern entstehen) in explizite, topologisch gültige Polygone mit
//! Löchern um, und vereinigt große Mengen solcher Regionen über eine
//! balancierte Paar-Reduktion. Alle topologischen Entscheidungen laufen auf
//! einem prozessweiten Präzisionsgitter, damit beinahe identische Punkte
//! exakt gleich vergleichen.
//!
//! Rein synchron und CPU-gebunden; der einzige prozessweite Zustand ist das
//! unveränderliche Präzisionsmodell.

pub mod area;
pub mod error;
pub mod precision;
pub mod topology;
pub mod types;

// Re-exports für einfache Verwendung
pub use area::{Area, union_all_consuming};
pub use error::{TopoError, TopoResult};
pub use precision::{PrecisionModel, init_precision, precision};
pub use topology::{Polygon, Ring, extract_polygons};

// Öffentliche API
pub mod prelude {
    pub use super::{
        area::{Area, union_all_consuming},
        error::{TopoError, TopoResult},
        precision::{PrecisionModel, init_precision, precision},
        topology::{Island, Orientation, Polygon, Ring, extract_polygons},
        types::{Bounds2D, Point2D},
    };
}
