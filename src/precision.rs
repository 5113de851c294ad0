// src/precision.rs

use crate::error::{TopoError, TopoResult};
use crate::types::Point2D;
use std::sync::OnceLock;

/// Standard-Skalierung des Präzisionsgitters: 1/100_000 einer Karteneinheit.
pub const DEFAULT_SCALE: f64 = 100_000.0;

/// Präzisionsmodell für das gesamte Koordinatengitter.
///
/// Alle Koordinaten werden vor jeder topologischen Entscheidung auf dieses
/// Gitter gerundet, damit nahezu identische Punkte exakt gleich vergleichen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrecisionModel {
    scale: f64,
}

impl PrecisionModel {
    /// Erstellt ein Präzisionsmodell mit der gegebenen Skalierung.
    /// Eine nicht-positive oder nicht-endliche Skalierung ist ein fataler
    /// Konfigurationsfehler.
    pub fn new(scale: f64) -> TopoResult<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(TopoError::InvalidPrecisionScale { scale });
        }
        Ok(Self { scale })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Gitterweite, also der kleinste unterscheidbare Koordinatenabstand.
    pub fn grid_step(&self) -> f64 {
        1.0 / self.scale
    }

    /// Rundet eine Koordinate auf das Gitter.
    pub fn snap_value(&self, v: f64) -> f64 {
        (v * self.scale).round() / self.scale
    }

    /// Rundet einen Punkt auf das Gitter.
    pub fn snap(&self, p: Point2D) -> Point2D {
        Point2D {
            x: self.snap_value(p.x),
            y: self.snap_value(p.y),
        }
    }

    /// Prüft ob zwei Punkte auf dem Gitter zusammenfallen.
    pub fn coincident(&self, a: Point2D, b: Point2D) -> bool {
        self.snap(a) == self.snap(b)
    }
}

impl Default for PrecisionModel {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
        }
    }
}

static PRECISION: OnceLock<PrecisionModel> = OnceLock::new();

/// Setzt das prozessweite Präzisionsmodell. Darf höchstens einmal und nur
/// beim Start aufgerufen werden; danach ist das Modell unveränderlich und
/// für nebenläufige Lesezugriffe sicher.
pub fn init_precision(model: PrecisionModel) -> TopoResult<()> {
    PRECISION
        .set(model)
        .map_err(|_| TopoError::PrecisionAlreadySet)
}

/// Liefert das prozessweite Präzisionsmodell (Standardmodell, falls
/// `init_precision` nie aufgerufen wurde).
pub fn precision() -> &'static PrecisionModel {
    PRECISION.get_or_init(PrecisionModel::default)
}
