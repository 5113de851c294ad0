// src/area/mod.rs

pub mod union;

pub use union::union_all_consuming;

use crate::topology::{Ring, extract_polygons};
use crate::types::Point2D;
use geo::{BooleanOps, LineString, MultiPolygon, Polygon as GeoPolygon};

/// Eine 2D-Region mit impliziter Topologie: eine beliebige Menge
/// geschlossener Randringe, deren Shell-/Loch-Beziehung nicht explizit ist.
///
/// Das ist der Eingabe- und Union-Operand der Pipeline. Als eigener Werttyp
/// modelliert; die destruktiven Operationen (`union_with`,
/// `union_all_consuming`) sind als solche benannt, wer das Original braucht,
/// klont vorher.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Area {
    rings: Vec<Vec<Point2D>>,
}

impl Area {
    /// Die kanonische leere Area.
    pub fn empty() -> Self {
        Self { rings: Vec::new() }
    }

    /// Erstellt eine Area aus rohen geschlossenen Randringen. Die
    /// Umlaufrichtung trägt die implizite Topologie: im Uhrzeigersinn =
    /// festes Material, gegen den Uhrzeigersinn = Loch.
    pub fn from_rings(rings: Vec<Vec<Point2D>>) -> Self {
        Self { rings }
    }

    /// Zählt den Rand als Folge geschlossener Polylinien auf. Bereits auf
    /// Liniensegmente abgeflacht; die Abflachungstoleranz ist an die
    /// Gitterweite des Präzisionsmodells gebunden.
    pub fn boundary(&self) -> &[Vec<Point2D>] {
        &self.rings
    }

    /// Prüft ob die Area leer ist. Eine Area, deren Ringe sämtlich
    /// degeneriert sind, zählt als leer (Union mit ihr ist ein No-op).
    pub fn is_empty(&self) -> bool {
        !self
            .rings
            .iter()
            .any(|raw| Ring::new(raw.clone()).is_ok())
    }

    /// In-place Vereinigung mit einer anderen Area. Destruktiv: `self` wird
    /// durch das Ergebnis ersetzt.
    ///
    /// Beide Operanden laufen durch die Extraktionspipeline zu expliziten
    /// Polygonen; die eigentliche boolesche Vereinigung übernimmt `geo`.
    pub fn union_with(&mut self, other: &Area) {
        if other.is_empty() {
            return;
        }
        if self.is_empty() {
            self.rings = other.rings.clone();
            return;
        }

        let merged = self.to_multi_polygon().union(&other.to_multi_polygon());
        *self = Self::from_multi_polygon(&merged);
    }

    /// Explizite Topologie der Area als `geo`-MultiPolygon, gewonnen über
    /// die Extraktionspipeline.
    pub fn to_multi_polygon(&self) -> MultiPolygon<f64> {
        let polygons = extract_polygons(self)
            .into_iter()
            .map(|polygon| {
                let exterior = closed_line_string(polygon.shell().points());
                let interiors = polygon
                    .holes()
                    .iter()
                    .map(|hole| closed_line_string(hole.points()))
                    .collect();
                GeoPolygon::new(exterior, interiors)
            })
            .collect();
        MultiPolygon::new(polygons)
    }

    /// Flacht ein MultiPolygon zurück in Randringe mit kanonischer
    /// Umlaufrichtung (Shells im Uhrzeigersinn, Löcher dagegen).
    pub fn from_multi_polygon(multi: &MultiPolygon<f64>) -> Self {
        let mut rings = Vec::new();
        for polygon in &multi.0 {
            rings.push(canonical_ring(polygon.exterior(), true));
            for interior in polygon.interiors() {
                rings.push(canonical_ring(interior, false));
            }
        }
        Self { rings }
    }
}

/// Geschlossene LineString-Kopie eines offenen Rings.
fn closed_line_string(points: &[Point2D]) -> LineString<f64> {
    let mut coords = points.to_vec();
    if let Some(&first) = coords.first() {
        coords.push(first);
    }
    LineString::new(coords)
}

/// Kopiert die Koordinaten eines LineStrings (ohne schließendes Duplikat)
/// und erzwingt die gewünschte Umlaufrichtung.
fn canonical_ring(line: &LineString<f64>, clockwise: bool) -> Vec<Point2D> {
    let mut points: Vec<Point2D> = line.0.clone();
    while points.len() > 1 && points.first() == points.last() {
        points.pop();
    }

    let mut doubled_area = 0.0;
    let n = points.len();
    for i in 0..n {
        let p1 = points[i];
        let p2 = points[(i + 1) % n];
        doubled_area += (p1.x * p2.y) - (p2.x * p1.y);
    }
    // Shoelace positiv = gegen den Uhrzeigersinn
    if (doubled_area > 0.0) == clockwise {
        points.reverse();
    }
    points
}
