// src/topology/ring.rs

use crate::area::Area;
use crate::error::{TopoError, TopoResult};
use crate::precision::precision;
use crate::types::{Bounds2D, Point2D};
use log::warn;
use std::fmt;

/// Orientierung eines geschlossenen Rings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Negative Shoelace-Fläche: Kandidat für festes Material ("Island").
    Clockwise,
    /// Positive Shoelace-Fläche: Kandidat für ein Loch ("Ocean").
    CounterClockwise,
}

/// Ein geschlossener Randring: geordnete Punktfolge auf dem Präzisionsgitter.
///
/// Gespeichert wird die offene Form (erster Punkt nicht dupliziert); die
/// Kante vom letzten zum ersten Punkt ist implizit. Ein gültiger Ring hat
/// mindestens 3 verschiedene Punkte, die nicht alle auf einer Geraden
/// liegen.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    points: Vec<Point2D>,
}

impl Ring {
    /// Erstellt einen Ring aus einer rohen, möglicherweise explizit
    /// geschlossenen Punktfolge. Alle Punkte werden auf das Gitter gerundet,
    /// aufeinanderfolgende Duplikate (und der schließende Endpunkt) werden
    /// entfernt.
    pub fn new(raw: Vec<Point2D>) -> TopoResult<Self> {
        let grid = precision();

        let mut points: Vec<Point2D> = Vec::with_capacity(raw.len());
        for p in raw {
            let snapped = grid.snap(p);
            if points.last() != Some(&snapped) {
                points.push(snapped);
            }
        }
        // Schließendes Duplikat entfernen
        while points.len() > 1 && points.first() == points.last() {
            points.pop();
        }

        if points.len() < 3 {
            return Err(TopoError::InsufficientPoints {
                expected: 3,
                actual: points.len(),
            });
        }

        // Kollineare Punktfolgen umschließen keine Fläche. Die Shoelace-
        // Fläche taugt hier nicht als Kriterium: bei selbstüberschneidenden
        // Ringen (Bow-Ties) kann sie sich zu Null aufheben, obwohl der Ring
        // echte Fläche umschließt und repariert werden muss.
        let origin = points[0];
        let dir = Point2D {
            x: points[1].x - origin.x,
            y: points[1].y - origin.y,
        };
        let dir_len = (dir.x * dir.x + dir.y * dir.y).sqrt();
        let half_step = 0.5 * grid.grid_step();
        let collinear = points.iter().all(|p| {
            let cross = dir.x * (p.y - origin.y) - dir.y * (p.x - origin.x);
            cross.abs() / dir_len < half_step
        });
        if collinear {
            return Err(TopoError::DegenerateRing);
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iteriert über die Kanten des Rings, inklusive der Schlusskante.
    pub fn edges(&self) -> impl Iterator<Item = (Point2D, Point2D)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Vorzeichenbehaftete Fläche nach der Shoelace-Formel.
    /// Positiv für gegen den Uhrzeigersinn, negativ für im Uhrzeigersinn.
    pub fn signed_area(&self) -> f64 {
        let mut area_sum = 0.0;
        for (p1, p2) in self.edges() {
            area_sum += (p1.x * p2.y) - (p2.x * p1.y);
        }
        area_sum * 0.5
    }

    /// Absolutfläche des Rings.
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Bestimmt die Orientierung über das Vorzeichen der Shoelace-Fläche.
    ///
    /// Bei Fläche exakt null (ausbalancierte Selbstüberschneidung) gibt es
    /// keine aussagekräftige Richtung; gemeldet wird dann gegen den
    /// Uhrzeigersinn. Die Klassifikation stützt sich deshalb nicht auf diese
    /// Methode, sondern direkt auf `signed_area`.
    pub fn orientation(&self) -> Orientation {
        if self.signed_area() < 0.0 {
            Orientation::Clockwise
        } else {
            Orientation::CounterClockwise
        }
    }

    /// Kehrt die Umlaufrichtung des Rings um.
    pub fn reverse(&mut self) {
        self.points.reverse();
    }

    /// Berechnet die Bounding Box des Rings.
    pub fn bounds(&self) -> Bounds2D {
        Bounds2D::from_points_iter(self.points.iter().copied()).unwrap_or_else(Bounds2D::empty)
    }

    /// Prüft ob ein Punkt auf dem Rand des Rings liegt (innerhalb der
    /// Gitterweite).
    pub fn point_on_boundary(&self, point: Point2D) -> bool {
        let tolerance = precision().grid_step();
        self.edges()
            .any(|(a, b)| point_on_segment(point, a, b, tolerance))
    }

    /// Rand-inklusiver Punkt-im-Ring-Test (Ray-Casting).
    /// Funktioniert für einfache Ringe; der Rand zählt als enthalten.
    pub fn contains_point(&self, point: Point2D) -> bool {
        if self.point_on_boundary(point) {
            return true;
        }

        let mut inside = false;
        for (vi, vj) in self.edges() {
            // Ray-Casting: schneidet der Strahl von `point` nach rechts die
            // Kante (vi, vj)?
            if (vi.y > point.y) != (vj.y > point.y) {
                let x_cross = vi.x + (point.y - vi.y) * (vj.x - vi.x) / (vj.y - vi.y);
                if point.x < x_cross {
                    inside = !inside;
                }
            }
        }
        inside
    }

    /// Liefert einen Punkt, der garantiert strikt im Inneren des Rings liegt
    /// (nicht nur innerhalb der Bounding Box).
    ///
    /// Scanline-Verfahren: horizontale Halbierende der Bounding Box, bei
    /// Bedarf um eine halbe Gitterweite verschoben, damit sie durch keinen
    /// Vertex läuft; Mittelpunkt des ersten Kreuzungspaares.
    pub fn interior_point(&self) -> Point2D {
        let bounds = self.bounds();
        let grid = precision();
        let mut y = (bounds.min.y + bounds.max.y) * 0.5;

        // Vertices liegen auf dem Gitter; eine Scanline auf dem Gitter kann
        // einen Vertex exakt treffen und Kreuzungen doppelt zählen.
        let scaled = y * grid.scale();
        if (scaled - scaled.round()).abs() < 0.25 && y + 0.5 * grid.grid_step() < bounds.max.y {
            y += 0.5 * grid.grid_step();
        }

        let mut crossings: Vec<f64> = Vec::new();
        for (a, b) in self.edges() {
            if (a.y > y) != (b.y > y) {
                crossings.push(a.x + (y - a.y) * (b.x - a.x) / (b.y - a.y));
            }
        }
        crossings.sort_by(f64::total_cmp);

        if crossings.len() >= 2 {
            Point2D {
                x: (crossings[0] + crossings[1]) * 0.5,
                y,
            }
        } else {
            // Sollte für nicht-degenerierte Ringe nicht vorkommen.
            log::debug!("interior_point: scanline found no crossing pair, falling back to vertex");
            self.points[0]
        }
    }
}

impl fmt::Display for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ring({} vertices, area {:.6})", self.len(), self.area())
    }
}

/// Prüft ob ein Punkt auf einem Liniensegment liegt (innerhalb einer Toleranz).
pub(crate) fn point_on_segment(
    point: Point2D,
    segment_start: Point2D,
    segment_end: Point2D,
    tolerance: f64,
) -> bool {
    let seg = Point2D {
        x: segment_end.x - segment_start.x,
        y: segment_end.y - segment_start.y,
    };
    let rel = Point2D {
        x: point.x - segment_start.x,
        y: point.y - segment_start.y,
    };

    let length_sq = seg.x * seg.x + seg.y * seg.y;
    if length_sq < tolerance * tolerance {
        return rel.x * rel.x + rel.y * rel.y < tolerance * tolerance;
    }

    // Abstand zur Trägergeraden
    let cross = seg.x * rel.y - seg.y * rel.x;
    if cross.abs() / length_sq.sqrt() >= tolerance {
        return false;
    }

    // Projektion muss zwischen den Endpunkten liegen
    let dot = seg.x * rel.x + seg.y * rel.y;
    dot >= 0.0 && dot <= length_sq
}

/// Extrahiert alle gültigen Randringe einer Area.
///
/// Degenerierte Ringe (weniger als 4 geschlossene Punkte oder kollinear)
/// werden mit einer Warnung verworfen; das ist ein erwarteter, nicht-fataler
/// Zustand. Die Reihenfolge entspricht dem Randdurchlauf und trägt keine
/// Bedeutung.
pub fn extract_rings(area: &Area) -> Vec<Ring> {
    let mut rings = Vec::new();
    for raw in area.boundary() {
        match Ring::new(raw.clone()) {
            Ok(ring) => rings.push(ring),
            Err(err) => {
                warn!("dropping malformed boundary ring: {err}");
            }
        }
    }
    rings
}
