// src/topology/polygon.rs

use crate::topology::ring::{Orientation, Ring};
use crate::types::{Bounds2D, Point2D};
use std::fmt;

/// Öffentlicher Ausgabetyp der Pipeline: ein einfacher Shell-Ring plus null
/// oder mehr Loch-Ringe, die strikt im Inneren liegen und sich gegenseitig
/// nicht überlappen.
///
/// Kanonische Umlaufrichtung: Shell im Uhrzeigersinn, Löcher gegen den
/// Uhrzeigersinn.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    shell: Ring,
    holes: Vec<Ring>,
}

impl Polygon {
    /// Baut ein Polygon und stellt dabei die kanonische Umlaufrichtung her.
    pub(crate) fn new(mut shell: Ring, mut holes: Vec<Ring>) -> Self {
        if shell.orientation() != Orientation::Clockwise {
            shell.reverse();
        }
        for hole in &mut holes {
            if hole.orientation() != Orientation::CounterClockwise {
                hole.reverse();
            }
        }
        Self { shell, holes }
    }

    pub fn shell(&self) -> &Ring {
        &self.shell
    }

    pub fn holes(&self) -> &[Ring] {
        &self.holes
    }

    pub fn bounds(&self) -> Bounds2D {
        self.shell.bounds()
    }

    /// Nettofläche: Shell-Fläche abzüglich der Lochflächen.
    pub fn area(&self) -> f64 {
        self.shell.area() - self.holes.iter().map(Ring::area).sum::<f64>()
    }

    /// Rand-inklusiver Enthaltungstest gegen Shell und Löcher.
    pub fn contains_point(&self, point: Point2D) -> bool {
        if !self.shell.contains_point(point) {
            return false;
        }
        self.holes
            .iter()
            .all(|hole| !hole.contains_point(point) || hole.point_on_boundary(point))
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Polygon({} shell vertices, {} holes)",
            self.shell.len(),
            self.holes.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::coord;
    use approx::assert_relative_eq;

    #[test]
    fn test_canonical_winding_and_area() {
        // Shell absichtlich gegen den Uhrzeigersinn übergeben
        let shell = Ring::new(vec![
            coord! { x: 0.0, y: 0.0 },
            coord! { x: 400.0, y: 0.0 },
            coord! { x: 400.0, y: 400.0 },
            coord! { x: 0.0, y: 400.0 },
        ])
        .unwrap();
        // Loch absichtlich im Uhrzeigersinn
        let hole = Ring::new(vec![
            coord! { x: 100.0, y: 100.0 },
            coord! { x: 100.0, y: 200.0 },
            coord! { x: 200.0, y: 200.0 },
            coord! { x: 200.0, y: 100.0 },
        ])
        .unwrap();

        let polygon = Polygon::new(shell, vec![hole]);
        assert_eq!(polygon.shell().orientation(), Orientation::Clockwise);
        assert_eq!(polygon.holes()[0].orientation(), Orientation::CounterClockwise);
        assert_relative_eq!(polygon.area(), 400.0 * 400.0 - 100.0 * 100.0);

        assert!(polygon.contains_point(coord! { x: 50.0, y: 50.0 }));
        assert!(!polygon.contains_point(coord! { x: 150.0, y: 150.0 })); // im Loch
        assert!(polygon.contains_point(coord! { x: 100.0, y: 150.0 })); // Lochrand
        assert!(!polygon.contains_point(coord! { x: 500.0, y: 50.0 }));
    }
}
