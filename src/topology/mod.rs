// src/topology/mod.rs

// Untermodule der Extraktionspipeline, Blätter zuerst:
pub mod ring; // Ring-Typ und Extraktion aus dem Area-Rand
pub mod classify; // Umlaufrichtung -> Island-/Ocean-Kandidaten
pub mod matcher; // Zuordnung Ocean -> kleinste umschließende Island
pub mod assembler; // Präzisionsreparatur und Polygon-Aufbau
pub mod polygon; // Öffentlicher Ausgabetyp

// Re-Exporte für den einfachen Zugriff
pub use self::classify::{Island, classify_rings};
pub use self::matcher::attach_oceans;
pub use self::polygon::Polygon;
pub use self::ring::{Orientation, Ring, extract_rings};

use crate::area::Area;

/// Wandelt eine Area mit impliziter Topologie in explizite, topologisch
/// gültige Polygone (Shell + Löcher) um.
///
/// Datenfluss strikt in eine Richtung: Rand -> Ringe -> klassifizierte Ringe
/// -> Islands mit Löchern -> reparierte Polygone. Fehler auf Ring- oder
/// Island-Ebene bleiben lokal; ein fehlerhafter Ring bricht nie die
/// Verarbeitung der übrigen Eingabe ab.
pub fn extract_polygons(area: &Area) -> Vec<Polygon> {
    let rings = extract_rings(area);
    let (islands, oceans) = classify_rings(rings);
    let islands = attach_oceans(islands, oceans);

    islands.into_iter().flat_map(assembler::assemble).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Point2D, coord};
    use approx::assert_relative_eq;

    fn square(min: f64, max: f64, clockwise: bool) -> Vec<Point2D> {
        let mut pts = vec![
            coord! { x: min, y: min },
            coord! { x: min, y: max },
            coord! { x: max, y: max },
            coord! { x: max, y: min },
        ];
        if !clockwise {
            pts.reverse();
        }
        pts
    }

    #[test]
    fn test_square_with_hole_scenario() {
        // Äußeres Quadrat (0,0)-(400,400) mit einem rechteckigen Loch
        // (0,0)-(100,100), das die Ecke des Shells berührt: genau ein
        // Polygon mit einem Loch.
        let area = Area::from_rings(vec![
            square(0.0, 400.0, true),
            square(0.0, 100.0, false),
        ]);

        let polygons = extract_polygons(&area);
        assert_eq!(polygons.len(), 1);

        let polygon = &polygons[0];
        assert_eq!(polygon.shell().len(), 4);
        assert_eq!(polygon.holes().len(), 1);
        assert_relative_eq!(polygon.shell().area(), 160_000.0);
        assert_relative_eq!(polygon.holes()[0].area(), 10_000.0);
        assert_relative_eq!(polygon.area(), 150_000.0);
    }

    #[test]
    fn test_bowtie_decomposes_through_full_pipeline() {
        // Exakt ausbalancierter Bow-Tie: Shoelace-Fläche null, trotzdem
        // echte umschlossene Fläche. Muss durch Klassifikation und Reparatur
        // zu zwei Dreiecken zerfallen statt als elternloser Ocean verworfen
        // zu werden.
        let area = Area::from_rings(vec![vec![
            coord! { x: 0.0, y: 0.0 },
            coord! { x: 100.0, y: 0.0 },
            coord! { x: 0.0, y: 100.0 },
            coord! { x: 100.0, y: 100.0 },
        ]]);

        let polygons = extract_polygons(&area);
        assert_eq!(polygons.len(), 2, "bow-tie must yield two triangles");
        for polygon in &polygons {
            assert_eq!(polygon.shell().len(), 3);
            assert_relative_eq!(polygon.area(), 2_500.0);
            assert_eq!(polygon.shell().orientation(), Orientation::Clockwise);
            assert!(
                polygon
                    .shell()
                    .points()
                    .contains(&coord! { x: 50.0, y: 50.0 }),
                "both triangles share the crossing point"
            );
        }
    }

    #[test]
    fn test_degenerate_rings_do_not_disturb_the_rest() {
        // Ein Zweipunkt-"Ring" und ein kollinearer Ring werden verworfen,
        // das restliche Quadrat bleibt unberührt.
        let area = Area::from_rings(vec![
            vec![coord! { x: 900.0, y: 900.0 }, coord! { x: 910.0, y: 900.0 }],
            vec![
                coord! { x: 700.0, y: 700.0 },
                coord! { x: 710.0, y: 710.0 },
                coord! { x: 720.0, y: 720.0 },
            ],
            square(0.0, 100.0, true),
        ]);

        let polygons = extract_polygons(&area);
        assert_eq!(polygons.len(), 1);
        assert_relative_eq!(polygons[0].area(), 10_000.0);
    }

    #[test]
    fn test_nested_islands_with_shared_ocean() {
        // Insel-im-See-im-Insel-Szenario: das Loch muss an der inneren
        // Island hängen, nicht an der äußeren.
        let area = Area::from_rings(vec![
            square(0.0, 400.0, true),
            square(100.0, 300.0, true),
            square(150.0, 250.0, false),
        ]);

        let polygons = extract_polygons(&area);
        assert_eq!(polygons.len(), 2);

        let inner = polygons
            .iter()
            .find(|p| p.shell().area() < 100_000.0)
            .unwrap();
        let outer = polygons
            .iter()
            .find(|p| p.shell().area() > 100_000.0)
            .unwrap();
        assert_eq!(inner.holes().len(), 1);
        assert_eq!(outer.holes().len(), 0);
    }
}
