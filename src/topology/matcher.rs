// src/topology/matcher.rs

use crate::topology::classify::Island;
use crate::topology::ring::Ring;
use log::warn;

/// Ordnet jeden Ocean genau einer Island zu: der kleinsten (nach
/// Bounding-Box-Fläche), deren Rand ihn geometrisch enthält.
///
/// Ablauf:
/// 1. Islands aufsteigend nach Bounding-Box-Fläche sortieren. Bei
///    konzentrischen Formen gewinnt so immer die innerste umschließende
///    Island.
/// 2. Pro Ocean: Bounding Box und ein strikt innen liegender Punkt.
/// 3. Erster Treffer in Sortierreihenfolge gewinnt: Bounding Box der Island
///    umschließt die des Oceans, und der innere Punkt liegt rand-inklusiv im
///    Shell-Ring. Bereits angehängte Löcher werden bewusst ignoriert, damit
///    ein früher angehängter Ocean den Test nicht verfälscht.
/// 4. Kein Treffer: Warnung und Verwerfen des Oceans. Das deutet auf
///    fehlerhafte Eingaben hin, darf die Pipeline aber nie abbrechen.
///
/// Greedy ohne Backtracking, O(Islands × Oceans). Gegen Eingaben, bei denen
/// Bounding Boxes verschachtelt sind ohne echte geometrische Enthaltung, ist
/// das Verfahren nicht abgesichert; solche Oceans fallen in den
/// Verwerfen-Pfad.
pub fn attach_oceans(mut islands: Vec<Island>, oceans: Vec<Ring>) -> Vec<Island> {
    islands.sort_by(|a, b| a.bounds().area().total_cmp(&b.bounds().area()));

    for ocean in oceans {
        let ocean_bounds = ocean.bounds();
        let probe = ocean.interior_point();

        let parent = islands.iter_mut().find(|island| {
            island.bounds().contains_bounds(&ocean_bounds) && island.shell().contains_point(probe)
        });

        match parent {
            Some(island) => island.attach_hole(ocean),
            None => {
                warn!("no parent island found for hole with bounds {ocean_bounds}; dropping it");
            }
        }
    }

    islands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::ring::Orientation;
    use crate::types::{Point2D, coord};

    fn square_ring(min: f64, max: f64, clockwise: bool) -> Ring {
        let mut pts: Vec<Point2D> = vec![
            coord! { x: min, y: min },
            coord! { x: min, y: max },
            coord! { x: max, y: max },
            coord! { x: max, y: min },
        ];
        if !clockwise {
            pts.reverse();
        }
        Ring::new(pts).unwrap()
    }

    #[test]
    fn test_ocean_attaches_to_innermost_island() {
        // Zwei konzentrische Islands; die Bounding Box des Oceans liegt in
        // beiden. Er muss an der inneren landen.
        let outer = Island::new(square_ring(0.0, 400.0, true));
        let inner = Island::new(square_ring(100.0, 300.0, true));
        let ocean = square_ring(150.0, 250.0, false);

        let islands = attach_oceans(vec![outer, inner], vec![ocean]);

        // Nach dem Sortieren steht die kleinere Island vorn.
        assert_eq!(islands.len(), 2);
        assert_eq!(islands[0].bounds().area(), 200.0 * 200.0);
        assert_eq!(islands[0].holes().len(), 1);
        assert!(islands[1].holes().is_empty());
    }

    #[test]
    fn test_unmatched_ocean_is_dropped() {
        let island = Island::new(square_ring(0.0, 100.0, true));
        let stray = square_ring(500.0, 600.0, false);

        let islands = attach_oceans(vec![island], vec![stray]);
        assert_eq!(islands.len(), 1);
        assert!(islands[0].holes().is_empty());
    }

    #[test]
    fn test_bbox_match_without_containment_falls_through() {
        // L-förmige Island, deren Bounding Box den Ocean enthält, deren
        // Fläche ihn aber nicht abdeckt: der präzise Test muss durchfallen,
        // der Ocean landet bei der äußeren Island.
        let l_shape = Island::new(
            Ring::new(vec![
                coord! { x: 0.0, y: 0.0 },
                coord! { x: 0.0, y: 300.0 },
                coord! { x: 60.0, y: 300.0 },
                coord! { x: 60.0, y: 60.0 },
                coord! { x: 300.0, y: 60.0 },
                coord! { x: 300.0, y: 0.0 },
            ])
            .unwrap(),
        );
        assert_eq!(l_shape.shell().orientation(), Orientation::Clockwise);
        let outer = Island::new(square_ring(-100.0, 500.0, true));
        let ocean = square_ring(150.0, 250.0, false);

        let islands = attach_oceans(vec![outer, l_shape], vec![ocean]);
        let with_hole: Vec<_> = islands.iter().filter(|i| !i.holes().is_empty()).collect();
        assert_eq!(with_hole.len(), 1);
        assert_eq!(with_hole[0].bounds().area(), 600.0 * 600.0);
    }
}
