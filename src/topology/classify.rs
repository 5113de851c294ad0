// src/topology/classify.rs

use crate::topology::ring::Ring;
use crate::types::Bounds2D;

/// Ein fester Randring ("Island") zusammen mit den Löchern, die ihm beim
/// Matching zugeordnet wurden.
///
/// Wird einmal pro Uhrzeigersinn-Ring erzeugt, nur durch das Anhängen von
/// Löchern verändert und genau einmal vom Assembler konsumiert.
#[derive(Debug, Clone)]
pub struct Island {
    shell: Ring,
    holes: Vec<Ring>,
    bounds: Bounds2D,
}

impl Island {
    pub fn new(shell: Ring) -> Self {
        let bounds = shell.bounds();
        Self {
            shell,
            holes: Vec::new(),
            bounds,
        }
    }

    pub fn shell(&self) -> &Ring {
        &self.shell
    }

    pub fn holes(&self) -> &[Ring] {
        &self.holes
    }

    /// Vorgehaltene Bounding Box für das Containment-Pruning.
    pub fn bounds(&self) -> &Bounds2D {
        &self.bounds
    }

    pub fn attach_hole(&mut self, hole: Ring) {
        self.holes.push(hole);
    }

    pub(crate) fn into_parts(self) -> (Ring, Vec<Ring>) {
        (self.shell, self.holes)
    }
}

/// Teilt extrahierte Ringe nach Umlaufrichtung auf: Ringe im Uhrzeigersinn
/// sind Island-Kandidaten (festes Material), Ringe gegen den Uhrzeigersinn
/// sind Ocean-Kandidaten (Löcher).
///
/// Entschieden wird direkt über das Vorzeichen der Shoelace-Fläche, nicht
/// über `orientation()`: ein selbstüberschneidender Ring mit exakt
/// ausbalancierten Lappen hat Fläche null und damit keine aussagekräftige
/// Umlaufrichtung. Solche Ringe wandern in den Island-Pfad, wo die Reparatur
/// sie in einfache Stücke mit echter Umlaufrichtung zerlegt; als Ocean hätten
/// sie keinen Elternring und gingen verloren.
///
/// Reine O(Ringlänge)-Berechnung pro Ring, ohne Seiteneffekte. Bewusst vom
/// Matching getrennt gehalten, damit Nesting-Entscheidungen unabhängig
/// testbar bleiben.
pub fn classify_rings(rings: Vec<Ring>) -> (Vec<Island>, Vec<Ring>) {
    let mut islands = Vec::new();
    let mut oceans = Vec::new();

    for ring in rings {
        if ring.signed_area() > 0.0 {
            oceans.push(ring);
        } else {
            islands.push(Island::new(ring));
        }
    }

    (islands, oceans)
}
