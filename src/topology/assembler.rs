// src/topology/assembler.rs

use crate::error::{TopoError, TopoResult};
use crate::precision::precision;
use crate::topology::classify::Island;
use crate::topology::polygon::Polygon;
use crate::topology::ring::Ring;
use crate::types::Point2D;
use log::error;
use std::collections::HashMap;

/// Obergrenze für wiederholte Reparaturdurchläufe pro Ring. Jeder Durchlauf
/// löst gefundene Selbstüberschneidungen auf; bleibt danach immer noch eine
/// übrig, gilt der Ring als Reparatur-Anomalie.
const MAX_REPAIR_PASSES: usize = 4;

/// Baut aus einer Island (Shell + zugeordnete Löcher) die endgültigen
/// Polygone.
///
/// Der Shell-Ring durchläuft die Präzisionsreparatur: Selbstüberschneidungen
/// werden aufgelöst, wodurch der Ring in mehrere disjunkte einfache Stücke
/// zerfallen kann (typisch bei Bow-Ties oder beinahe-doppelten Punkten aus
/// vorangegangenen Editieroperationen). Pro Stück entsteht ein Polygon;
/// Löcher werden dem Stück zugeordnet, das ihren inneren Punkt enthält.
/// Reste mit Fläche null verschwinden stillschweigend. Ein Ring, der sich
/// nicht reparieren lässt, wird mit einem Fehler protokolliert und die ganze
/// Island übersprungen, damit der Rest der Eingabe verfügbar bleibt.
pub fn assemble(island: Island) -> Vec<Polygon> {
    let (shell, holes) = island.into_parts();

    let shell_pieces = match repair_ring(&shell) {
        Ok(pieces) => pieces,
        Err(err) => {
            error!("skipping island after failed shell repair: {err}");
            return Vec::new();
        }
    };
    if shell_pieces.is_empty() {
        // Vollständig degeneriert: erwartet, kein Fehler.
        return Vec::new();
    }

    let mut hole_fragments: Vec<Ring> = Vec::new();
    for hole in holes {
        match repair_ring(&hole) {
            Ok(fragments) => hole_fragments.extend(fragments),
            Err(err) => {
                error!("dropping hole after failed repair: {err}");
            }
        }
    }

    let mut pieces: Vec<(Ring, Vec<Ring>)> = shell_pieces
        .into_iter()
        .map(|ring| (ring, Vec::new()))
        .collect();

    // Löcher auf die Stücke verteilen, in die sie noch gültig fallen;
    // heimatlose Fragmente werden stillschweigend verworfen.
    'holes: for hole in hole_fragments {
        let probe = hole.interior_point();
        for (piece, piece_holes) in pieces.iter_mut() {
            if piece.contains_point(probe) {
                piece_holes.push(hole);
                continue 'holes;
            }
        }
    }

    pieces
        .into_iter()
        .map(|(shell, holes)| Polygon::new(shell, holes))
        .collect()
}

/// Eine gefundene Überschneidung zweier nicht benachbarter Kanten.
#[derive(Debug, Clone, Copy)]
struct Crossing {
    edge_a: usize,
    t_a: f64,
    edge_b: usize,
    t_b: f64,
    point: Point2D,
}

/// Repariert einen einzelnen Ring auf dem Präzisionsgitter.
///
/// Gefundene Kreuzungspunkte werden (gerundet) in beide beteiligten Kanten
/// eingefügt, anschließend wird der Ring an wiederholten Koordinaten in
/// einfache Teilringe zerlegt. Teilringe mit Fläche null entfallen. Das
/// Ergebnis kann leer sein (komplett degenerierter Ring), ein Ring
/// (Normalfall) oder mehrere Ringe (zerfallener Shell).
fn repair_ring(ring: &Ring) -> TopoResult<Vec<Ring>> {
    // Wiederholte Koordinaten (reine Eckberührungen) zerlegen den Ring schon
    // ohne Kantenkreuzung.
    let mut queue: Vec<(Vec<Point2D>, usize)> = split_at_repeated_points(ring.points().to_vec())
        .into_iter()
        .map(|sub_loop| (sub_loop, 0))
        .collect();
    let mut simple: Vec<Ring> = Vec::new();

    while let Some((points, pass)) = queue.pop() {
        let crossings = find_crossings(&points);
        if crossings.is_empty() {
            // Null-Fläche oder zu wenige Punkte: stilles, erwartetes Ende.
            if let Ok(repaired) = Ring::new(points) {
                simple.push(repaired);
            }
            continue;
        }

        if pass >= MAX_REPAIR_PASSES {
            return Err(TopoError::RepairFailed {
                reason: format!(
                    "ring still self-intersecting after {MAX_REPAIR_PASSES} repair passes"
                ),
            });
        }

        let injected = inject_crossings(&points, &crossings);
        for sub_loop in split_at_repeated_points(injected) {
            queue.push((sub_loop, pass + 1));
        }
    }

    Ok(simple)
}

/// Sucht alle echten Überschneidungen zwischen nicht benachbarten Kanten.
/// Reine Eckberührungen (der Schnittpunkt fällt auf Endpunkte beider Kanten)
/// zählen nicht; die zerfallen später über die Koordinaten-Wiederholung.
fn find_crossings(points: &[Point2D]) -> Vec<Crossing> {
    let n = points.len();
    if n < 4 {
        return Vec::new();
    }

    let grid = precision();
    let mut crossings = Vec::new();

    for i in 0..n {
        let a1 = points[i];
        let a2 = points[(i + 1) % n];

        for j in (i + 2)..n {
            // Benachbarte Kanten überspringen, inklusive des Umlaufs von der
            // letzten zur ersten Kante.
            if i == 0 && j == n - 1 {
                continue;
            }

            let b1 = points[j];
            let b2 = points[(j + 1) % n];

            let Some((t_a, t_b, raw)) = segment_intersection(a1, a2, b1, b2) else {
                continue;
            };
            let point = grid.snap(raw);

            let touches_a = point == a1 || point == a2;
            let touches_b = point == b1 || point == b2;
            if touches_a && touches_b {
                continue;
            }

            crossings.push(Crossing {
                edge_a: i,
                t_a,
                edge_b: j,
                t_b,
                point,
            });
        }
    }

    crossings
}

/// Schnittpunkt zweier Segmente inklusive der Endpunkte.
/// Gibt die Kantenparameter und den (ungerundeten) Schnittpunkt zurück.
fn segment_intersection(
    p1: Point2D,
    p2: Point2D,
    p3: Point2D,
    p4: Point2D,
) -> Option<(f64, f64, Point2D)> {
    let d1 = Point2D {
        x: p2.x - p1.x,
        y: p2.y - p1.y,
    };
    let d2 = Point2D {
        x: p4.x - p3.x,
        y: p4.y - p3.y,
    };

    let denominator = d1.x * d2.y - d1.y * d2.x;
    if denominator.abs() < 1e-12 {
        return None; // parallel oder kollinear
    }

    let t = ((p3.x - p1.x) * d2.y - (p3.y - p1.y) * d2.x) / denominator;
    let u = ((p3.x - p1.x) * d1.y - (p3.y - p1.y) * d1.x) / denominator;

    let eps = 1e-9;
    if t < -eps || t > 1.0 + eps || u < -eps || u > 1.0 + eps {
        return None;
    }

    Some((
        t,
        u,
        Point2D {
            x: p1.x + d1.x * t,
            y: p1.y + d1.y * t,
        },
    ))
}

/// Fügt die Kreuzungspunkte in beide beteiligten Kanten ein, sortiert nach
/// Kantenparameter.
fn inject_crossings(points: &[Point2D], crossings: &[Crossing]) -> Vec<Point2D> {
    let n = points.len();
    let mut extras: HashMap<usize, Vec<(f64, Point2D)>> = HashMap::new();

    for crossing in crossings {
        for (edge, t) in [(crossing.edge_a, crossing.t_a), (crossing.edge_b, crossing.t_b)] {
            let start = points[edge];
            let end = points[(edge + 1) % n];
            // Fällt der Punkt auf einen Endpunkt der Kante, ist er dort
            // bereits vorhanden (T-Stoß).
            if crossing.point == start || crossing.point == end {
                continue;
            }
            extras.entry(edge).or_default().push((t, crossing.point));
        }
    }

    let mut result = Vec::with_capacity(n + crossings.len() * 2);
    for (i, &p) in points.iter().enumerate() {
        result.push(p);
        if let Some(inserts) = extras.get_mut(&i) {
            inserts.sort_by(|a, b| a.0.total_cmp(&b.0));
            for &(_, q) in inserts.iter() {
                if result.last() != Some(&q) {
                    result.push(q);
                }
            }
        }
    }
    result
}

/// Zerlegt eine Punktfolge an wiederholten Koordinaten in Teilschleifen.
///
/// Taucht eine Koordinate erneut auf, wird das Stück dazwischen als eigene
/// Schleife herausgelöst; der Rest läuft als verbleibender Ring weiter.
fn split_at_repeated_points(points: Vec<Point2D>) -> Vec<Vec<Point2D>> {
    let grid = precision();
    let key = |p: Point2D| -> (i64, i64) {
        (
            (p.x * grid.scale()).round() as i64,
            (p.y * grid.scale()).round() as i64,
        )
    };

    let mut loops: Vec<Vec<Point2D>> = Vec::new();
    let mut path: Vec<Point2D> = Vec::new();
    let mut seen: HashMap<(i64, i64), usize> = HashMap::new();

    for p in points {
        if path.last() == Some(&p) {
            continue;
        }
        match seen.get(&key(p)).copied() {
            Some(anchor) => {
                let loop_points = path.split_off(anchor);
                for q in loop_points.iter().skip(1) {
                    seen.remove(&key(*q));
                }
                // Ankerpunkt bleibt Teil des verbleibenden Pfads.
                path.push(p);
                loops.push(loop_points);
            }
            None => {
                seen.insert(key(p), path.len());
                path.push(p);
            }
        }
    }

    loops.push(path);
    loops
}
