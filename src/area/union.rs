// src/area/union.rs

use crate::area::Area;
use log::debug;

/// Vereinigt eine Sammlung von Areas zu einer einzigen, konsumierend und
/// destruktiv.
///
/// Statt naiv links zu falten (`result = result ∪ next`, im schlechtesten
/// Fall quadratisch, weil die Kosten der booleschen Vereinigung mit der
/// Komplexität des Zwischenergebnisses wachsen) werden pro Durchlauf die
/// Paare (0,1), (2,3), … in-place vereinigt und der jeweils zweite Operand
/// verworfen. Die überlebende Liste halbiert sich pro Durchlauf
/// (balancierter Reduktionsbaum, O(log N) Durchläufe), wodurch keine
/// einzelne Vereinigung die gesamte Komplexität tragen muss.
///
/// Leere Operanden werden vorab gefiltert (Union mit leer ist ein No-op);
/// eine leere Eingabe liefert die kanonische leere Area.
pub fn union_all_consuming(mut areas: Vec<Area>) -> Area {
    areas.retain(|area| !area.is_empty());

    while areas.len() > 1 {
        debug!("union reduction pass over {} areas", areas.len());

        let mut survivors = Vec::with_capacity(areas.len().div_ceil(2));
        let mut operands = areas.into_iter();
        while let Some(mut first) = operands.next() {
            if let Some(second) = operands.next() {
                first.union_with(&second);
            }
            survivors.push(first);
        }
        areas = survivors;
    }

    areas.pop().unwrap_or_else(Area::empty)
}
