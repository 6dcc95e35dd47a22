use serde::{Deserialize, Serialize};

/// A requested rectangular part, to be cut `quantity` times.
/// Immutable once handed to a packing run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    /// Stable identity of the part, used by consumers to label and color its pieces
    pub id: usize,
    pub width: u32,
    pub height: u32,
    pub quantity: usize,
    /// Whether the part may be turned 90° (i.e. it has no grain direction to respect)
    pub rotatable: bool,
}

impl Part {
    pub fn new(id: usize, width: u32, height: u32, quantity: usize, rotatable: bool) -> Self {
        Part {
            id,
            width,
            height,
            quantity,
            rotatable,
        }
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Iterates over the individual instances of this part.
    pub fn instances(&self) -> impl Iterator<Item = PieceInstance> + '_ {
        (0..self.quantity).map(move |_| PieceInstance::from(self))
    }
}

/// A single unit of a [`Part`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceInstance {
    /// Identity of the [`Part`] this piece originates from
    pub part_id: usize,
    pub width: u32,
    pub height: u32,
    pub rotatable: bool,
}

impl PieceInstance {
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

impl From<&Part> for PieceInstance {
    fn from(part: &Part) -> Self {
        PieceInstance {
            part_id: part.id,
            width: part.width,
            height: part.height,
            rotatable: part.rotatable,
        }
    }
}

/// Expands every part into `quantity` instances, preserving submission order.
pub fn expand_parts(parts: &[Part]) -> Vec<PieceInstance> {
    parts.iter().flat_map(|p| p.instances()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expansion_preserves_order_and_quantity() {
        let parts = [Part::new(0, 10, 20, 2, true), Part::new(1, 5, 5, 3, false)];
        let pieces = expand_parts(&parts);

        assert_eq!(pieces.len(), 5);
        assert!(pieces[..2].iter().all(|p| p.part_id == 0 && p.rotatable));
        assert!(pieces[2..].iter().all(|p| p.part_id == 1 && !p.rotatable));
        assert_eq!(pieces[0].area(), 200);
    }

    #[test]
    fn instances_outlive_the_call() {
        let part = Part::new(3, 40, 30, 4, false);
        let instances = part.instances();
        let pieces = instances.collect::<Vec<_>>();

        assert_eq!(pieces.len(), 4);
        assert!(pieces.iter().all(|p| *p == PieceInstance::from(&part)));
    }
}
