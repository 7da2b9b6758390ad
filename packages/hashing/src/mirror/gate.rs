//! Reversible 3-wire gates and their zigzag wire addressing

use super::block::Block;

/// Gate family
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateKind {
    /// Controlled-controlled NOT
    Toffoli = 0,
    /// Controlled swap
    Fredkin = 1,
}

/// Which end of the wire triple holds the control(s)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symmetry {
    /// Controls on the low wires
    Regular = 0,
    /// Controls on the high wires
    Mirrored = 1,
}

/// The two passes of gates making up one layer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sublayer {
    /// Selected by key bits 0-1, unshifted wires
    First,
    /// Selected by key bits 2-3, wires shifted by two
    Second,
}

impl Sublayer {
    /// Wire shift applied to every gate in this sublayer
    #[must_use]
    pub const fn shift(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 2,
        }
    }

    /// 2-bit gate code this sublayer reads from a key nibble
    #[must_use]
    pub const fn code(self, key_nibble: u8) -> u8 {
        match self {
            Self::First => key_nibble & 0x3,
            Self::Second => (key_nibble & 0xc) >> 2,
        }
    }
}

/// One of the four reversible gate variants
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gate {
    /// Toffoli or Fredkin
    pub kind: GateKind,
    /// Regular or mirrored control placement
    pub symmetry: Symmetry,
}

impl Gate {
    /// Decode a 2-bit gate code: bit 0 picks the family, bit 1 the symmetry
    #[must_use]
    pub const fn from_code(code: u8) -> Self {
        let kind = if code & 1 == 0 {
            GateKind::Toffoli
        } else {
            GateKind::Fredkin
        };
        let symmetry = if (code >> 1) & 1 == 0 {
            Symmetry::Regular
        } else {
            Symmetry::Mirrored
        };
        Self { kind, symmetry }
    }

    /// Map input bits to output bits. Each variant is its own inverse.
    #[must_use]
    pub const fn eval(self, v1: bool, v2: bool, v3: bool) -> (bool, bool, bool) {
        match (self.kind, self.symmetry) {
            (GateKind::Toffoli, Symmetry::Regular) if v1 && v2 => (v1, v2, !v3),
            (GateKind::Toffoli, Symmetry::Mirrored) if v2 && v3 => (!v1, v2, v3),
            (GateKind::Fredkin, Symmetry::Regular) if v1 && v2 != v3 => (v1, v3, v2),
            (GateKind::Fredkin, Symmetry::Mirrored) if v3 && v1 != v2 => (v2, v1, v3),
            _ => (v1, v2, v3),
        }
    }

    /// Apply to `block` on `wires`, writing back only wires that changed
    pub fn apply(self, block: &mut Block, wires: [usize; 3]) {
        let [w1, w2, w3] = wires;
        let before = (block.bit(w1), block.bit(w2), block.bit(w3));
        let after = self.eval(before.0, before.1, before.2);
        if after.0 != before.0 {
            block.set_bit(w1, after.0);
        }
        if after.1 != before.1 {
            block.set_bit(w2, after.1);
        }
        if after.2 != before.2 {
            block.set_bit(w3, after.2);
        }
    }
}

/// Wire triple for gate `gate_index` of `sublayer` in layer `layer`.
///
/// Odd layers are offset by one wire relative to even layers, producing
/// the zigzag between consecutive layers.
#[must_use]
pub fn wires(gate_index: usize, layer: usize, sublayer: Sublayer, size: usize) -> [usize; 3] {
    let base = gate_index * 4 + layer % 2 + sublayer.shift();
    [base % size, (base + 1) % size, (base + 2) % size]
}
