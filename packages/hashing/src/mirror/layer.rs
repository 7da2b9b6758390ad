//! One keyed layer: key mixing followed by two ordered gate sublayers

use super::block::{Block, LayerKey};
use super::gate::{Gate, Sublayer, wires};

/// Apply layer `layer` keyed by `key` to `block` in place.
///
/// Gates run in increasing index order, first sublayer then second, and each
/// gate sees the effects of every gate before it.
pub fn apply_layer(block: &mut Block, key: &LayerKey, layer: usize, size: usize) {
    // keeps an all-zero block from hashing to zero
    block.xor_with(key);

    let gates = (size / 4).min(key.len());
    for sublayer in [Sublayer::First, Sublayer::Second] {
        for gate_index in 0..gates {
            let gate = Gate::from_code(sublayer.code(key[gate_index]));
            gate.apply(block, wires(gate_index, layer, sublayer, size));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_key_zero_block_stays_zero() {
        // code 0 everywhere: Toffoli regular, never fires on zero wires
        let mut block = Block::zeroed(4);
        apply_layer(&mut block, &Block::zeroed(4), 0, 16);
        assert_eq!(block, Block::zeroed(4));
    }

    #[test]
    fn test_key_is_mixed_before_gates() {
        let mut block = Block::zeroed(4);
        let key = Block::from_nibbles([0x6, 0x1, 0x0, 0x0]);
        apply_layer(&mut block, &key, 0, 16);
        // mixed block sets wires 1, 2 and 4
        // first sublayer gate 0 (Toffoli mirrored, wires 0,1,2) sets wire 0
        // second sublayer gate 0 (Fredkin regular, wires 2,3,4) swaps 3 and 4
        assert_eq!(block.as_nibbles(), &[0xf, 0x0, 0x0, 0x0]);
    }

    #[test]
    fn test_gates_see_earlier_gates() {
        // zero key: Toffoli regular everywhere; odd layer shifts wires by one
        let mut block = Block::zeroed(2);
        for wire in [1, 2, 4] {
            block.set_bit(wire, true);
        }
        apply_layer(&mut block, &Block::zeroed(2), 1, 8);
        // gate 0 (wires 1,2,3) sets wire 3, which then lets the second
        // sublayer's gate 0 (wires 3,4,5) flip wire 5
        assert_eq!(block.as_nibbles(), &[0b1110, 0b0011]);
    }

    #[test]
    fn test_layer_is_invertible_given_key() {
        // reversing the gate order undoes the gate part of the layer
        let key = Block::from_nibbles([0x7, 0xc, 0x5, 0xa]);
        let original = Block::from_nibbles([0x9, 0x3, 0xe, 0x1]);
        let mut block = original.clone();
        apply_layer(&mut block, &key, 0, 16);

        for sublayer in [Sublayer::Second, Sublayer::First] {
            for gate_index in (0..4).rev() {
                let gate = Gate::from_code(sublayer.code(key[gate_index]));
                gate.apply(&mut block, wires(gate_index, 0, sublayer, 16));
            }
        }
        block.xor_with(&key);
        assert_eq!(block, original);
    }
}
