//! Packing of the 64 button states into the device's LED map payload.
//!
//! The device takes six output columns of two 7-bit bytes each. Every byte covers seven wire
//! slots, bit 0 being the first slot. Bits are active low: a set bit means the LED is off.
//!
//! [`INDEX_MASK`] says which button sits in which slot. It walks the 8x8 grid column by column
//! (top to bottom, then left to right) and deals the buttons out to the wire columns: the first
//! four wire columns carry 11 buttons, the last two carry 10. Unused slots are `None` and
//! always encode as zero.

use crate::ButtonId;

pub const NUM_COLUMNS: usize = 6;
pub const SLOTS_PER_COLUMN: usize = 14;
/// Slots covered by the low byte of a column
const SLOTS_PER_BYTE: usize = 7;

#[rustfmt::skip]
pub const INDEX_MASK: [[Option<u8>; SLOTS_PER_COLUMN]; NUM_COLUMNS] = [
    [Some(0),  Some(8),  Some(16), Some(24), Some(32), Some(40), Some(48), Some(56), Some(1),  Some(9),  Some(17), None, None, None],
    [Some(25), Some(33), Some(41), Some(49), Some(57), Some(2),  Some(10), Some(18), Some(26), Some(34), Some(42), None, None, None],
    [Some(50), Some(58), Some(3),  Some(11), Some(19), Some(27), Some(35), Some(43), Some(51), Some(59), Some(4),  None, None, None],
    [Some(12), Some(20), Some(28), Some(36), Some(44), Some(52), Some(60), Some(5),  Some(13), Some(21), Some(29), None, None, None],
    [Some(37), Some(45), Some(53), Some(61), Some(6),  Some(14), Some(22), Some(30), Some(38), Some(46), None,     None, None, None],
    [Some(54), Some(62), Some(7),  Some(15), Some(23), Some(31), Some(39), Some(47), Some(55), Some(63), None,     None, None, None],
];

/// Compute the `(low, high)` byte pair of every output column. `is_lit` is asked once per
/// mapped slot.
pub fn encode_columns(mut is_lit: impl FnMut(ButtonId) -> bool) -> [(u8, u8); NUM_COLUMNS] {
    let mut columns = [(0, 0); NUM_COLUMNS];

    for (column, slots) in columns.iter_mut().zip(INDEX_MASK.iter()) {
        let (low, high) = column;
        let mut exponent = 0;

        for (slot, entry) in slots.iter().enumerate() {
            let unlit = match entry.and_then(ButtonId::new) {
                Some(id) => !is_lit(id),
                None => false,
            };
            if unlit {
                if slot < SLOTS_PER_BYTE {
                    *low += 1 << exponent;
                } else {
                    *high += 1 << exponent;
                }
            }

            if slot == SLOTS_PER_BYTE - 1 {
                exponent = 0;
            } else {
                exponent += 1;
            }
        }
    }

    columns
}

/// Where a button ends up on the wire: `(column, is_high_byte, bit)`
pub fn locate(id: ButtonId) -> Option<(usize, bool, u8)> {
    INDEX_MASK.iter().enumerate().find_map(|(column, slots)| {
        slots
            .iter()
            .position(|&entry| entry == Some(id.index() as u8))
            .map(|slot| {
                let high = slot >= SLOTS_PER_BYTE;
                (column, high, (slot % SLOTS_PER_BYTE) as u8)
            })
    })
}
