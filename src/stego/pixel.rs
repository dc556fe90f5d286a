//! Packing of one payload byte into the low bits of one pixel.
//!
//! Two colour channels carry a 3-bit field and the remaining ("special")
//! channel carries a 2-bit field, so the three fields tile exactly 8 bits.
//! A control byte picks the special channel and the order in which the
//! channels are visited. Alpha is never touched.

/// Number of low bits of each channel that may be overwritten.
pub const CHANNEL_BITS: u8 = 3;

/// Mask selecting the writable low bits of a channel.
const LOW_MASK: u8 = 0b0000_0111;

/// Bytes per RGBA pixel.
pub const PIXEL_SIZE: usize = 4;

/// Starting bit of each channel's field, indexed `[special][channel]`.
const BIT_OFFSETS: [[u8; 3]; 3] = [
    // R: 6..7, G: 3..5, B: 0..2
    [6, 3, 0],
    // R: 3..5, G: 6..7, B: 0..2
    [3, 6, 0],
    // R: 0..2, G: 5..7, B: 3..4
    [0, 5, 3],
];

/// Channel visiting order and field widths derived from one control byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    /// Permutation of channel indices; `order[0]` holds the lowest bit-group.
    pub order: [usize; 3],
    /// Channel carrying the 2-bit field.
    pub special: usize,
}

impl FieldLayout {
    /// Derives the layout for `control`.
    ///
    /// Bits 2..=4 select one of the six channel permutations, while
    /// `control % 3` independently selects the special channel.
    pub fn from_control(control: u8) -> Self {
        let a = ((control >> 3) % 3) as usize;
        let b = (a + ((control >> 2) & 1) as usize + 1) % 3;
        let c = 3 - a - b;

        Self {
            order: [a, b, c],
            special: (control % 3) as usize,
        }
    }

    /// Width in bits of `channel`'s field.
    pub fn width(&self, channel: usize) -> u8 {
        if channel == self.special {
            2
        } else {
            CHANNEL_BITS
        }
    }

    /// Bit offset of `channel`'s field inside the payload byte.
    pub fn offset(&self, channel: usize) -> u8 {
        BIT_OFFSETS[self.special][channel]
    }

    /// Channels from highest bit-group to lowest.
    fn channels(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().rev().copied()
    }
}

/// Writes `byte` into the RGB low bits of `pixel`.
///
/// Only the low [`CHANNEL_BITS`] of R, G and B change.
pub fn pack(pixel: &mut [u8; PIXEL_SIZE], byte: u8, control: u8) {
    let layout = FieldLayout::from_control(control);

    for channel in layout.channels() {
        let mask = (1u8 << layout.width(channel)) - 1;
        let field = (byte >> layout.offset(channel)) & mask;
        pixel[channel] = (pixel[channel] & !LOW_MASK) | field;
    }
}

/// Reads back the byte stored in `pixel` under `control`.
///
/// Always reads three raw bits per channel; a 2-bit field written by
/// [`pack`] has its third bit cleared.
pub fn unpack(pixel: &[u8; PIXEL_SIZE], control: u8) -> u8 {
    let layout = FieldLayout::from_control(control);

    layout.channels().fold(0u8, |acc, channel| {
        acc | ((pixel[channel] & LOW_MASK) << layout.offset(channel))
    })
}

/// Clears the writable low bits of every byte of `pixel`, alpha included.
pub fn clear_low_bits(pixel: &[u8; PIXEL_SIZE]) -> [u8; PIXEL_SIZE] {
    pixel.map(|b| b & !LOW_MASK)
}
