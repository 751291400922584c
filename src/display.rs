//! Rendering a [`ClockTime`] onto the six display slots.
//!
//! Slot 0 is the rightmost, least significant digit. Every render rewrites all
//! slots, blanking the ones the clock format does not use.

use crate::clock_time::ClockTime;
use crate::hardware::SegmentDisplay;
use crate::segments;

/// Number of physical seven-segment slots.
pub const SLOT_COUNT: usize = 6;

/// Patterns for every display slot, indexed by slot number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SlotPatterns(pub [u8; SLOT_COUNT]);

impl SlotPatterns {
    /// All slots blank.
    pub const BLANK: Self = SlotPatterns([segments::BLANK; SLOT_COUNT]);

    /// Projects `time` onto the slots without touching hardware.
    pub fn project(time: &ClockTime) -> Self {
        let mut slots = [segments::blank(); SLOT_COUNT];
        for (slot, &digit) in slots.iter_mut().zip(time.decompose().iter()) {
            *slot = segments::encode(digit);
        }
        SlotPatterns(slots)
    }

    /// Pattern for slot `index`, if it exists.
    #[inline]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.0.get(index).copied()
    }
}

/// Writes `pattern` to slot `index`, ignoring indices past the last slot.
#[inline]
pub fn write_slot<D: SegmentDisplay>(display: &mut D, index: usize, pattern: u8) {
    if index < SLOT_COUNT {
        display.write_slot(index, pattern);
    }
}

/// Writes every slot of `patterns` to the display.
pub fn show<D: SegmentDisplay>(display: &mut D, patterns: &SlotPatterns) {
    for (index, &pattern) in patterns.0.iter().enumerate() {
        write_slot(display, index, pattern);
    }
}

/// Renders `time` onto every slot and returns what was written.
pub fn render<D: SegmentDisplay>(display: &mut D, time: &ClockTime) -> SlotPatterns {
    let patterns = SlotPatterns::project(time);
    show(display, &patterns);
    patterns
}

/// Blanks every slot.
pub fn clear<D: SegmentDisplay>(display: &mut D) {
    show(display, &SlotPatterns::BLANK);
}
