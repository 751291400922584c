//! Shared test infrastructure for segment-clock integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use segment_clock::{
    EdgeCapture, InterruptControl, IntervalTimer, PushButton, SLOT_COUNT, SegmentDisplay,
    StatusLeds, SwitchPort, TimerSetup, segments,
};

// ============================================================================
// Mock Timer
// ============================================================================

/// Interval timer whose timeout flag is raised by the test
pub struct MockTimer {
    timed_out: bool,
    acknowledgements: u32,
    setup: Option<TimerSetup>,
}

impl MockTimer {
    pub fn new() -> Self {
        Self {
            timed_out: false,
            acknowledgements: 0,
            setup: None,
        }
    }

    /// Raise the timeout flag, as the hardware would at the end of a period
    pub fn fire(&mut self) {
        self.timed_out = true;
    }

    pub fn is_flag_set(&self) -> bool {
        self.timed_out
    }

    pub fn acknowledgements(&self) -> u32 {
        self.acknowledgements
    }

    pub fn setup(&self) -> Option<TimerSetup> {
        self.setup
    }
}

impl IntervalTimer for MockTimer {
    fn configure(&mut self, setup: TimerSetup) {
        self.timed_out = false;
        self.setup = Some(setup);
    }

    fn has_timed_out(&mut self) -> bool {
        self.timed_out
    }

    fn acknowledge_timeout(&mut self) {
        self.timed_out = false;
        self.acknowledgements += 1;
    }
}

// ============================================================================
// Mock Display
// ============================================================================

/// Display that keeps the current slot contents and counts writes
pub struct MockDisplay {
    slots: [u8; SLOT_COUNT],
    writes: usize,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self {
            slots: [0; SLOT_COUNT],
            writes: 0,
        }
    }

    pub fn slots(&self) -> [u8; SLOT_COUNT] {
        self.slots
    }

    /// Number of full redraws (every render writes all slots)
    pub fn renders(&self) -> usize {
        self.writes / SLOT_COUNT
    }

    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl SegmentDisplay for MockDisplay {
    fn write_slot(&mut self, index: usize, pattern: u8) {
        self.slots[index] = pattern;
        self.writes += 1;
    }
}

// ============================================================================
// Mock Switches
// ============================================================================

/// Switch bank with an edge-capture register that records acknowledgements
pub struct MockSwitches {
    levels: u32,
    edges: u32,
    interrupt_mask: u32,
    acknowledged: heapless::Vec<u32, 32>,
}

impl MockSwitches {
    pub fn new() -> Self {
        Self {
            levels: 0,
            edges: 0,
            interrupt_mask: 0,
            acknowledged: heapless::Vec::new(),
        }
    }

    pub fn set_levels(&mut self, levels: u32) {
        self.levels = levels;
    }

    /// Flip a switch to `high`, latching an edge on its line
    pub fn toggle(&mut self, line: u8, high: bool) {
        if high {
            self.levels |= 1 << line;
        } else {
            self.levels &= !(1 << line);
        }
        self.edges |= 1 << line;
    }

    pub fn pending(&self) -> u32 {
        self.edges
    }

    pub fn interrupt_mask(&self) -> u32 {
        self.interrupt_mask
    }

    pub fn acknowledged(&self) -> &[u32] {
        &self.acknowledged
    }
}

impl SwitchPort for MockSwitches {
    fn read_switches(&mut self) -> u32 {
        self.levels
    }
}

impl EdgeCapture for MockSwitches {
    fn pending_edges(&mut self) -> u32 {
        self.edges
    }

    fn acknowledge_edges(&mut self, mask: u32) {
        self.edges &= !mask;
        let _ = self.acknowledged.push(mask);
    }

    fn set_interrupt_mask(&mut self, mask: u32) {
        self.interrupt_mask = mask;
    }
}

// ============================================================================
// Mock Button
// ============================================================================

/// Push-button that stays released for a while, then is held for a number of samples
pub struct MockButton {
    idle_samples: u32,
    held_samples: u32,
    samples: u32,
}

impl MockButton {
    pub fn new() -> Self {
        Self {
            idle_samples: 0,
            held_samples: 0,
            samples: 0,
        }
    }

    /// Read pressed for the next `samples` reads
    pub fn hold_for(&mut self, samples: u32) {
        self.idle_samples = 0;
        self.held_samples = samples;
    }

    /// Read released for `idle` reads, then pressed for `held` reads
    pub fn press_after(&mut self, idle: u32, held: u32) {
        self.idle_samples = idle;
        self.held_samples = held;
    }

    pub fn samples(&self) -> u32 {
        self.samples
    }

    pub fn is_held(&self) -> bool {
        self.idle_samples == 0 && self.held_samples > 0
    }
}

impl PushButton for MockButton {
    fn is_pressed(&mut self) -> bool {
        self.samples += 1;
        if self.idle_samples > 0 {
            self.idle_samples -= 1;
            return false;
        }
        if self.held_samples > 0 {
            self.held_samples -= 1;
            return true;
        }
        false
    }
}

// ============================================================================
// Mock LEDs
// ============================================================================

/// LED row recording every mask written
pub struct MockLeds {
    history: heapless::Vec<u16, 64>,
}

impl MockLeds {
    pub fn new() -> Self {
        Self {
            history: heapless::Vec::new(),
        }
    }

    pub fn last(&self) -> Option<u16> {
        self.history.last().copied()
    }

    pub fn history(&self) -> &[u16] {
        &self.history
    }
}

impl StatusLeds for MockLeds {
    fn set_leds(&mut self, mask: u16) {
        let _ = self.history.push(mask);
    }
}

// ============================================================================
// Mock Interrupt Controller
// ============================================================================

pub struct MockIrq {
    pub enabled: bool,
}

impl MockIrq {
    pub fn new() -> Self {
        Self { enabled: false }
    }
}

impl InterruptControl for MockIrq {
    fn enable_interrupts(&mut self) {
        self.enabled = true;
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Expected slot contents for `digits` (least significant first), rest blank
pub fn expected_slots(digits: &[u8]) -> [u8; SLOT_COUNT] {
    let mut slots = [segments::BLANK; SLOT_COUNT];
    for (slot, &digit) in slots.iter_mut().zip(digits) {
        *slot = segments::encode(digit);
    }
    slots
}
