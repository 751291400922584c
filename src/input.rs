//! Switch and push-button input channels.
//!
//! The edge channel reacts to latched switch edges and is meant to run from an
//! interrupt. The button channel samples a push-button level every loop
//! iteration and uses the switches to set a time field.

use crate::clock_time::ClockTime;
use crate::config::{ButtonConfig, EdgeConfig};
use crate::display;
use crate::hardware::{EdgeCapture, PushButton, SegmentDisplay, SwitchPort};
use crate::log::{debug, info, warn};
use crate::types::{EdgeProfile, FieldSelector, ReleaseWait};

/// Position of the two field-selector switches (`SW[9:8]`).
pub const SELECTOR_SHIFT: u32 = 8;

/// Switches carrying the new field value (`SW[5:0]`).
pub const VALUE_MASK: u8 = 0x3F;

/// Last observed state of a monitored switch line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputLatch {
    level: bool,
    edges_seen: u32,
}

impl InputLatch {
    /// Level sampled after the most recent acknowledged edge.
    #[inline]
    pub fn level(&self) -> bool {
        self.level
    }

    /// Number of edges acknowledged so far, wrapping.
    #[inline]
    pub fn edges_seen(&self) -> u32 {
        self.edges_seen
    }
}

/// What the edge channel did with a pending edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EdgeEvent {
    /// Line level sampled after acknowledging.
    pub level: bool,

    /// `advance()` calls made.
    pub advances: u8,
}

/// Edge-triggered switch channel.
///
/// A pending edge on the monitored line is acknowledged by writing its bit
/// back to the capture register before the level is sampled. An edge left
/// unacknowledged would fire again on the next call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EdgeChannel {
    line: u8,
    profile: EdgeProfile,
    latch: InputLatch,
}

impl EdgeChannel {
    /// Creates a channel watching `line`.
    pub const fn new(line: u8, profile: EdgeProfile) -> Self {
        Self {
            line,
            profile,
            latch: InputLatch {
                level: false,
                edges_seen: 0,
            },
        }
    }

    /// Creates a channel from its configuration.
    pub const fn from_config(config: &EdgeConfig) -> Self {
        Self::new(config.line, config.profile)
    }

    /// Capture-register bit of the monitored line.
    #[inline]
    pub fn mask(&self) -> u32 {
        1u32.checked_shl(u32::from(self.line)).unwrap_or(0)
    }

    /// Clears every latched edge and unmasks only the monitored line.
    pub fn arm<S: EdgeCapture>(&self, switches: &mut S) {
        switches.acknowledge_edges(u32::MAX);
        switches.set_interrupt_mask(self.mask());
    }

    /// Handles a pending edge on the monitored line, if there is one.
    ///
    /// When the line reads high after the edge the clock advances once or
    /// twice, per the profile, and the display is redrawn once.
    pub fn service<S, D>(
        &mut self,
        switches: &mut S,
        time: &mut ClockTime,
        display: &mut D,
    ) -> Option<EdgeEvent>
    where
        S: SwitchPort + EdgeCapture,
        D: SegmentDisplay,
    {
        let mask = self.mask();
        if switches.pending_edges() & mask == 0 {
            return None;
        }

        switches.acknowledge_edges(mask);
        let level = switches.read_level(self.line);
        self.latch.level = level;
        self.latch.edges_seen = self.latch.edges_seen.wrapping_add(1);

        let mut advances = 0;
        if level {
            advances = self.profile.advances();
            for _ in 0..advances {
                time.advance();
            }
            display::render(display, time);
        }

        debug!("edge on line {}: level {}", self.line, level);
        Some(EdgeEvent { level, advances })
    }

    /// The line's latch.
    #[inline]
    pub fn latch(&self) -> &InputLatch {
        &self.latch
    }

    /// Monitored line.
    #[inline]
    pub fn line(&self) -> u8 {
        self.line
    }
}

/// What the button channel did in one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Button not pressed.
    Idle,

    /// Button pressed with the exit line up. Time untouched.
    Exit,

    /// Button pressed and the selected field written.
    Set {
        /// Field written, possibly [`FieldSelector::None`].
        selector: FieldSelector,

        /// False if a bounded release wait ran out.
        released: bool,
    },
}

/// Level-polled push-button channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonChannel {
    exit_line: Option<u8>,
    release: ReleaseWait,
}

impl ButtonChannel {
    /// Creates a channel from its configuration.
    pub const fn new(config: &ButtonConfig) -> Self {
        Self {
            exit_line: config.exit_line,
            release: config.release,
        }
    }

    /// Splits a switch reading into the field selector and raw value.
    #[inline]
    pub fn decode(switches: u32) -> (FieldSelector, u8) {
        let selector = FieldSelector::from_bits((switches >> SELECTOR_SHIFT) as u8);
        let value = (switches as u8) & VALUE_MASK;
        (selector, value)
    }

    /// Samples the button and applies a press.
    ///
    /// A press reads the switches, writes the selected field, redraws and then
    /// blocks until the button reads released. Never call this from an
    /// interrupt handler.
    pub fn service<B, S, D>(
        &self,
        button: &mut B,
        switches: &mut S,
        time: &mut ClockTime,
        display: &mut D,
    ) -> ButtonEvent
    where
        B: PushButton,
        S: SwitchPort,
        D: SegmentDisplay,
    {
        if !button.is_pressed() {
            return ButtonEvent::Idle;
        }

        let reading = switches.read_switches();
        if let Some(line) = self.exit_line {
            if reading.checked_shr(u32::from(line)).unwrap_or(0) & 1 == 1 {
                info!("exit requested");
                return ButtonEvent::Exit;
            }
        }

        let (selector, value) = Self::decode(reading);
        time.set_field(selector, value);
        display::render(display, time);
        debug!("set {} from switches", selector);

        let released = self.await_release(button);
        ButtonEvent::Set { selector, released }
    }

    /// Spins until the button reads released.
    ///
    /// With [`ReleaseWait::Unbounded`] this never returns while the button is
    /// held.
    pub fn await_release<B: PushButton>(&self, button: &mut B) -> bool {
        match self.release {
            ReleaseWait::Unbounded => {
                while button.is_pressed() {
                    core::hint::spin_loop();
                }
                true
            }
            ReleaseWait::Polls(limit) => {
                for _ in 0..limit {
                    if !button.is_pressed() {
                        return true;
                    }
                    core::hint::spin_loop();
                }
                warn!("button still held after {} polls", limit);
                false
            }
        }
    }
}
