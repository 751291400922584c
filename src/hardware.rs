//! Peripheral traits for platform-agnostic clock control.
//!
//! Implement these for your board's registers. None of the methods can fail:
//! handle any bus or register errors inside the implementation.

use crate::types::ConfigError;

/// Timer programming computed from the input clock and the wanted tick rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerSetup {
    /// Value loaded into the period registers (input clocks per tick minus one).
    pub period: u32,

    /// Reload automatically after each timeout.
    pub continuous: bool,

    /// Raise an interrupt on timeout.
    pub interrupt_enabled: bool,
}

impl TimerSetup {
    /// Computes a continuous setup for `tick_hz` timeouts per second.
    ///
    /// Interrupts start disabled; see [`TimerSetup::with_interrupt`].
    pub fn from_rates(clock_hz: u32, tick_hz: u32) -> Result<Self, ConfigError> {
        if tick_hz == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        if tick_hz > clock_hz {
            return Err(ConfigError::TickRateAboveClock { tick_hz, clock_hz });
        }

        Ok(Self {
            period: clock_hz / tick_hz - 1,
            continuous: true,
            interrupt_enabled: false,
        })
    }

    /// Returns the setup with the timeout interrupt enabled or disabled.
    pub fn with_interrupt(mut self, enabled: bool) -> Self {
        self.interrupt_enabled = enabled;
        self
    }

    /// Low 16 bits of the period, for timers with split period registers.
    #[inline]
    pub fn period_low(&self) -> u16 {
        (self.period & 0xFFFF) as u16
    }

    /// High 16 bits of the period.
    #[inline]
    pub fn period_high(&self) -> u16 {
        (self.period >> 16) as u16
    }
}

/// Periodic hardware timer.
pub trait IntervalTimer {
    /// Stops the timer, clears any pending timeout, loads `setup` and starts it.
    fn configure(&mut self, setup: TimerSetup);

    /// Returns true if the timeout flag is set.
    fn has_timed_out(&mut self) -> bool;

    /// Clears the timeout flag.
    fn acknowledge_timeout(&mut self);
}

/// Bank of multiplexed seven-segment digits.
pub trait SegmentDisplay {
    /// Writes an active-low segment pattern to slot `index`.
    ///
    /// Callers only pass indices below [`SLOT_COUNT`](crate::SLOT_COUNT).
    fn write_slot(&mut self, index: usize, pattern: u8);
}

/// Bank of toggle switches read as one register.
pub trait SwitchPort {
    /// Reads the current level of every switch, bit `n` for switch line `n`.
    fn read_switches(&mut self) -> u32;

    /// Reads the level of a single line.
    fn read_level(&mut self, line: u8) -> bool {
        self.read_switches()
            .checked_shr(u32::from(line))
            .unwrap_or(0)
            & 1
            == 1
    }
}

/// Edge-capture register attached to a [`SwitchPort`].
///
/// A captured edge stays latched until acknowledged by writing its bit back.
pub trait EdgeCapture {
    /// Returns the latched edge bits.
    fn pending_edges(&mut self) -> u32;

    /// Clears the edge bits set in `mask`.
    fn acknowledge_edges(&mut self, mask: u32);

    /// Selects which lines raise an interrupt on an edge.
    fn set_interrupt_mask(&mut self, mask: u32);
}

/// Momentary push-button.
pub trait PushButton {
    /// Returns true while the button is held down.
    fn is_pressed(&mut self) -> bool;
}

/// Row of status LEDs, bit `n` lighting LED `n`.
pub trait StatusLeds {
    /// Sets all LEDs at once. Only the low ten bits are meaningful.
    fn set_leds(&mut self, mask: u16);
}

/// Global interrupt enable.
pub trait InterruptControl {
    /// Enables interrupts. Called once, after every peripheral is configured.
    fn enable_interrupts(&mut self);
}

/// Stand-in for boards without switches.
///
/// Reads all-low and never reports an edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSwitches;

impl SwitchPort for NoSwitches {
    fn read_switches(&mut self) -> u32 {
        0
    }
}

impl EdgeCapture for NoSwitches {
    fn pending_edges(&mut self) -> u32 {
        0
    }

    fn acknowledge_edges(&mut self, _mask: u32) {}

    fn set_interrupt_mask(&mut self, _mask: u32) {}
}
