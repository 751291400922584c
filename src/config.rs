//! Clock configuration and the named profiles.

use crate::clock_time::ClockTime;
use crate::hardware::TimerSetup;
use crate::input::{SELECTOR_SHIFT, VALUE_MASK};
use crate::types::{CauseMatch, ClockFormat, ConfigError, EdgeProfile, HourWrap, ReleaseWait};

/// Input clock of the interval timer on the reference board, in Hz.
pub const DEFAULT_TIMER_CLOCK_HZ: u32 = 30_000_000;

/// Raw timer timeouts per second.
pub const DEFAULT_TICK_HZ: u32 = 10;

/// Timeouts per logical second.
pub const DEFAULT_DIVISOR: u16 = 10;

/// Interrupt cause raised by the interval timer on the reference board.
pub const TIMER_CAUSE: u32 = 16;

/// Interrupt cause raised by the switch edge-capture block.
pub const SWITCH_CAUSE: u32 = 17;

/// LED toggled by the polling loop on every timeout.
pub const HEARTBEAT_LED: u16 = 0x001;

/// Switch edge channel settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EdgeConfig {
    /// Monitored switch line.
    pub line: u8,

    /// Advances per active edge.
    pub profile: EdgeProfile,

    /// Interrupt cause that reports a pending edge.
    pub cause: CauseMatch,
}

/// Push-button channel settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonConfig {
    /// Switch line that ends the polling loop when read during a press.
    pub exit_line: Option<u8>,

    /// Debounce wait policy.
    pub release: ReleaseWait,
}

/// Everything needed to build a dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockConfig {
    /// Timer events per logical second.
    pub divisor: u16,

    /// Tick counter value at start-up.
    pub initial_count: u16,

    /// Display format.
    pub format: ClockFormat,

    /// Hours modulus.
    pub hour_wrap: HourWrap,

    /// Start time as packed BCD, see [`ClockTime::to_packed`].
    pub start: u32,

    /// Timer input clock in Hz.
    pub timer_clock_hz: u32,

    /// Raw timer timeouts per second.
    pub tick_hz: u32,

    /// Interrupt causes accepted for the timer.
    pub timer_cause: CauseMatch,

    /// Switch edge channel, if any.
    pub edge: Option<EdgeConfig>,

    /// Push-button channel settings for the polling loop.
    pub button: ButtonConfig,

    /// LED mask toggled on each timeout in the polling loop.
    pub heartbeat_mask: u16,
}

impl Default for ClockConfig {
    fn default() -> Self {
        ClockConfig::polled()
    }
}

impl ClockConfig {
    /// Timer interrupt only: `MM:SS` starting at 59:57.
    ///
    /// The cause number is not checked; the timer's status flag decides.
    pub const fn timer_interrupt() -> Self {
        Self {
            divisor: DEFAULT_DIVISOR,
            initial_count: 0,
            format: ClockFormat::MinutesSeconds,
            hour_wrap: HourWrap::Day,
            start: 0x5957,
            timer_clock_hz: DEFAULT_TIMER_CLOCK_HZ,
            tick_hz: DEFAULT_TICK_HZ,
            timer_cause: CauseMatch::Any,
            edge: None,
            button: ButtonConfig {
                exit_line: None,
                release: ReleaseWait::Unbounded,
            },
            heartbeat_mask: HEARTBEAT_LED,
        }
    }

    /// Timer interrupt on cause 16 plus switch 3 edges on cause 17.
    ///
    /// An edge that leaves switch 3 high advances the clock twice.
    pub const fn switch_interrupt() -> Self {
        Self {
            start: 0x0000,
            timer_cause: CauseMatch::Exactly(TIMER_CAUSE),
            edge: Some(EdgeConfig {
                line: 3,
                profile: EdgeProfile::Double,
                cause: CauseMatch::Exactly(SWITCH_CAUSE),
            }),
            ..Self::timer_interrupt()
        }
    }

    /// Polled timer with `HH:MM:SS`, hours wrapping at 100, set by button.
    pub const fn polled() -> Self {
        Self {
            format: ClockFormat::HoursMinutesSeconds,
            hour_wrap: HourWrap::Hundred,
            start: 0x00_0000,
            ..Self::timer_interrupt()
        }
    }

    /// Polled clock whose button press with switch 7 (bit 6) up ends the loop.
    pub const fn button_only() -> Self {
        Self {
            button: ButtonConfig {
                exit_line: Some(6),
                release: ReleaseWait::Unbounded,
            },
            ..Self::polled()
        }
    }

    /// Sets the divisor.
    pub fn with_divisor(mut self, divisor: u16) -> Self {
        self.divisor = divisor;
        self
    }

    /// Sets the tick counter's start-up value.
    pub fn with_initial_count(mut self, count: u16) -> Self {
        self.initial_count = count;
        self
    }

    /// Sets the start time from fields.
    pub fn with_start(self, hours: u8, minutes: u8, seconds: u8) -> Self {
        let bcd = |value: u8| -> u32 { (u32::from(value / 10) << 4) | u32::from(value % 10) };
        self.with_start_packed((bcd(hours) << 16) | (bcd(minutes) << 8) | bcd(seconds))
    }

    /// Sets the start time as packed BCD.
    pub fn with_start_packed(mut self, packed: u32) -> Self {
        self.start = packed;
        self
    }

    /// Sets the display format and hours modulus.
    pub fn with_layout(mut self, format: ClockFormat, hour_wrap: HourWrap) -> Self {
        self.format = format;
        self.hour_wrap = hour_wrap;
        self
    }

    /// Sets the timer clock and tick rate.
    pub fn with_timer_rates(mut self, clock_hz: u32, tick_hz: u32) -> Self {
        self.timer_clock_hz = clock_hz;
        self.tick_hz = tick_hz;
        self
    }

    /// Sets or removes the switch edge channel.
    pub fn with_edge(mut self, edge: Option<EdgeConfig>) -> Self {
        self.edge = edge;
        self
    }

    /// Sets the exit line.
    pub fn with_exit_line(mut self, line: Option<u8>) -> Self {
        self.button.exit_line = line;
        self
    }

    /// Sets the debounce wait policy.
    pub fn with_release_wait(mut self, release: ReleaseWait) -> Self {
        self.button.release = release;
        self
    }

    /// Checks every setting that would otherwise cause silent drift.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.divisor == 0 {
            return Err(ConfigError::ZeroDivisor);
        }
        self.timer_setup()?;

        if let Some(edge) = self.edge {
            if edge.line >= 32 {
                return Err(ConfigError::LineOutOfRange(edge.line));
            }
        }

        if let Some(line) = self.button.exit_line {
            if line >= 32 {
                return Err(ConfigError::LineOutOfRange(line));
            }
            let field_bits = u32::from(VALUE_MASK) | (0b11 << SELECTOR_SHIFT);
            if field_bits & (1 << line) != 0 {
                return Err(ConfigError::ExitLineOverlapsField(line));
            }
        }

        if !self.start_is_valid() {
            return Err(ConfigError::StartTimeOutOfRange);
        }

        Ok(())
    }

    /// Timer programming for this configuration, interrupts disabled.
    pub fn timer_setup(&self) -> Result<TimerSetup, ConfigError> {
        TimerSetup::from_rates(self.timer_clock_hz, self.tick_hz)
    }

    /// The start time.
    pub fn start_time(&self) -> ClockTime {
        ClockTime::from_packed(self.start, self.format, self.hour_wrap)
    }

    fn start_is_valid(&self) -> bool {
        let nibbles_are_decimal = (0..6).all(|i| (self.start >> (4 * i)) & 0xF <= 9);
        nibbles_are_decimal
            && self.start >> 24 == 0
            && self.start_time().to_packed() == self.start
    }
}
