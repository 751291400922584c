//! Core types shared by the clock components.

/// Which time units the display shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockFormat {
    /// `MM:SS` on slots 0-3. Slots 4 and 5 stay blank.
    MinutesSeconds,

    /// `HH:MM:SS` on all six slots.
    HoursMinutesSeconds,
}

impl ClockFormat {
    /// Number of display slots this format occupies.
    #[inline]
    pub const fn digit_count(self) -> usize {
        match self {
            ClockFormat::MinutesSeconds => 4,
            ClockFormat::HoursMinutesSeconds => 6,
        }
    }
}

/// Modulus of the hours unit.
///
/// Both wraps exist in the field and are kept distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HourWrap {
    /// Hours run 0-23.
    Day,

    /// Hours run 0-99, filling two display digits.
    Hundred,
}

impl HourWrap {
    /// The hours modulus.
    #[inline]
    pub const fn modulus(self) -> u8 {
        match self {
            HourWrap::Day => 24,
            HourWrap::Hundred => 100,
        }
    }
}

/// Time field chosen by the two selector switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FieldSelector {
    /// Selector `00`: leave the time alone.
    None,

    /// Selector `01`.
    Seconds,

    /// Selector `10`.
    Minutes,

    /// Selector `11`.
    Hours,
}

impl FieldSelector {
    /// Decodes the low two bits of `bits`.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            1 => FieldSelector::Seconds,
            2 => FieldSelector::Minutes,
            3 => FieldSelector::Hours,
            _ => FieldSelector::None,
        }
    }
}

/// How many times an active switch edge advances the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeProfile {
    /// One advance per active edge.
    Single,

    /// Two advances per active edge.
    Double,
}

impl EdgeProfile {
    /// Number of `advance()` calls per active edge.
    #[inline]
    pub const fn advances(self) -> u8 {
        match self {
            EdgeProfile::Single => 1,
            EdgeProfile::Double => 2,
        }
    }
}

/// How long the button channel spins waiting for release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReleaseWait {
    /// Spin until the button reads released, however long that takes.
    #[default]
    Unbounded,

    /// Give up after this many button samples.
    Polls(u32),
}

/// Which interrupt cause values a branch of the handler accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CauseMatch {
    /// Any cause value. The peripheral's own status flag decides.
    Any,

    /// Only this cause value.
    Exactly(u32),
}

impl CauseMatch {
    /// Returns true if `cause` is accepted.
    #[inline]
    pub const fn matches(self, cause: u32) -> bool {
        match self {
            CauseMatch::Any => true,
            CauseMatch::Exactly(expected) => expected == cause,
        }
    }
}

/// Configuration validation errors.
///
/// These are design-time mistakes. Nothing on the runtime path can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Rate divisor of zero.
    ZeroDivisor,

    /// Timer tick rate of zero.
    ZeroTickRate,

    /// Tick rate faster than the timer's input clock.
    TickRateAboveClock {
        /// Requested tick rate in Hz.
        tick_hz: u32,
        /// Timer input clock in Hz.
        clock_hz: u32,
    },

    /// Input line outside the 32-bit switch register.
    LineOutOfRange(u8),

    /// Exit line collides with the selector or value bits.
    ExitLineOverlapsField(u8),

    /// Start time has a field outside its modulus.
    StartTimeOutOfRange,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroDivisor => {
                write!(f, "rate divisor must be at least 1")
            }
            ConfigError::ZeroTickRate => {
                write!(f, "timer tick rate must be at least 1 Hz")
            }
            ConfigError::TickRateAboveClock { tick_hz, clock_hz } => {
                write!(
                    f,
                    "tick rate of {} Hz exceeds the timer clock of {} Hz",
                    tick_hz, clock_hz
                )
            }
            ConfigError::LineOutOfRange(line) => {
                write!(f, "input line {} is outside the switch register", line)
            }
            ConfigError::ExitLineOverlapsField(line) => {
                write!(
                    f,
                    "exit line {} overlaps the field selector or value bits",
                    line
                )
            }
            ConfigError::StartTimeOutOfRange => {
                write!(f, "start time has a field outside its modulus")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
