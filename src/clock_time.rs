//! Time register: a wrapping multi-radix counter of hours, minutes and seconds.

use crate::display::SLOT_COUNT;
use crate::types::{ClockFormat, FieldSelector, HourWrap};
use heapless::Vec;

const SECONDS_MODULUS: u8 = 60;
const MINUTES_MODULUS: u8 = 60;

/// The current clock time.
///
/// Fields always hold values below their modulus. The packed form returned by
/// [`ClockTime::to_packed`] is one BCD nibble per display digit:
///
/// ```text
/// [23:20] H10  [19:16] H1  [15:12] M10  [11:8] M1  [7:4] S10  [3:0] S1
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockTime {
    hours: u8,
    minutes: u8,
    seconds: u8,
    format: ClockFormat,
    hour_wrap: HourWrap,
}

impl ClockTime {
    /// Creates a time at 00:00:00.
    pub const fn new(format: ClockFormat, hour_wrap: HourWrap) -> Self {
        Self {
            hours: 0,
            minutes: 0,
            seconds: 0,
            format,
            hour_wrap,
        }
    }

    /// Creates a time from individual fields, clamping each into its modulus.
    pub fn from_hms(
        hours: u8,
        minutes: u8,
        seconds: u8,
        format: ClockFormat,
        hour_wrap: HourWrap,
    ) -> Self {
        Self {
            hours: hours % hour_wrap.modulus(),
            minutes: minutes % MINUTES_MODULUS,
            seconds: seconds % SECONDS_MODULUS,
            format,
            hour_wrap,
        }
    }

    /// Decodes a packed BCD value such as `0x5957` (59:57).
    ///
    /// Each nibble is taken as a decimal digit and each field is then reduced
    /// modulo its unit, so malformed input still yields a valid time.
    pub fn from_packed(packed: u32, format: ClockFormat, hour_wrap: HourWrap) -> Self {
        let pair = |shift: u32| -> u8 {
            let ones = ((packed >> shift) & 0xF) as u8;
            let tens = ((packed >> (shift + 4)) & 0xF) as u8;
            tens * 10 + ones
        };
        Self::from_hms(pair(16), pair(8), pair(0), format, hour_wrap)
    }

    /// Encodes the time as packed BCD nibbles.
    pub fn to_packed(&self) -> u32 {
        let pair = |value: u8| -> u32 { (u32::from(value / 10) << 4) | u32::from(value % 10) };
        (pair(self.hours) << 16) | (pair(self.minutes) << 8) | pair(self.seconds)
    }

    /// Advances the clock by one second, carrying into minutes and hours.
    pub fn advance(&mut self) {
        self.seconds += 1;
        if self.seconds < SECONDS_MODULUS {
            return;
        }
        self.seconds = 0;

        self.minutes += 1;
        if self.minutes < MINUTES_MODULUS {
            return;
        }
        self.minutes = 0;

        self.hours = (self.hours + 1) % self.hour_wrap.modulus();
    }

    /// Overwrites one field with `raw` reduced modulo that field's unit.
    ///
    /// Other fields are untouched and [`FieldSelector::None`] changes nothing.
    pub fn set_field(&mut self, selector: FieldSelector, raw: u8) {
        match selector {
            FieldSelector::None => {}
            FieldSelector::Seconds => self.seconds = raw % SECONDS_MODULUS,
            FieldSelector::Minutes => self.minutes = raw % MINUTES_MODULUS,
            FieldSelector::Hours => self.hours = raw % self.hour_wrap.modulus(),
        }
    }

    /// Splits the time into display digits, least significant first.
    ///
    /// Index 0 is the seconds ones digit, matching display slot 0. The length is
    /// [`ClockFormat::digit_count`].
    pub fn decompose(&self) -> Vec<u8, SLOT_COUNT> {
        let all = [
            self.seconds % 10,
            self.seconds / 10,
            self.minutes % 10,
            self.minutes / 10,
            self.hours % 10,
            self.hours / 10,
        ];

        let mut digits = Vec::new();
        for &digit in all.iter().take(self.format.digit_count()) {
            // Capacity equals the largest digit count.
            let _ = digits.push(digit);
        }
        digits
    }

    /// Hours field.
    #[inline]
    pub fn hours(&self) -> u8 {
        self.hours
    }

    /// Minutes field.
    #[inline]
    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    /// Seconds field.
    #[inline]
    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    /// Display format.
    #[inline]
    pub fn format(&self) -> ClockFormat {
        self.format
    }

    /// Hours modulus in use.
    #[inline]
    pub fn hour_wrap(&self) -> HourWrap {
        self.hour_wrap
    }
}
