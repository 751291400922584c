//! Rate divider turning raw timer timeouts into logical seconds.

/// Divides raw timer events down to one logical second.
///
/// The counter stays in `0..divisor` and wraps to zero exactly when it reaches
/// the divisor; that wrap is the only thing that reports a second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RateDivider {
    count: u16,
    divisor: u16,
}

impl RateDivider {
    /// Creates a divider with the counter at zero.
    ///
    /// A divisor of zero is treated as one. Configurations are expected to be
    /// validated before they get here.
    pub const fn new(divisor: u16) -> Self {
        Self {
            count: 0,
            divisor: if divisor == 0 { 1 } else { divisor },
        }
    }

    /// Returns the divider with its counter preloaded, reduced into range.
    pub const fn with_count(mut self, count: u16) -> Self {
        self.count = count % self.divisor;
        self
    }

    /// Registers one acknowledged timer event.
    ///
    /// Must be called exactly once per event. Returns true when a logical
    /// second has elapsed.
    #[inline]
    pub fn on_timer_event(&mut self) -> bool {
        self.count += 1;
        if self.count >= self.divisor {
            self.count = 0;
            true
        } else {
            false
        }
    }

    /// Events seen since the last elapsed second.
    #[inline]
    pub fn count(&self) -> u16 {
        self.count
    }

    /// Events per logical second.
    #[inline]
    pub fn divisor(&self) -> u16 {
        self.divisor
    }

    /// Puts the counter back to zero.
    pub fn reset(&mut self) {
        self.count = 0;
    }
}
