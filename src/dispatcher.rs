//! Interrupt-driven and polled dispatchers for the clock.
//!
//! Both dispatchers own a [`ClockContext`] plus the peripherals they drive, and
//! they are the only code that mutates the context. They share the divider,
//! time register and renderer. They differ only in how timer and input
//! events reach them.

use crate::clock_time::ClockTime;
use crate::config::ClockConfig;
use crate::display::{self, SlotPatterns};
use crate::divider::RateDivider;
use crate::hardware::{
    EdgeCapture, IntervalTimer, PushButton, SegmentDisplay, StatusLeds, SwitchPort,
};
use crate::input::{ButtonChannel, ButtonEvent, EdgeChannel, EdgeEvent};
use crate::log::{info, trace};
use crate::types::{CauseMatch, ConfigError};

/// Clock state mutated by timer and input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockContext {
    time: ClockTime,
    divider: RateDivider,
}

impl ClockContext {
    /// Creates a context at the configured start time and tick count.
    pub fn new(config: &ClockConfig) -> Self {
        Self {
            time: config.start_time(),
            divider: RateDivider::new(config.divisor).with_count(config.initial_count),
        }
    }

    /// Feeds one acknowledged timer event through the divider.
    ///
    /// Returns true if a logical second elapsed, in which case the time has
    /// already advanced.
    pub fn on_timer_event(&mut self) -> bool {
        if self.divider.on_timer_event() {
            self.time.advance();
            true
        } else {
            false
        }
    }

    /// Current time.
    #[inline]
    pub fn time(&self) -> &ClockTime {
        &self.time
    }

    /// Current divider state.
    #[inline]
    pub fn divider(&self) -> &RateDivider {
        &self.divider
    }
}

/// What one call to [`InterruptDispatcher::handle_interrupt`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterruptOutcome {
    /// A timer timeout was acknowledged.
    pub timer_acknowledged: bool,

    /// A logical second elapsed and the display was redrawn.
    pub second_elapsed: bool,

    /// A switch edge was acknowledged.
    pub edge: Option<EdgeEvent>,
}

impl InterruptOutcome {
    /// True if the cause was not handled at all.
    pub fn is_ignored(&self) -> bool {
        !self.timer_acknowledged && self.edge.is_none()
    }
}

/// Dispatcher for the interrupt-driven model.
///
/// The platform's interrupt entry point passes its cause value to
/// [`handle_interrupt`](Self::handle_interrupt). The handler is not re-entrant
/// and runs to completion.
///
/// # Type Parameters
/// * `T` - Interval timer
/// * `D` - Seven-segment display
/// * `S` - Switches with edge capture
pub struct InterruptDispatcher<T, D, S>
where
    T: IntervalTimer,
    D: SegmentDisplay,
    S: SwitchPort + EdgeCapture,
{
    timer: T,
    display: D,
    switches: S,
    context: ClockContext,
    timer_cause: CauseMatch,
    edge: Option<(EdgeChannel, CauseMatch)>,
    config: ClockConfig,
}

impl<T, D, S> InterruptDispatcher<T, D, S>
where
    T: IntervalTimer,
    D: SegmentDisplay,
    S: SwitchPort + EdgeCapture,
{
    /// Creates a dispatcher after validating `config`.
    pub fn new(config: ClockConfig, timer: T, display: D, switches: S) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            timer,
            display,
            switches,
            context: ClockContext::new(&config),
            timer_cause: config.timer_cause,
            edge: config
                .edge
                .map(|edge| (EdgeChannel::from_config(&edge), edge.cause)),
            config,
        })
    }

    /// Configures the peripherals and draws the start time.
    ///
    /// Clears latched switch edges, unmasks the monitored line and starts the
    /// timer with its interrupt enabled. Interrupts must still be globally
    /// disabled when this runs.
    pub fn start(&mut self) -> Result<(), ConfigError> {
        let setup = self.config.timer_setup()?.with_interrupt(true);

        if let Some((channel, _)) = &self.edge {
            channel.arm(&mut self.switches);
        }
        display::render(&mut self.display, &self.context.time);
        self.timer.configure(setup);

        info!("interrupt dispatcher started, period {}", setup.period);
        Ok(())
    }

    /// Handles one interrupt.
    ///
    /// The timer branch runs when the cause matches and the timeout flag is
    /// set: the flag is acknowledged once, then the divider runs. The edge
    /// branch runs independently when its cause matches. Causes matching
    /// neither are ignored.
    pub fn handle_interrupt(&mut self, cause: u32) -> InterruptOutcome {
        let mut outcome = InterruptOutcome::default();

        if self.timer_cause.matches(cause) && self.timer.has_timed_out() {
            self.timer.acknowledge_timeout();
            outcome.timer_acknowledged = true;

            if self.context.on_timer_event() {
                display::render(&mut self.display, &self.context.time);
                outcome.second_elapsed = true;
                trace!("second elapsed");
            }
        }

        if let Some((channel, edge_cause)) = &mut self.edge {
            if edge_cause.matches(cause) {
                outcome.edge =
                    channel.service(&mut self.switches, &mut self.context.time, &mut self.display);
            }
        }

        outcome
    }

    /// Clock state.
    #[inline]
    pub fn context(&self) -> &ClockContext {
        &self.context
    }

    /// Edge channel, if configured.
    #[inline]
    pub fn edge_channel(&self) -> Option<&EdgeChannel> {
        self.edge.as_ref().map(|(channel, _)| channel)
    }

    /// Patterns the display currently shows.
    pub fn displayed(&self) -> SlotPatterns {
        SlotPatterns::project(&self.context.time)
    }

    /// Read access to the display.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Read access to the timer.
    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Read access to the switches.
    pub fn switches(&self) -> &S {
        &self.switches
    }

    /// Mutable access to the timer.
    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    /// Mutable access to the switches.
    pub fn switches_mut(&mut self) -> &mut S {
        &mut self.switches
    }
}

/// What one call to [`PollingDispatcher::poll_once`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollOutcome {
    /// Result of sampling the button, handled before the timer.
    pub button: ButtonEvent,

    /// A timer timeout was acknowledged.
    pub timer_acknowledged: bool,

    /// A logical second elapsed and the display was redrawn.
    pub second_elapsed: bool,
}

/// Dispatcher for the polled model.
///
/// Each iteration samples the button first and the timer status second, so a
/// press and a rollover seen in the same iteration both apply, press first.
///
/// # Type Parameters
/// * `T` - Interval timer
/// * `D` - Seven-segment display
/// * `S` - Switches
/// * `B` - Push-button
/// * `L` - Status LEDs
pub struct PollingDispatcher<T, D, S, B, L>
where
    T: IntervalTimer,
    D: SegmentDisplay,
    S: SwitchPort,
    B: PushButton,
    L: StatusLeds,
{
    timer: T,
    display: D,
    switches: S,
    button: B,
    leds: L,
    context: ClockContext,
    button_channel: ButtonChannel,
    heartbeat: bool,
    config: ClockConfig,
}

impl<T, D, S, B, L> PollingDispatcher<T, D, S, B, L>
where
    T: IntervalTimer,
    D: SegmentDisplay,
    S: SwitchPort,
    B: PushButton,
    L: StatusLeds,
{
    /// Creates a dispatcher after validating `config`.
    pub fn new(
        config: ClockConfig,
        timer: T,
        display: D,
        switches: S,
        button: B,
        leds: L,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            timer,
            display,
            switches,
            button,
            leds,
            context: ClockContext::new(&config),
            button_channel: ButtonChannel::new(&config.button),
            heartbeat: false,
            config,
        })
    }

    /// Starts the timer without interrupts, draws the start time and turns the
    /// LEDs off.
    pub fn start(&mut self) -> Result<(), ConfigError> {
        let setup = self.config.timer_setup()?;
        self.timer.configure(setup);
        display::render(&mut self.display, &self.context.time);
        self.leds.set_leds(0);

        info!("polling dispatcher started, period {}", setup.period);
        Ok(())
    }

    /// Runs one loop iteration.
    pub fn poll_once(&mut self) -> PollOutcome {
        let button = self.button_channel.service(
            &mut self.button,
            &mut self.switches,
            &mut self.context.time,
            &mut self.display,
        );

        let mut outcome = PollOutcome {
            button,
            timer_acknowledged: false,
            second_elapsed: false,
        };

        if self.timer.has_timed_out() {
            self.timer.acknowledge_timeout();
            outcome.timer_acknowledged = true;

            self.heartbeat = !self.heartbeat;
            self.leds
                .set_leds(if self.heartbeat { self.config.heartbeat_mask } else { 0 });

            if self.context.on_timer_event() {
                display::render(&mut self.display, &self.context.time);
                outcome.second_elapsed = true;
                trace!("second elapsed");
            }
        }

        outcome
    }

    /// Polls until the exit input is seen.
    ///
    /// Without an exit line configured this never returns.
    pub fn run(&mut self) {
        loop {
            if self.poll_once().button == ButtonEvent::Exit {
                info!("polling loop finished");
                return;
            }
        }
    }

    /// Clock state.
    #[inline]
    pub fn context(&self) -> &ClockContext {
        &self.context
    }

    /// Heartbeat LED state after the last timeout.
    #[inline]
    pub fn heartbeat(&self) -> bool {
        self.heartbeat
    }

    /// Read access to the display.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Read access to the LEDs.
    pub fn leds(&self) -> &L {
        &self.leds
    }

    /// Read access to the timer.
    pub fn timer(&self) -> &T {
        &self.timer
    }

    /// Mutable access to the timer.
    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    /// Mutable access to the switches.
    pub fn switches_mut(&mut self) -> &mut S {
        &mut self.switches
    }

    /// Mutable access to the button.
    pub fn button_mut(&mut self) -> &mut B {
        &mut self.button
    }
}
