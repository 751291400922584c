//! Interrupt-shared home for an [`InterruptDispatcher`].
//!
//! The dispatcher lives in a `static` guarded by a critical section so the
//! interrupt entry point and the main program can both reach it. The main
//! program only reads through it; all mutation happens in the handler.
//!
//! ```ignore
//! static CLOCK: SharedDispatcher<BoardTimer, BoardHex, BoardSwitches> = SharedDispatcher::new();
//!
//! fn main() -> ! {
//!     let dispatcher = InterruptDispatcher::new(config, timer, hex, switches).unwrap();
//!     CLOCK.install(dispatcher, &mut irq).unwrap();
//!     loop { /* unrelated work */ }
//! }
//!
//! fn handle_interrupt(cause: u32) {
//!     CLOCK.handle_interrupt(cause);
//! }
//! ```

use core::cell::RefCell;
use critical_section::Mutex;

use crate::dispatcher::{InterruptDispatcher, InterruptOutcome};
use crate::hardware::{EdgeCapture, InterruptControl, IntervalTimer, SegmentDisplay, SwitchPort};
use crate::types::ConfigError;

/// An [`InterruptDispatcher`] shared between the main program and the
/// interrupt handler.
pub struct SharedDispatcher<T, D, S>
where
    T: IntervalTimer,
    D: SegmentDisplay,
    S: SwitchPort + EdgeCapture,
{
    inner: Mutex<RefCell<Option<InterruptDispatcher<T, D, S>>>>,
}

impl<T, D, S> SharedDispatcher<T, D, S>
where
    T: IntervalTimer,
    D: SegmentDisplay,
    S: SwitchPort + EdgeCapture,
{
    /// Creates an empty slot, usable in a `static`.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Starts `dispatcher`, stores it and only then enables interrupts.
    ///
    /// Interrupts must be globally disabled on entry. If starting fails,
    /// nothing is stored and interrupts stay disabled.
    pub fn install<I: InterruptControl>(
        &self,
        mut dispatcher: InterruptDispatcher<T, D, S>,
        irq: &mut I,
    ) -> Result<(), ConfigError> {
        dispatcher.start()?;
        critical_section::with(|cs| {
            self.inner.borrow(cs).replace(Some(dispatcher));
        });
        irq.enable_interrupts();
        Ok(())
    }

    /// Forwards an interrupt to the stored dispatcher.
    ///
    /// Before [`install`](Self::install) every cause is ignored.
    pub fn handle_interrupt(&self, cause: u32) -> InterruptOutcome {
        critical_section::with(|cs| match self.inner.borrow(cs).borrow_mut().as_mut() {
            Some(dispatcher) => dispatcher.handle_interrupt(cause),
            None => InterruptOutcome::default(),
        })
    }

    /// Runs `f` on the stored dispatcher inside a critical section.
    pub fn with<R>(&self, f: impl FnOnce(&mut InterruptDispatcher<T, D, S>) -> R) -> Option<R> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().as_mut().map(f))
    }

    /// Returns true once a dispatcher is installed.
    pub fn is_installed(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().is_some())
    }
}

impl<T, D, S> Default for SharedDispatcher<T, D, S>
where
    T: IntervalTimer,
    D: SegmentDisplay,
    S: SwitchPort + EdgeCapture,
{
    fn default() -> Self {
        Self::new()
    }
}
