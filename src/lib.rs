#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`segments`**: Digit to active-low seven-segment pattern encoding
//! - **`ClockTime`**: Wrapping hours/minutes/seconds register with a packed BCD form
//! - **`RateDivider`**: Turns raw timer timeouts into logical seconds
//! - **`display`**: Projects a `ClockTime` onto the six display slots
//! - **`EdgeChannel`** / **`ButtonChannel`**: Switch-edge and push-button input handling
//! - **`InterruptDispatcher`**: Interrupt entry point demultiplexing timer and switch causes
//! - **`PollingDispatcher`**: Main-loop body polling the button and the timer flag
//! - **`SharedDispatcher`**: Critical-section home for an interrupt dispatcher
//! - **`ClockConfig`**: All tunables plus the named profiles
//!
//! Hardware is reached only through the traits in [`hardware`]. Implement them
//! for your board's registers.

mod log;

pub mod segments;
pub mod types;
pub mod clock_time;
pub mod divider;
pub mod display;
pub mod hardware;
pub mod input;
pub mod config;
pub mod dispatcher;
pub mod shared;

pub use clock_time::ClockTime;
pub use config::{ButtonConfig, ClockConfig, EdgeConfig};
pub use display::{SLOT_COUNT, SlotPatterns};
pub use dispatcher::{
    ClockContext, InterruptDispatcher, InterruptOutcome, PollOutcome, PollingDispatcher,
};
pub use divider::RateDivider;
pub use hardware::{
    EdgeCapture, InterruptControl, IntervalTimer, NoSwitches, PushButton, SegmentDisplay,
    StatusLeds, SwitchPort, TimerSetup,
};
pub use input::{ButtonChannel, ButtonEvent, EdgeChannel, EdgeEvent, InputLatch};
pub use shared::SharedDispatcher;
pub use types::{
    CauseMatch, ClockFormat, ConfigError, EdgeProfile, FieldSelector, HourWrap, ReleaseWait,
};
