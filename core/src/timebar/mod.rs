//! Action-point fill timer
//!
//! A `TimeBar` accumulates fill percentage over a configured segment
//! duration and reports exactly one completion per 100% crossing. It is a
//! pure function of elapsed time plus the caller's pause/AP inputs: no
//! clocks, no callbacks, no rendering. Owners drive it with `advance` and
//! react to the returned outcome.

mod bar;


pub use bar::{FillInputs, TickOutcome, TimeBar, MIN_SEGMENT_MS, MIN_STEP_MS};
