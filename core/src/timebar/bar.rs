//! Fill state machine for one action-point bar.

use tempo_types::EntityConfig;
use tracing::warn;

/// Minimum accumulated elapsed time (ms) before fill advances.
/// Smaller deltas are deferred to the next call rather than dropped, so
/// fine-grained tick loops fill at the same total rate as coarse ones.
pub const MIN_STEP_MS: f64 = 5.0;

/// Floor for segment duration (ms). Non-positive configured values are
/// clamped here instead of producing a bar that completes every tick.
pub const MIN_SEGMENT_MS: f64 = 1.0;

/// Per-tick inputs supplied by the bar's owner.
///
/// `ap`/`max_ap` are used only to decide cap suspension; the bar never
/// mutates resource counters itself.
#[derive(Debug, Clone, Copy)]
pub struct FillInputs {
    /// External pause switch (group stop flag).
    pub stop_fill: bool,
    pub ap: u32,
    pub max_ap: u32,
}

/// What a single `advance` call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Accumulated delta is still under [`MIN_STEP_MS`]; nothing moved.
    Deferred,
    /// Bar is paused; fill unchanged. The rest countdown may have advanced.
    Paused,
    /// Fill advanced without completing the segment.
    Filling,
    /// Fill crossed 100: one segment earned, fill reset to 0.
    Completed,
}

/// Progressive accumulation of one resource unit over `segment_ms`.
///
/// Progress is banked as speed-scaled milliseconds and the percentage is
/// derived on read; integral millisecond deltas therefore sum exactly and
/// a segment completes on the tick its full duration has elapsed, at any
/// tick granularity. Overflow past the segment boundary is discarded, so
/// a stalled caller delivering one huge delta earns at most one segment.
///
/// When a completion caps the owner's AP the bar seeds its rest countdown
/// (`stop_fill_ms`) immediately; while that countdown runs the bar stays
/// paused even if AP drops below max, and the countdown itself freezes
/// while the external `stop_fill` switch is on.
#[derive(Debug, Clone)]
pub struct TimeBar {
    segment_ms: f64,
    slow_bar: Option<f64>,
    fast_bar: Option<f64>,
    stop_fill_ms: f64,
    /// Speed-scaled elapsed ms toward the current segment.
    progress_ms: f64,
    pause_remaining_ms: f64,
    pending_ms: f64,
}

impl TimeBar {
    pub fn new(segment_ms: f64) -> Self {
        Self {
            segment_ms: clamp_segment(segment_ms),
            slow_bar: None,
            fast_bar: None,
            stop_fill_ms: 0.0,
            progress_ms: 0.0,
            pause_remaining_ms: 0.0,
            pending_ms: 0.0,
        }
    }

    /// Build a bar from an entity's static configuration.
    pub fn from_config(config: &EntityConfig) -> Self {
        Self {
            segment_ms: clamp_segment(config.segment_ms),
            slow_bar: config.slow_bar,
            fast_bar: config.fast_bar,
            stop_fill_ms: config.stop_fill_ms.max(0.0),
            progress_ms: 0.0,
            pause_remaining_ms: 0.0,
            pending_ms: 0.0,
        }
    }

    /// Current fill percentage (0..100).
    pub fn fill(&self) -> f64 {
        (self.progress_ms / self.segment_ms * 100.0).clamp(0.0, 100.0)
    }

    pub fn segment_ms(&self) -> f64 {
        self.segment_ms
    }

    /// Remaining rest countdown (ms); zero when no countdown is running.
    pub fn pause_remaining_ms(&self) -> f64 {
        self.pause_remaining_ms
    }

    /// Change the segment duration, preserving the current fill percentage.
    pub fn set_segment_ms(&mut self, segment_ms: f64) {
        let pct = self.progress_ms / self.segment_ms;
        self.segment_ms = clamp_segment(segment_ms);
        self.progress_ms = pct * self.segment_ms;
    }

    pub fn set_modifiers(&mut self, slow_bar: Option<f64>, fast_bar: Option<f64>) {
        self.slow_bar = slow_bar;
        self.fast_bar = fast_bar;
    }

    pub fn set_stop_fill_ms(&mut self, stop_fill_ms: f64) {
        self.stop_fill_ms = stop_fill_ms.max(0.0);
    }

    /// Effective fill-speed multiplier.
    ///
    /// An active slowdown (`0 < slow_bar < 1`) takes precedence over an
    /// active speedup (`fast_bar > 1`); inactive modifiers fall through
    /// to 1.
    pub fn effective_speed(&self) -> f64 {
        match (self.slow_bar, self.fast_bar) {
            (Some(slow), _) if slow > 0.0 && slow < 1.0 => slow,
            (_, Some(fast)) if fast > 1.0 => fast,
            _ => 1.0,
        }
    }

    /// Whether the bar is suspended for the given inputs: external stop,
    /// AP at cap, or a running rest countdown.
    pub fn is_paused(&self, inputs: FillInputs) -> bool {
        inputs.stop_fill || inputs.ap >= inputs.max_ap || self.pause_remaining_ms > 0.0
    }

    /// Milliseconds until the next completion at the current speed,
    /// ignoring pause state.
    pub fn remaining_ms(&self) -> f64 {
        (self.segment_ms - self.progress_ms) / self.effective_speed()
    }

    /// Advance the bar by `delta_ms` of elapsed time.
    ///
    /// Deltas accumulate until they reach [`MIN_STEP_MS`], then the whole
    /// accumulated step is applied at once. While paused the step is
    /// consumed without filling; it decrements the rest countdown instead,
    /// unless the external `stop_fill` switch is holding the countdown
    /// frozen too. The pause predicate re-reads `inputs` every call, so
    /// the bar resumes on the first tick after its conditions clear.
    pub fn advance(&mut self, delta_ms: f64, inputs: FillInputs) -> TickOutcome {
        if delta_ms > 0.0 {
            self.pending_ms += delta_ms;
        }
        if self.pending_ms < MIN_STEP_MS {
            return TickOutcome::Deferred;
        }
        let step = self.pending_ms;
        self.pending_ms = 0.0;

        if self.is_paused(inputs) {
            if !inputs.stop_fill && self.pause_remaining_ms > 0.0 {
                self.pause_remaining_ms = (self.pause_remaining_ms - step).max(0.0);
            }
            return TickOutcome::Paused;
        }

        self.progress_ms += step * self.effective_speed();
        if self.progress_ms >= self.segment_ms {
            // Overflow past the boundary is discarded: one completion per crossing
            self.progress_ms = 0.0;
            if inputs.ap.saturating_add(1) >= inputs.max_ap && self.stop_fill_ms > 0.0 {
                self.pause_remaining_ms = self.stop_fill_ms;
            }
            return TickOutcome::Completed;
        }
        TickOutcome::Filling
    }
}

fn clamp_segment(segment_ms: f64) -> f64 {
    // Negated comparison so NaN also lands in the clamp branch
    if !(segment_ms >= MIN_SEGMENT_MS) {
        warn!(segment_ms, "[TIMEBAR] Invalid segment time, clamped to minimum");
        MIN_SEGMENT_MS
    } else {
        segment_ms
    }
}
