//! Counters that animate from zero to a target over a fixed duration.
//!
//! [`CountUp`] is the pure tick arithmetic; [`CountUpDisplay`] drives it from a
//! Tokio interval and publishes every frame through a watch channel.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

/// Default animation length.
pub const DEFAULT_DURATION_SECS: f64 = 2.0;

/// Default tick cadence.
pub const DEFAULT_TICK_RATE_HZ: u32 = 60;

/// Format an integer with pt-BR digit grouping (`112272` → `112.272`).
#[must_use]
pub fn format_pt_br(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Tick-by-tick state of one counter.
///
/// Every tick advances by `target / (duration × rate)`. Intermediate values
/// are floored; the tick that reaches or passes the target shows the target
/// itself and finishes the animation.
#[derive(Debug, Clone, PartialEq)]
pub struct CountUp {
    target: u64,
    duration_secs: f64,
    tick_rate_hz: u32,
    ticks: u64,
    current: u64,
    finished: bool,
}

impl CountUp {
    /// Create a counter at zero.
    #[must_use]
    pub fn new(target: u64, duration_secs: f64, tick_rate_hz: u32) -> Self {
        Self {
            target,
            duration_secs: duration_secs.max(0.0),
            tick_rate_hz: tick_rate_hz.max(1),
            ticks: 0,
            current: 0,
            finished: false,
        }
    }

    /// Create a counter with the default duration and cadence.
    #[must_use]
    pub fn with_target(target: u64) -> Self {
        Self::new(target, DEFAULT_DURATION_SECS, DEFAULT_TICK_RATE_HZ)
    }

    /// Time between ticks, rounded down to whole nanoseconds so that the
    /// last tick never falls after the duration.
    #[must_use]
    pub fn tick_period(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.tick_rate_hz))
    }

    /// Number of ticks the animation is spread over.
    #[must_use]
    pub fn total_ticks(&self) -> f64 {
        self.duration_secs * f64::from(self.tick_rate_hz)
    }

    /// Advance one tick and return the value to display.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn tick(&mut self) -> u64 {
        if self.finished {
            return self.current;
        }
        self.ticks += 1;

        // Multiply rather than accumulate so the last tick lands on the target.
        let total = self.total_ticks();
        let progress = if total > 0.0 {
            self.target as f64 * self.ticks as f64 / total
        } else {
            f64::INFINITY
        };

        if progress >= self.target as f64 {
            self.current = self.target;
            self.finished = true;
        } else {
            self.current = progress.floor() as u64;
        }
        self.current
    }

    /// Value currently displayed.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.current
    }

    /// Final value.
    #[must_use]
    pub fn target(&self) -> u64 {
        self.target
    }

    /// Ticks taken so far.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Whether the target has been reached.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

/// One published state of a running counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountUpFrame {
    /// Displayed value
    pub value: u64,
    /// Whether the animation has stopped at its target
    pub finished: bool,
}

impl CountUpFrame {
    /// The displayed value with pt-BR grouping.
    #[must_use]
    pub fn formatted(&self) -> String {
        format_pt_br(self.value)
    }
}

/// A counter animated by a background tick loop.
///
/// Dropping the display stops its loop. Must be created within a Tokio
/// runtime.
pub struct CountUpDisplay {
    target: u64,
    duration_secs: f64,
    tick_rate_hz: u32,
    frames: Arc<watch::Sender<CountUpFrame>>,
    cancel: CancellationToken,
}

impl CountUpDisplay {
    /// Start animating towards `target`.
    #[must_use]
    pub fn start(target: u64, duration_secs: f64, tick_rate_hz: u32) -> Self {
        let (frames, _) = watch::channel(CountUpFrame::default());
        let frames = Arc::new(frames);
        let cancel = spawn_ticker(CountUp::new(target, duration_secs, tick_rate_hz), &frames);
        Self {
            target,
            duration_secs,
            tick_rate_hz,
            frames,
            cancel,
        }
    }

    /// Restart from zero when the target or duration changed.
    ///
    /// Identical parameters leave the running animation alone.
    #[allow(clippy::float_cmp)]
    pub fn retarget(&mut self, target: u64, duration_secs: f64) {
        if target == self.target && duration_secs == self.duration_secs {
            return;
        }
        self.cancel.cancel();

        self.target = target;
        self.duration_secs = duration_secs;
        self.frames.send_replace(CountUpFrame::default());
        self.cancel = spawn_ticker(
            CountUp::new(target, duration_secs, self.tick_rate_hz),
            &self.frames,
        );
    }

    /// Latest frame.
    #[must_use]
    pub fn frame(&self) -> CountUpFrame {
        *self.frames.borrow()
    }

    /// Latest value with pt-BR grouping.
    #[must_use]
    pub fn formatted(&self) -> String {
        self.frame().formatted()
    }

    /// Target currently animated towards.
    #[must_use]
    pub fn target(&self) -> u64 {
        self.target
    }

    /// Receive every future frame.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<CountUpFrame> {
        self.frames.subscribe()
    }

    /// Wait until the animation has stopped at its target.
    pub async fn finished(&self) -> CountUpFrame {
        let mut rx = self.frames.subscribe();
        let frame = match rx.wait_for(|frame| frame.finished).await {
            Ok(frame) => *frame,
            // The sender lives as long as `self`; unreachable in practice.
            Err(_) => self.frame(),
        };
        frame
    }
}

impl Drop for CountUpDisplay {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

fn spawn_ticker(
    mut counter: CountUp,
    frames: &Arc<watch::Sender<CountUpFrame>>,
) -> CancellationToken {
    let cancel = CancellationToken::new();
    let token = cancel.clone();
    let frames = Arc::clone(frames);

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(counter.tick_period());
        // The first tick of an interval completes immediately.
        interval.tick().await;

        loop {
            tokio::select! {
                biased;
                () = token.cancelled() => return,
                _ = interval.tick() => {
                    let value = counter.tick();
                    let finished = counter.is_finished();
                    // Checked under the channel lock: a retarget resets the
                    // frame only after cancelling this loop.
                    let published = frames.send_if_modified(|frame| {
                        if token.is_cancelled() {
                            return false;
                        }
                        *frame = CountUpFrame { value, finished };
                        true
                    });
                    if !published {
                        return;
                    }
                    if finished {
                        tracing::debug!(
                            "Count-up reached {} after {} ticks",
                            value,
                            counter.ticks()
                        );
                        return;
                    }
                }
            }
        }
    });

    cancel
}
