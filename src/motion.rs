use std::time::Duration;

const DEFAULT_CYCLE_MS: u16 = 1_600;
const DEFAULT_DELAY_MS: u16 = 800;
const FADE_OUT_END: f32 = 0.2;
const FADE_IN_START: f32 = 0.8;

/// Continuous caret blink curve.
///
/// The caret stays opaque for `delay_ms`, then loops forever: it fades out
/// over the first fifth of the cycle, stays transparent, and fades back in
/// over the last fifth. Visibility is masked separately so keystrokes never
/// restart the clock.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CaretBlink {
    pub cycle_ms: u16,
    pub delay_ms: u16,
}

impl Default for CaretBlink {
    fn default() -> Self {
        Self {
            cycle_ms: DEFAULT_CYCLE_MS,
            delay_ms: DEFAULT_DELAY_MS,
        }
    }
}

impl CaretBlink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cycle_ms(mut self, value: u16) -> Self {
        self.cycle_ms = value.max(1);
        self
    }

    pub fn delay_ms(mut self, value: u16) -> Self {
        self.delay_ms = value;
        self
    }

    pub fn cycle(&self) -> Duration {
        Duration::from_millis(u64::from(self.cycle_ms.max(1)))
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(u64::from(self.delay_ms))
    }

    /// Opacity at `progress` through one cycle, `progress` in `[0, 1]`.
    pub fn opacity_at(&self, progress: f32) -> f32 {
        let progress = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        if progress < FADE_OUT_END {
            1.0 - progress / FADE_OUT_END
        } else if progress < FADE_IN_START {
            0.0
        } else {
            ((progress - FADE_IN_START) / (1.0 - FADE_IN_START)).min(1.0)
        }
    }

    /// Opacity after `elapsed` time since the blink clock started.
    pub fn opacity_after(&self, elapsed: Duration) -> f32 {
        let Some(running) = elapsed.checked_sub(self.delay()) else {
            return 1.0;
        };
        let cycle = self.cycle().as_millis();
        let offset = running.as_millis() % cycle;
        self.opacity_at(offset as f32 / cycle as f32)
    }
}
