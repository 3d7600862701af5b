use crate::config::PointerConfig;

/// EMA pointer filter with an adaptive deadzone and per-axis step clamp.
///
/// Deadzone: shrinks linearly from `deadzone_base` at rest to `deadzone_min`
/// at `deadzone_speed` px/frame. Moves inside it are ignored.
/// Step clamp: a single update moves at most `alpha * max_step` per axis.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerSmoother {
    alpha: f32,
    deadzone_base: f32,
    deadzone_min: f32,
    deadzone_speed: f32,
    max_step: f32,
    position: Option<(f32, f32)>,
}

impl PointerSmoother {
    pub fn new(
        alpha: f32,
        deadzone_base: f32,
        deadzone_min: f32,
        deadzone_speed: f32,
        max_step: f32,
    ) -> Self {
        Self {
            alpha,
            deadzone_base,
            deadzone_min,
            deadzone_speed,
            max_step,
            position: None,
        }
    }

    pub fn from_config(config: &PointerConfig) -> Self {
        Self::new(
            config.alpha,
            config.deadzone_base,
            config.deadzone_min,
            config.deadzone_speed,
            config.max_step,
        )
    }

    /// Current estimate, unrounded
    pub fn position(&self) -> Option<(f32, f32)> {
        self.position
    }

    fn deadzone(&self, speed: f32) -> f32 {
        let t = speed.min(self.deadzone_speed) / self.deadzone_speed;
        self.deadzone_base - t * (self.deadzone_base - self.deadzone_min)
    }

    /// Feed a raw pixel position, get the smoothed one (truncated to whole
    /// pixels).
    pub fn apply(&mut self, x: f32, y: f32) -> (i32, i32) {
        let (px, py) = match self.position {
            Some(p) => p,
            None => {
                self.position = Some((x, y));
                return (x as i32, y as i32);
            }
        };

        let dx = x - px;
        let dy = y - py;
        let deadzone = self.deadzone(dx.hypot(dy));
        if dx.abs() < deadzone && dy.abs() < deadzone {
            return (px as i32, py as i32);
        }

        let dx = dx.clamp(-self.max_step, self.max_step);
        let dy = dy.clamp(-self.max_step, self.max_step);
        let next = (px + self.alpha * dx, py + self.alpha * dy);
        self.position = Some(next);
        (next.0 as i32, next.1 as i32)
    }

    pub fn reset(&mut self) {
        self.position = None;
    }
}

/// Unit direction filter: EMA on normalized samples, renormalized.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionSmoother {
    alpha: f32,
    direction: Option<(f32, f32)>,
}

impl DirectionSmoother {
    const MIN_MAGNITUDE: f32 = 1e-5;

    pub fn new(alpha: f32) -> Self {
        Self {
            alpha,
            direction: None,
        }
    }

    pub fn from_config(config: &PointerConfig) -> Self {
        Self::new(config.direction_alpha)
    }

    /// Returns `None` when the sample (or the smoothed result) is too short
    /// to carry a direction; callers keep whatever they had.
    pub fn apply(&mut self, dx: f32, dy: f32) -> Option<(f32, f32)> {
        let mag = dx.hypot(dy);
        if mag < Self::MIN_MAGNITUDE {
            return None;
        }
        let (nx, ny) = (dx / mag, dy / mag);

        let (px, py) = match self.direction {
            Some(d) => d,
            None => {
                self.direction = Some((nx, ny));
                return Some((nx, ny));
            }
        };

        let sx = px + self.alpha * (nx - px);
        let sy = py + self.alpha * (ny - py);
        self.direction = Some((sx, sy));

        let mag = sx.hypot(sy);
        if mag < Self::MIN_MAGNITUDE {
            return None;
        }
        Some((sx / mag, sy / mag))
    }

    pub fn reset(&mut self) {
        self.direction = None;
    }
}
