//! Spring easing for the sliding indicator.
//!
//! A damped harmonic oscillator stepped with semi-implicit Euler. The
//! default tuning is underdamped, so the indicator lands with a slight
//! overshoot before settling on its target.

/// Stiffness of the default spring. Higher values settle faster.
const STIFFNESS: f64 = 120.0;

/// Damping of the default spring. Below critical damping for
/// `STIFFNESS`, which is what produces the overshoot.
const DAMPING: f64 = 14.0;

/// Once position and velocity are both within this band of rest, the
/// spring clamps exactly onto its target.
const SETTLE_EPS: f64 = 0.05;

/// A one-dimensional spring animating toward a target value.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    position: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    /// Create a spring at rest at `position`.
    pub fn new(position: f64) -> Self {
        Self {
            position,
            velocity: 0.0,
            target: position,
        }
    }

    /// Start animating toward `target` from the current position.
    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    /// Jump to `position` without animating.
    pub fn snap_to(&mut self, position: f64) {
        self.position = position;
        self.velocity = 0.0;
        self.target = position;
    }

    /// Advance the simulation by `dt` seconds.
    pub fn tick(&mut self, dt: f64) {
        if self.is_settled() {
            return;
        }
        let accel = STIFFNESS * (self.target - self.position) - DAMPING * self.velocity;
        self.velocity += accel * dt;
        self.position += self.velocity * dt;
        if (self.position - self.target).abs() < SETTLE_EPS && self.velocity.abs() < SETTLE_EPS {
            self.position = self.target;
            self.velocity = 0.0;
        }
    }

    /// Current position, possibly mid-flight.
    pub fn value(&self) -> f64 {
        self.position
    }

    /// The value the spring is heading toward.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// True once the spring has come to rest on its target.
    pub fn is_settled(&self) -> bool {
        self.velocity == 0.0 && self.position == self.target
    }
}
