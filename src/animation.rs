//! Frame-driven animation primitives
//!
//! Every animation is a small state object advanced by the frame delta.
//! Nothing here knows about egui; the screen ticks the values and reads
//! them back when painting.

/// Timing curve applied to a tween's normalized progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    EaseOutCubic,
    EaseInOutQuad,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// What a tween does after reaching its end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repeat {
    Once,
    /// Jump back to the start value and run again, indefinitely
    Forever,
}

pub trait Animation {
    /// Advance by `dt` seconds
    fn tick(&mut self, dt: f32);
    fn value(&self) -> f32;
    fn is_running(&self) -> bool;
}

/// Time-based interpolation between two values
#[derive(Debug, Clone)]
pub struct Tween {
    from: f32,
    to: f32,
    delay: f32,
    duration: f32,
    easing: Easing,
    repeat: Repeat,
    elapsed: f32,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            delay: 0.0,
            duration: duration.max(0.0),
            easing,
            repeat: Repeat::Once,
            elapsed: 0.0,
        }
    }

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    pub fn repeat_forever(mut self) -> Self {
        self.repeat = Repeat::Forever;
        self
    }

    /// Normalized progress of the current cycle, before easing
    fn progress(&self) -> f32 {
        let active = self.elapsed - self.delay;
        if active <= 0.0 {
            return 0.0;
        }
        if self.duration <= 0.0 {
            return 1.0;
        }
        match self.repeat {
            Repeat::Once => (active / self.duration).min(1.0),
            Repeat::Forever => (active % self.duration) / self.duration,
        }
    }
}

impl Animation for Tween {
    fn tick(&mut self, dt: f32) {
        self.elapsed += dt.max(0.0);
        // Keep the clock small on endless loops so f32 precision holds up
        if self.repeat == Repeat::Forever && self.duration > 0.0 {
            let cycle_end = self.delay + self.duration;
            if self.elapsed > cycle_end {
                self.elapsed = self.delay + (self.elapsed - self.delay) % self.duration;
            }
        }
    }

    fn value(&self) -> f32 {
        let eased = self.easing.apply(self.progress());
        self.from + (self.to - self.from) * eased
    }

    fn is_running(&self) -> bool {
        match self.repeat {
            Repeat::Forever => true,
            Repeat::Once => self.elapsed < self.delay + self.duration,
        }
    }
}

/// Damped harmonic spring settling on a target
#[derive(Debug, Clone)]
pub struct Spring {
    value: f32,
    velocity: f32,
    target: f32,
    stiffness: f32,
    damping: f32,
    mass: f32,
    rest_displacement: f32,
    rest_speed: f32,
    settled: bool,
}

impl Spring {
    const MAX_STEP: f32 = 1.0 / 240.0;

    pub fn new(from: f32, target: f32, stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            value: from,
            velocity: 0.0,
            target,
            stiffness,
            damping,
            mass: mass.max(f32::EPSILON),
            rest_displacement: 0.01,
            rest_speed: 2.0,
            settled: from == target,
        }
    }
}

impl Animation for Spring {
    fn tick(&mut self, dt: f32) {
        if self.settled {
            return;
        }
        let mut remaining = dt.max(0.0);
        while remaining > 0.0 {
            let h = remaining.min(Self::MAX_STEP);
            let force =
                -self.stiffness * (self.value - self.target) - self.damping * self.velocity;
            self.velocity += force / self.mass * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
        if (self.value - self.target).abs() < self.rest_displacement
            && self.velocity.abs() < self.rest_speed
        {
            self.value = self.target;
            self.velocity = 0.0;
            self.settled = true;
        }
    }

    fn value(&self) -> f32 {
        self.value
    }

    fn is_running(&self) -> bool {
        !self.settled
    }
}

/// One-shot fade + slide: opacity 0 -> 1 while an offset shrinks to zero
#[derive(Debug, Clone)]
pub struct Entrance {
    tween: Tween,
    distance: f32,
}

impl Entrance {
    pub fn new(delay: f32, duration: f32, distance: f32) -> Self {
        Self {
            tween: Tween::new(0.0, 1.0, duration, Easing::EaseOutCubic).with_delay(delay),
            distance,
        }
    }

    pub fn opacity(&self) -> f32 {
        self.tween.value()
    }

    /// Remaining displacement, from `distance` down to 0
    pub fn offset(&self) -> f32 {
        (1.0 - self.tween.value()) * self.distance
    }
}

impl Animation for Entrance {
    fn tick(&mut self, dt: f32) {
        self.tween.tick(dt);
    }

    fn value(&self) -> f32 {
        self.tween.value()
    }

    fn is_running(&self) -> bool {
        self.tween.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(anim: &mut impl Animation, secs: f32) {
        let steps = (secs * 60.0).round() as usize;
        for _ in 0..steps {
            anim.tick(1.0 / 60.0);
        }
    }

    #[test]
    fn easing_endpoints() {
        for easing in [Easing::Linear, Easing::EaseOutCubic, Easing::EaseInOutQuad] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
        assert!((Easing::EaseInOutQuad.apply(0.5) - 0.5).abs() < 1e-6);
        assert!(Easing::EaseOutCubic.apply(0.5) > 0.5);
    }

    #[test]
    fn tween_holds_start_value_during_delay() {
        let mut t = Tween::new(0.0, 1.0, 0.4, Easing::Linear).with_delay(0.3);
        t.tick(0.25);
        assert_eq!(t.value(), 0.0);
        assert!(t.is_running());
        t.tick(0.25);
        assert!((t.value() - 0.5).abs() < 1e-4);
    }

    #[test]
    fn tween_finishes_at_end_value() {
        let mut t = Tween::new(-25.0, 0.0, 0.4, Easing::EaseOutCubic);
        run(&mut t, 1.0);
        assert_eq!(t.value(), 0.0);
        assert!(!t.is_running());
        t.tick(5.0);
        assert_eq!(t.value(), 0.0);
    }

    #[test]
    fn zero_duration_tween_jumps_to_end() {
        let mut t = Tween::new(0.0, 1.0, 0.0, Easing::Linear);
        assert!(!t.is_running());
        t.tick(0.001);
        assert_eq!(t.value(), 1.0);
    }

    #[test]
    fn endless_tween_wraps_instead_of_reversing() {
        let mut t = Tween::new(0.0, 360.0, 10.0, Easing::Linear).repeat_forever();
        t.tick(9.0);
        assert!((t.value() - 324.0).abs() < 1e-3);
        t.tick(2.0);
        assert!((t.value() - 36.0).abs() < 1e-3);
        assert!(t.is_running());
    }

    #[test]
    fn endless_tween_stays_in_range_after_long_runs() {
        let mut t = Tween::new(0.0, 360.0, 10.0, Easing::EaseInOutQuad).repeat_forever();
        for _ in 0..100_000 {
            t.tick(0.37);
            let v = t.value();
            assert!((0.0..=360.0).contains(&v), "value out of range: {v}");
        }
    }

    #[test]
    fn spring_settles_on_target() {
        let mut s = Spring::new(-180.0, 0.0, 260.0, 90.0, 1.0);
        assert!(s.is_running());
        run(&mut s, 10.0);
        assert!(!s.is_running());
        assert_eq!(s.value(), 0.0);
    }

    #[test]
    fn overdamped_spring_does_not_overshoot() {
        let mut s = Spring::new(0.0, 1.0, 260.0, 90.0, 1.0);
        for _ in 0..600 {
            s.tick(1.0 / 60.0);
            assert!(s.value() <= 1.0 + 1e-4);
        }
    }

    #[test]
    fn spring_at_target_is_idle() {
        let s = Spring::new(1.0, 1.0, 260.0, 90.0, 1.0);
        assert!(!s.is_running());
        assert_eq!(s.value(), 1.0);
    }

    #[test]
    fn entrance_fades_in_and_slides_home() {
        let mut e = Entrance::new(0.1, 0.4, 25.0);
        assert_eq!(e.opacity(), 0.0);
        assert_eq!(e.offset(), 25.0);
        run(&mut e, 1.0);
        assert_eq!(e.opacity(), 1.0);
        assert_eq!(e.offset(), 0.0);
        assert!(!e.is_running());
    }
}
