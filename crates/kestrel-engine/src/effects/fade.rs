/// Opacity pulse between `min_multiplier` and `max_multiplier`.
///
/// While active, the multiplier moves by `speed` units per second, bouncing at
/// either bound. Deactivating snaps it back to `max_multiplier`.
#[derive(Debug, Clone, PartialEq)]
pub struct FadeEffect {
    pub speed: f32,
    pub min_multiplier: f32,
    pub max_multiplier: f32,
    active: bool,
    multiplier: f32,
    increasing: bool,
}

impl FadeEffect {
    pub fn new(speed: f32, min_multiplier: f32) -> Self {
        Self {
            speed,
            min_multiplier,
            max_multiplier: 1.0,
            active: false,
            multiplier: 1.0,
            increasing: false,
        }
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
        self.multiplier = self.max_multiplier;
        self.increasing = false;
    }

    /// Activates or deactivates; no-op if already in that state.
    pub fn set_active(&mut self, active: bool) {
        match (self.active, active) {
            (false, true) => self.activate(),
            (true, false) => self.deactivate(),
            _ => {}
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn multiplier(&self) -> f32 {
        self.multiplier
    }

    /// Advances by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if !self.active {
            return;
        }

        let step = self.speed * dt;
        if self.increasing {
            self.multiplier += step;
            if self.multiplier >= self.max_multiplier {
                self.multiplier = self.max_multiplier;
                self.increasing = false;
            }
        } else {
            self.multiplier -= step;
            if self.multiplier <= self.min_multiplier {
                self.multiplier = self.min_multiplier;
                self.increasing = true;
            }
        }
    }
}

impl Default for FadeEffect {
    fn default() -> Self {
        Self::new(1.0, 0.0)
    }
}
