/// Timing constants for the powered state
#[derive(Clone, Copy, Debug)]
pub struct PowerConfig {
    /// Full powered duration in seconds
    pub duration: f32,
    /// Remaining time at which flickering begins
    pub flicker_lead: f32,
    /// Seconds between visibility toggles while flickering
    pub flicker_period: f32,
}

impl Default for PowerConfig {
    fn default() -> Self {
        Self {
            duration: 10.0,
            flicker_lead: 3.0,
            flicker_period: 0.15,
        }
    }
}

/// Timed power-mode state machine: Idle -> Powered -> Flickering -> Idle.
///
/// Flickering is a presentation-only sub-state of Powered. The timer is
/// driven purely by `advance(dt)` plus external activate/deactivate calls;
/// it knows nothing about motion or the board.
#[derive(Clone, Debug)]
pub struct PowerTimer {
    config: PowerConfig,
    powered: bool,
    remaining: f32,
    flicker_accum: f32,
    flicker_visible: bool,
}

impl PowerTimer {
    pub fn new(config: PowerConfig) -> Self {
        Self {
            config,
            powered: false,
            remaining: 0.0,
            flicker_accum: 0.0,
            flicker_visible: false,
        }
    }

    /// Enter Powered with a full duration; clears any flicker in progress
    pub fn activate(&mut self) {
        self.powered = true;
        self.remaining = self.config.duration;
        self.flicker_accum = 0.0;
        self.flicker_visible = true;
    }

    /// Drop straight to Idle regardless of remaining time
    pub fn deactivate(&mut self) {
        self.powered = false;
        self.remaining = 0.0;
        self.flicker_accum = 0.0;
        self.flicker_visible = false;
    }

    /// Advance the timer. Remaining time is clamped at zero and the state
    /// drops to Idle exactly when it runs out.
    pub fn advance(&mut self, dt: f32) {
        if !self.powered {
            return;
        }

        self.remaining = (self.remaining - dt).max(0.0);
        if self.remaining <= 0.0 {
            self.deactivate();
            return;
        }

        if self.is_flickering() {
            self.flicker_accum += dt;
            if self.flicker_accum >= self.config.flicker_period {
                self.flicker_accum = 0.0;
                self.flicker_visible = !self.flicker_visible;
            }
        }
    }

    #[inline]
    pub fn is_powered(&self) -> bool {
        self.powered
    }

    /// Powered with expiry imminent
    #[inline]
    pub fn is_flickering(&self) -> bool {
        self.powered && self.remaining <= self.config.flicker_lead
    }

    /// What the renderer should show: steady while powered, toggling
    /// every flicker period once the lead time is reached
    #[inline]
    pub fn is_visibly_powered(&self) -> bool {
        self.powered && self.flicker_visible
    }

    #[inline]
    pub fn remaining(&self) -> f32 {
        self.remaining
    }
}
