use embassy_time::{Duration, Instant};

use super::category::Category;

/// Hold timing of the settings menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionTimings {
    /// Hold time before the pointer starts flashing
    pub warning: Duration,
    /// Hold time that confirms the hovered bucket
    pub confirm: Duration,
    /// Time between flash visibility toggles
    pub flash_interval: Duration,
}

impl SelectionTimings {
    pub const DEFAULT: Self = Self {
        warning: Duration::from_millis(1000),
        confirm: Duration::from_millis(2000),
        flash_interval: Duration::from_millis(150),
    };
}

impl Default for SelectionTimings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Choosing a category by quadrant
    Quadrant,
    /// Choosing a clock position for one category
    Value(Category),
}

/// What one step of the session observed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoldState {
    /// Nothing hovered
    Idle,
    /// Hovering, confirmation not near yet
    Holding,
    /// Past the warning time
    Flashing,
    /// Held long enough, carries the confirmed bucket
    Confirmed(u8),
}

/// Hover and hold state of one menu phase
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionSession {
    phase: Phase,
    hovered: Option<u8>,
    hold_start: Instant,
    holding: bool,
    flashing: bool,
    flash_visible: bool,
    last_flash_toggle: Instant,
    sticky: Option<u8>,
}

impl SelectionSession {
    pub const fn new() -> Self {
        Self::in_phase(Phase::Quadrant)
    }

    /// Fresh session starting in `phase`
    pub const fn in_phase(phase: Phase) -> Self {
        Self {
            phase,
            hovered: None,
            hold_start: Instant::from_ticks(0),
            holding: false,
            flashing: false,
            flash_visible: false,
            last_flash_toggle: Instant::from_ticks(0),
            sticky: None,
        }
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    pub const fn hovered(&self) -> Option<u8> {
        self.hovered
    }

    /// Last bucket that was hovered in this phase
    pub const fn sticky(&self) -> Option<u8> {
        self.sticky
    }

    pub const fn is_holding(&self) -> bool {
        self.holding
    }

    pub const fn is_flashing(&self) -> bool {
        self.flashing
    }

    /// False while a flashing pointer is in its hidden half
    pub const fn is_visible(&self) -> bool {
        !self.flashing || self.flash_visible
    }

    /// How long the current bucket has been held
    pub fn held_for(&self, now: Instant) -> Duration {
        if self.holding {
            now.saturating_duration_since(self.hold_start)
        } else {
            Duration::from_ticks(0)
        }
    }

    /// Advance the session with the bucket hovered at `now`
    ///
    /// Any change of the hovered bucket, to or from `None` included,
    /// restarts the hold. The returned session is unchanged on confirmation;
    /// the caller decides what the next phase is.
    #[must_use]
    pub fn step(
        mut self,
        hovered: Option<u8>,
        now: Instant,
        timings: &SelectionTimings,
    ) -> (Self, HoldState) {
        if hovered != self.hovered {
            self.hovered = hovered;
            self.hold_start = now;
            self.holding = hovered.is_some();
            self.flashing = false;
            self.flash_visible = false;
            if hovered.is_some() {
                self.sticky = hovered;
            }
        }

        let Some(bucket) = self.hovered else {
            return (self, HoldState::Idle);
        };

        let held = now.saturating_duration_since(self.hold_start);
        if held >= timings.confirm {
            return (self, HoldState::Confirmed(bucket));
        }
        if held < timings.warning {
            return (self, HoldState::Holding);
        }

        if self.flashing {
            if now.saturating_duration_since(self.last_flash_toggle) >= timings.flash_interval {
                self.flash_visible = !self.flash_visible;
                self.last_flash_toggle = now;
            }
        } else {
            self.flashing = true;
            self.flash_visible = false;
            self.last_flash_toggle = now;
        }
        (self, HoldState::Flashing)
    }
}

impl Default for SelectionSession {
    fn default() -> Self {
        Self::new()
    }
}
