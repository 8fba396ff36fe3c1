//! Hero banner animation state

use std::time::{Duration, Instant};

/// Animation phase for the hero banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashPhase {
    /// Truck driving in from the left edge
    RollIn,
    /// Banner parked with tagline visible
    Hold,
    /// Animation finished
    Complete,
}

/// Hero banner animation state
#[derive(Debug)]
pub struct SplashState {
    /// When the splash started
    pub start_time: Instant,
    /// Current animation phase
    pub phase: SplashPhase,
    /// Columns from the left edge where the truck is drawn
    pub truck_x: f32,
}

impl SplashState {
    /// Duration of the roll-in (eased)
    const ROLL_IN_DURATION: Duration = Duration::from_millis(900);
    /// How long the parked banner stays up
    const HOLD_DURATION: Duration = Duration::from_millis(1400);

    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            phase: SplashPhase::RollIn,
            truck_x: 0.0,
        }
    }

    /// Update animation state based on elapsed time.
    /// `travel` is how far the truck moves before parking.
    pub fn update(&mut self, travel: u16) {
        if self.is_complete() {
            return;
        }
        self.advance_to(self.start_time.elapsed(), travel);
    }

    fn advance_to(&mut self, elapsed: Duration, travel: u16) {
        if elapsed < Self::ROLL_IN_DURATION {
            self.phase = SplashPhase::RollIn;
            let progress = elapsed.as_secs_f32() / Self::ROLL_IN_DURATION.as_secs_f32();
            // Cubic ease-out so the truck brakes into place
            self.truck_x = simple_easing::cubic_out(progress) * travel as f32;
        } else if elapsed < Self::ROLL_IN_DURATION + Self::HOLD_DURATION {
            self.phase = SplashPhase::Hold;
            self.truck_x = travel as f32;
        } else {
            self.phase = SplashPhase::Complete;
        }
    }

    /// Tagline only appears once the truck has parked
    pub fn show_tagline(&self) -> bool {
        self.phase != SplashPhase::RollIn
    }

    /// Skip to completion (user pressed a key)
    pub fn skip(&mut self) {
        self.phase = SplashPhase::Complete;
    }

    /// Check if animation is complete
    pub fn is_complete(&self) -> bool {
        self.phase == SplashPhase::Complete
    }
}

impl Default for SplashState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_rolling_in() {
        let state = SplashState::new();
        assert_eq!(state.phase, SplashPhase::RollIn);
        assert_eq!(state.truck_x, 0.0);
        assert!(!state.show_tagline());
    }

    #[test]
    fn test_skip_immediately_completes() {
        let mut state = SplashState::new();
        assert!(!state.is_complete());
        state.skip();
        assert!(state.is_complete());
        // Elapsed time can't pull a skipped banner back into the roll-in
        state.update(60);
        assert!(state.is_complete());
    }

    #[test]
    fn test_roll_in_moves_truck_partway() {
        let mut state = SplashState::new();
        state.advance_to(Duration::from_millis(450), 60);
        assert_eq!(state.phase, SplashPhase::RollIn);
        assert!(state.truck_x > 0.0 && state.truck_x < 60.0);
    }

    #[test]
    fn test_hold_parks_truck_at_travel() {
        let mut state = SplashState::new();
        state.advance_to(Duration::from_millis(1000), 60);
        assert_eq!(state.phase, SplashPhase::Hold);
        assert_eq!(state.truck_x, 60.0);
        assert!(state.show_tagline());
    }

    #[test]
    fn test_completes_after_hold() {
        let mut state = SplashState::new();
        state.advance_to(Duration::from_millis(2400), 60);
        assert!(state.is_complete());
    }
}
