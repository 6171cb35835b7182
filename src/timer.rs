use std::time::Duration;
use crate::constants::AUTO_ADVANCE_MS;

// Fires whether or not the user just interacted; nothing resets it
pub struct AutoAdvance {
    interval: Duration,
    elapsed: Duration,
}

impl Default for AutoAdvance {
    fn default() -> Self {
        Self::new(Duration::from_millis(AUTO_ADVANCE_MS))
    }
}

impl AutoAdvance {
    pub fn new(interval: Duration) -> Self {
        Self { interval, elapsed: Duration::ZERO }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    // Returns how many intervals completed, keeping the remainder
    pub fn tick(&mut self, dt: Duration) -> u32 {
        if self.interval.is_zero() {
            return 0;
        }
        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            fired += 1;
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::Carousel;
    use crate::state::{SlideEvent, Toggle, Visibility};

    #[test]
    fn default_interval_is_five_seconds() {
        assert_eq!(AutoAdvance::default().interval(), Duration::from_millis(5000));
    }

    #[test]
    fn fires_once_per_interval_across_frames() {
        let mut timer = AutoAdvance::default();
        let frame = Duration::from_millis(16);
        let mut fired = 0;
        // 15 s of 16 ms frames, plus the leftover 8 ms
        for _ in 0..937 {
            fired += timer.tick(frame);
        }
        fired += timer.tick(Duration::from_millis(8));
        assert_eq!(fired, 3);
    }

    #[test]
    fn long_frame_fires_multiple_times() {
        let mut timer = AutoAdvance::new(Duration::from_millis(5000));
        assert_eq!(timer.tick(Duration::from_millis(10_500)), 2);
        assert_eq!(timer.tick(Duration::from_millis(4_499)), 0);
        assert_eq!(timer.tick(Duration::from_millis(1)), 1);
    }

    #[test]
    fn zero_interval_never_fires() {
        let mut timer = AutoAdvance::new(Duration::ZERO);
        assert_eq!(timer.tick(Duration::from_secs(60)), 0);
    }

    struct Flag(Visibility);

    impl Toggle for Flag {
        fn set_visibility(&mut self, visibility: Visibility) {
            self.0 = visibility;
        }

        fn visibility(&self) -> Visibility {
            self.0
        }
    }

    #[test]
    fn fifteen_seconds_advance_three_slides() {
        let make = |n: usize| (0..n).map(|_| Flag(Visibility::Inactive)).collect::<Vec<_>>();
        let mut carousel = Carousel::new(make(4), make(4)).unwrap();
        carousel.handle(SlideEvent::Select(2));

        let mut timer = AutoAdvance::default();
        for _ in 0..timer.tick(Duration::from_millis(15_000)) {
            carousel.handle(SlideEvent::AutoAdvance);
        }
        assert_eq!(carousel.current(), (2 + 3) % 4);
    }

    #[test]
    fn manual_input_does_not_reset_timer() {
        let make = |n: usize| (0..n).map(|_| Flag(Visibility::Inactive)).collect::<Vec<_>>();
        let mut carousel = Carousel::new(make(3), make(3)).unwrap();
        let mut timer = AutoAdvance::default();

        assert_eq!(timer.tick(Duration::from_millis(4_900)), 0);
        carousel.handle(SlideEvent::Next);
        for _ in 0..timer.tick(Duration::from_millis(100)) {
            carousel.handle(SlideEvent::AutoAdvance);
        }
        assert_eq!(carousel.current(), 2);
    }
}
