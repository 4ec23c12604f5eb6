/// Simulated loading progress, 0 to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadProgress {
    percent: u32,
}

/// Smallest and largest increment per tick.
pub const STEP_RANGE: (u32, u32) = (2, 5);

impl LoadProgress {
    /// Progress in `0..=100`.
    pub const fn percent(self) -> u32 {
        self.percent
    }

    pub const fn is_complete(self) -> bool {
        self.percent >= 100
    }

    /// Advance by an increment drawn from `STEP_RANGE` using a `[0, 1)` sample.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn step(&mut self, sample: f64) {
        let (low, high) = STEP_RANGE;
        let spread = f64::from(high - low + 1);
        let increment = low + ((sample.clamp(0.0, 0.999_999) * spread) as u32);
        self.percent = (self.percent + increment).min(100);
    }

    /// Jump straight to 100.
    pub fn complete(&mut self) {
        self.percent = 100;
    }

    pub const fn status_message(self) -> &'static str {
        match self.percent {
            0..=19 => "ESTABLISHING CONNECTION",
            20..=39 => "INITIALIZING CORE SYSTEMS",
            40..=59 => "LOADING DATA MODULES",
            60..=79 => "CONFIGURING INTERFACE",
            80..=94 => "FINALIZING SETUP",
            _ => "SYSTEM READY",
        }
    }

    /// Fake system metrics shown under the progress ring.
    pub const fn readouts(self) -> [(&'static str, u32); 4] {
        let p = self.percent;
        [
            ("Memory", if p < 50 { p * 256 / 100 } else { 256 }),
            ("Modules", if p < 60 { p / 10 } else { 10 }),
            ("Security", if p < 80 { p } else { 100 }),
            ("Network", if p < 70 { p * 5 } else { 500 }),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_stays_in_range() {
        let mut low = LoadProgress::default();
        low.step(0.0);
        assert_eq!(low.percent(), 2);

        let mut high = LoadProgress::default();
        high.step(0.9999);
        assert_eq!(high.percent(), 5);

        let mut out_of_range = LoadProgress::default();
        out_of_range.step(7.0);
        assert_eq!(out_of_range.percent(), 5);
    }

    #[test]
    fn test_step_clamps_at_hundred() {
        let mut progress = LoadProgress::default();
        for _ in 0..100 {
            progress.step(0.5);
        }
        assert_eq!(progress.percent(), 100);
        assert!(progress.is_complete());
    }

    #[test]
    fn test_status_bands() {
        let mut progress = LoadProgress::default();
        assert_eq!(progress.status_message(), "ESTABLISHING CONNECTION");
        while progress.percent() < 40 {
            progress.step(0.0);
        }
        assert_eq!(progress.status_message(), "LOADING DATA MODULES");
        progress.complete();
        assert_eq!(progress.status_message(), "SYSTEM READY");
    }

    #[test]
    fn test_readouts_saturate() {
        let mut progress = LoadProgress::default();
        progress.complete();
        assert_eq!(
            progress.readouts(),
            [("Memory", 256), ("Modules", 10), ("Security", 100), ("Network", 500)]
        );
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_progress_is_monotonic_and_bounded(
            samples in prop::collection::vec(0.0f64..1.0, 0..80)
        ) {
            let mut progress = LoadProgress::default();
            for sample in samples {
                let before = progress.percent();
                progress.step(sample);
                prop_assert!(progress.percent() >= before);
                prop_assert!(progress.percent() <= 100);
                prop_assert!(progress.percent() - before <= STEP_RANGE.1);
            }
        }
    }
}
