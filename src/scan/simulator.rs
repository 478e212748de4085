//! Simulated scan of an uploaded logo
//!
//! The scan is cosmetic: a progress counter advances by a random step each
//! tick until it reaches 100, then a short pause precedes the report.

use chrono::Utc;
use rand::Rng;
use std::time::Duration;
use tracing::info;
use crate::{
    config::Config,
    types::{Complexity, LogoFile, ScanReport},
};

pub const MIN_STEP: u8 = 2;
pub const MAX_STEP: u8 = 6;

/// Advances the progress counter by one tick, capped at 100.
pub fn next_progress<R: Rng>(current: u8, rng: &mut R) -> u8 {
    current.saturating_add(rng.random_range(MIN_STEP..=MAX_STEP)).min(100)
}

pub fn pick_complexity<R: Rng>(rng: &mut R) -> Complexity {
    Complexity::ALL[rng.random_range(0..Complexity::ALL.len())]
}

#[derive(Debug, Clone)]
pub struct ScanSimulator {
    tick: Duration,
    settle: Duration,
}

impl ScanSimulator {
    pub fn new(tick: Duration, settle: Duration) -> Self {
        Self { tick, settle }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Duration::from_millis(config.scan_tick_ms),
            Duration::from_millis(config.scan_settle_ms),
        )
    }

    /// Plays the scan for `file`, reporting every progress value, and returns
    /// the report once the settle pause has elapsed.
    pub async fn run<F>(&self, file: &LogoFile, on_progress: F) -> ScanReport
    where
        F: FnMut(u8),
    {
        self.run_with_rng(file, &mut rand::rng(), on_progress).await
    }

    pub async fn run_with_rng<R, F>(&self, file: &LogoFile, rng: &mut R, mut on_progress: F) -> ScanReport
    where
        R: Rng,
        F: FnMut(u8),
    {
        info!("🔍 Scanning {}...", file.name);

        let mut progress = 0u8;
        while progress < 100 {
            tokio::time::sleep(self.tick).await;
            progress = next_progress(progress, rng);
            on_progress(progress);
        }

        tokio::time::sleep(self.settle).await;

        let report = ScanReport {
            scan_id: uuid::Uuid::new_v4().to_string(),
            file_name: file.name.clone(),
            complexity: pick_complexity(rng),
            completed_at: Utc::now(),
        };

        info!(
            scan_id = %report.scan_id,
            complexity = %report.complexity,
            "✅ Scan complete for {}",
            report.file_name
        );

        report
    }
}

impl Default for ScanSimulator {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_next_progress_step_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let next = next_progress(50, &mut rng);
            assert!((52..=56).contains(&next));
        }
    }

    #[test]
    fn test_next_progress_caps_at_hundred() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(next_progress(99, &mut rng), 100);
        assert_eq!(next_progress(100, &mut rng), 100);
    }

    #[tokio::test]
    async fn test_scan_is_monotonic_and_ends_at_hundred() {
        let simulator = ScanSimulator::new(Duration::from_millis(1), Duration::ZERO);
        let file = LogoFile::new("logo.png", 2048);
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = Vec::new();

        let report = simulator
            .run_with_rng(&file, &mut rng, |p| seen.push(p))
            .await;

        assert_eq!(report.file_name, "logo.png");
        assert_eq!(seen.last(), Some(&100));
        assert!(seen.windows(2).all(|w| w[0] <= w[1]));
        // 100 / 6 rounded up to 100 / 2.
        assert!((17..=50).contains(&seen.len()));
        assert!(Complexity::ALL.contains(&report.complexity));
    }

    #[test]
    fn test_run_blocks_on_current_thread() {
        let simulator = ScanSimulator::new(Duration::ZERO, Duration::ZERO);
        let file = LogoFile::new("logo.stl", 10);
        let mut count = 0;
        let report = tokio_test::block_on(simulator.run(&file, |_| count += 1));
        assert!(count > 0);
        assert_eq!(report.file_name, "logo.stl");
    }
}
