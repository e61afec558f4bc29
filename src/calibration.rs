//! Per-subject closed-mouth calibration.
//!
//! Observes the mouth metric over a warm-up window in which the player is
//! instructed to keep the tongue in, then locks in a baseline and a
//! detection threshold. A noisy window keeps sliding instead of
//! calibrating, so a stray spike during warm-up ages out rather than
//! poisoning the threshold.

use std::collections::VecDeque;

/// Calibration lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalibrationPhase {
    /// No samples observed yet
    Uncalibrated,
    /// Collecting warm-up samples
    Warming,
    /// Baseline and threshold locked in
    Calibrated,
}

/// Closed-mouth baseline estimator and threshold source
#[derive(Debug)]
pub struct Calibrator {
    warmup_frames: usize,
    margin: f64,
    max_noise_std_dev: f64,
    phase: CalibrationPhase,
    window: VecDeque<f64>,
    baseline: Option<f64>,
    threshold: Option<f64>,
}

impl Calibrator {
    /// Create a new calibrator.
    ///
    /// # Panics
    ///
    /// Panics if `warmup_frames` is zero, `margin` is not positive, or
    /// `max_noise_std_dev` is negative. `Config::validate` rejects these
    /// before a pipeline is built.
    #[must_use]
    pub fn new(warmup_frames: usize, margin: f64, max_noise_std_dev: f64) -> Self {
        assert!(warmup_frames > 0, "Warm-up window must be greater than 0");
        assert!(margin > 0.0, "Calibration margin must be positive");
        assert!(max_noise_std_dev >= 0.0, "Noise bound must be non-negative");
        Self {
            warmup_frames,
            margin,
            max_noise_std_dev,
            phase: CalibrationPhase::Uncalibrated,
            window: VecDeque::with_capacity(warmup_frames),
            baseline: None,
            threshold: None,
        }
    }

    /// Feed one warm-up metric sample.
    ///
    /// No-op once calibrated; state only changes again via
    /// [`Calibrator::recalibrate`].
    pub fn observe(&mut self, metric: f64) {
        if self.phase == CalibrationPhase::Calibrated {
            return;
        }
        if !metric.is_finite() || metric < 0.0 {
            log::debug!("discarding invalid calibration sample {metric}");
            return;
        }
        self.phase = CalibrationPhase::Warming;

        if self.window.len() >= self.warmup_frames {
            self.window.pop_front();
        }
        self.window.push_back(metric);

        if self.window.len() < self.warmup_frames {
            return;
        }

        let std_dev = std_dev(&self.window);
        if std_dev > self.max_noise_std_dev {
            // Too noisy to trust; keep sliding until the window settles
            log::debug!("warm-up window std dev {std_dev:.4} above bound, extending");
            return;
        }

        let baseline = median(&self.window);
        self.baseline = Some(baseline);
        self.threshold = Some(baseline + self.margin);
        self.phase = CalibrationPhase::Calibrated;
        log::info!(
            "calibrated: baseline {baseline:.4}, threshold {:.4}",
            baseline + self.margin
        );
    }

    /// Re-enter the warm-up phase, discarding the current baseline.
    ///
    /// Gesture and hold-to-reset state elsewhere are untouched.
    pub fn recalibrate(&mut self) {
        self.window.clear();
        self.baseline = None;
        self.threshold = None;
        self.phase = CalibrationPhase::Uncalibrated;
        log::info!("recalibration requested, re-entering warm-up");
    }

    #[must_use]
    pub fn phase(&self) -> CalibrationPhase {
        self.phase
    }

    #[must_use]
    pub fn is_calibrated(&self) -> bool {
        self.phase == CalibrationPhase::Calibrated
    }

    /// Resting closed-mouth metric estimate, once calibrated
    #[must_use]
    pub fn baseline(&self) -> Option<f64> {
        self.baseline
    }

    /// Detection threshold (baseline + margin), once calibrated
    #[must_use]
    pub fn threshold(&self) -> Option<f64> {
        self.threshold
    }

    /// Samples currently held in the warm-up window
    #[must_use]
    pub fn samples_observed(&self) -> usize {
        self.window.len()
    }
}

fn std_dev(data: &VecDeque<f64>) -> f64 {
    let n = data.len() as f64;
    let mean = data.iter().sum::<f64>() / n;
    let variance = data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}

fn median(data: &VecDeque<f64>) -> f64 {
    let mut sorted: Vec<f64> = data.iter().copied().collect();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phases() {
        let mut cal = Calibrator::new(3, 0.05, 0.02);
        assert_eq!(cal.phase(), CalibrationPhase::Uncalibrated);

        cal.observe(0.10);
        assert_eq!(cal.phase(), CalibrationPhase::Warming);
        assert!(cal.threshold().is_none());

        cal.observe(0.10);
        cal.observe(0.10);
        assert_eq!(cal.phase(), CalibrationPhase::Calibrated);
        assert!((cal.baseline().unwrap() - 0.10).abs() < 1e-12);
        assert!((cal.threshold().unwrap() - 0.15).abs() < 1e-12);
    }

    #[test]
    fn test_idempotent_under_stable_input() {
        // Same threshold no matter how far past the minimum window we feed
        let mut short = Calibrator::new(5, 0.05, 0.02);
        let mut long = Calibrator::new(5, 0.05, 0.02);
        for _ in 0..5 {
            short.observe(0.10);
        }
        for _ in 0..50 {
            long.observe(0.10);
        }
        assert_eq!(short.threshold(), long.threshold());
    }

    #[test]
    fn test_noisy_window_extends() {
        let mut cal = Calibrator::new(4, 0.05, 0.01);
        // A stray spike at the start keeps the window too noisy to close
        cal.observe(0.90);
        cal.observe(0.10);
        cal.observe(0.10);
        cal.observe(0.10);
        assert!(!cal.is_calibrated());

        // Spike ages out of the sliding window; calibration completes
        cal.observe(0.10);
        assert!(cal.is_calibrated());
        assert!((cal.baseline().unwrap() - 0.10).abs() < 1e-12);
    }

    #[test]
    fn test_calibrated_is_immutable() {
        let mut cal = Calibrator::new(2, 0.05, 0.02);
        cal.observe(0.10);
        cal.observe(0.10);
        let threshold = cal.threshold();
        cal.observe(0.80);
        assert_eq!(cal.threshold(), threshold);
    }

    #[test]
    fn test_recalibrate() {
        let mut cal = Calibrator::new(2, 0.05, 0.02);
        cal.observe(0.10);
        cal.observe(0.10);
        assert!(cal.is_calibrated());

        cal.recalibrate();
        assert!(!cal.is_calibrated());
        assert!(cal.threshold().is_none());

        cal.observe(0.20);
        cal.observe(0.20);
        assert!((cal.threshold().unwrap() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_samples_discarded() {
        let mut cal = Calibrator::new(2, 0.05, 0.02);
        cal.observe(f64::NAN);
        cal.observe(-1.0);
        assert_eq!(cal.samples_observed(), 0);
    }

    #[test]
    #[should_panic(expected = "Warm-up window must be greater than 0")]
    fn test_zero_window_panics() {
        let _ = Calibrator::new(0, 0.05, 0.02);
    }

    #[test]
    #[should_panic(expected = "Calibration margin must be positive")]
    fn test_zero_margin_panics() {
        let _ = Calibrator::new(30, 0.0, 0.02);
    }
}
