//! The Fourier epicycle stepper.
//!
//! Coefficients are stored in centered order, `[c_{-N}, …, c_0, …, c_N]`,
//! and each term rotates as `c_k · e^{i·2π·k·speed·t}`.

use std::f64::consts::TAU;

use num_complex::Complex64;

use crate::{point::CanvasPoint, viewport::Viewport};

/// Revolutions per second of the base frequency.
pub const DEFAULT_SPEED: f64 = 1.0 / 5.0;

/// A chain of rotating vectors driven by Fourier coefficients.
#[derive(Debug, Clone)]
pub struct Epicycles {
    coefficients: Vec<Complex64>,
    frequency_count: usize,
    speed: f64,
    /// Integrated time in seconds.
    elapsed: f64,
}

impl Epicycles {
    /// Create a stepper over `coefficients`, using frequencies `-frequency_count..=frequency_count`.
    pub fn new(coefficients: Vec<Complex64>, frequency_count: usize, speed: f64) -> Self {
        Self {
            coefficients,
            frequency_count,
            speed,
            elapsed: 0.0,
        }
    }

    /// Create a stepper with the frequency count implied by the list length
    /// and the default speed.
    pub fn from_coefficients(coefficients: Vec<Complex64>) -> Self {
        let frequency_count = coefficients.len().saturating_sub(1) / 2;
        Self::new(coefficients, frequency_count, DEFAULT_SPEED)
    }

    pub fn frequency_count(&self) -> usize {
        self.frequency_count
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn coefficients(&self) -> &[Complex64] {
        &self.coefficients
    }

    /// Seconds integrated so far.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Advance the rotation by `seconds`.
    ///
    /// There is no step limit: a long pause produces a matching phase jump.
    pub fn advance(&mut self, seconds: f64) {
        if !seconds.is_finite() {
            log::warn!("ignoring non-finite epicycle step of {seconds} s");
            return;
        }
        self.elapsed += seconds;
    }

    /// Phase angle in radians of the term with the given frequency.
    pub fn phase(&self, frequency: i64) -> f64 {
        TAU * frequency as f64 * self.speed * self.elapsed
    }

    /// Coefficient for `frequency`, or zero when the list has no slot for it.
    pub fn coefficient(&self, frequency: i64) -> Complex64 {
        let index = frequency + self.frequency_count as i64;
        usize::try_from(index)
            .ok()
            .and_then(|i| self.coefficients.get(i))
            .copied()
            .unwrap_or_default()
    }

    /// Current value of the rotating term with the given frequency.
    pub fn term(&self, frequency: i64) -> Complex64 {
        self.coefficient(frequency) * Complex64::from_polar(1.0, self.phase(frequency))
    }

    /// Partial sums of the series, one per frequency pair.
    ///
    /// The first entry is the zero-frequency term; entry `j` adds the
    /// `+j` and `-j` terms to entry `j - 1`. The last entry is the traced point.
    pub fn partial_sums(&self) -> Vec<Complex64> {
        let mut sums = Vec::with_capacity(self.frequency_count + 1);
        let mut acc = self.coefficient(0);
        sums.push(acc);
        for k in 1..=self.frequency_count as i64 {
            acc += self.term(k) + self.term(-k);
            sums.push(acc);
        }
        sums
    }

    /// The point traced by the tip of the chain.
    pub fn tip(&self) -> Complex64 {
        self.partial_sums()
            .last()
            .copied()
            .unwrap_or_default()
    }

    /// Partial sums mapped onto a canvas of the given size.
    pub fn current_points(&self, viewport: &Viewport, width: f32, height: f32) -> Vec<CanvasPoint> {
        self.partial_sums()
            .into_iter()
            .map(|z| viewport.to_canvas(z, width, height))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Complex64, b: Complex64) -> bool {
        (a - b).norm() < 1e-9
    }

    #[test]
    fn frequency_count_follows_list_length() {
        let c = Complex64::new(1.0, 0.0);
        assert_eq!(Epicycles::from_coefficients(vec![c]).frequency_count(), 0);
        assert_eq!(Epicycles::from_coefficients(vec![c; 3]).frequency_count(), 1);
        assert_eq!(Epicycles::from_coefficients(vec![c; 7]).frequency_count(), 3);
        assert_eq!(Epicycles::from_coefficients(Vec::new()).frequency_count(), 0);
    }

    #[test]
    fn single_coefficient_yields_constant_point() {
        let c0 = Complex64::new(0.25, -0.5);
        let mut epicycles = Epicycles::from_coefficients(vec![c0]);
        for _ in 0..10 {
            epicycles.advance(0.37);
            let sums = epicycles.partial_sums();
            assert_eq!(sums.len(), 1);
            assert!(approx_eq(sums[0], c0));
        }
    }

    #[test]
    fn three_coefficients_yield_two_points() {
        let coefs = vec![
            Complex64::new(0.0, 0.0),
            Complex64::new(0.1, 0.0),
            Complex64::new(0.5, 0.0),
        ];
        let mut epicycles = Epicycles::from_coefficients(coefs);
        assert_eq!(epicycles.partial_sums().len(), 2);
        assert!(approx_eq(epicycles.tip(), Complex64::new(0.6, 0.0)));

        // A quarter revolution of the base frequency.
        epicycles.advance(1.25);
        assert!(approx_eq(epicycles.tip(), Complex64::new(0.1, 0.5)));
    }

    #[test]
    fn phase_accumulates_across_steps() {
        let mut epicycles = Epicycles::from_coefficients(vec![Complex64::new(1.0, 0.0); 3]);
        epicycles.advance(0.016);
        epicycles.advance(0.034);
        epicycles.advance(0.0);
        assert!((epicycles.elapsed() - 0.05).abs() < 1e-12);
        assert!((epicycles.phase(1) - TAU * DEFAULT_SPEED * 0.05).abs() < 1e-12);
        assert!((epicycles.phase(-1) + epicycles.phase(1)).abs() < 1e-12);
    }

    #[test]
    fn zero_step_keeps_state() {
        let mut epicycles = Epicycles::from_coefficients(vec![Complex64::new(0.3, 0.2); 5]);
        epicycles.advance(0.8);
        let before = epicycles.partial_sums();
        epicycles.advance(0.0);
        assert_eq!(before, epicycles.partial_sums());
    }

    #[test]
    fn non_finite_step_is_ignored() {
        let mut epicycles = Epicycles::from_coefficients(vec![Complex64::new(1.0, 0.0); 3]);
        epicycles.advance(1.0);
        epicycles.advance(f64::NAN);
        epicycles.advance(f64::INFINITY);
        assert_eq!(epicycles.elapsed(), 1.0);
    }

    #[test]
    fn missing_coefficients_read_as_zero() {
        // Even length: the trailing coefficient is outside the frequency range.
        let epicycles = Epicycles::from_coefficients(vec![Complex64::new(1.0, 1.0); 4]);
        assert_eq!(epicycles.frequency_count(), 1);
        assert_eq!(epicycles.coefficient(5), Complex64::default());
        assert_eq!(epicycles.coefficient(-5), Complex64::default());

        let empty = Epicycles::from_coefficients(Vec::new());
        assert_eq!(empty.partial_sums(), vec![Complex64::default()]);
    }
}
