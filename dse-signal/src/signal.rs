use std::fmt;
use std::ops::{Index, IndexMut};

use num::Zero;
use serde::{Deserialize, Serialize};

use crate::domain::Domain;
use crate::error::{Result, SignalError};
use crate::{DEFAULT_EPS, DEFAULT_T0, DEFAULT_TS};

/// A discrete-time signal `x[n]` with samples stored over the inclusive
/// logical range `[n_min, n_max]`.
///
/// Two access paths, deliberately distinct:
///
/// - [`Signal::at`] takes a *logical* index, translates it to storage through
///   the domain, and zero-extends outside it. It cannot fail and cannot
///   mutate.
/// - `signal[i]` takes a zero-based *physical* slot directly, with no domain
///   translation, and hands out mutable storage. Out-of-range slots panic.
///
/// The two coincide only when `n_min == 0`. Alongside the samples the signal
/// carries a display label, the nominal time `t0` of the first sample, the
/// sampling interval `ts`, and a comparison tolerance `eps` consumed by
/// downstream code.
///
/// Invariant: the sample buffer always holds exactly `n_max - n_min + 1`
/// values; every constructor either establishes that or fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal<T> {
    domain: Domain,
    samples: Vec<T>,
    label: String,
    t0: f64,
    ts: f64,
    eps: f64,
}

impl<T: Clone + Zero> Signal<T> {
    /// The empty signal: no samples, empty domain, default metadata.
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(Domain::empty(), Vec::new())
    }

    /// Zero-filled signal over `[n_min, n_max]`.
    pub fn from_domain(n_min: i64, n_max: i64) -> Result<Self> {
        let domain = Domain::new(n_min, n_max)?;
        let samples = vec![T::zero(); domain.len()];
        Ok(Self::from_parts(domain, samples))
    }

    /// Zero-filled signal from a two-element `[n_min, n_max]` bounds slice.
    pub fn from_bounds(bounds: &[i64]) -> Result<Self> {
        match *bounds {
            [n_min, n_max] => Self::from_domain(n_min, n_max),
            _ => Err(SignalError::BoundsArity { len: bounds.len() }),
        }
    }

    /// Zero-filled signal from a `(first, second)` pair of sizes
    /// reinterpreted as `(n_min, n_max)`.
    pub fn from_range(range: (usize, usize)) -> Result<Self> {
        Self::from_domain(range.0 as i64, range.1 as i64)
    }

    /// Signal holding `samples` verbatim over the auto-assigned domain
    /// `[0, len - 1]`. An empty sequence has no domain under this rule and
    /// is rejected; the canonical empty signal is [`Signal::new`].
    pub fn from_samples(samples: Vec<T>) -> Result<Self> {
        if samples.is_empty() {
            return Err(SignalError::EmptySamples);
        }
        let domain = Domain::new(0, samples.len() as i64 - 1)?;
        Ok(Self::from_parts(domain, samples))
    }

    fn from_parts(domain: Domain, samples: Vec<T>) -> Self {
        debug_assert_eq!(samples.len(), domain.len());
        Self {
            domain,
            samples,
            label: String::new(),
            t0: DEFAULT_T0,
            ts: DEFAULT_TS,
            eps: DEFAULT_EPS,
        }
    }

    /// Logical, bounds-checked read of `x[n]`.
    ///
    /// Indices outside `[n_min, n_max]` read as `T::zero()`: a finite-support
    /// signal is implicitly zero everywhere else.
    #[must_use]
    pub fn at(&self, n: i64) -> T {
        match self.domain.slot(n) {
            Some(slot) => self.samples[slot].clone(),
            None => T::zero(),
        }
    }
}

impl<T> Signal<T> {
    #[must_use]
    pub fn n_min(&self) -> i64 {
        self.domain.n_min()
    }

    #[must_use]
    pub fn n_max(&self) -> i64 {
        self.domain.n_max()
    }

    /// The `(n_min, n_max)` pair.
    #[must_use]
    pub fn domain(&self) -> (i64, i64) {
        self.domain.bounds()
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Nominal time of the `n_min` sample.
    #[must_use]
    pub fn t0(&self) -> f64 {
        self.t0
    }

    /// Sampling interval. Not validated here; keeping it non-zero is the
    /// caller's responsibility.
    #[must_use]
    pub fn ts(&self) -> f64 {
        self.ts
    }

    /// Stored comparison tolerance. Never interpreted by the container.
    #[must_use]
    pub fn eps(&self) -> f64 {
        self.eps
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Stored samples in physical order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.samples
    }

    /// Mutable view of the storage, for bulk fills and in-place transforms.
    pub fn samples_mut(&mut self) -> &mut [T] {
        &mut self.samples
    }

    /// Nominal time of logical index `n` on the `t0`/`ts` axis. Defined for
    /// any `n`, inside the domain or not.
    #[must_use]
    pub fn time_of(&self, n: i64) -> f64 {
        self.t0 + (n - self.domain.n_min()) as f64 * self.ts
    }

    /// Total span of the sampled time axis.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 * self.ts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.samples.iter()
    }

    /// Iterate samples with their logical indices, `n_min..=n_max`.
    pub fn iter_indexed(&self) -> impl Iterator<Item = (i64, &T)> {
        let domain = self.domain;
        self.samples
            .iter()
            .enumerate()
            .map(move |(slot, value)| (domain.index_at(slot), value))
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    #[must_use]
    pub fn with_t0(mut self, t0: f64) -> Self {
        self.t0 = t0;
        self
    }

    #[must_use]
    pub fn with_ts(mut self, ts: f64) -> Self {
        self.ts = ts;
        self
    }

    #[must_use]
    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }
}

impl<T> Index<usize> for Signal<T> {
    type Output = T;

    /// Physical storage access: `i` is a zero-based slot, not a logical
    /// index. Equal to `at(i)` only when `n_min == 0`.
    fn index(&self, i: usize) -> &T {
        &self.samples[i]
    }
}

impl<T> IndexMut<usize> for Signal<T> {
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.samples[i]
    }
}

impl<T: Clone + Zero> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a Signal<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> fmt::Display for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.label.is_empty() {
            "signal"
        } else {
            &self.label
        };
        write!(f, "{label} {} ({} samples)", self.domain, self.samples.len())
    }
}

#[cfg(test)]
mod tests {
    use num::Complex;

    use super::Signal;
    use crate::error::SignalError;
    use crate::{DEFAULT_EPS, DEFAULT_T0, DEFAULT_TS, SignalC, SignalR};

    #[test]
    fn default_signal_is_empty_with_default_metadata() {
        let x = SignalR::new();
        assert!(x.is_empty());
        assert_eq!(x.domain(), (0, -1));
        assert_eq!(x.label(), "");
        assert_eq!(x.t0(), DEFAULT_T0);
        assert_eq!(x.ts(), DEFAULT_TS);
        assert_eq!(x.eps(), DEFAULT_EPS);
        assert_eq!(SignalR::default(), x);
    }

    #[test]
    fn domain_construction_allocates_zeroed_storage() {
        let x = SignalR::from_domain(-3, 2).unwrap();
        assert_eq!(x.domain(), (-3, 2));
        assert_eq!(x.len(), 6);
        assert!(x.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn inverted_domain_is_rejected() {
        assert_eq!(
            SignalR::from_domain(2, -3),
            Err(SignalError::InvalidDomain { n_min: 2, n_max: -3 })
        );
    }

    #[test]
    fn bounds_slice_needs_exactly_two_elements() {
        let x = SignalR::from_bounds(&[-3, 2]).unwrap();
        assert_eq!(x.domain(), (-3, 2));

        assert_eq!(
            SignalR::from_bounds(&[1]),
            Err(SignalError::BoundsArity { len: 1 })
        );
        assert_eq!(
            SignalR::from_bounds(&[1, 2, 3]),
            Err(SignalError::BoundsArity { len: 3 })
        );
    }

    #[test]
    fn range_pair_is_reinterpreted_as_bounds() {
        let x = SignalR::from_range((2, 6)).unwrap();
        assert_eq!(x.domain(), (2, 6));
        assert_eq!(x.len(), 5);
    }

    #[test]
    fn samples_construction_auto_assigns_domain() {
        let x = SignalR::from_samples(vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(x.domain(), (0, 2));
        assert_eq!(x.at(1), 2.0);
        for i in 0..3 {
            assert_eq!(x.at(i), x[i as usize]);
        }
    }

    #[test]
    fn empty_sample_sequence_is_rejected() {
        assert_eq!(
            SignalR::from_samples(vec![]),
            Err(SignalError::EmptySamples)
        );
    }

    #[test]
    fn at_zero_extends_outside_the_domain() {
        let mut x = SignalR::from_domain(-3, 2).unwrap();
        for i in 0..x.len() {
            x[i] = (i + 1) as f64;
        }
        assert_eq!(x.at(-3), x[0]);
        assert_eq!(x.at(2), x[5]);
        assert_eq!(x.at(-4), 0.0);
        assert_eq!(x.at(5), 0.0);
        assert_eq!(x.at(i64::MIN), 0.0);
        assert_eq!(x.at(i64::MAX), 0.0);
    }

    #[test]
    fn logical_and_physical_access_agree_on_the_domain() {
        let mut x = SignalR::from_domain(-2, 2).unwrap();
        x[0] = 10.0;
        x[4] = -1.5;
        for n in -2..=2 {
            assert_eq!(x.at(n), x[(n + 2) as usize]);
        }
    }

    #[test]
    fn clone_is_a_deep_copy() {
        let x = SignalR::from_samples(vec![1.0, 2.0, 3.0])
            .unwrap()
            .with_label("x");
        let mut y = x.clone();
        assert_eq!(y, x);

        y[1] = 42.0;
        assert_eq!(x.at(1), 2.0);
        assert_eq!(y.at(1), 42.0);
    }

    #[test]
    fn builders_set_metadata_and_leave_samples_alone() {
        let x = SignalR::from_samples(vec![1.0, 2.0])
            .unwrap()
            .with_label("pulse")
            .with_t0(-0.5)
            .with_ts(0.25)
            .with_eps(1e-9);
        assert_eq!(x.label(), "pulse");
        assert_eq!(x.t0(), -0.5);
        assert_eq!(x.ts(), 0.25);
        assert_eq!(x.eps(), 1e-9);
        assert_eq!(x.as_slice(), &[1.0, 2.0]);
    }

    #[test]
    fn time_axis_follows_t0_and_ts() {
        let x = SignalR::from_domain(-2, 5)
            .unwrap()
            .with_t0(1.0)
            .with_ts(0.5);
        assert_eq!(x.time_of(-2), 1.0);
        assert_eq!(x.time_of(0), 2.0);
        assert_eq!(x.time_of(5), 4.5);
        assert_eq!(x.duration(), 4.0);
    }

    #[test]
    fn iter_indexed_walks_the_logical_domain() {
        let mut x = SignalR::from_domain(-1, 1).unwrap();
        x.samples_mut().copy_from_slice(&[1.0, 2.0, 3.0]);

        let pairs: Vec<(i64, f64)> = x.iter_indexed().map(|(n, &v)| (n, v)).collect();
        assert_eq!(pairs, vec![(-1, 1.0), (0, 2.0), (1, 3.0)]);
    }

    #[test]
    fn complex_signals_zero_extend_with_the_complex_zero() {
        let mut x = SignalC::from_domain(-1, 1).unwrap();
        x[0] = Complex::new(1.0, -1.0);
        assert_eq!(x.at(-1), Complex::new(1.0, -1.0));
        assert_eq!(x.at(7), Complex::new(0.0, 0.0));
    }

    #[test]
    fn display_shows_label_and_domain() {
        let x = SignalR::from_domain(-3, 2).unwrap().with_label("echo");
        assert_eq!(x.to_string(), "echo [-3, 2] (6 samples)");

        let unnamed = SignalR::from_samples(vec![0.0]).unwrap();
        assert_eq!(unnamed.to_string(), "signal [0, 0] (1 samples)");
    }

    #[test]
    fn single_sample_domain_round_trips() {
        let mut x = Signal::<f64>::from_domain(4, 4).unwrap();
        x[0] = 9.0;
        assert_eq!(x.at(4), 9.0);
        assert_eq!(x.at(3), 0.0);
        assert_eq!(x.at(5), 0.0);
    }
}
