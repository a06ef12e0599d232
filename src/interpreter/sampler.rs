use log::debug;

use crate::{
    error::{EvalError, InputError},
    interpreter::function::ParsedFunction,
};

/// Default distance between two neighbouring sample points.
pub const DEFAULT_STEP: f64 = 0.01;
/// Upper bound on the number of points a single range may produce.
pub const MAX_SAMPLES: usize = 10_000_000;
/// Slack added before flooring the point count of a counted grid, so a range
/// that is a whole number of steps keeps its endpoint.
const COUNT_EPSILON: f64 = 1e-9;

/// The sampled points of a function, in increasing `x` order.
pub type Samples = Vec<(f64, f64)>;
/// Either every sample of a run, or the error that aborted it.
pub type SampleResult = Result<Samples, EvalError>;

/// How grid points are generated between the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridPolicy {
    /// Start at `x_min` and repeatedly add `step` while `x <= x_max`.
    ///
    /// Rounding accumulates, so whether the endpoint itself is included
    /// depends on the exact bounds and step.
    #[default]
    Accumulate,
    /// Compute the point count up front and place point `i` at
    /// `x_min + i * step`. The endpoint is included whenever the range is a
    /// whole number of steps.
    Counted,
}

/// A validated sampling interval.
///
/// Construction enforces the invariants: both bounds finite,
/// `x_min < x_max`, a positive step that actually advances `x` across the
/// whole range, and at most [`MAX_SAMPLES`] points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleRange {
    x_min:  f64,
    x_max:  f64,
    step:   f64,
    policy: GridPolicy,
}

impl SampleRange {
    /// Creates a range with the default step of `0.01`.
    ///
    /// # Errors
    /// See [`Self::with_step`].
    ///
    /// # Example
    /// ```
    /// use fplot::interpreter::sampler::SampleRange;
    ///
    /// assert!(SampleRange::new(-5.0, 5.0).is_ok());
    /// assert!(SampleRange::new(5.0, -5.0).is_err());
    /// ```
    pub fn new(x_min: f64, x_max: f64) -> Result<Self, InputError> {
        Self::with_step(x_min, x_max, DEFAULT_STEP)
    }

    /// Creates a range with an explicit step.
    ///
    /// # Errors
    /// - [`InputError::NotANumber`] if a bound is not finite.
    /// - [`InputError::InvalidRange`] if `x_min >= x_max`.
    /// - [`InputError::InvalidStep`] if the step is not positive and finite,
    ///   or too small to change `x` at the magnitude of the bounds.
    /// - [`InputError::TooManySamples`] if the range would exceed
    ///   [`MAX_SAMPLES`] points.
    pub fn with_step(x_min: f64, x_max: f64, step: f64) -> Result<Self, InputError> {
        for bound in [x_min, x_max] {
            if !bound.is_finite() {
                return Err(InputError::NotANumber { text: bound.to_string() });
            }
        }
        if x_min >= x_max {
            return Err(InputError::InvalidRange { x_min, x_max });
        }
        if !(step.is_finite() && step > 0.0) {
            return Err(InputError::InvalidStep { step });
        }
        let magnitude = x_min.abs().max(x_max.abs());
        if magnitude + step == magnitude {
            return Err(InputError::InvalidStep { step });
        }

        #[allow(clippy::cast_precision_loss)]
        let limit = MAX_SAMPLES as f64;
        if (x_max - x_min) / step >= limit {
            return Err(InputError::TooManySamples { limit: MAX_SAMPLES });
        }

        Ok(Self { x_min,
                  x_max,
                  step,
                  policy: GridPolicy::default() })
    }

    /// Returns the same range with a different grid policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: GridPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The lower bound.
    #[must_use]
    pub const fn x_min(&self) -> f64 {
        self.x_min
    }

    /// The upper bound.
    #[must_use]
    pub const fn x_max(&self) -> f64 {
        self.x_max
    }

    /// The distance between neighbouring points.
    #[must_use]
    pub const fn step(&self) -> f64 {
        self.step
    }

    /// The grid policy.
    #[must_use]
    pub const fn policy(&self) -> GridPolicy {
        self.policy
    }

    /// Iterates over the grid points of this range.
    ///
    /// # Example
    /// ```
    /// use fplot::interpreter::sampler::{GridPolicy, SampleRange};
    ///
    /// let range = SampleRange::with_step(0.0, 1.0, 0.25).unwrap()
    ///                                                   .with_policy(GridPolicy::Counted);
    /// let xs: Vec<f64> = range.grid().collect();
    /// assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    /// ```
    pub fn grid(&self) -> Grid {
        let state = match self.policy {
            GridPolicy::Accumulate => GridState::Accumulate { next: self.x_min },
            GridPolicy::Counted => GridState::Counted { index: 0,
                                                        count: self.counted_len() },
        };
        Grid { range: *self,
               state }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn counted_len(&self) -> usize {
        ((self.x_max - self.x_min) / self.step + COUNT_EPSILON).floor() as usize + 1
    }
}

#[derive(Debug, Clone, Copy)]
enum GridState {
    Accumulate { next: f64 },
    Counted { index: usize, count: usize },
}

/// Iterator over the points of a [`SampleRange`].
#[derive(Debug, Clone)]
pub struct Grid {
    range: SampleRange,
    state: GridState,
}

impl Iterator for Grid {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        match &mut self.state {
            GridState::Accumulate { next } => {
                let x = *next;
                if x > self.range.x_max {
                    return None;
                }
                *next += self.range.step;
                Some(x)
            },
            GridState::Counted { index, count } => {
                if *index >= *count {
                    return None;
                }
                #[allow(clippy::cast_precision_loss)]
                let x = (*index as f64).mul_add(self.range.step, self.range.x_min);
                *index += 1;
                Some(x)
            },
        }
    }
}

/// Evaluates `function` at every grid point of `range`.
///
/// Sampling is all or nothing: the first point at which the function is
/// undefined aborts the run and its error is returned instead of a partial
/// sequence.
///
/// # Errors
/// Returns the [`EvalError`] of the first failing point.
///
/// # Example
/// ```
/// use fplot::interpreter::{
///     function::ParsedFunction,
///     sampler::{SampleRange, sample},
/// };
///
/// let f = ParsedFunction::parse("x^2").unwrap();
/// let samples = sample(&f, &SampleRange::new(-5.0, 5.0).unwrap()).unwrap();
/// assert_eq!(samples[0], (-5.0, 25.0));
///
/// let g = ParsedFunction::parse("sqrt(x)").unwrap();
/// assert!(sample(&g, &SampleRange::new(-1.0, 1.0).unwrap()).is_err());
/// ```
pub fn sample(function: &ParsedFunction, range: &SampleRange) -> SampleResult {
    let samples = range.grid()
                       .map(|x| function.evaluate(x).map(|y| (x, y)))
                       .collect::<SampleResult>()
                       .inspect_err(|e| debug!("Sampling '{function}' failed: {e}"))?;

    debug!("Sampled '{function}' at {} points over [{}, {}] with step {} ({:?})",
           samples.len(),
           range.x_min,
           range.x_max,
           range.step,
           range.policy);

    Ok(samples)
}
