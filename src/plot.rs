use log::{info, warn};

use crate::{
    error::{InputError, PlotError, plot_error::STATUS_READY},
    interpreter::{
        function::ParsedFunction,
        sampler::{DEFAULT_STEP, GridPolicy, SampleRange, Samples, sample},
    },
};

/// A plot request as typed into the three input fields.
///
/// Every field is kept as raw text. Nothing is interpreted until
/// [`PlotRequest::run`], which validates the fields in the order a user would
/// read the resulting message: emptiness, then numeric bounds, then the range,
/// and only then the function itself.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotRequest {
    function_text: String,
    x_min:         String,
    x_max:         String,
    step:          f64,
    policy:        GridPolicy,
}

impl PlotRequest {
    /// Creates a request with the default step and grid policy.
    #[must_use]
    pub fn new(function_text: impl Into<String>,
               x_min: impl Into<String>,
               x_max: impl Into<String>)
               -> Self {
        Self { function_text: function_text.into(),
               x_min:         x_min.into(),
               x_max:         x_max.into(),
               step:          DEFAULT_STEP,
               policy:        GridPolicy::default(), }
    }

    /// Overrides the sampling step.
    #[must_use]
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Overrides the grid policy.
    #[must_use]
    pub fn with_policy(mut self, policy: GridPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Validates the bound fields and builds the sampling range.
    ///
    /// The function text is only checked for emptiness here; its syntax is
    /// the parser's business.
    ///
    /// # Errors
    /// - [`InputError::EmptyField`] if any field is the empty string.
    /// - [`InputError::NotANumber`] if a bound is not a finite number.
    /// - Any error of [`SampleRange::with_step`].
    ///
    /// # Example
    /// ```
    /// use fplot::{error::InputError, plot::PlotRequest};
    ///
    /// let err = PlotRequest::new("x", "5", "-5").validate().unwrap_err();
    /// assert!(matches!(err, InputError::InvalidRange { .. }));
    /// ```
    pub fn validate(&self) -> Result<SampleRange, InputError> {
        if self.function_text.is_empty() || self.x_min.is_empty() || self.x_max.is_empty() {
            return Err(InputError::EmptyField);
        }

        let x_min = parse_bound(&self.x_min)?;
        let x_max = parse_bound(&self.x_max)?;

        SampleRange::with_step(x_min, x_max, self.step).map(|range| range.with_policy(self.policy))
    }

    /// Validates the request, parses the function and samples it.
    ///
    /// # Errors
    /// Returns a [`PlotError`] wrapping the first input, parse or evaluation
    /// failure. Use [`PlotError::status_message`] for the text to show.
    ///
    /// # Example
    /// ```
    /// use fplot::plot::PlotRequest;
    ///
    /// let plot = PlotRequest::new("sin(x) + 5", "-5", "5").run().unwrap();
    /// assert_eq!(plot.label(), "sin(x) + 5");
    /// assert_eq!(plot.title(), "Function Plot: sin(x) + 5");
    ///
    /// let err = PlotRequest::new("2x", "-5", "5").run().unwrap_err();
    /// assert_eq!(err.status_message(), "Invalid function");
    /// ```
    pub fn run(&self) -> Result<Plot, PlotError> {
        let range = self.validate()
                        .inspect_err(|e| warn!("Rejected plot request: {e}"))?;
        let function = ParsedFunction::parse(&self.function_text)
                       .inspect_err(|e| warn!("Rejected function '{}': {e}", self.function_text))?;
        let samples = sample(&function, &range)?;

        info!("Plotted '{function}' with {} points", samples.len());
        Ok(Plot { function,
                  samples })
    }
}

/// Reads a bound field as a finite number.
///
/// Surrounding whitespace is ignored. `inf` and `nan` parse as floats but can
/// never bound a plot, so they are rejected like any other non-number.
fn parse_bound(text: &str) -> Result<f64, InputError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| InputError::NotANumber { text: text.to_string() })
}

/// The outcome of a successful plot request, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Plot {
    function: ParsedFunction,
    samples:  Samples,
}

impl Plot {
    /// The function text exactly as the user typed it.
    #[must_use]
    pub fn label(&self) -> &str {
        self.function.label()
    }

    /// The title to draw above the plot.
    #[must_use]
    pub fn title(&self) -> String {
        self.function.title()
    }

    /// The status message to show once the plot is drawn.
    #[must_use]
    pub const fn status_message(&self) -> &'static str {
        STATUS_READY
    }

    /// The parsed function that was sampled.
    #[must_use]
    pub const fn function(&self) -> &ParsedFunction {
        &self.function
    }

    /// The sampled `(x, y)` points, in increasing `x` order.
    #[must_use]
    pub fn samples(&self) -> &[(f64, f64)] {
        &self.samples
    }

    /// Consumes the plot, returning its points.
    #[must_use]
    pub fn into_samples(self) -> Samples {
        self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{EvalError, ParseError};

    #[test]
    fn empty_fields_come_first() {
        for (f, lo, hi) in [("", "1", "2"), ("x", "", "2"), ("x", "1", ""), ("", "", "")] {
            assert_eq!(PlotRequest::new(f, lo, hi).run(),
                       Err(PlotError::Input(InputError::EmptyField)));
        }
    }

    #[test]
    fn bounds_must_be_finite_numbers() {
        for (lo, hi) in [("a", "1"), ("0", "two"), ("inf", "1"), ("0", "nan"), ("  ", "1")] {
            let err = PlotRequest::new("x", lo, hi).run().unwrap_err();
            assert_eq!(err.status_message(), "x min and x max must be numbers");
        }
    }

    #[test]
    fn bounds_tolerate_surrounding_whitespace() {
        let range = PlotRequest::new("x", " -1 ", "1\n").validate().unwrap();
        assert_eq!((range.x_min(), range.x_max()), (-1.0, 1.0));
    }

    #[test]
    fn inverted_range_never_reaches_the_parser() {
        let err = PlotRequest::new("this is not math", "5", "-5").run().unwrap_err();
        assert!(matches!(err, PlotError::Input(InputError::InvalidRange { .. })));
        assert_eq!(err.status_message(), "x min must be less than x max");
    }

    #[test]
    fn parse_and_domain_failures_share_one_message() {
        let parse = PlotRequest::new("2x", "-5", "5").run().unwrap_err();
        let domain = PlotRequest::new("log(x)", "-5", "5").run().unwrap_err();

        assert!(matches!(parse, PlotError::Parse(ParseError::UnexpectedToken(1))));
        assert!(matches!(domain, PlotError::Eval(EvalError::DomainError { operation: "log", .. })));
        assert_eq!(parse.status_message(), domain.status_message());
    }

    #[test]
    fn whitespace_only_function_is_an_invalid_function() {
        let err = PlotRequest::new("   ", "0", "1").run().unwrap_err();
        assert_eq!(err, PlotError::Parse(ParseError::EmptyExpression));
        assert_eq!(err.status_message(), "Invalid function");
    }

    #[test]
    fn step_and_policy_are_applied() {
        let plot = PlotRequest::new("x", "0", "1").with_step(0.5)
                                                  .with_policy(GridPolicy::Counted)
                                                  .run()
                                                  .unwrap();
        assert_eq!(plot.samples(), &[(0.0, 0.0), (0.5, 0.5), (1.0, 1.0)]);
        assert_eq!(plot.status_message(), "Ready...");
    }

    #[test]
    fn unusable_steps_have_their_own_message() {
        for step in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = PlotRequest::new("x", "0", "1").with_step(step).run().unwrap_err();
            assert!(matches!(err, PlotError::Input(InputError::InvalidStep { .. })));
            assert_eq!(err.status_message(), "step must be a positive number");
        }
    }

    #[test]
    fn oversized_grid_has_its_own_message() {
        let err = PlotRequest::new("x", "-1000", "1000").with_step(1e-9)
                                                       .run()
                                                       .unwrap_err();
        assert!(matches!(err, PlotError::Input(InputError::TooManySamples { .. })));
        assert_eq!(err.status_message(),
                   "too many points; increase the step or shrink the range");
    }
}
