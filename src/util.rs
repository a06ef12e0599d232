/// Floating-point classification helpers.
///
/// Small predicates and checks used by the evaluator to decide whether an
/// arithmetic result is real and finite, instead of letting `NaN` or infinity
/// leak into a plot.
pub mod num;
