/// Numeric conversion helpers.
///
/// Safe conversions from the evaluator's `f64` values to the integers needed by
/// integer division, remainder, exponentiation, `RES` indices and loop bounds.
/// Every function returns a `Result` that is `Ok` only if the conversion is
/// exact and in range.
pub mod num;
