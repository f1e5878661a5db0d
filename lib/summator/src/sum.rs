/* 求和：纯函数，无副作用 */
use crate::operand::{parse_operand, SumError};
use std::ops::Add;

/// Returns `a + b`.
///
/// Works for any type with an `Add` impl whose output is the same type, so
/// integer and floating point callers share it. Integer overflow follows the
/// usual `+` rules for the build profile.
pub fn calculate_sum<T: Add<Output = T>>(a: T, b: T) -> T {
    a + b
}

/// Namespacing wrapper around [`calculate_sum`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summator;

impl Summator {
    pub fn calculate_sum<T: Add<Output = T>>(a: T, b: T) -> T {
        calculate_sum(a, b)
    }

    /// Parses two textual operands and adds them as `f64`.
    ///
    /// Fails with [`SumError::Overflow`] when two finite operands produce a
    /// non-finite sum.
    pub fn sum_operands(a: &str, b: &str) -> Result<f64, SumError> {
        let lhs = parse_operand(a)?;
        let rhs = parse_operand(b)?;
        let sum = calculate_sum(lhs, rhs);
        if !sum.is_finite() {
            tracing::warn!(lhs, rhs, "sum left the finite range");
            return Err(SumError::Overflow);
        }
        tracing::debug!(lhs, rhs, sum, "operands summed");
        Ok(sum)
    }
}
