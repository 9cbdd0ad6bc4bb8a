use crate::error::{FatError, FatResult};
use log::debug;
use serde::Deserialize;

/// Largest `n` whose factorial fits in an `i32` (12! = 479001600).
pub const MAX_INPUT: i32 = 12;

/// From here on `n!` carries at least 32 factors of two, so it wraps to 0.
const WRAPS_TO_ZERO: i32 = 34;

/// How the evaluator treats results that do not fit in an `i32`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    /// Report [`FatError::Overflow`].
    #[default]
    Checked,
    /// Two's complement wraparound, like a C `int`.
    Wrapping,
}

impl Overflow {
    pub fn eval(self, n: i32) -> FatResult<i32> {
        match self {
            Overflow::Checked => factorial(n),
            Overflow::Wrapping => wrapping_factorial(n),
        }
    }
}

/// Recursive factorial: `0! = 1! = 1`, `n! = n * (n - 1)!`.
pub fn factorial(n: i32) -> FatResult<i32> {
    if n < 0 {
        return Err(FatError::NegativeInput { n });
    }
    if n > MAX_INPUT {
        return Err(FatError::Overflow { n });
    }
    let result = checked(n).ok_or(FatError::Overflow { n })?;
    debug!("factorial({}) = {}", n, result);
    Ok(result)
}

/// Same recursion with wrapping multiplication. Negative input is still
/// rejected: its recursion never reaches a base case.
pub fn wrapping_factorial(n: i32) -> FatResult<i32> {
    if n < 0 {
        return Err(FatError::NegativeInput { n });
    }
    let result = if n >= WRAPS_TO_ZERO { 0 } else { wrapping(n) };
    debug!("wrapping_factorial({}) = {}", n, result);
    Ok(result)
}

fn checked(n: i32) -> Option<i32> {
    if n == 0 || n == 1 {
        return Some(1);
    }
    n.checked_mul(checked(n - 1)?)
}

fn wrapping(n: i32) -> i32 {
    if n == 0 || n == 1 {
        return 1;
    }
    n.wrapping_mul(wrapping(n - 1))
}
