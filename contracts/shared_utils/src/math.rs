//! Math utilities for checked arithmetic and percentage calculations
//!
//! Every operation returns `None` instead of wrapping or panicking, so the
//! calling contract can surface the failure as its own error.

/// Checked math operations that never wrap
pub struct SafeMath;

impl SafeMath {
    /// Add two i128 values, `None` on overflow
    pub fn add(a: i128, b: i128) -> Option<i128> {
        a.checked_add(b)
    }

    /// Subtract two i128 values, `None` on overflow
    pub fn sub(a: i128, b: i128) -> Option<i128> {
        a.checked_sub(b)
    }

    /// Multiply two i128 values, `None` on overflow
    pub fn mul(a: i128, b: i128) -> Option<i128> {
        a.checked_mul(b)
    }

    /// Divide two i128 values, `None` on division by zero
    pub fn div(a: i128, b: i128) -> Option<i128> {
        a.checked_div(b)
    }

    /// Calculate percentage: (value * percent) / 100, rounded down
    ///
    /// # Arguments
    /// * `value` - The base value
    /// * `percent` - The percentage (0-100)
    ///
    /// # Returns
    /// `None` if `percent > 100` or the multiplication overflows
    pub fn percent(value: i128, percent: u32) -> Option<i128> {
        if percent > 100 {
            return None;
        }
        Self::div(Self::mul(value, percent as i128)?, 100)
    }

    /// Calculate a fractional portion: (value * numerator) / denominator,
    /// rounded down
    ///
    /// # Arguments
    /// * `value` - The base value
    /// * `numerator` - Portion numerator
    /// * `denominator` - Portion denominator (must be nonzero)
    pub fn portion(value: i128, numerator: i128, denominator: i128) -> Option<i128> {
        if denominator == 0 {
            return None;
        }
        Self::div(Self::mul(value, numerator)?, denominator)
    }
}
