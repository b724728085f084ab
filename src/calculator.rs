use crate::config::PI;

/// Stateful calculator that remembers its most recent result and how many
/// operations have completed.
///
/// Both operations are total over floats: non-finite inputs propagate NaN
/// or infinity per IEEE semantics instead of being rejected.
#[derive(Debug, Clone)]
pub struct Calculator {
    last_result: f64,
    calculation_count: u64,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            last_result: 0.0,
            calculation_count: 0,
        }
    }

    /// Computes the area of a circle, stores it as the last result, and
    /// bumps the operation counter.
    ///
    /// A negative radius is accepted; squaring makes the area positive.
    pub fn calculate_area(&mut self, radius: f64) -> f64 {
        let area = PI * radius * radius;
        self.last_result = area;
        self.calculation_count += 1;
        area
    }

    /// Squares `value` into the caller-supplied `result` slot, stores the
    /// square as the last result, and bumps the operation counter.
    pub fn calculate_square(&mut self, value: f64, result: &mut f64) {
        let square = value * value;
        *result = square;
        self.last_result = square;
        self.calculation_count += 1;
    }

    /// Number of completed operations since construction. Never decreases.
    pub fn calculation_count(&self) -> u64 {
        self.calculation_count
    }

    /// Value computed by the most recent operation, `0.0` before any call.
    pub fn last_result(&self) -> f64 {
        self.last_result
    }
}
