/// Sum of an integer slice.
pub fn sum(values: &[i64]) -> i64 {
    values.iter().sum()
}

/// Two-dimensional integer grid backed by rows.
#[derive(Debug, Clone, Default)]
pub struct Grid {
    rows: Vec<Vec<i64>>,
}

impl Grid {
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Self {
        Self { rows }
    }

    /// Top-left element, if the grid has one.
    pub fn first(&self) -> Option<i64> {
        self.rows.first().and_then(|row| row.first()).copied()
    }
}
