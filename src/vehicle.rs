use serde::{Deserialize, Serialize};

/// Plain vehicle record used by the structure demo section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub model: String,
    pub year: u16,
    pub price: f64,
    pub is_electric: bool,
}

impl Vehicle {
    /// The sample record the demo has always shown.
    pub fn sample() -> Self {
        Self {
            model: "Tesla Model 3".to_string(),
            year: 2024,
            price: 45000.00,
            is_electric: true,
        }
    }
}
