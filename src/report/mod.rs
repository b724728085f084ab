mod render;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    calculator::Calculator,
    collections::{self, Grid},
    config, physics, text,
    vehicle::Vehicle,
};

/// Result of the calculator section: one area call, one square call through
/// the output parameter, and the counter both calls advanced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatorSection {
    pub area_radius: f64,
    pub area: f64,
    pub square_input: f64,
    pub square: f64,
    pub calculation_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArraySection {
    pub sum: i64,
    pub name_count: usize,
    pub grid_first: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextSection {
    pub input: String,
    pub pattern: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsSection {
    pub distance_km: f64,
    pub distance_miles: f64,
    pub time_hr: f64,
    pub speed_kmph: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSection {
    pub name: String,
    pub version: f64,
    pub max_connections: u32,
    pub initialized: bool,
}

/// Every demo section, in the order the console rendering prints them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub calculator: CalculatorSection,
    pub arrays: ArraySection,
    pub text: TextSection,
    pub physics: PhysicsSection,
    pub vehicle: Vehicle,
    pub app: AppSection,
}

impl Report {
    /// Runs every demo section and collects the results.
    pub fn build() -> Self {
        debug!("Running calculator section");
        let mut calc = Calculator::new();
        let area_radius = 5.0;
        let area = calc.calculate_area(area_radius);
        let square_input = 7.0;
        let mut square = 0.0;
        calc.calculate_square(square_input, &mut square);
        let calculator = CalculatorSection {
            area_radius,
            area,
            square_input,
            square,
            calculation_count: calc.calculation_count(),
        };

        debug!("Running array section");
        let numbers = [1, 2, 3, 4, 5];
        let names = ["Alice", "Bob", "Charlie"];
        let grid = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);
        let arrays = ArraySection {
            sum: collections::sum(&numbers),
            name_count: names.len(),
            grid_first: grid.first(),
        };

        debug!("Running text section");
        let input = "Hello CPTo World";
        let pattern = "CPTo";
        let text = TextSection {
            input: input.to_string(),
            pattern: pattern.to_string(),
            message: text::search_message(input, pattern),
        };

        debug!("Running physics section");
        let distance_km = 150.0;
        let time_hr = 2.5;
        let physics = PhysicsSection {
            distance_km,
            distance_miles: physics::km_to_miles(distance_km),
            time_hr,
            speed_kmph: physics::speed_kmph(distance_km, time_hr),
        };

        debug!("Running structure and configuration sections");
        let vehicle = Vehicle::sample();
        let app = AppSection {
            name: config::APP_NAME.to_string(),
            version: config::VERSION,
            max_connections: config::MAX_CONNECTIONS,
            initialized: true,
        };

        Self {
            calculator,
            arrays,
            text,
            physics,
            vehicle,
            app,
        }
    }
}
