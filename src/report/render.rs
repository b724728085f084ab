use std::fmt;

use super::Report;

const BANNER: &str = "============================================================";

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{BANNER}")?;
        writeln!(f, "CPTo Naming Convention - Rust Examples")?;
        writeln!(f, "{BANNER}")?;
        writeln!(f)?;

        let calc = &self.calculator;
        writeln!(f, "1. Calculator Demo:")?;
        writeln!(f, "  Circle area (r={}): {}", calc.area_radius, calc.area)?;
        writeln!(f, "  Square of {}: {}", calc.square_input, calc.square)?;
        writeln!(f, "  Total calculations: {}", calc.calculation_count)?;
        writeln!(f)?;

        let arrays = &self.arrays;
        writeln!(f, "2. Array Operations:")?;
        writeln!(f, "  Sum of numbers: {}", arrays.sum)?;
        writeln!(f, "  Count of names: {}", arrays.name_count)?;
        if let Some(first) = arrays.grid_first {
            writeln!(f, "  2D Grid first element: {first}")?;
        }
        writeln!(f)?;

        writeln!(f, "3. String Operations:")?;
        writeln!(f, "  {}", self.text.message)?;
        writeln!(f)?;

        let physics = &self.physics;
        writeln!(f, "4. Physics Calculation with Units:")?;
        writeln!(
            f,
            "  Distance: {} km ({} miles)",
            physics.distance_km, physics.distance_miles
        )?;
        writeln!(f, "  Time: {} hours", physics.time_hr)?;
        writeln!(f, "  Speed: {} km/h", physics.speed_kmph)?;
        writeln!(f)?;

        let vehicle = &self.vehicle;
        writeln!(f, "5. Structure Operations:")?;
        writeln!(f, "  Vehicle: {}", vehicle.model)?;
        writeln!(f, "  Year: {}", vehicle.year)?;
        writeln!(f, "  Price: ${}", vehicle.price)?;
        writeln!(f, "  Electric: {}", yes_no(vehicle.is_electric))?;
        writeln!(f)?;

        let app = &self.app;
        writeln!(f, "6. Application Configuration:")?;
        writeln!(f, "  Application: {}", app.name)?;
        writeln!(f, "  Version: {}", app.version)?;
        writeln!(f, "  Max Connections: {}", app.max_connections)?;
        writeln!(f, "  Initialized: {}", yes_no(app.initialized))?;
        writeln!(f)?;

        writeln!(f, "{BANNER}")?;
        writeln!(f, "Demo Complete!")?;
        write!(f, "{BANNER}")
    }
}
