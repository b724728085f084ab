/// Kilometers-to-miles conversion factor.
pub const KM_PER_MILE_FACTOR: f64 = 0.621371;

/// Average speed in km/h from a distance in kilometers and a time in hours.
///
/// Total like the calculator operations: a zero time yields ±infinity per
/// IEEE division rather than an error.
pub fn speed_kmph(distance_km: f64, time_hr: f64) -> f64 {
    distance_km / time_hr
}

/// Converts kilometers to miles.
pub fn km_to_miles(km: f64) -> f64 {
    km * KM_PER_MILE_FACTOR
}
