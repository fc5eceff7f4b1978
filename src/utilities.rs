//! Unit conversions and small numeric helpers.

/// Converts feet to meters.
pub fn ft_to_m(x: f64) -> f64 {
    x * 0.3048
}

/// Converts inches to meters.
pub fn inch_to_m(x: f64) -> f64 {
    x * 0.0254
}

/// Converts liters per second to cubic meters per second.
pub fn lps_to_cms(x: f64) -> f64 {
    x * 0.001
}

/// Logistic sigmoid smoothing function.
///
/// <https://en.wikipedia.org/wiki/Sigmoid_function>
///
/// # Arguments
///
/// * `x` - independent variable
/// * `a` - midpoint of the transition
/// * `b` - transition width parameter
///
/// # Returns
///
/// A value between 0 and 1.
pub fn smoothing_function(x: f64, a: f64, b: f64) -> f64 {
    1.0 / (1.0 + (-(x - a) / b).exp())
}
