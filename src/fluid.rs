//! Circulating fluid selection and water property correlations.
//!
//! Antifreeze mixture property models live in an external library and are
//! not reimplemented here; requesting one with a non-zero concentration is
//! an error, and a zero-concentration request falls back to pure water.

use tracing::warn;

use crate::error::{NetworkError, Result};

/// Supported circulating fluid types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FluidType {
    Water,
    EthylAlcohol,
    EthyleneGlycol,
    MethylAlcohol,
    PropyleneGlycol,
}

impl FluidType {
    /// Parses a fluid name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_uppercase().as_str() {
            "WATER" => Some(Self::Water),
            "ETHYLALCOHOL" => Some(Self::EthylAlcohol),
            "ETHYLENEGLYCOL" => Some(Self::EthyleneGlycol),
            "METHYLALCOHOL" => Some(Self::MethylAlcohol),
            "PROPYLENEGLYCOL" => Some(Self::PropyleneGlycol),
            _ => None,
        }
    }
}

/// A circulating fluid with temperature-dependent properties.
#[derive(Debug, Clone, Copy)]
pub struct Fluid {
    pub fluid_type: FluidType,
    /// Antifreeze mass fraction, 0 to 0.6.
    pub concentration: f64,
}

impl Fluid {
    /// Density in kg/m3 at `temp` degrees Celsius.
    ///
    /// Kell (1975) correlation for liquid water at atmospheric pressure.
    pub fn density(&self, temp: f64) -> f64 {
        let t = temp;
        (999.83952 + 16.945176 * t
            - 7.9870401e-3 * t * t
            - 46.170461e-6 * t.powi(3)
            + 105.56302e-9 * t.powi(4)
            - 280.54253e-12 * t.powi(5))
            / (1.0 + 16.879850e-3 * t)
    }

    /// Dynamic viscosity in Pa-s at `temp` degrees Celsius.
    ///
    /// Vogel-type correlation for liquid water.
    pub fn viscosity(&self, temp: f64) -> f64 {
        2.414e-5 * 10.0_f64.powf(247.8 / (temp + 133.15))
    }
}

/// Resolves a fluid from its name and antifreeze concentration.
///
/// Negative concentrations are clamped to zero with a warning. Water with a
/// non-zero concentration falls back to pure water, matching how mixtures
/// degenerate in practice.
///
/// # Errors
///
/// Returns an error for unknown fluid names, or for antifreeze fluids with
/// a non-zero concentration (no property model is available for them).
pub fn get_fluid(fluid_type_str: &str, fluid_concentration: f64) -> Result<Fluid> {
    let mut concentration = fluid_concentration;
    if concentration < 0.0 {
        warn!("attempting to set < 0 water-antifreeze mixture concentration, defaulting to 0");
        concentration = 0.0;
    }

    let fluid_type = FluidType::from_name(fluid_type_str)
        .ok_or_else(|| NetworkError::UnsupportedFluid(fluid_type_str.to_string()))?;

    if fluid_type == FluidType::Water {
        if concentration > 0.0 {
            warn!(
                concentration,
                "non-zero antifreeze concentration requested for water, defaulting to pure water"
            );
        }
        return Ok(Fluid {
            fluid_type: FluidType::Water,
            concentration: 0.0,
        });
    }

    if concentration == 0.0 {
        warn!(
            fluid = fluid_type_str,
            "antifreeze fluid with zero concentration, using pure water properties"
        );
        return Ok(Fluid {
            fluid_type,
            concentration: 0.0,
        });
    }

    Err(NetworkError::UnsupportedFluid(format!(
        "{fluid_type_str} at concentration {fluid_concentration}"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn water() -> Fluid {
        get_fluid("WATER", 0.0).expect("water should resolve")
    }

    #[test]
    fn parses_known_fluid_names() {
        assert_eq!(FluidType::from_name("water"), Some(FluidType::Water));
        assert_eq!(
            FluidType::from_name(" PropyleneGlycol "),
            Some(FluidType::PropyleneGlycol)
        );
        assert_eq!(FluidType::from_name("brine"), None);
    }

    #[test]
    fn water_density_at_20c() {
        let rho = water().density(20.0);
        assert!((rho - 998.207).abs() < 0.05, "rho was {rho}");
    }

    #[test]
    fn water_density_peaks_near_4c() {
        let w = water();
        assert!(w.density(4.0) > w.density(20.0));
        assert!(w.density(4.0) > w.density(0.0));
    }

    #[test]
    fn water_viscosity_at_20c() {
        let mu = water().viscosity(20.0);
        assert!((mu - 1.002e-3).abs() < 5e-6, "mu was {mu}");
    }

    #[test]
    fn viscosity_drops_with_temperature() {
        let w = water();
        assert!(w.viscosity(10.0) > w.viscosity(40.0));
    }

    #[test]
    fn negative_concentration_clamps_to_zero() {
        let f = get_fluid("WATER", -0.3).expect("should clamp");
        assert_eq!(f.concentration, 0.0);
    }

    #[test]
    fn antifreeze_with_concentration_is_unsupported() {
        assert!(get_fluid("PROPYLENEGLYCOL", 0.25).is_err());
    }

    #[test]
    fn antifreeze_without_concentration_uses_water() {
        let f = get_fluid("ETHYLENEGLYCOL", 0.0).expect("zero concentration should resolve");
        assert_eq!(f.fluid_type, FluidType::EthyleneGlycol);
        assert!((f.density(20.0) - 998.207).abs() < 0.05);
    }

    #[test]
    fn unknown_fluid_is_an_error() {
        assert!(get_fluid("MOLTEN_SALT", 0.0).is_err());
    }
}
