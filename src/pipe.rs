//! Straight-pipe hydraulics: friction, pressure loss, and diameter sizing.

use tracing::{info, warn};

use crate::fluid::Fluid;
use crate::utilities::{inch_to_m, smoothing_function};

/// Reynolds number below which flow is treated as purely laminar.
const LOW_REYNOLDS: f64 = 2000.0;
/// Reynolds number above which flow is treated as purely turbulent.
const HIGH_REYNOLDS: f64 = 4000.0;

/// Sigmoid blend parameters for the transitional friction regime.
const TRANSITION_MIDPOINT: f64 = 3000.0;
const TRANSITION_WIDTH: f64 = 450.0;

/// Nominal HDPE pipe sizes, outer diameters in inches.
const HDPE_LABELS: [&str; 29] = [
    "3/4\"", "1\"", "1-1/4\"", "1-1/2\"", "2\"", "3\"", "4\"", "5\"", "6\"", "7\"", "8\"", "10\"",
    "12\"", "14\"", "16\"", "18\"", "20\"", "22\"", "24\"", "26\"", "28\"", "30\"", "32\"", "34\"",
    "36\"", "42\"", "48\"", "54\"", "63\"",
];
const HDPE_OUTER_DIAMETERS_IN: [f64; 29] = [
    1.05, 1.315, 1.66, 1.90, 2.375, 3.50, 4.50, 5.563, 6.625, 7.125, 8.625, 10.75, 12.75, 14.00,
    16.00, 18.00, 20.00, 22.00, 24.00, 26.00, 28.00, 30.00, 32.00, 34.00, 36.00, 42.00, 48.00,
    54.00, 63.00,
];

/// A straight SDR-rated pipe with a circulating fluid.
#[derive(Debug, Clone)]
pub struct Pipe {
    /// Ratio of outer diameter to wall thickness (SDR).
    pub dimension_ratio: f64,
    /// Pipe length in meters.
    pub length: f64,
    pub fluid: Fluid,
    /// Fluid temperature in degrees Celsius used for property lookups.
    pub fluid_temp: f64,
    pub outer_diameter: f64,
    pub inner_diameter: f64,
}

impl Pipe {
    /// Creates a pipe with unset diameters; call [`Pipe::set_diameters`]
    /// before any flow calculation.
    pub fn new(dimension_ratio: f64, length: f64, fluid: Fluid, fluid_temperature: f64) -> Self {
        Self {
            dimension_ratio,
            length,
            fluid,
            fluid_temp: fluid_temperature,
            outer_diameter: 0.0,
            inner_diameter: 0.0,
        }
    }

    /// Sets the outer diameter and derives the inner diameter from the SDR.
    pub fn set_diameters(&mut self, outer_dia: f64) {
        self.inner_diameter = outer_dia * (1.0 - 2.0 / self.dimension_ratio);
        self.outer_diameter = outer_dia;
    }

    /// Friction factor in smooth tubes.
    ///
    /// Laminar below Re 2000, turbulent above Re 4000, with a sigmoid blend
    /// across the transitional regime.
    ///
    /// Petukhov, B.S. 1970. "Heat transfer and friction in turbulent pipe
    /// flow with variable physical properties." In Advances in Heat
    /// Transfer, ed. T.F. Irvine and J.P. Hartnett, Vol. 6. New York
    /// Academic Press.
    pub fn friction_factor(&self, re: f64) -> f64 {
        if re < LOW_REYNOLDS {
            return Self::laminar_friction_factor(re);
        }
        if re > HIGH_REYNOLDS {
            return Self::turbulent_friction_factor(re);
        }

        let f_low = Self::laminar_friction_factor(re);
        let f_high = Self::turbulent_friction_factor(re);
        let sigma = smoothing_function(re, TRANSITION_MIDPOINT, TRANSITION_WIDTH);
        (1.0 - sigma) * f_low + sigma * f_high
    }

    /// Laminar friction factor, 64/Re.
    pub fn laminar_friction_factor(re: f64) -> f64 {
        64.0 / re
    }

    /// Turbulent friction factor for smooth tubes (Petukhov).
    pub fn turbulent_friction_factor(re: f64) -> f64 {
        (0.79 * re.ln() - 1.64).powi(-2)
    }

    /// Mean fluid velocity in m/s for a volume flow rate in m3/s.
    pub fn vol_flow_rate_to_velocity(&self, vol_flow_rate: f64) -> f64 {
        let inner_cross_section_area =
            std::f64::consts::PI * self.inner_diameter * self.inner_diameter / 4.0;
        vol_flow_rate / inner_cross_section_area
    }

    /// Reynolds number for a volume flow rate in m3/s.
    pub fn vol_flow_rate_to_re(&self, vol_flow_rate: f64) -> f64 {
        let velocity = self.vol_flow_rate_to_velocity(vol_flow_rate);
        let density = self.fluid.density(self.fluid_temp);
        let viscosity = self.fluid.viscosity(self.fluid_temp);
        density * velocity * self.inner_diameter / viscosity
    }

    /// Pressure loss in Pa over the pipe length for a flow rate in m3/s.
    pub fn pressure_loss(&self, vol_flow_rate: f64) -> f64 {
        if vol_flow_rate <= 0.0 {
            return 0.0;
        }

        let re = self.vol_flow_rate_to_re(vol_flow_rate);
        let velocity = self.vol_flow_rate_to_velocity(vol_flow_rate);
        let term_1 = self.friction_factor(re) * self.length / self.inner_diameter;
        let term_2 = self.fluid.density(self.fluid_temp) * velocity * velocity / 2.0;

        term_1 * term_2
    }

    /// Pressure loss per meter of pipe, in Pa/m, after setting the diameters
    /// from the given outer diameter.
    pub fn pressure_loss_per_length(&mut self, vol_flow_rate: f64, outside_diameter: f64) -> f64 {
        self.set_diameters(outside_diameter);
        self.pressure_loss(vol_flow_rate) / self.length
    }

    /// Sizes the pipe inner diameter to meet a design pressure loss.
    ///
    /// With `return_discrete_pipe_size` set, walks the nominal HDPE size
    /// table and returns the inner diameter of the first size meeting the
    /// design pressure loss; otherwise bisects for the fractional size.
    ///
    /// # Arguments
    ///
    /// * `vol_flow_rate` - volumetric flow rate in m3/s
    /// * `design_pressure_loss_per_length` - design loss in Pa/m,
    ///   typically 100-300 Pa/m
    /// * `return_discrete_pipe_size` - select from the nominal size table
    pub fn size_hydraulic_diameter(
        &mut self,
        vol_flow_rate: f64,
        design_pressure_loss_per_length: f64,
        return_discrete_pipe_size: bool,
    ) -> f64 {
        if return_discrete_pipe_size {
            for (idx, d) in HDPE_OUTER_DIAMETERS_IN.iter().enumerate() {
                let pressure_loss_per_length =
                    self.pressure_loss_per_length(vol_flow_rate, inch_to_m(*d));
                if pressure_loss_per_length < design_pressure_loss_per_length {
                    info!(
                        "network pipe sized to {}, SDR-{}",
                        HDPE_LABELS[idx], self.dimension_ratio
                    );
                    return self.inner_diameter;
                }
            }

            info!(
                "network pipe sized to {}, SDR-{}",
                HDPE_LABELS[HDPE_LABELS.len() - 1],
                self.dimension_ratio
            );
            warn!("maximum available pipe size used, results may be unexpected");
            return self.inner_diameter;
        }

        // bisection search for a continuous size meeting the design condition
        let mut low_od = 0.025;
        let mut high_od = 0.5;

        // grow the upper bound until it brackets the solution
        while self.pressure_loss_per_length(vol_flow_rate, high_od)
            > design_pressure_loss_per_length
        {
            high_od += 0.5;
        }

        let pressure_loss_tolerance = 0.1; // Pa/m
        let mut test_pressure_loss_per_length = f64::INFINITY;
        while (test_pressure_loss_per_length - design_pressure_loss_per_length).abs()
            > pressure_loss_tolerance
        {
            let test_dia = (low_od + high_od) / 2.0;
            test_pressure_loss_per_length =
                self.pressure_loss_per_length(vol_flow_rate, test_dia);
            if test_pressure_loss_per_length > design_pressure_loss_per_length {
                low_od = test_dia;
            } else {
                high_od = test_dia;
            }
        }

        self.inner_diameter
    }
}
