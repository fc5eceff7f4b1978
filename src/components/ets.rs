//! Energy transfer station: a building's interface to the district loop.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::components::dhw::Dhw;
use crate::components::fan::Fan;
use crate::components::heat_pump::HeatPump;
use crate::components::pump::Pump;
use crate::io::loads::SpaceLoads;

/// ETS definition referencing its subcomponents by name.
///
/// Names are resolved against the component catalog during network
/// assembly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EtsProperties {
    pub heat_pump: String,
    pub load_side_pump: String,
    pub source_side_pump: String,
    pub fan: String,
    pub dhw: String,
    pub space_loads_file: PathBuf,
}

/// An assembled energy transfer station with resolved subcomponents and
/// hourly building loads.
#[derive(Debug, Clone)]
pub struct Ets {
    pub name: String,
    pub heat_pump: HeatPump,
    pub load_side_pump: Pump,
    pub source_side_pump: Pump,
    pub fan: Fan,
    pub dhw: Dhw,
    pub space_loads: SpaceLoads,
}

impl Ets {
    /// Hourly thermal loads imposed on the district loop, in watts.
    ///
    /// Space heating, cooling and hot water loads are converted to
    /// source-side loads through their heat pumps. Fan and load-side pump
    /// power offset the heat pump loads since they end up in the space, and
    /// source-side pump heat is added to the loop directly.
    pub fn get_loads(&self) -> Vec<f64> {
        let n = self.space_loads.len();
        let fan_loads = self.fan.get_loads(n);
        let load_pump_loads = self.load_side_pump.get_loads(n);
        let src_pump_loads = self.source_side_pump.get_loads(n);

        let mut network_loads = Vec::with_capacity(n);
        for i in 0..n {
            let hp_heating = self.heat_pump.calc_src_side_load(self.space_loads.heating[i]);
            let hp_cooling = self.heat_pump.calc_src_side_load(self.space_loads.cooling[i]);
            let dhw_load = self.dhw.calc_src_side_load(self.space_loads.water_heating[i]);
            network_loads.push(
                hp_heating + hp_cooling + dhw_load - fan_loads[i] - load_pump_loads[i]
                    + src_pump_loads[i],
            );
        }
        network_loads
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::dhw::DhwProperties;
    use crate::components::fan::FanProperties;
    use crate::components::heat_pump::HeatPumpProperties;
    use crate::components::pump::PumpProperties;

    fn idle_pump(name: &str) -> Pump {
        Pump::new(
            name,
            PumpProperties {
                design_flow_rate: 0.0,
                design_head: 0.0,
                motor_efficiency: 0.9,
                motor_inefficiency_to_fluid_stream: 1.0,
            },
        )
    }

    fn ets_with_loads(space_loads: SpaceLoads) -> Ets {
        Ets {
            name: "TEST ETS".to_string(),
            heat_pump: HeatPump::new(
                "space cond hp",
                HeatPumpProperties {
                    cop_c: 3.0,
                    cop_h: 3.0,
                },
            ),
            load_side_pump: idle_pump("load side pump"),
            source_side_pump: idle_pump("source side pump"),
            fan: Fan::new(
                "terminal unit fan",
                FanProperties {
                    design_flow_rate: 0.0,
                    design_head: 0.0,
                    motor_efficiency: 0.6,
                },
            ),
            dhw: Dhw::new("dhw hp", DhwProperties { cop_dhw: 3.0 }),
            space_loads,
        }
    }

    #[test]
    fn balanced_loads_cancel_on_the_loop() {
        // at COP 3, 1 kW heating extracts 2/3 kW, 1 kW cooling rejects
        // 4/3 kW, and 1 kW hot water extracts 2/3 kW: net zero
        let n = 24;
        let ets = ets_with_loads(SpaceLoads {
            heating: vec![1000.0; n],
            cooling: vec![-1000.0; n],
            water_heating: vec![1000.0; n],
        });
        let loads = ets.get_loads();
        assert_eq!(loads.len(), n);
        for load in loads {
            assert!(load.abs() < 1e-9, "load was {load}");
        }
    }

    #[test]
    fn heating_only_extracts_from_loop() {
        let ets = ets_with_loads(SpaceLoads {
            heating: vec![3000.0],
            cooling: vec![0.0],
            water_heating: vec![0.0],
        });
        let loads = ets.get_loads();
        assert!((loads[0] - 2000.0).abs() < 1e-9, "load was {}", loads[0]);
    }

    #[test]
    fn auxiliary_equipment_shifts_the_balance() {
        let mut ets = ets_with_loads(SpaceLoads {
            heating: vec![0.0],
            cooling: vec![0.0],
            water_heating: vec![0.0],
        });
        ets.fan = Fan::new(
            "terminal unit fan",
            FanProperties {
                design_flow_rate: 0.25,
                design_head: 150.0,
                motor_efficiency: 0.6,
            },
        );
        ets.source_side_pump = Pump::new(
            "source side pump",
            PumpProperties {
                design_flow_rate: 0.0005,
                design_head: 100_000.0,
                motor_efficiency: 0.9,
                motor_inefficiency_to_fluid_stream: 1.0,
            },
        );
        let loads = ets.get_loads();
        // -62.5 W fan + 55 W source pump
        assert!((loads[0] - (-7.5)).abs() < 1e-9, "load was {}", loads[0]);
    }
}
