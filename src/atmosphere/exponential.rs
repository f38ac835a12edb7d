/*
    Satenv, space environment models for astrodynamics
    Copyright (C) 2021 Christopher Rabotin <christopher.rabotin@gmail.com>

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU Affero General Public License for more details.

    You should have received a copy of the GNU Affero General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

use super::{AtmosphereError, AtmosphereModel, InvalidInputSnafu, LoadConfigSnafu};
use crate::io::ConfigRepr;
use crate::time::Epoch;
use serde_derive::{Deserialize, Serialize};
use snafu::{ensure, ResultExt};

/// One layer of an exponential atmosphere, valid from its base altitude to the base of the next
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExponentialLayer {
    /// Base altitude (km)
    pub base_km: f64,
    /// Density at the base altitude (kg/m^3)
    pub rho0: f64,
    /// Scale height (km)
    pub scale_height_km: f64,
}

impl ConfigRepr for ExponentialLayer {}

const fn layer(base_km: f64, rho0: f64, scale_height_km: f64) -> ExponentialLayer {
    ExponentialLayer {
        base_km,
        rho0,
        scale_height_km,
    }
}

/// Vallado, Fundamentals of Astrodynamics and Applications, table 8-4
pub const VALLADO_LAYERS: [ExponentialLayer; 28] = [
    layer(0.0, 1.225, 7.249),
    layer(25.0, 3.899e-2, 6.349),
    layer(30.0, 1.774e-2, 6.682),
    layer(40.0, 3.972e-3, 7.554),
    layer(50.0, 1.057e-3, 8.382),
    layer(60.0, 3.206e-4, 7.714),
    layer(70.0, 8.770e-5, 6.549),
    layer(80.0, 1.905e-5, 5.799),
    layer(90.0, 3.396e-6, 5.382),
    layer(100.0, 5.297e-7, 5.877),
    layer(110.0, 9.661e-8, 7.263),
    layer(120.0, 2.438e-8, 9.473),
    layer(130.0, 8.484e-9, 12.636),
    layer(140.0, 3.845e-9, 16.149),
    layer(150.0, 2.070e-9, 22.523),
    layer(180.0, 5.464e-10, 29.740),
    layer(200.0, 2.789e-10, 37.105),
    layer(250.0, 7.248e-11, 45.546),
    layer(300.0, 2.418e-11, 53.628),
    layer(350.0, 9.518e-12, 53.298),
    layer(400.0, 3.725e-12, 58.515),
    layer(450.0, 1.585e-12, 60.828),
    layer(500.0, 6.967e-13, 63.822),
    layer(600.0, 1.454e-13, 71.835),
    layer(700.0, 3.614e-14, 88.667),
    layer(800.0, 1.170e-14, 124.64),
    layer(900.0, 5.245e-15, 181.05),
    layer(1000.0, 3.019e-15, 268.00),
];

/// Piecewise exponential atmosphere.
///
/// The density is zero above the base of the last layer, and negative altitudes are rejected.
///
/// ```
/// use satenv::atmosphere::ExponentialAtmosphere;
///
/// let atm = ExponentialAtmosphere::default();
/// let rho = atm.density_at(400e3).unwrap();
/// assert!((rho - 3.725e-12).abs() < 1e-18);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ExponentialAtmosphere {
    layers: Vec<ExponentialLayer>,
}

impl Default for ExponentialAtmosphere {
    fn default() -> Self {
        Self {
            layers: VALLADO_LAYERS.to_vec(),
        }
    }
}

impl ExponentialAtmosphere {
    /// Builds an exponential atmosphere from layers sorted by base altitude, starting at the ground.
    pub fn from_layers(layers: Vec<ExponentialLayer>) -> Result<Self, AtmosphereError> {
        ensure!(
            !layers.is_empty(),
            InvalidInputSnafu {
                param: "layers",
                value: 0.0,
                reason: "at least one layer is needed"
            }
        );
        ensure!(
            layers[0].base_km == 0.0,
            InvalidInputSnafu {
                param: "base_km",
                value: layers[0].base_km,
                reason: "the first layer must start at the ground"
            }
        );
        for pair in layers.windows(2) {
            ensure!(
                pair[1].base_km > pair[0].base_km,
                InvalidInputSnafu {
                    param: "base_km",
                    value: pair[1].base_km,
                    reason: "layers must be sorted by increasing base altitude"
                }
            );
        }
        for layer in &layers {
            ensure!(
                layer.rho0.is_finite() && layer.rho0 > 0.0,
                InvalidInputSnafu {
                    param: "rho0",
                    value: layer.rho0,
                    reason: "must be positive"
                }
            );
            ensure!(
                layer.scale_height_km.is_finite() && layer.scale_height_km > 0.0,
                InvalidInputSnafu {
                    param: "scale_height_km",
                    value: layer.scale_height_km,
                    reason: "must be positive"
                }
            );
        }
        Ok(Self { layers })
    }

    /// Loads the layers from a YAML file.
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self, AtmosphereError> {
        let layers = ExponentialLayer::load_many(path).context(LoadConfigSnafu)?;
        Self::from_layers(layers)
    }

    pub fn layers(&self) -> &[ExponentialLayer] {
        &self.layers
    }

    /// Total mass density (kg/m^3) at the provided altitude in meters
    pub fn density_at(&self, altitude_m: f64) -> Result<f64, AtmosphereError> {
        ensure!(
            altitude_m.is_finite() && altitude_m >= 0.0,
            InvalidInputSnafu {
                param: "altitude_m",
                value: altitude_m,
                reason: "must be above the ground"
            }
        );
        let alt_km = altitude_m / 1e3;
        // The constructor guarantees at least one layer
        let top = self.layers[self.layers.len() - 1];
        if alt_km > top.base_km {
            return Ok(0.0);
        }
        let idx = self.layers.partition_point(|l| l.base_km <= alt_km) - 1;
        let ExponentialLayer {
            base_km,
            rho0,
            scale_height_km,
        } = self.layers[idx];
        Ok(rho0 * (-(alt_km - base_km) / scale_height_km).exp())
    }
}

impl AtmosphereModel for ExponentialAtmosphere {
    fn density(
        &self,
        _epoch: Epoch,
        _lat_rad: f64,
        _lon_rad: f64,
        altitude_m: f64,
    ) -> Result<f64, AtmosphereError> {
        self.density_at(altitude_m)
    }

    fn name(&self) -> &'static str {
        "exponential"
    }
}

#[cfg(test)]
mod ut_exponential {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case(0.0, 1.225)]
    #[case(100e3, 5.297e-7)]
    #[case(1000e3, 3.019e-15)]
    fn layer_bases(#[case] altitude_m: f64, #[case] expected: f64) {
        let atm = ExponentialAtmosphere::default();
        assert_eq!(atm.density_at(altitude_m).unwrap(), expected);
    }

    #[test]
    fn within_layer() {
        let atm = ExponentialAtmosphere::default();
        // One scale height above the 400 km base
        let rho = atm.density_at(458.515e3).unwrap();
        assert!((rho / (3.725e-12 / core::f64::consts::E) - 1.0).abs() < 1e-12);
        // Strictly decreasing through the table
        let mut prev = f64::INFINITY;
        for km in 0..1000 {
            let rho = atm.density_at(f64::from(km) * 1e3).unwrap();
            assert!(rho < prev, "{km} km");
            prev = rho;
        }
    }

    #[test]
    fn outside_table() {
        let atm = ExponentialAtmosphere::default();
        assert_eq!(atm.density_at(1000.001e3).unwrap(), 0.0);
        assert!(matches!(
            atm.density_at(-1.0),
            Err(AtmosphereError::InvalidInput {
                param: "altitude_m",
                ..
            })
        ));
        assert!(atm.density_at(f64::NAN).is_err());
    }

    #[test]
    fn custom_layers() {
        let yaml = "- base_km: 0\n  rho0: 1.0\n  scale_height_km: 10\n- base_km: 50\n  rho0: 0.01\n  scale_height_km: 20\n";
        let layers = ExponentialLayer::loads_many(yaml).unwrap();
        let atm = ExponentialAtmosphere::from_layers(layers).unwrap();
        assert_eq!(atm.density_at(50e3).unwrap(), 0.01);
        assert_eq!(atm.density_at(60e3).unwrap(), 0.0);

        let unsorted = vec![layer(0.0, 1.0, 10.0), layer(0.0, 0.5, 10.0)];
        assert!(ExponentialAtmosphere::from_layers(unsorted).is_err());
        assert!(ExponentialAtmosphere::from_layers(vec![layer(1.0, 1.0, 10.0)]).is_err());
        assert!(ExponentialAtmosphere::from_layers(vec![layer(0.0, -1.0, 10.0)]).is_err());
    }
}
