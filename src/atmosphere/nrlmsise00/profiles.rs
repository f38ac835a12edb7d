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

use crate::atmosphere::{AtmosphereError, SplineProfileSnafu};
use crate::polyfit::CubicSpline;
use snafu::ResultExt;

/// Gas constant in the units of the model
pub(crate) const RGAS: f64 = 831.4;
/// Degrees to radians, as truncated by the model
pub(crate) const DGTR: f64 = 1.74533E-2;

/// Latitude dependent surface gravity (cm/s^2) and effective Earth radius (km)
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Geoid {
    pub gsurf: f64,
    pub re: f64,
}

impl Geoid {
    /// Computes the surface gravity and effective radius at the provided geodetic latitude in degrees.
    pub fn at_latitude(lat_deg: f64) -> Self {
        let c2 = (2.0 * DGTR * lat_deg).cos();
        let gsurf = 980.616 * (1.0 - 0.0026373 * c2);
        let re = 2.0 * gsurf / (3.085462E-6 + 2.27E-9 * c2) * 1.0E-5;
        Self { gsurf, re }
    }

    /// Geopotential altitude difference between `zz` and `zl`
    #[inline]
    pub(crate) fn zeta(&self, zz: f64, zl: f64) -> f64 {
        (zz - zl) * (self.re + zl) / (self.re + zz)
    }

    /// Gravity at `alt_km`
    #[inline]
    fn gravity(&self, alt_km: f64) -> f64 {
        self.gsurf / (1.0 + alt_km / self.re).powi(2)
    }

    /// Scale height (km) of a gas of molecular weight `xm` at temperature `temp`.
    pub fn scale_height(&self, alt_km: f64, xm: f64, temp: f64) -> f64 {
        RGAS * temp / (self.gravity(alt_km) * xm)
    }
}

/// Chemistry and dissociation correction: `exp(r / (1 + exp((alt - zh) / h1)))`
pub fn ccor(alt: f64, r: f64, h1: f64, zh: f64) -> f64 {
    let e = (alt - zh) / h1;
    if e > 70.0 {
        1.0
    } else if e < -70.0 {
        r.exp()
    } else {
        (r / (1.0 + e.exp())).exp()
    }
}

/// Chemistry and dissociation correction with two scale heights, averaged in the sigmoid
pub fn ccor2(alt: f64, r: f64, h1: f64, zh: f64, h2: f64) -> f64 {
    let e1 = (alt - zh) / h1;
    let e2 = (alt - zh) / h2;
    if e1 > 70.0 || e2 > 70.0 {
        1.0
    } else if e1 < -70.0 && e2 < -70.0 {
        r.exp()
    } else {
        (r / (1.0 + 0.5 * (e1.exp() + e2.exp()))).exp()
    }
}

/// Blends the diffusive density `dd` and the mixed density `dm` across the turbopause.
///
/// `zhm` is the transition scale height, `xmm` the molecular weight of the mixed atmosphere
/// and `xm` the molecular weight of the species. Non positive inputs are logged and fall back to
/// whichever density is positive, or unity when neither is.
pub fn dnet(dd: f64, dm: f64, zhm: f64, xmm: f64, xm: f64) -> f64 {
    let a = zhm / (xmm - xm);
    if !(dm > 0.0 && dd > 0.0) {
        warn!("turbopause blend of non positive densities: dd = {dd:e}, dm = {dm:e}, xm = {xm}");
        if dd <= 0.0 && dm <= 0.0 {
            return 1.0;
        } else if dm <= 0.0 {
            return dd;
        } else {
            return dm;
        }
    }

    let ylog = a * (dm / dd).ln();
    if ylog < -10.0 {
        dd
    } else if ylog > 10.0 {
        dm
    } else {
        dd * (1.0 + ylog.exp()).powf(1.0 / a)
    }
}

/// Density and temperature at one altitude
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct ProfilePoint {
    /// Zero when only the temperature was requested
    pub density: f64,
    pub temperature: f64,
}

/// Temperature nodes of a spline band, from the top of the band down.
/// Only the end gradients are stored.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct NodeProfile<const N: usize> {
    pub zn: [f64; N],
    pub tn: [f64; N],
    pub tgn: [f64; 2],
}

impl<const N: usize> Default for NodeProfile<N> {
    fn default() -> Self {
        Self {
            zn: [0.0; N],
            tn: [0.0; N],
            tgn: [0.0; 2],
        }
    }
}

/// Bates profile parameters of the upper thermosphere
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Bates {
    pub tinf: f64,
    pub tlb: f64,
    pub zlb: f64,
    pub s2: f64,
}

/// Inverse temperature spline of one band, evaluated at a given altitude
struct Band<const N: usize> {
    spline: CubicSpline<N>,
    x: f64,
    z1: f64,
    zgdif: f64,
    t1: f64,
    tz: f64,
}

impl<const N: usize> Band<N> {
    fn fit(
        z: f64,
        nodes: &NodeProfile<N>,
        geo: &Geoid,
        profile: &'static str,
    ) -> Result<Self, AtmosphereError> {
        let z1 = nodes.zn[0];
        let z2 = nodes.zn[N - 1];
        let t1 = nodes.tn[0];
        let t2 = nodes.tn[N - 1];
        let zg = geo.zeta(z, z1);
        let zgdif = geo.zeta(z2, z1);

        let xs = nodes.zn.map(|zn| geo.zeta(zn, z1) / zgdif);
        let ys = nodes.tn.map(|tn| 1.0 / tn);
        let yd1 = -nodes.tgn[0] / (t1 * t1) * zgdif;
        let yd2 = -nodes.tgn[1] / (t2 * t2) * zgdif * ((geo.re + z2) / (geo.re + z1)).powi(2);

        let spline = CubicSpline::fit(xs, ys, yd1, yd2).context(SplineProfileSnafu { profile })?;
        let x = zg / zgdif;
        let tz = 1.0 / spline.eval(x);

        Ok(Self {
            spline,
            x,
            z1,
            zgdif,
            t1,
            tz,
        })
    }

    /// Density ratio between the altitude and the top of the band, for a gas of weight `xm`
    fn density_ratio(&self, xm: f64, alpha: f64, geo: &Geoid) -> f64 {
        let gamm = xm * geo.gravity(self.z1) * self.zgdif / RGAS;
        let mut expl = gamm * self.spline.integral(self.x);
        if expl > 50.0 || self.tz <= 0.0 {
            expl = 50.0;
        }
        (self.t1 / self.tz).powf(1.0 + alpha) * (-expl).exp()
    }
}

/// Density and temperature in the thermosphere.
///
/// Above the joining altitude `lower.zn[0]` this is the Bates profile, below it down to
/// `lower.zn[4]` the temperature follows a spline through the lower thermosphere nodes. The first
/// node temperature and gradient are computed here to join the Bates profile smoothly.
/// A zero molecular weight `xm` only computes the temperature.
pub(crate) fn densu(
    alt: f64,
    dlb: f64,
    bates: &Bates,
    xm: f64,
    alpha: f64,
    lower: &NodeProfile<5>,
    geo: &Geoid,
) -> Result<ProfilePoint, AtmosphereError> {
    let Bates { tinf, tlb, zlb, s2 } = *bates;
    let za = lower.zn[0];
    let zg2 = geo.zeta(alt.max(za), zlb);
    let tt = tinf - (tinf - tlb) * (-s2 * zg2).exp();

    let band = if alt < za {
        let mut nodes = *lower;
        nodes.tn[0] = tt;
        nodes.tgn[0] = (tinf - tt) * s2 * ((geo.re + zlb) / (geo.re + za)).powi(2);
        Some(Band::fit(
            alt.max(lower.zn[4]),
            &nodes,
            geo,
            "lower thermosphere",
        )?)
    } else {
        None
    };

    let tz = band.as_ref().map_or(tt, |band| band.tz);

    if xm == 0.0 {
        return Ok(ProfilePoint {
            density: 0.0,
            temperature: tz,
        });
    }

    let gamma = xm * geo.gravity(zlb) / (s2 * RGAS * tinf);
    let mut expl = (-s2 * gamma * zg2).exp();
    if expl > 50.0 || tt <= 0.0 {
        expl = 50.0;
    }
    let mut density = dlb * (tlb / tt).powf(1.0 + alpha + gamma) * expl;

    if let Some(band) = band {
        density *= band.density_ratio(xm, alpha, geo);
    }

    Ok(ProfilePoint {
        density,
        temperature: tz,
    })
}

/// Density and temperature in the mesosphere, stratosphere and troposphere.
///
/// The mesosphere band spans `meso.zn` (72.5 down to 32.5 km) and the stratosphere band spans
/// `strato.zn` (32.5 km down to the ground). Above the top of the mesosphere band, the reference
/// density `d0` and the top node temperature are returned. A zero molecular weight `xm` only
/// computes the temperature.
pub(crate) fn densm(
    alt: f64,
    d0: f64,
    xm: f64,
    meso: &NodeProfile<4>,
    strato: &NodeProfile<5>,
    geo: &Geoid,
) -> Result<ProfilePoint, AtmosphereError> {
    if alt > meso.zn[0] {
        return Ok(ProfilePoint {
            density: if xm == 0.0 { 0.0 } else { d0 },
            temperature: meso.tn[0],
        });
    }

    let band = Band::fit(alt.max(meso.zn[3]), meso, geo, "mesosphere")?;
    let mut density = if xm == 0.0 {
        0.0
    } else {
        d0 * band.density_ratio(xm, 0.0, geo)
    };

    if alt > strato.zn[0] {
        return Ok(ProfilePoint {
            density,
            temperature: band.tz,
        });
    }

    let band = Band::fit(alt, strato, geo, "stratosphere")?;
    if xm != 0.0 {
        density *= band.density_ratio(xm, 0.0, geo);
    }

    Ok(ProfilePoint {
        density,
        temperature: band.tz,
    })
}

#[cfg(test)]
mod ut_profiles {
    use super::*;

    #[test]
    fn geoid() {
        let equator = Geoid::at_latitude(0.0);
        let pole = Geoid::at_latitude(90.0);
        // Gravity increases towards the poles
        assert!(pole.gsurf > equator.gsurf);
        assert!((equator.gsurf - 978.03).abs() < 0.01);
        // The effective radius is a fit, not the geometric radius
        assert!(equator.re > 6300.0 && equator.re < 6400.0);
        assert!((equator.zeta(100.0, 100.0)).abs() < f64::EPSILON);
        assert!(equator.zeta(200.0, 100.0) < 100.0);
    }

    #[test]
    fn scale_height() {
        let geo = Geoid::at_latitude(45.0);
        // Roughly 8.4 km at the surface for air at 288 K
        let h = geo.scale_height(0.0, 28.95, 288.15);
        assert!((h - 8.43).abs() < 0.05, "{h}");
        // Higher up, gravity is weaker
        assert!(geo.scale_height(500.0, 28.95, 288.15) > h);
    }

    #[test]
    fn chemistry_saturation() {
        assert_eq!(ccor(1000.0, 2.0, 1.0, 100.0), 1.0);
        assert_eq!(ccor(0.0, 2.0, 1.0, 100.0), 2.0_f64.exp());
        assert!((ccor(100.0, 2.0, 5.0, 100.0) - 1.0_f64.exp()).abs() < 1e-15);

        // Either scale saturating above the transition disables the correction
        assert_eq!(ccor2(180.0, 2.0, 1.0, 100.0, 10.0), 1.0);
        // Both scales must saturate below the transition
        assert_eq!(ccor2(0.0, 2.0, 1.0, 100.0, 1.2), 2.0_f64.exp());
        assert!(ccor2(50.0, 2.0, 1.0, 100.0, 100.0) < 2.0_f64.exp());
        assert!((ccor2(100.0, 2.0, 5.0, 100.0, 7.0) - 1.0_f64.exp()).abs() < 1e-15);
    }

    #[test]
    fn turbopause_blend() {
        // Mixed density dominates well below the turbopause
        assert_eq!(dnet(1.0, 1e10, 28.0, 28.95, 4.0), 1e10);
        // Diffusive density dominates when the mixed one is negligible
        assert_eq!(dnet(1e10, 1.0, 28.0, 28.95, 4.0), 1e10);
        // Both regimes contribute in between
        let blend = dnet(1.0, 1.0, 28.0, 28.95, 4.0);
        let a: f64 = 28.0 / (28.95 - 4.0);
        assert!((blend - 2.0_f64.powf(1.0 / a)).abs() < 1e-12);

        // Degenerate inputs fall back without a NaN
        assert_eq!(dnet(0.0, 0.0, 28.0, 28.95, 4.0), 1.0);
        assert_eq!(dnet(3.0, 0.0, 28.0, 28.95, 4.0), 3.0);
        assert_eq!(dnet(0.0, 5.0, 28.0, 28.95, 4.0), 5.0);
        assert_eq!(dnet(-1.0, 5.0, 28.0, 28.95, 4.0), 5.0);
    }

    #[test]
    fn empty_node_profiles() {
        let meso = NodeProfile::<4> {
            zn: [72.5, 55.0, 45.0, 32.5],
            ..Default::default()
        };
        assert_eq!(meso.tn, [0.0; 4]);
        assert_eq!(meso.tgn, [0.0; 2]);
        assert_eq!(NodeProfile::<5>::default().zn, [0.0; 5]);
    }

    fn lower() -> NodeProfile<5> {
        NodeProfile {
            zn: [125.0, 110.0, 100.0, 90.0, 72.5],
            tn: [0.0, 242.0, 195.0, 187.0, 213.0],
            tgn: [0.0, -2.0],
        }
    }

    fn bates() -> Bates {
        Bates {
            tinf: 1000.0,
            tlb: 386.0,
            zlb: 120.0,
            s2: 0.02,
        }
    }

    #[test]
    fn upper_profile() {
        let geo = Geoid::at_latitude(30.0);
        let bates = bates();
        let lower = lower();

        // Bates profile at and above the joining altitude
        let at_za = densu(125.0, 1e11, &bates, 28.0, 0.0, &lower, &geo).unwrap();
        let expected = bates.tinf
            - (bates.tinf - bates.tlb) * (-bates.s2 * geo.zeta(125.0, bates.zlb)).exp();
        assert!((at_za.temperature - expected).abs() < 1e-9);

        let high = densu(600.0, 1e11, &bates, 28.0, 0.0, &lower, &geo).unwrap();
        assert!(high.density < at_za.density);
        assert!(high.temperature > 990.0 && high.temperature < bates.tinf);

        // Spline part goes through the nodes
        let at_node = densu(100.0, 1e11, &bates, 28.0, 0.0, &lower, &geo).unwrap();
        assert!((at_node.temperature - 195.0).abs() < 1e-9);
        assert!(at_node.density > at_za.density);

        // Temperature only
        let t_only = densu(100.0, 1e11, &bates, 0.0, 0.0, &lower, &geo).unwrap();
        assert_eq!(t_only.density, 0.0);
        assert_eq!(t_only.temperature, at_node.temperature);
    }

    #[test]
    fn lower_profile() {
        let geo = Geoid::at_latitude(45.0);
        let meso = NodeProfile {
            zn: [72.5, 55.0, 45.0, 32.5],
            tn: [213.0, 261.0, 264.0, 229.0],
            tgn: [-2.0, -2.5],
        };
        let strato = NodeProfile {
            zn: [32.5, 20.0, 15.0, 10.0, 0.0],
            tn: [229.0, 217.0, 217.0, 223.0, 286.76],
            tgn: [-2.5, -2.9394],
        };

        let top = densm(72.5, 1e15, 28.95, &meso, &strato, &geo).unwrap();
        assert!((top.density - 1e15).abs() < 1.0);
        assert!((top.temperature - 213.0).abs() < 1e-9);

        let above = densm(80.0, 1e15, 28.95, &meso, &strato, &geo).unwrap();
        assert_eq!(above.density, 1e15);

        let mid = densm(45.0, 1e15, 28.95, &meso, &strato, &geo).unwrap();
        assert!((mid.temperature - 264.0).abs() < 1e-9);
        assert!(mid.density > 1e15);

        let ground = densm(0.0, 1e15, 28.95, &meso, &strato, &geo).unwrap();
        assert!((ground.temperature - 286.76).abs() < 1e-9);
        assert!(ground.density > mid.density);

        let t_only = densm(0.0, 1.0, 0.0, &meso, &strato, &geo).unwrap();
        assert_eq!(t_only.density, 0.0);
        assert_eq!(t_only.temperature, ground.temperature);
    }
}
