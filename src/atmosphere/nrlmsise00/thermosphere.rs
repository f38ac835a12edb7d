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

use super::coefficients::{
    AR, H, HE, HOT_O, N, N2, O, O2, PAVGM, PD, PDL, PDM, PMA, PS, PT, PTL, PTM, TLB,
};
use super::flags::gate;
use super::harmonics::{glob7s, globe7, ApCache};
use super::input::MsisConfig;
use super::profiles::{ccor, ccor2, densm, densu, dnet, Bates, NodeProfile, ProfilePoint, DGTR};
use crate::atmosphere::AtmosphereError;
use serde_derive::Serialize;

/// Day of year to radians
const DR: f64 = 1.72142E-2;
/// Top of the mesosphere band, where the lower atmosphere joins the thermosphere (km)
pub const MESOPAUSE_KM: f64 = 72.5;
/// Top of the stratosphere band (km)
const STRATOPAUSE_KM: f64 = 32.5;
/// Altitude below which the species are fully mixed (km)
const ZMIX: f64 = 62.5;
/// Grams per atomic mass unit
const AMU_G: f64 = 1.66E-24;
/// Thermal diffusion coefficients, in the order of [`MsisOutput::densities`]
const ALPHA: [f64; 9] = [-0.38, 0.0, 0.0, 0.0, 0.17, 0.0, -0.38, 0.0, 0.0];
/// Altitudes below which the mixing departures apply, for He, O, N2, O2, Ar, H, N
const ALTL: [f64; 8] = [200.0, 300.0, 160.0, 250.0, 240.0, 450.0, 320.0, 450.0];

/// Number densities and temperatures computed by the model.
///
/// Number densities are in cm^-3 and the total mass density is in g/cm^3, unless the output
/// is in SI units, in which case they are in m^-3 and kg/m^3 respectively.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize)]
pub struct MsisOutput {
    pub he: f64,
    pub o: f64,
    pub n2: f64,
    pub o2: f64,
    pub ar: f64,
    /// Total mass density, excluding anomalous oxygen unless computed for drag
    pub total: f64,
    pub h: f64,
    pub n: f64,
    /// Anomalous oxygen, only significant above 500 km
    pub anomalous_o: f64,
    /// Exospheric temperature (K)
    pub t_exo: f64,
    /// Temperature at altitude (K)
    pub t_alt: f64,
}

impl MsisOutput {
    /// Number densities and total mass density in the order of the NRL release:
    /// He, O, N2, O2, Ar, total, H, N, anomalous O.
    pub fn densities(&self) -> [f64; 9] {
        [
            self.he,
            self.o,
            self.n2,
            self.o2,
            self.ar,
            self.total,
            self.h,
            self.n,
            self.anomalous_o,
        ]
    }

    /// Total mass density of the species in the units of the number densities
    fn mass_density(&self) -> f64 {
        AMU_G
            * (4.0 * self.he
                + 16.0 * self.o
                + 28.0 * self.n2
                + 32.0 * self.o2
                + 40.0 * self.ar
                + self.h
                + 14.0 * self.n)
    }

    fn to_si(mut self) -> Self {
        for density in [
            &mut self.he,
            &mut self.o,
            &mut self.n2,
            &mut self.o2,
            &mut self.ar,
            &mut self.h,
            &mut self.n,
            &mut self.anomalous_o,
        ] {
            *density *= 1.0E6;
        }
        self.total *= 1.0E3;
        self
    }
}

/// Thermospheric state shared with the lower atmosphere computation
struct Thermosphere {
    output: MsisOutput,
    /// Fully mixed N2 density, in the output units, zero above 160 km
    dm28: f64,
    lower: NodeProfile<5>,
}

/// Upper atmosphere profile parameters of one evaluation
struct Upper<'a> {
    cfg: &'a MsisConfig,
    /// Mean molecular weight below the turbopause
    xmm: f64,
    bates: Bates,
    lower: NodeProfile<5>,
}

impl Upper<'_> {
    fn density(&self, alt: f64, dlb: f64, xm: f64, alpha: f64) -> Result<f64, AtmosphereError> {
        densu(
            alt,
            dlb,
            &self.bates,
            xm,
            alpha,
            &self.lower,
            &self.cfg.aux.geoid,
        )
        .map(|point| point.density)
    }

    /// Blends the diffusive density of a species with its mixed density below the turbopause.
    /// Returns the density at the turbopause and the blended density.
    fn mixed(
        &self,
        diffusive: f64,
        dlb: f64,
        xm: f64,
        alpha: f64,
        zh: f64,
        zhm: f64,
    ) -> Result<(f64, f64), AtmosphereError> {
        let z = self.cfg.input.alt_km;
        let b = self.density(zh, dlb, xm - self.xmm, alpha - 1.0)?;
        let dm = self.density(z, b, self.xmm, 0.0)?;
        Ok((b, dnet(diffusive, dm, zhm, self.xmm, xm)))
    }
}

/// Thermospheric model, valid above 72.5 km.
///
/// Also returns the fully mixed N2 density and the lower thermosphere temperature nodes used to
/// join the lower atmosphere.
fn gts7(cfg: &MsisConfig, cache: &mut ApCache) -> Result<Thermosphere, AtmosphereError> {
    let f = &cfg.flags;
    let input = &cfg.input;
    let z = input.alt_km;
    let za = PDL[1][15];

    let tinf = if z > za {
        PTM[0] * PT[0] * (1.0 + gate(f.all_tinf_var) * globe7(&PT, cfg, cache))
    } else {
        PTM[0] * PT[0]
    };

    let g0 = if z > MESOPAUSE_KM {
        PTM[3] * PS[0] * (1.0 + gate(f.all_s_var) * globe7(&PS, cfg, cache))
    } else {
        PTM[3] * PS[0]
    };

    let tlb = PTM[1] * (1.0 + gate(f.all_tlb_var) * globe7(&PD[TLB], cfg, cache)) * PD[TLB][0];
    let s = g0 / (tinf - tlb);

    // Lower thermosphere temperature nodes
    let mut lower = NodeProfile {
        zn: [za, 110.0, 100.0, 90.0, MESOPAUSE_KM],
        ..Default::default()
    };
    let tn1_ref = [PTM[6], PTM[2], PTM[7], PTM[4]];
    if z < 300.0 {
        let swc_tn1 = gate(f.all_tn1_var);
        let swc_tn2 = gate(f.all_tn2_var);
        for (k, (p, tref)) in PTL.iter().zip(tn1_ref).enumerate() {
            let var = if k == 3 { swc_tn1 * swc_tn2 } else { swc_tn1 };
            lower.tn[k + 1] = tref * p[0] / (1.0 - var * glob7s(p, cfg, cache)?);
        }
        lower.tgn[1] = PTM[8]
            * PMA[8][0]
            * (1.0 + swc_tn1 * swc_tn2 * glob7s(&PMA[8], cfg, cache)?)
            * lower.tn[4].powi(2)
            / (PTM[4] * PTL[3][0]).powi(2);
    } else {
        for (k, (p, tref)) in PTL.iter().zip(tn1_ref).enumerate() {
            lower.tn[k + 1] = tref * p[0];
        }
        lower.tgn[1] = PTM[8] * PMA[8][0] * lower.tn[4].powi(2) / (PTM[4] * PTL[3][0]).powi(2);
    }

    let xmm = PDM[2][4];
    let upper = Upper {
        cfg,
        xmm,
        bates: Bates {
            tinf,
            tlb,
            zlb: PTM[5],
            s2: s,
        },
        lower,
    };
    let departures = f.departures_from_eq;
    let swc_nlb = gate(f.all_nlb_var);

    let zhf = PDL[1][24]
        * (1.0
            + gate(f.asym_annual)
                * PDL[0][24]
                * (DGTR * input.lat_deg).sin()
                * (DR * (f64::from(input.doy) - PT[13])).cos());
    let dfa = cfg.aux.dfa;
    let swc_f107 = gate(f.f107_mean);

    let mut out = MsisOutput {
        t_exo: tinf,
        ..Default::default()
    };

    // N2
    let g28 = swc_nlb * globe7(&PD[N2], cfg, cache);
    let db28 = PDM[2][0] * g28.exp() * PD[N2][0];
    out.n2 = upper.density(z, db28, 28.0, ALPHA[2])?;
    let zh28 = PDM[2][2] * zhf;
    let zhm28 = PDM[2][3] * PDL[1][5];
    let b28 = upper.density(zh28, db28, 28.0 - xmm, ALPHA[2] - 1.0)?;
    let mut dm28 = 0.0;
    if z <= ALTL[2] {
        dm28 = upper.density(z, b28, xmm, ALPHA[2])?;
        if departures {
            out.n2 = dnet(out.n2, dm28, zhm28, xmm, 28.0);
        }
    }

    // He
    let g4 = swc_nlb * globe7(&PD[HE], cfg, cache);
    let db04 = PDM[0][0] * g4.exp() * PD[HE][0];
    out.he = upper.density(z, db04, 4.0, ALPHA[0])?;
    if departures && z < ALTL[0] {
        let (b04, he) = upper.mixed(out.he, db04, 4.0, ALPHA[0], PDM[0][2], zhm28)?;
        let rl = (b28 * PDM[0][1] / b04).ln();
        out.he = he * ccor(z, rl, PDM[0][5] * PDL[1][1], PDM[0][4] * PDL[1][0]);
    }

    // O
    let g16 = swc_nlb * globe7(&PD[O], cfg, cache);
    let db16 = PDM[1][0] * g16.exp() * PD[O][0];
    out.o = upper.density(z, db16, 16.0, ALPHA[1])?;
    if departures && z <= ALTL[1] {
        let (_, o) = upper.mixed(out.o, db16, 16.0, ALPHA[1], PDM[1][2], zhm28)?;
        let rl = PDM[1][1] * PDL[1][16] * (1.0 + swc_f107 * PDL[0][23] * dfa);
        let hc16 = PDM[1][5] * PDL[1][3];
        let zc16 = PDM[1][4] * PDL[1][2];
        let hc216 = PDM[1][5] * PDL[1][4];
        let hcc16 = PDM[1][7] * PDL[1][13];
        let zcc16 = PDM[1][6] * PDL[1][12];
        let rc16 = PDM[1][3] * PDL[1][14];
        out.o = o * ccor2(z, rl, hc16, zc16, hc216) * ccor(z, rc16, hcc16, zcc16);
    }

    // O2
    let g32 = swc_nlb * globe7(&PD[O2], cfg, cache);
    let db32 = PDM[3][0] * g32.exp() * PD[O2][0];
    out.o2 = upper.density(z, db32, 32.0, ALPHA[3])?;
    if departures {
        if z <= ALTL[3] {
            let (b32, o2) = upper.mixed(out.o2, db32, 32.0, ALPHA[3], PDM[3][2], zhm28)?;
            let rl = (b28 * PDM[3][1] / b32).ln();
            out.o2 = o2 * ccor(z, rl, PDM[3][5] * PDL[1][7], PDM[3][4] * PDL[1][6]);
        }
        let hcc32 = PDM[3][7] * PDL[1][22];
        let hcc232 = PDM[3][7] * PDL[0][22];
        let zcc32 = PDM[3][6] * PDL[1][21];
        let rc32 = PDM[3][3] * PDL[1][23] * (1.0 + swc_f107 * PDL[0][23] * dfa);
        out.o2 *= ccor2(z, rc32, hcc32, zcc32, hcc232);
    }

    // Ar
    let g40 = swc_nlb * globe7(&PD[AR], cfg, cache);
    let db40 = PDM[4][0] * g40.exp() * PD[AR][0];
    out.ar = upper.density(z, db40, 40.0, ALPHA[4])?;
    if departures && z <= ALTL[4] {
        let (b40, ar) = upper.mixed(out.ar, db40, 40.0, ALPHA[4], PDM[4][2], zhm28)?;
        let rl = (b28 * PDM[4][1] / b40).ln();
        out.ar = ar * ccor(z, rl, PDM[4][5] * PDL[1][9], PDM[4][4] * PDL[1][8]);
    }

    // H
    let g1 = swc_nlb * globe7(&PD[H], cfg, cache);
    let db01 = PDM[5][0] * g1.exp() * PD[H][0];
    out.h = upper.density(z, db01, 1.0, ALPHA[6])?;
    if departures && z <= ALTL[6] {
        let (b01, h) = upper.mixed(out.h, db01, 1.0, ALPHA[6], PDM[5][2], zhm28)?;
        let rl = (b28 * PDM[5][1] * PDL[1][17].abs() / b01).ln();
        let hc01 = PDM[5][5] * PDL[1][11];
        let zc01 = PDM[5][4] * PDL[1][10];
        let hcc01 = PDM[5][7] * PDL[1][19];
        let zcc01 = PDM[5][6] * PDL[1][18];
        let rc01 = PDM[5][3] * PDL[1][20];
        out.h = h * ccor(z, rl, hc01, zc01) * ccor(z, rc01, hcc01, zcc01);
    }

    // N
    let g14 = swc_nlb * globe7(&PD[N], cfg, cache);
    let db14 = PDM[6][0] * g14.exp() * PD[N][0];
    out.n = upper.density(z, db14, 14.0, ALPHA[7])?;
    if departures && z <= ALTL[7] {
        let (b14, n) = upper.mixed(out.n, db14, 14.0, ALPHA[7], PDM[6][2], zhm28)?;
        let rl = (b28 * PDM[6][1] * PDL[0][2].abs() / b14).ln();
        let hc14 = PDM[6][5] * PDL[0][1];
        let zc14 = PDM[6][4] * PDL[0][0];
        let hcc14 = PDM[6][7] * PDL[0][4];
        let zcc14 = PDM[6][6] * PDL[0][3];
        let rc14 = PDM[6][3] * PDL[0][5];
        out.n = n * ccor(z, rl, hc14, zc14) * ccor(z, rc14, hcc14, zcc14);
    }

    // Anomalous O, isothermal above its own reference altitude
    let g16h = swc_nlb * globe7(&PD[HOT_O], cfg, cache);
    let db16h = PDM[7][0] * g16h.exp() * PD[HOT_O][0];
    let tho = PDM[7][9] * PDL[0][6];
    let hot = densu(
        z,
        db16h,
        &Bates {
            tinf: tho,
            tlb: tho,
            ..upper.bates
        },
        16.0,
        ALPHA[8],
        &upper.lower,
        &cfg.aux.geoid,
    )?;
    let zsht = PDM[7][5];
    let zmho = PDM[7][4];
    let zsho = cfg.aux.geoid.scale_height(zmho, 16.0, tho);
    out.anomalous_o = hot.density * (-zsht / zsho * ((-(z - zmho) / zsht).exp() - 1.0)).exp();

    out.total = out.mass_density();

    let ProfilePoint { temperature, .. } = densu(
        z.abs(),
        1.0,
        &upper.bates,
        0.0,
        0.0,
        &upper.lower,
        &cfg.aux.geoid,
    )?;
    out.t_alt = temperature;

    if f.output_si {
        out = out.to_si();
        dm28 *= 1.0E6;
    }

    Ok(Thermosphere {
        output: out,
        dm28,
        lower: upper.lower,
    })
}

/// Computes the neutral densities and temperatures from the ground to the exosphere.
///
/// Below 72.5 km, the N2 density follows the mesosphere and stratosphere temperature profiles, and
/// the He, O2 and Ar densities are scaled from it. The atomic species are set to zero there.
pub fn gtd7(cfg: &MsisConfig) -> Result<MsisOutput, AtmosphereError> {
    let f = &cfg.flags;
    let alt = cfg.input.alt_km;
    let mut cache = ApCache::default();

    let thermo = gts7(&cfg.at_altitude(alt.max(MESOPAUSE_KM)), &mut cache)?;
    if alt >= MESOPAUSE_KM {
        return Ok(thermo.output);
    }

    let swc_tn2 = gate(f.all_tn2_var);
    let swc_tn3 = gate(f.all_tn3_var);

    // Mesosphere temperature nodes, joining the lower thermosphere at 72.5 km
    let mut meso = NodeProfile {
        zn: [MESOPAUSE_KM, 55.0, 45.0, STRATOPAUSE_KM],
        ..Default::default()
    };
    meso.tgn[0] = thermo.lower.tgn[1];
    meso.tn[0] = thermo.lower.tn[4];
    for k in 0..3 {
        let var = if k == 2 { swc_tn2 * swc_tn3 } else { swc_tn2 };
        meso.tn[k + 1] = PMA[k][0] * PAVGM[k] / (1.0 - var * glob7s(&PMA[k], cfg, &cache)?);
    }
    meso.tgn[1] = PAVGM[8]
        * PMA[9][0]
        * (1.0 + swc_tn2 * swc_tn3 * glob7s(&PMA[9], cfg, &cache)?)
        * meso.tn[3].powi(2)
        / (PMA[2][0] * PAVGM[2]).powi(2);

    // Stratosphere and troposphere temperature nodes, only needed below the stratopause
    let mut strato = NodeProfile {
        zn: [STRATOPAUSE_KM, 20.0, 15.0, 10.0, 0.0],
        ..Default::default()
    };
    strato.tn[0] = meso.tn[3];
    if alt <= STRATOPAUSE_KM {
        strato.tgn[0] = meso.tgn[1];
        for k in 3..7 {
            strato.tn[k - 2] =
                PMA[k][0] * PAVGM[k] / (1.0 - swc_tn3 * glob7s(&PMA[k], cfg, &cache)?);
        }
        strato.tgn[1] = PMA[7][0]
            * PAVGM[7]
            * (1.0 + swc_tn3 * glob7s(&PMA[7], cfg, &cache)?)
            * strato.tn[4].powi(2)
            / (PMA[6][0] * PAVGM[6]).powi(2);
    }

    // Linear transition to full mixing below ZMIX
    let dmc = if alt > ZMIX {
        1.0 - (MESOPAUSE_KM - alt) / (MESOPAUSE_KM - ZMIX)
    } else {
        0.0
    };

    let top = thermo.output;
    let geo = &cfg.aux.geoid;
    let dz28 = top.n2;

    let mut out = MsisOutput {
        t_exo: top.t_exo,
        ..Default::default()
    };

    let dmr = top.n2 / thermo.dm28 - 1.0;
    let n2 = densm(alt, thermo.dm28, PDM[2][4], &meso, &strato, geo)?;
    let n2 = n2.density * (1.0 + dmr * dmc);
    out.n2 = n2;

    let scaled = |top_density: f64, ratio: f64| {
        let dmr = top_density / (dz28 * ratio) - 1.0;
        n2 * ratio * (1.0 + dmr * dmc)
    };
    out.he = scaled(top.he, PDM[0][1]);
    out.o2 = scaled(top.o2, PDM[3][1]);
    out.ar = scaled(top.ar, PDM[4][1]);

    out.total = out.mass_density();
    if f.output_si {
        out.total /= 1.0E3;
    }

    out.t_alt = densm(alt, 1.0, 0.0, &meso, &strato, geo)?.temperature;

    Ok(out)
}

/// Same as [`gtd7`], but the total mass density includes the anomalous oxygen, as needed to
/// compute the drag on a spacecraft.
pub fn gtd7d(cfg: &MsisConfig) -> Result<MsisOutput, AtmosphereError> {
    let mut out = gtd7(cfg)?;
    out.total = out.mass_density() + AMU_G * 16.0 * out.anomalous_o;
    if cfg.flags.output_si {
        out.total /= 1.0E3;
    }
    Ok(out)
}
