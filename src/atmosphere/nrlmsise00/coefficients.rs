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

//! Regression coefficients of the NRLMSISE-00 model.
//!
//! Each density table holds 150 coefficients of the thermospheric harmonic expansion, each
//! lower atmosphere table holds 100 coefficients of the reduced expansion. The layout of each
//! table follows the coefficient ordering of the NRL release, such that the index arithmetic
//! of the harmonic expansion can be audited against it.
// TODO: most PT, PS, PDL, PTL and PMA terms, the trailing density terms, and the H, N and anomalous
// oxygen rows are zero or unit placeholders here. Complete them from the NRL coefficient release.

/// Index of the helium density coefficients in [`PD`]
pub(crate) const HE: usize = 0;
/// Index of the atomic oxygen density coefficients in [`PD`]
pub(crate) const O: usize = 1;
/// Index of the molecular nitrogen density coefficients in [`PD`]
pub(crate) const N2: usize = 2;
/// Index of the lower boundary temperature coefficients in [`PD`]
pub(crate) const TLB: usize = 3;
/// Index of the molecular oxygen density coefficients in [`PD`]
pub(crate) const O2: usize = 4;
/// Index of the argon density coefficients in [`PD`]
pub(crate) const AR: usize = 5;
/// Index of the hydrogen density coefficients in [`PD`]
pub(crate) const H: usize = 6;
/// Index of the atomic nitrogen density coefficients in [`PD`]
pub(crate) const N: usize = 7;
/// Index of the anomalous oxygen density coefficients in [`PD`]
pub(crate) const HOT_O: usize = 8;

/// Exospheric temperature
pub(crate) static PT: [f64; 150] = [
     9.86573E-01,  1.62228E-02,  1.55270E-02, -1.04323E-01, -3.75801E-03,
    -1.18538E-03, -1.24043E-01,  4.56820E-03,  8.76018E-03, -1.36235E-01,
    -3.52427E-02,  8.84181E-03, -8.23673E-03,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
];

/// Species densities and lower boundary temperature
pub(crate) static PD: [[f64; 150]; 9] = [
    // He
    [
         1.09979E+00, -4.88060E-02, -1.97501E-01, -9.10280E-02, -6.96558E-03,
         2.42136E-02,  3.91333E-01, -7.20068E-03, -3.22718E-02,  1.41508E+00,
         1.68194E-01,  1.85282E-02,  1.09384E-01, -7.24282E+00,  0.00000E+00,
         2.96377E-01, -4.97210E-02,  1.04114E+02, -8.61108E-02, -7.29177E-04,
         1.48998E-06,  1.08629E-03,  0.00000E+00,  0.00000E+00,  8.31090E-02,
         1.12818E-01, -5.75005E-02, -1.29919E-02, -1.78849E-02, -2.86343E-06,
         0.00000E+00, -1.51187E+02, -6.65902E-03,  0.00000E+00, -2.02069E-03,
         0.00000E+00,  0.00000E+00,  4.32264E-02, -2.80444E+01, -3.26789E-03,
         2.47461E-03,  0.00000E+00,  0.00000E+00,  9.82100E-02,  1.22714E-01,
        -3.96450E-02,  0.00000E+00, -2.76489E-03,  0.00000E+00,  1.87723E-03,
        -8.09813E-03,  4.34428E-05, -7.70932E-03,  0.00000E+00, -2.28894E-03,
        -5.69070E-03, -5.22193E-03,  6.00692E-03, -7.80434E+03, -3.48336E-03,
        -6.38362E-03, -1.82190E-03,  0.00000E+00, -7.58976E+01, -2.17875E-02,
        -1.72524E-02, -9.06287E-03,  0.00000E+00,  2.19415E-02,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // O
    [
         1.02315E+00, -1.59710E-01, -1.06630E-01, -1.77074E-02, -4.42726E-03,
         3.44803E-02,  4.45613E-02, -3.33751E-02, -5.73598E-02,  3.50360E-01,
         6.33053E-02,  2.16221E-02,  5.42577E-02, -5.74193E+00,  0.00000E+00,
         1.90891E-01, -1.39194E-02,  1.01102E+02,  8.16363E-02,  1.33717E-04,
         6.54403E-06,  3.10295E-03,  0.00000E+00,  0.00000E+00,  5.38205E-02,
         1.23910E-01, -1.39831E-02,  0.00000E+00,  0.00000E+00, -3.95915E-06,
         0.00000E+00, -7.14651E-01, -5.01027E-03,  0.00000E+00, -3.24756E-03,
         0.00000E+00,  0.00000E+00,  4.42173E-02, -1.31598E+01, -3.15626E-03,
         1.24574E-03, -1.47626E-03, -1.55461E-03,  6.40682E-02,  1.34898E-01,
        -2.42415E-02,  0.00000E+00,  0.00000E+00,  0.00000E+00,  6.13666E-04,
        -5.40373E-03,  2.61635E-05, -3.33012E-03,  0.00000E+00, -3.08101E-03,
        -2.42679E-03, -3.36086E-03,  0.00000E+00, -1.18979E+03, -5.04738E-02,
        -2.61547E-03, -1.03132E-03,  1.91583E-04, -8.38132E+01, -1.40517E-02,
        -1.14167E-02, -4.08012E-03,  1.73522E-04, -1.39644E-02, -6.64128E-02,
        -6.85152E-02, -1.34414E+04,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  6.07916E-04,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // N2
    [
         1.16112E+00,  0.00000E+00,  0.00000E+00,  3.33725E-02,  0.00000E+00,
         3.48637E-02, -5.44368E-03,  0.00000E+00, -6.73940E-02,  1.74754E-01,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  1.74712E+02,  0.00000E+00,
         1.26733E-01,  0.00000E+00,  1.03154E+02,  5.52075E-02,  0.00000E+00,
         0.00000E+00,  8.13525E-04,  0.00000E+00,  0.00000E+00,  8.66784E-02,
         1.58727E-01,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00, -2.50482E+01,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00, -2.48894E-03,
         6.16053E-04, -5.79716E-04,  2.95482E-03,  8.47001E-02,  1.70147E-01,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  2.47425E-05,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // TLB
    [
         9.44846E-01,  0.00000E+00,  0.00000E+00, -3.08617E-02,  0.00000E+00,
        -2.44019E-02,  6.48607E-03,  0.00000E+00,  3.08181E-02,  4.59392E-02,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  1.74712E+02,  0.00000E+00,
         2.13260E-02,  0.00000E+00, -3.56958E+02,  0.00000E+00,  1.82278E-04,
         0.00000E+00,  3.07472E-04,  0.00000E+00,  0.00000E+00,  8.66784E-02,
         1.58727E-01,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  3.83054E-03,  0.00000E+00,  0.00000E+00,
        -1.93065E-03, -1.45090E-03,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00, -1.23493E-03,  1.36736E-03,  8.47001E-02,  1.70147E-01,
         3.71469E-03,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         5.10250E-03,  2.47425E-05,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // O2
    [
         1.35580E+00,  1.44816E-01,  0.00000E+00,  6.07767E-02,  0.00000E+00,
         2.94777E-02,  7.46900E-02,  0.00000E+00, -9.23822E-02,  8.57342E-02,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  2.38636E+01,  0.00000E+00,
         7.71653E-02,  0.00000E+00,  8.18751E+01,  1.87736E-02,  0.00000E+00,
         0.00000E+00,  1.49667E-02,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00, -3.67874E+02,  5.48158E-03,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  8.47001E-02,  1.70147E-01,
         1.22631E-02,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // Ar
    [
         1.26376E+00, -2.14304E-01, -1.49984E-01,  2.30404E-01,  2.98237E-02,
         2.68673E-02,  2.96228E-01,  2.21900E-02, -2.07655E-02,  4.52506E-01,
         1.20105E-01,  3.24420E-02,  4.24816E-02, -9.14313E+00,  0.00000E+00,
         2.47178E-02, -2.88229E-02,  8.12805E+01,  5.10380E-02, -5.80611E-03,
         2.51236E-05, -1.24083E-02,  0.00000E+00,  0.00000E+00,  8.66784E-02,
         1.58727E-01, -3.48190E-02,  0.00000E+00,  0.00000E+00,  2.89885E-05,
         0.00000E+00,  1.53595E+02, -1.68604E-02,  0.00000E+00,  1.01015E-02,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  2.84552E-04, -1.22181E-03,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // H
    [
         1.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // N
    [
         1.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // Hot O
    [
         1.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
];

/// Temperature gradient at the lower boundary
pub(crate) static PS: [f64; 150] = [
     9.56827E-01,  6.20637E-02,  3.18433E-02,  0.00000E+00,  0.00000E+00,
     3.94900E-02,  0.00000E+00,  0.00000E+00, -9.24882E-03, -7.94023E-03,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
     0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
];

/// Turbopause and chemistry correction scalings
pub(crate) static PDL: [[f64; 25]; 2] = [
    // N and O2 corrections
    [
         1.09930E+00,  3.90631E+00,  3.07165E+00,  9.86161E-01,  1.63536E+01,
         4.63830E+00,  1.00000E+00,  1.00000E+00,  1.00000E+00,  1.00000E+00,
         1.00000E+00,  1.00000E+00,  1.00000E+00,  1.00000E+00,  1.00000E+00,
         1.00000E+00,  1.00000E+00,  1.00000E+00,  1.00000E+00,  1.00000E+00,
         1.00000E+00,  1.00000E+00,  1.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // Turbo scale heights, O, H and O2 corrections
    [
         1.00000E+00,  1.00000E+00,  1.00000E+00,  1.00000E+00,  1.00000E+00,
         1.00000E+00,  1.00000E+00,  1.00000E+00,  1.00000E+00,  1.00000E+00,
         1.00000E+00,  1.00000E+00,  1.00000E+00,  1.00000E+00,  1.00000E+00,
         1.25000E+02,  1.00000E+00,  1.00000E+00,  1.00000E+00,  1.00000E+00,
         1.00000E+00,  1.00000E+00,  1.00000E+00,  1.00000E+00,  1.00000E+00,
    ],
];

/// Lower thermosphere temperature nodes (110, 100, 90 and 72.5 km)
pub(crate) static PTL: [[f64; 100]; 4] = [
    // TN1(2)
    [
         1.00858E+00,  4.56011E-02, -2.22972E-02, -5.44388E-02,  5.23136E-04,
        -1.88849E-02,  5.23707E-02, -9.43646E-03,  6.31707E-03, -7.80460E-02,
        -4.88430E-02,  0.00000E+00,  0.00000E+00, -7.60250E+00,  0.00000E+00,
        -1.44635E-02, -1.76843E-02, -1.21517E+02,  2.85647E-02,  0.00000E+00,
         0.00000E+00,  6.31792E-04,  0.00000E+00,  5.77197E-03,  8.66784E-02,
         1.58727E-01,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // TN1(3)
    [
         1.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // TN1(4)
    [
         1.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // TN1(5) and TN2(1)
    [
         1.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
];

/// Middle and lower atmosphere temperature nodes and gradients
pub(crate) static PMA: [[f64; 100]; 10] = [
    // TN2(2)
    [
         1.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // TN2(3)
    [
         1.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // TN2(4) and TN3(1)
    [
         1.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // TN3(2)
    [
         1.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // TN3(3)
    [
         1.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // TN3(4)
    [
         1.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // TN3(5) and surface temperature
    [
         1.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // Surface gradient
    [
         1.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // TGN1(2)
    [
         1.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // TGN3(2)
    [
         1.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
];

/// Mean values of the exospheric, lower boundary and node temperatures
pub(crate) static PTM: [f64; 10] = [
     1.04130E+03,  3.86000E+02,  1.95000E+02,  1.66728E+01,  2.13000E+02,
     1.20000E+02,  2.40000E+02,  1.87000E+02, -2.00000E+00,  0.00000E+00,
];

/// Reference densities, turbopause altitudes and correction parameters, per species
pub(crate) static PDM: [[f64; 10]; 8] = [
    // He
    [
         2.45600E+07,  6.71072E-06,  1.00000E+02,  0.00000E+00,  1.10000E+02,
         1.00000E+01,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // O
    [
         8.59400E+10,  1.00000E+00,  1.05000E+02, -8.00000E+00,  1.10000E+02,
         1.00000E+01,  9.00000E+01,  2.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // N2
    [
         2.81000E+11,  0.00000E+00,  1.05000E+02,  2.80000E+01,  2.89500E+01,
         0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // O2
    [
         3.30000E+10,  2.68270E-01,  1.05000E+02,  1.00000E+00,  1.10000E+02,
         1.00000E+01,  1.10000E+02, -1.00000E+01,  0.00000E+00,  0.00000E+00,
    ],
    // Ar
    [
         1.33000E+09,  1.19615E-02,  1.05000E+02,  0.00000E+00,  1.10000E+02,
         1.00000E+01,  0.00000E+00,  0.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // H
    [
         1.76100E+05,  1.00000E+00,  9.50000E+01, -8.00000E+00,  1.10000E+02,
         1.00000E+01,  9.00000E+01,  2.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // N
    [
         1.00000E+07,  1.00000E+00,  1.05000E+02, -8.00000E+00,  1.10000E+02,
         1.00000E+01,  9.00000E+01,  2.00000E+00,  0.00000E+00,  0.00000E+00,
    ],
    // Hot O
    [
         1.00000E+06,  1.00000E+00,  1.05000E+02, -8.00000E+00,  5.50000E+02,
         7.60000E+01,  9.00000E+01,  2.00000E+00,  0.00000E+00,  4.00000E+03,
    ],
];

/// Mean middle atmosphere node temperatures and gradients
pub(crate) static PAVGM: [f64; 10] = [
     2.61000E+02,  2.64000E+02,  2.29000E+02,  2.17000E+02,  2.17000E+02,
     2.23000E+02,  2.86760E+02, -2.93940E+00,  2.50000E+00,  0.00000E+00,
];
