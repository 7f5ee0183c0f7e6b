//! Geocentric lunar position (Meeus, *Astronomical Algorithms* 2nd ed., ch. 47).
//!
//! Truncated ELP-2000/82 periodic series: the 32 largest longitude/distance
//! terms and 19 largest latitude terms of Table 47.A/47.B, plus the A1/A2/A3
//! additive corrections. Worst-case truncation error stays below ~0.05 deg
//! in longitude, well inside the engine's contract.

use crate::normalize_360;

/// Kilometres per astronomical unit.
pub const KM_PER_AU: f64 = 149_597_870.7;

/// Longitude (sin) and distance (cos) series.
/// Columns: [D, M, M', F] multipliers, then sigma-l (1e-6 deg), sigma-r (1e-3 km).
#[rustfmt::skip]
static LON_DIST_TERMS: [(i8, i8, i8, i8, f64, f64); 32] = [
    (0,  0,  1,  0,  6_288_774.0, -20_905_355.0),
    (2,  0, -1,  0,  1_274_027.0,  -3_699_111.0),
    (2,  0,  0,  0,    658_314.0,  -2_955_968.0),
    (0,  0,  2,  0,    213_618.0,    -569_925.0),
    (0,  1,  0,  0,   -185_116.0,      48_888.0),
    (0,  0,  0,  2,   -114_332.0,      -3_149.0),
    (2,  0, -2,  0,     58_793.0,     246_158.0),
    (2, -1, -1,  0,     57_066.0,    -152_138.0),
    (2,  0,  1,  0,     53_322.0,    -170_733.0),
    (2, -1,  0,  0,     45_758.0,    -204_586.0),
    (0,  1, -1,  0,    -40_923.0,    -129_620.0),
    (1,  0,  0,  0,    -34_720.0,     108_743.0),
    (0,  1,  1,  0,    -30_383.0,     104_755.0),
    (2,  0,  0, -2,     15_327.0,      10_321.0),
    (0,  0,  1,  2,    -12_528.0,           0.0),
    (0,  0,  1, -2,     10_980.0,      79_661.0),
    (4,  0, -1,  0,     10_675.0,     -34_782.0),
    (0,  0,  3,  0,     10_034.0,     -23_210.0),
    (4,  0, -2,  0,      8_548.0,     -21_636.0),
    (2,  1, -1,  0,     -7_888.0,      24_208.0),
    (2,  1,  0,  0,     -6_766.0,      30_824.0),
    (1,  0, -1,  0,     -5_163.0,      -8_379.0),
    (1,  1,  0,  0,      4_987.0,     -16_675.0),
    (2, -1,  1,  0,      4_036.0,     -12_831.0),
    (2,  0,  2,  0,      3_994.0,     -10_445.0),
    (4,  0,  0,  0,      3_861.0,     -11_650.0),
    (2,  0, -3,  0,      3_665.0,      14_403.0),
    (0,  1, -2,  0,     -2_689.0,      -7_003.0),
    (2,  0, -1,  2,     -2_602.0,           0.0),
    (2, -1, -2,  0,      2_390.0,      10_056.0),
    (1,  0,  1,  0,     -2_348.0,       6_322.0),
    (2, -2,  0,  0,      2_236.0,      -9_884.0),
];

/// Latitude (sin) series. Columns: [D, M, M', F], sigma-b (1e-6 deg).
#[rustfmt::skip]
static LAT_TERMS: [(i8, i8, i8, i8, f64); 19] = [
    (0,  0,  0,  1,  5_128_122.0),
    (0,  0,  1,  1,    280_602.0),
    (0,  0,  1, -1,    277_693.0),
    (2,  0,  0, -1,    173_237.0),
    (2,  0, -1,  1,     55_413.0),
    (2,  0, -1, -1,     46_271.0),
    (2,  0,  0,  1,     32_573.0),
    (0,  0,  2,  1,     17_198.0),
    (2,  0,  1, -1,      9_266.0),
    (0,  0,  2, -1,      8_822.0),
    (2, -1,  0, -1,      8_216.0),
    (2,  0, -2, -1,      4_324.0),
    (2,  0,  1,  1,      4_200.0),
    (2,  1,  0, -1,     -3_359.0),
    (2, -1, -1,  1,      2_463.0),
    (2, -1,  0,  1,      2_211.0),
    (2, -1, -1, -1,      2_065.0),
    (0,  1, -1, -1,     -1_870.0),
    (4,  0, -1, -1,      1_828.0),
];

/// Geocentric ecliptic longitude (deg, equinox of date), latitude (deg),
/// and distance (au) of the Moon.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn moon_geocentric(t: f64) -> (f64, f64, f64) {
    // Mean arguments, degrees (Meeus 47.1 - 47.5).
    let lp = 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t * t
        + t.powi(3) / 538_841.0
        - t.powi(4) / 65_194_000.0;
    let d = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t * t
        + t.powi(3) / 545_868.0
        - t.powi(4) / 113_065_000.0;
    let m = 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t * t + t.powi(3) / 24_490_000.0;
    let mp = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t * t + t.powi(3) / 69_699.0
        - t.powi(4) / 14_712_000.0;
    let f = 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t * t - t.powi(3) / 3_526_000.0
        + t.powi(4) / 863_310_000.0;

    // Eccentricity damping factor for terms involving M.
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t * t;

    let (d_r, m_r, mp_r, f_r) = (
        d.to_radians(),
        m.to_radians(),
        mp.to_radians(),
        f.to_radians(),
    );

    let mut sum_l = 0.0;
    let mut sum_r = 0.0;
    for &(cd, cm, cmp, cf, sl, sr) in &LON_DIST_TERMS {
        let arg = cd as f64 * d_r + cm as f64 * m_r + cmp as f64 * mp_r + cf as f64 * f_r;
        let damp = match cm.abs() {
            1 => e,
            2 => e * e,
            _ => 1.0,
        };
        sum_l += sl * damp * arg.sin();
        sum_r += sr * damp * arg.cos();
    }

    let mut sum_b = 0.0;
    for &(cd, cm, cmp, cf, sb) in &LAT_TERMS {
        let arg = cd as f64 * d_r + cm as f64 * m_r + cmp as f64 * mp_r + cf as f64 * f_r;
        let damp = match cm.abs() {
            1 => e,
            2 => e * e,
            _ => 1.0,
        };
        sum_b += sb * damp * arg.sin();
    }

    // Additive planetary/flattening corrections (Meeus p. 338).
    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    let a3 = (313.45 + 481_266.484 * t).to_radians();
    let lp_r = lp.to_radians();

    sum_l += 3958.0 * a1.sin() + 1962.0 * (lp_r - f_r).sin() + 318.0 * a2.sin();
    sum_b += -2235.0 * lp_r.sin()
        + 382.0 * a3.sin()
        + 175.0 * (a1 - f_r).sin()
        + 175.0 * (a1 + f_r).sin()
        + 127.0 * (lp_r - mp_r).sin()
        - 115.0 * (lp_r + mp_r).sin();

    let lon = normalize_360(lp + sum_l / 1e6);
    let lat = sum_b / 1e6;
    let dist_km = 385_000.56 + sum_r / 1e3;

    (lon, lat, dist_km / KM_PER_AU)
}
