//! Chart assembly orchestration.
//!
//! Bridges the ephemeris, normalization, house, varga, combination and
//! strength layers into the engine's output contract. Every chart is
//! computed fresh from its request; the only state shared across requests
//! is the immutable reference data inside the lower crates.

use std::f64::consts::PI;

use serde::Serialize;

use jataka_ephem::{Body, EclipticState, Ephemeris, OBLIQUITY_J2000_RAD};
use jataka_kuta::{AshtakootResult, MoonSignature, match_kuta};
use jataka_time::{gmst_rad, jd_to_centuries, local_sidereal_time_rad};
use jataka_vedic::{
    BhavaFrame, Graha, GrahaPosition, SAPTA_GRAHAS, ShadbalaInputs, ShadbalaScore, VargaChart,
    all_shadbala, assign_bhavas, ayanamsha_deg, compute_bhavas, declination_deg,
    from_sidereal_longitude, normalize_360, normalize_position, varga_chart,
};
use jataka_yoga::{ChartFacts, DoshaMatch, RuleMatch, YogaMatch, evaluate, validate_catalog};

use crate::error::ChartError;
use crate::request::{ChartRequest, ValidatedRequest, validate};

/// Weekday lords, Sunday first.
const VAAR_LORDS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

/// Planetary-hour sequence: each hora hands over along this chain.
const HORA_SEQUENCE: [Graha; 7] = [
    Graha::Surya,
    Graha::Shukra,
    Graha::Buddh,
    Graha::Chandra,
    Graha::Shani,
    Graha::Guru,
    Graha::Mangal,
];

/// One planet-to-house entry of the assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GrahaBhava {
    pub graha: Graha,
    pub bhava: u8,
}

/// The complete computed chart: the engine's output contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    pub planetary_positions: Vec<GrahaPosition>,
    pub house_system: BhavaFrame,
    pub house_assignment: Vec<GrahaBhava>,
    pub divisional_charts: Vec<VargaChart>,
    pub yogas: Vec<YogaMatch>,
    pub doshas: Vec<DoshaMatch>,
    pub shadbala: Vec<ShadbalaScore>,
    /// Moon signature consumed by the Ashtakoot matcher.
    pub moon: MoonSignature,
    /// Ayanamsha applied to this chart, degrees.
    pub ayanamsha_deg: f64,
}

/// One-shot shared intermediates for a single request.
struct RequestContext {
    jd_utc: f64,
    jd_tt: f64,
    ayanamsha_deg: f64,
    lst_rad: f64,
}

impl RequestContext {
    fn new(v: &ValidatedRequest) -> Self {
        let jd_utc = v.utc.to_jd_utc();
        let jd_tt = v.utc.to_jd_tt();
        let t = jd_to_centuries(jd_tt);
        let ayanamsha = ayanamsha_deg(v.ayanamsha, t);
        let gmst = gmst_rad(jd_utc);
        let lst_rad = local_sidereal_time_rad(gmst, v.longitude.to_radians());
        Self {
            jd_utc,
            jd_tt,
            ayanamsha_deg: ayanamsha,
            lst_rad,
        }
    }
}

/// The engine facade: validated reference data plus the ephemeris context.
#[derive(Debug, Clone, Copy)]
pub struct ChartEngine {
    ephemeris: Ephemeris,
}

impl ChartEngine {
    /// Construct the engine, validating the combination catalog up front.
    pub fn new() -> Result<Self, ChartError> {
        validate_catalog(jataka_yoga::CATALOG)?;
        Ok(Self {
            ephemeris: Ephemeris::new(),
        })
    }

    pub fn compute_chart(&self, request: &ChartRequest) -> Result<Chart, ChartError> {
        compute_chart(&self.ephemeris, request)
    }

    /// Ashtakoot match between two computed charts, (groom, bride) order.
    pub fn match_charts(&self, groom: &Chart, bride: &Chart) -> AshtakootResult {
        match_kuta(&groom.moon, &bride.moon)
    }
}

/// Ephemeris body backing a graha; the nodes are computed points.
fn graha_body(graha: Graha) -> Option<Body> {
    match graha {
        Graha::Surya => Some(Body::Sun),
        Graha::Chandra => Some(Body::Moon),
        Graha::Mangal => Some(Body::Mars),
        Graha::Buddh => Some(Body::Mercury),
        Graha::Guru => Some(Body::Jupiter),
        Graha::Shukra => Some(Body::Venus),
        Graha::Shani => Some(Body::Saturn),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Compute a full chart for a request.
pub fn compute_chart(ephemeris: &Ephemeris, request: &ChartRequest) -> Result<Chart, ChartError> {
    let v = validate(request)?;
    let ctx = RequestContext::new(&v);

    // Raw tropical states for the seven bodies, kept for declination and
    // day/night work below.
    let mut states: [EclipticState; 7] = [EclipticState {
        lon_deg: 0.0,
        lat_deg: 0.0,
        distance_au: 0.0,
        speed_deg_per_day: 0.0,
    }; 7];
    for (i, &graha) in SAPTA_GRAHAS.iter().enumerate() {
        let body = graha_body(graha).expect("sapta graha has a body");
        states[i] = ephemeris.state(body, ctx.jd_tt)?;
    }
    let node = ephemeris.node_state(ctx.jd_tt)?;

    // Normalized sidereal positions for all nine grahas.
    let mut positions: [GrahaPosition; 9] =
        [from_sidereal_longitude(Graha::Surya, 0.0, 0.0, 0.0, 0.0); 9];
    for (i, &graha) in SAPTA_GRAHAS.iter().enumerate() {
        positions[i] = normalize_position(graha, &states[i], ctx.ayanamsha_deg);
    }
    positions[Graha::Rahu.index() as usize] =
        normalize_position(Graha::Rahu, &node, ctx.ayanamsha_deg);
    positions[Graha::Ketu.index() as usize] = from_sidereal_longitude(
        Graha::Ketu,
        node.lon_deg - ctx.ayanamsha_deg + 180.0,
        0.0,
        0.0,
        node.speed_deg_per_day,
    );

    // House frame and assignment.
    let frame = compute_bhavas(
        ctx.lst_rad,
        v.latitude,
        v.house_system,
        ctx.ayanamsha_deg,
    )?;
    let lons: Vec<f64> = positions.iter().map(|p| p.longitude).collect();
    let houses = assign_bhavas(&frame, &lons);
    let house_assignment: Vec<GrahaBhava> = positions
        .iter()
        .zip(&houses)
        .map(|(p, &bhava)| GrahaBhava {
            graha: p.graha,
            bhava,
        })
        .collect();

    // Divisional charts.
    let natal_pairs: Vec<(Graha, f64)> = positions.iter().map(|p| (p.graha, p.longitude)).collect();
    let divisional_charts: Vec<VargaChart> = v
        .vargas
        .iter()
        .map(|&vg| varga_chart(&natal_pairs, frame.lagna_deg, vg))
        .collect();

    // Combination catalog.
    let lagna_rashi = ((normalize_360(frame.lagna_deg) / 30.0).floor() as u8).min(11);
    let facts = ChartFacts::from_positions(&positions, lagna_rashi);
    let mut yogas = Vec::new();
    let mut doshas = Vec::new();
    for m in evaluate(&facts) {
        match m {
            RuleMatch::Yoga(y) => yogas.push(y),
            RuleMatch::Dosha(d) => doshas.push(d),
        }
    }

    // Shadbala.
    let shadbala = all_shadbala(&shadbala_inputs(&v, &ctx, &states, &positions, &houses));

    let moon = MoonSignature::new(
        positions[1].rashi_index,
        positions[1].nakshatra_index,
        positions[1].pada,
    );

    Ok(Chart {
        planetary_positions: positions.to_vec(),
        house_system: frame,
        house_assignment,
        divisional_charts,
        yogas,
        doshas,
        shadbala: shadbala.to_vec(),
        moon,
        ayanamsha_deg: ctx.ayanamsha_deg,
    })
}

/// Assemble the temporal/positional inputs for the strength calculation.
fn shadbala_inputs(
    v: &ValidatedRequest,
    ctx: &RequestContext,
    states: &[EclipticState; 7],
    positions: &[GrahaPosition; 9],
    houses: &[u8],
) -> ShadbalaInputs {
    let mut sidereal_lons = [0.0; 9];
    for (i, p) in positions.iter().enumerate() {
        sidereal_lons[i] = p.longitude;
    }
    let mut speeds = [0.0; 7];
    let mut declinations = [0.0; 7];
    let mut bhava_numbers = [0u8; 7];
    for i in 0..7 {
        speeds[i] = states[i].speed_deg_per_day;
        declinations[i] = declination_deg(states[i].lon_deg, states[i].lat_deg);
        bhava_numbers[i] = houses[i];
    }

    let (is_daytime, day_fraction) = day_night_fraction(
        ctx.lst_rad,
        v.latitude.to_radians(),
        states[0].lon_deg,
    );

    let weekday = ((ctx.jd_utc + 1.5).floor() as i64).rem_euclid(7) as usize;
    let weekday_lord = VAAR_LORDS[weekday];
    let hora_lord = hora_lord(ctx.jd_utc, v.longitude, weekday_lord);

    ShadbalaInputs {
        sidereal_lons,
        speeds,
        bhava_numbers,
        declinations,
        is_daytime,
        day_fraction,
        weekday_lord,
        hora_lord,
    }
}

/// Day/night flag and the fraction elapsed of the current portion, from
/// the Sun's hour angle against its semi-diurnal arc.
fn day_night_fraction(lst_rad: f64, lat_rad: f64, sun_tropical_lon: f64) -> (bool, f64) {
    let eps = OBLIQUITY_J2000_RAD;
    let lambda = sun_tropical_lon.to_radians();
    let ra = f64::atan2(lambda.sin() * eps.cos(), lambda.cos());
    let dec = (eps.sin() * lambda.sin()).asin();

    // Hour angle in [-pi, pi).
    let h = wrap_pi(lst_rad - ra);
    let sin_alt = lat_rad.sin() * dec.sin() + lat_rad.cos() * dec.cos() * h.cos();
    let is_day = sin_alt > 0.0;

    let semi_day = (-(lat_rad.tan() * dec.tan())).clamp(-1.0, 1.0).acos();
    let fraction = if is_day {
        if semi_day < 1e-9 {
            0.5
        } else {
            ((h + semi_day) / (2.0 * semi_day)).clamp(0.0, 1.0)
        }
    } else {
        let semi_night = PI - semi_day;
        if semi_night < 1e-9 {
            0.5
        } else {
            let hn = wrap_pi(h - PI);
            ((hn + semi_night) / (2.0 * semi_night)).clamp(0.0, 1.0)
        }
    };
    (is_day, fraction)
}

/// Planetary hour lord: horas counted from local 6 AM mean time, handing
/// over along the classical sequence starting at the weekday lord.
fn hora_lord(jd_utc: f64, longitude_deg: f64, weekday_lord: Graha) -> Graha {
    let local_day_frac = (jd_utc + 0.5 + longitude_deg / 360.0).rem_euclid(1.0);
    let hours_since_sunrise = (local_day_frac * 24.0 - 6.0).rem_euclid(24.0).floor() as usize;
    let start = HORA_SEQUENCE
        .iter()
        .position(|&g| g == weekday_lord)
        .unwrap_or(0);
    HORA_SEQUENCE[(start + hours_since_sunrise) % 7]
}

/// Wrap an angle to [-pi, pi).
fn wrap_pi(angle: f64) -> f64 {
    (angle + PI).rem_euclid(2.0 * PI) - PI
}
