//! The engine's request contract and its validation.

use serde::{Deserialize, Serialize};

use jataka_time::UtcTime;
use jataka_vedic::{AyanamshaSystem, BhavaSystem, Varga};

use crate::error::{InputError, instant_error};

/// A chart computation request, the sole integration surface for callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRequest {
    /// ISO-8601 UTC instant, `YYYY-MM-DDThh:mm:ssZ`.
    pub instant: String,
    /// Geographic latitude, degrees north.
    pub latitude: f64,
    /// Geographic longitude, degrees east.
    pub longitude: f64,
    /// Altitude above sea level, metres.
    #[serde(default)]
    pub altitude: f64,
    pub ayanamsha: AyanamshaSystem,
    pub house_system: BhavaSystem,
    /// Requested divisional charts by division count.
    #[serde(default = "default_divisions")]
    pub divisions: Vec<u16>,
}

fn default_divisions() -> Vec<u16> {
    vec![1]
}

impl ChartRequest {
    /// Convenience constructor with D1 only.
    pub fn new(
        instant: impl Into<String>,
        latitude: f64,
        longitude: f64,
        ayanamsha: AyanamshaSystem,
        house_system: BhavaSystem,
    ) -> Self {
        Self {
            instant: instant.into(),
            latitude,
            longitude,
            altitude: 0.0,
            ayanamsha,
            house_system,
            divisions: default_divisions(),
        }
    }
}

/// A request that passed field validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    pub utc: UtcTime,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    pub ayanamsha: AyanamshaSystem,
    pub house_system: BhavaSystem,
    pub vargas: Vec<Varga>,
}

/// Validate every request field, reporting the first offender.
pub fn validate(request: &ChartRequest) -> Result<ValidatedRequest, InputError> {
    let utc = UtcTime::parse(&request.instant).map_err(instant_error)?;
    if !(1..=9999).contains(&utc.year) {
        return Err(InputError {
            field: "instant",
            reason: "year must be within 1-9999 CE",
        });
    }

    if !request.latitude.is_finite() || !(-90.0..=90.0).contains(&request.latitude) {
        return Err(InputError {
            field: "latitude",
            reason: "must be within [-90, 90]",
        });
    }
    if !request.longitude.is_finite() || !(-180.0..=180.0).contains(&request.longitude) {
        return Err(InputError {
            field: "longitude",
            reason: "must be within [-180, 180]",
        });
    }
    if !request.altitude.is_finite() {
        return Err(InputError {
            field: "altitude",
            reason: "must be finite",
        });
    }

    if request.divisions.is_empty() {
        return Err(InputError {
            field: "divisions",
            reason: "must not be empty",
        });
    }
    let mut vargas = Vec::with_capacity(request.divisions.len());
    for &code in &request.divisions {
        match Varga::from_code(code) {
            Some(v) => {
                if !vargas.contains(&v) {
                    vargas.push(v);
                }
            }
            None => {
                return Err(InputError {
                    field: "divisions",
                    reason: "unknown division code",
                });
            }
        }
    }

    Ok(ValidatedRequest {
        utc,
        latitude: request.latitude,
        longitude: request.longitude,
        altitude: request.altitude,
        ayanamsha: request.ayanamsha,
        house_system: request.house_system,
        vargas,
    })
}
