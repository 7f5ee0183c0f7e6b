//! Sidereal (Vedic) chart mathematics for the jataka engine.
//!
//! This crate provides:
//! - Rashi / nakshatra / pada normalization of ecliptic longitudes
//! - Ayanamsha computation for six sidereal reference systems
//! - Lagna and bhava (house) calculation with planet assignment
//! - Varga (divisional chart) transforms, Shodashavarga set
//! - Graha dignity and relationship tables
//! - Drishti (virupa aspects) and the six-fold Shadbala strength

pub mod ayanamsha;
pub mod bhava;
pub mod drishti;
pub mod error;
pub mod graha;
pub mod lagna;
pub mod nakshatra;
pub mod position;
pub mod rashi;
pub mod relationships;
pub mod shadbala;
pub mod util;
pub mod varga;

pub use ayanamsha::{ALL_AYANAMSHAS, AyanamshaSystem, ayanamsha_deg};
pub use bhava::{BhavaFrame, BhavaSystem, assign_bhavas, bhava_of, compute_bhavas};
pub use drishti::{DrishtiEntry, base_virupa, graha_drishti, special_virupa};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS, nth_rashi_from, rashi_lord, rashi_lord_by_index};
pub use lagna::{ascendant_rad, midheaven_rad, vertex_rad};
pub use nakshatra::{ALL_NAKSHATRAS, Nakshatra, NakshatraInfo, nakshatra_from_longitude};
pub use position::{GrahaPosition, from_sidereal_longitude, normalize_position};
pub use rashi::{ALL_RASHIS, Dms, Rashi, RashiInfo, deg_to_dms, dms_to_deg, rashi_from_longitude};
pub use relationships::{
    BeneficNature, Dignity, GrahaGender, NaisargikaMaitri, PanchadhaMaitri, TatkalikaMaitri,
    dignity_in_rashi, dignity_in_rashi_with_positions, exaltation_degree, graha_gender,
    moon_benefic_nature, naisargika_maitri, natural_benefic_malefic, panchadha_maitri,
    tatkalika_maitri,
};
pub use shadbala::{
    ShadbalaInputs, ShadbalaScore, StrengthBand, all_shadbala, band_from_percentage,
    declination_deg, shadbala,
};
pub use util::{angular_separation, arc_forward, normalize_360};
pub use varga::{
    ALL_VARGAS, SAPTA_VARGAS, Varga, VargaChart, VargaPosition, varga_chart, varga_longitude,
    varga_rashi_index,
};
