//! Ashtakoot (8-factor, 36-point) synastry matching.
//!
//! Consumes two Moon signatures (rashi + nakshatra + pada) and scores the
//! eight classical kootas against immutable reference tables. A shared
//! nadi group always zeroes the Nadi koota and raises the veto flag,
//! surfaced separately from the numeric total.

pub mod kuta;
pub mod tables;

pub use kuta::{
    AshtakootResult, Compatibility, EXCELLENT_MIN, GOOD_MIN, KootaScore, MODERATE_MIN,
    MoonSignature, bhakoot_kuta, gana_kuta, graha_maitri_kuta, match_kuta, nadi_kuta, tara_kuta,
    varna_kuta, vashya_kuta, yoni_kuta,
};
pub use tables::{Gana, Nadi, Varna, Vashya, Yoni};
