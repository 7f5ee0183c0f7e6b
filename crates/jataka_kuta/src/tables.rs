//! Reference tables for the eight kootas.
//!
//! All immutable classical data keyed by rashi or nakshatra index. The
//! scoring matrices are embedded verbatim from the standard published
//! tables; the scorer never derives them.

/// Caste tier of a rashi, by element: water Brahmin, fire Kshatriya,
/// earth Vaishya, air Shudra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Varna {
    Shudra,
    Vaishya,
    Kshatriya,
    Brahmin,
}

/// Varna of a rashi by index.
pub fn varna_of_rashi(rashi_index: u8) -> Varna {
    match rashi_index % 4 {
        0 => Varna::Kshatriya,
        1 => Varna::Vaishya,
        2 => Varna::Shudra,
        _ => Varna::Brahmin,
    }
}

/// Vashya (dominance) group of a rashi.
///
/// Whole-sign simplification of the classical half-sign splits: Dhanu
/// counts as Manava, Makara as Jalachara.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vashya {
    Chatushpada,
    Manava,
    Jalachara,
    Vanachara,
    Keeta,
}

/// Vashya group of a rashi by index.
pub fn vashya_of_rashi(rashi_index: u8) -> Vashya {
    match rashi_index % 12 {
        0 | 1 => Vashya::Chatushpada,
        2 | 5 | 6 | 8 | 10 => Vashya::Manava,
        3 | 9 | 11 => Vashya::Jalachara,
        4 => Vashya::Vanachara,
        _ => Vashya::Keeta, // Vrischika
    }
}

const fn vashya_row(group: Vashya) -> usize {
    match group {
        Vashya::Chatushpada => 0,
        Vashya::Manava => 1,
        Vashya::Jalachara => 2,
        Vashya::Vanachara => 3,
        Vashya::Keeta => 4,
    }
}

/// Vashya points, rows = groom's group, columns = bride's group.
#[rustfmt::skip]
const VASHYA_POINTS: [[f64; 5]; 5] = [
    // bride:      Chatus Manava Jala  Vana  Keeta
    /* Chatus */ [ 2.0,   1.0,   1.0,  0.0,  1.0],
    /* Manava */ [ 1.0,   2.0,   0.5,  0.0,  1.0],
    /* Jala   */ [ 1.0,   0.5,   2.0,  0.0,  1.0],
    /* Vana   */ [ 1.0,   0.0,   0.0,  2.0,  0.0],
    /* Keeta  */ [ 1.0,   1.0,   1.0,  0.0,  2.0],
];

/// Vashya points for a (groom, bride) group pair.
pub fn vashya_points(groom: Vashya, bride: Vashya) -> f64 {
    VASHYA_POINTS[vashya_row(groom)][vashya_row(bride)]
}

/// Yoni animal symbols, one per nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Yoni {
    Ashwa,
    Gaja,
    Mesha,
    Sarpa,
    Shwan,
    Marjara,
    Mushaka,
    Gau,
    Mahisha,
    Vyaghra,
    Mriga,
    Vanara,
    Nakula,
    Simha,
}

/// Yoni animal of a nakshatra by index.
#[rustfmt::skip]
pub const NAKSHATRA_YONI: [Yoni; 27] = [
    Yoni::Ashwa,   // Ashwini
    Yoni::Gaja,    // Bharani
    Yoni::Mesha,   // Krittika
    Yoni::Sarpa,   // Rohini
    Yoni::Sarpa,   // Mrigashira
    Yoni::Shwan,   // Ardra
    Yoni::Marjara, // Punarvasu
    Yoni::Mesha,   // Pushya
    Yoni::Marjara, // Ashlesha
    Yoni::Mushaka, // Magha
    Yoni::Mushaka, // Purva Phalguni
    Yoni::Gau,     // Uttara Phalguni
    Yoni::Mahisha, // Hasta
    Yoni::Vyaghra, // Chitra
    Yoni::Mahisha, // Swati
    Yoni::Vyaghra, // Vishakha
    Yoni::Mriga,   // Anuradha
    Yoni::Mriga,   // Jyeshtha
    Yoni::Shwan,   // Mula
    Yoni::Vanara,  // Purva Ashadha
    Yoni::Nakula,  // Uttara Ashadha
    Yoni::Vanara,  // Shravana
    Yoni::Simha,   // Dhanishtha
    Yoni::Ashwa,   // Shatabhisha
    Yoni::Simha,   // Purva Bhadrapada
    Yoni::Gau,     // Uttara Bhadrapada
    Yoni::Gaja,    // Revati
];

const fn yoni_row(yoni: Yoni) -> usize {
    match yoni {
        Yoni::Ashwa => 0,
        Yoni::Gaja => 1,
        Yoni::Mesha => 2,
        Yoni::Sarpa => 3,
        Yoni::Shwan => 4,
        Yoni::Marjara => 5,
        Yoni::Mushaka => 6,
        Yoni::Gau => 7,
        Yoni::Mahisha => 8,
        Yoni::Vyaghra => 9,
        Yoni::Mriga => 10,
        Yoni::Vanara => 11,
        Yoni::Nakula => 12,
        Yoni::Simha => 13,
    }
}

/// Yoni compatibility matrix (symmetric: same animal 4, sworn-enemy
/// pairs 0).
#[rustfmt::skip]
const YONI_POINTS: [[f64; 14]; 14] = [
    //          Ashw Gaja Mesh Sarp Shwa Marj Mush Gau  Mahi Vyag Mrig Vana Naku Simh
    /* Ashwa */ [4.0, 2.0, 2.0, 3.0, 2.0, 2.0, 2.0, 1.0, 0.0, 1.0, 3.0, 3.0, 2.0, 1.0],
    /* Gaja  */ [2.0, 4.0, 3.0, 3.0, 2.0, 2.0, 2.0, 2.0, 3.0, 1.0, 2.0, 3.0, 2.0, 0.0],
    /* Mesha */ [2.0, 3.0, 4.0, 2.0, 1.0, 2.0, 1.0, 3.0, 3.0, 1.0, 2.0, 0.0, 3.0, 1.0],
    /* Sarpa */ [3.0, 3.0, 2.0, 4.0, 2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 0.0, 2.0],
    /* Shwan */ [2.0, 2.0, 1.0, 2.0, 4.0, 2.0, 1.0, 2.0, 2.0, 1.0, 0.0, 2.0, 1.0, 1.0],
    /* Marja */ [2.0, 2.0, 2.0, 1.0, 2.0, 4.0, 0.0, 2.0, 2.0, 1.0, 3.0, 3.0, 2.0, 1.0],
    /* Musha */ [2.0, 2.0, 1.0, 1.0, 1.0, 0.0, 4.0, 2.0, 2.0, 2.0, 2.0, 2.0, 1.0, 2.0],
    /* Gau   */ [1.0, 2.0, 3.0, 1.0, 2.0, 2.0, 2.0, 4.0, 3.0, 0.0, 3.0, 2.0, 2.0, 1.0],
    /* Mahis */ [0.0, 3.0, 3.0, 1.0, 2.0, 2.0, 2.0, 3.0, 4.0, 1.0, 2.0, 2.0, 2.0, 1.0],
    /* Vyagh */ [1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 2.0, 0.0, 1.0, 4.0, 1.0, 1.0, 2.0, 1.0],
    /* Mriga */ [3.0, 2.0, 2.0, 2.0, 0.0, 3.0, 2.0, 3.0, 2.0, 1.0, 4.0, 2.0, 2.0, 1.0],
    /* Vanar */ [3.0, 3.0, 0.0, 2.0, 2.0, 3.0, 2.0, 2.0, 2.0, 1.0, 2.0, 4.0, 3.0, 2.0],
    /* Nakul */ [2.0, 2.0, 3.0, 0.0, 1.0, 2.0, 1.0, 2.0, 2.0, 2.0, 2.0, 3.0, 4.0, 2.0],
    /* Simha */ [1.0, 0.0, 1.0, 2.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 4.0],
];

/// Yoni points for an animal pair.
pub fn yoni_points(a: Yoni, b: Yoni) -> f64 {
    YONI_POINTS[yoni_row(a)][yoni_row(b)]
}

/// Temperament category of a nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gana {
    Deva,
    Manushya,
    Rakshasa,
}

/// Gana of a nakshatra by index.
pub fn gana_of_nakshatra(nakshatra_index: u8) -> Gana {
    match nakshatra_index % 27 {
        0 | 4 | 6 | 7 | 12 | 14 | 16 | 21 | 26 => Gana::Deva,
        1 | 3 | 5 | 10 | 11 | 19 | 20 | 24 | 25 => Gana::Manushya,
        _ => Gana::Rakshasa,
    }
}

const fn gana_row(gana: Gana) -> usize {
    match gana {
        Gana::Deva => 0,
        Gana::Manushya => 1,
        Gana::Rakshasa => 2,
    }
}

/// Gana points, rows = groom, columns = bride.
#[rustfmt::skip]
const GANA_POINTS: [[f64; 3]; 3] = [
    //              Deva Manushya Rakshasa
    /* Deva     */ [6.0, 5.0,     1.0],
    /* Manushya */ [5.0, 6.0,     0.0],
    /* Rakshasa */ [1.0, 0.0,     6.0],
];

/// Gana points for a (groom, bride) pair.
pub fn gana_points(groom: Gana, bride: Gana) -> f64 {
    GANA_POINTS[gana_row(groom)][gana_row(bride)]
}

/// Nadi (pulse) group of a nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nadi {
    Adi,
    Madhya,
    Antya,
}

/// Nadi group by nakshatra index. The 27 nakshatras fall into the three
/// groups in the repeating pattern Adi-Madhya-Antya-Antya-Madhya-Adi.
pub fn nadi_of_nakshatra(nakshatra_index: u8) -> Nadi {
    match nakshatra_index % 6 {
        0 | 5 => Nadi::Adi,
        1 | 4 => Nadi::Madhya,
        _ => Nadi::Antya,
    }
}
