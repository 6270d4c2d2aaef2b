//! Fixed directory of supported cities and their coordinates.
//!
//! Keys are stored already normalized (trimmed, lowercase). Lookups are
//! exact-match; callers normalize their input with [`normalize`] first.

use serde::Serialize;

/// A supported city with its coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CityEntry {
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

impl CityEntry {
    const fn new(name: &'static str, latitude: f64, longitude: f64) -> Self {
        Self {
            name,
            latitude,
            longitude,
        }
    }

    /// Title-cased name for display, e.g. "Dera Ismail Khan".
    pub fn display_name(&self) -> String {
        self.name
            .split(' ')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// "dera ismail khan" and "d i khan" are the same place; both keys are kept.
static CITIES: [CityEntry; 13] = [
    CityEntry::new("islamabad", 33.6844, 73.0479),
    CityEntry::new("karachi", 24.8607, 67.0011),
    CityEntry::new("lahore", 31.5204, 74.3587),
    CityEntry::new("peshawar", 34.0151, 71.5249),
    CityEntry::new("quetta", 30.1798, 66.9750),
    CityEntry::new("multan", 30.1575, 71.5249),
    CityEntry::new("faisalabad", 31.4504, 73.1350),
    CityEntry::new("rawalpindi", 33.5651, 73.0169),
    CityEntry::new("hyderabad", 25.3960, 68.3578),
    CityEntry::new("gujranwala", 32.1877, 74.1945),
    CityEntry::new("dera ismail khan", 31.8315, 70.9017),
    CityEntry::new("d i khan", 31.8315, 70.9017),
    CityEntry::new("abbottabad", 34.1463, 73.2117),
];

/// Trim and lowercase a user-supplied city name.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Exact-match lookup of an already normalized key.
pub fn lookup(name: &str) -> Option<&'static CityEntry> {
    CITIES.iter().find(|city| city.name == name)
}

/// All entries, in declaration order.
pub fn cities() -> &'static [CityEntry] {
    &CITIES
}

/// All keys, in declaration order.
pub fn city_names() -> impl Iterator<Item = &'static str> {
    CITIES.iter().map(|city| city.name)
}
