//! WMO weather code descriptions, as reported by Open-Meteo.

const UNKNOWN: &str = "Unknown weather";

static WEATHER_CODES: [(i64, &str); 28] = [
    (0, "Clear sky"),
    (1, "Mainly clear"),
    (2, "Partly cloudy"),
    (3, "Overcast"),
    (45, "Foggy"),
    (48, "Depositing rime fog"),
    (51, "Light drizzle"),
    (53, "Moderate drizzle"),
    (55, "Dense drizzle"),
    (56, "Light freezing drizzle"),
    (57, "Dense freezing drizzle"),
    (61, "Slight rain"),
    (63, "Moderate rain"),
    (65, "Heavy rain"),
    (66, "Light freezing rain"),
    (67, "Heavy freezing rain"),
    (71, "Slight snow fall"),
    (73, "Moderate snow fall"),
    (75, "Heavy snow fall"),
    (77, "Snow grains"),
    (80, "Slight rain showers"),
    (81, "Moderate rain showers"),
    (82, "Violent rain showers"),
    (85, "Slight snow showers"),
    (86, "Heavy snow showers"),
    (95, "Thunderstorm"),
    (96, "Thunderstorm with slight hail"),
    (99, "Thunderstorm with heavy hail"),
];

/// Human-readable label for a weather code. Never fails: codes outside the
/// table map to "Unknown weather".
pub fn describe(code: i64) -> &'static str {
    WEATHER_CODES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, label)| *label)
        .unwrap_or(UNKNOWN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes() {
        assert_eq!(describe(0), "Clear sky");
        assert_eq!(describe(3), "Overcast");
        assert_eq!(describe(48), "Depositing rime fog");
        assert_eq!(describe(82), "Violent rain showers");
        assert_eq!(describe(95), "Thunderstorm");
        assert_eq!(describe(99), "Thunderstorm with heavy hail");
    }

    #[test]
    fn unknown_codes_fall_back() {
        assert_eq!(describe(9999), "Unknown weather");
        assert_eq!(describe(4), "Unknown weather");
        assert_eq!(describe(-1), "Unknown weather");
        assert_eq!(describe(i64::MAX), "Unknown weather");
    }

    #[test]
    fn table_has_no_duplicate_codes() {
        let mut codes: Vec<_> = WEATHER_CODES.iter().map(|(code, _)| *code).collect();
        codes.dedup();
        assert_eq!(codes.len(), 28);
        assert!(codes.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn describe_is_stable_across_calls() {
        for code in [0, 61, 95, 1234] {
            assert_eq!(describe(code), describe(code));
        }
    }
}
