/// Provider name -> category label. A convenience classification, not a
/// validation gate: services missing from the table are still valid
/// subscriptions, they just carry an empty category.
const CATEGORY_MAP: &[(&str, &str)] = &[
    ("Netflix", "Streaming"),
    ("Hulu", "Streaming"),
    ("Disney+", "Streaming"),
    ("HBO Max", "Streaming"),
    ("Spotify", "Music"),
    ("Apple Music", "Music"),
    ("Amazon", "Delivery"),
    ("DoorDash", "Delivery"),
];

/// Look up the category for a provider name, case-insensitively.
pub fn category_for(service: &str) -> Option<&'static str> {
    CATEGORY_MAP
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(service))
        .map(|(_, category)| *category)
}
