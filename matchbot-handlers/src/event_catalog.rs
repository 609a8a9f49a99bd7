//! Static catalog of online events keyed by lower-cased interest.
//!
//! Hard-coded at build time; unknown interests fall back to the one-item default list.

const DEFAULT_EVENTS: &[&str] = &["General online event on 2025-04-19"];

/// Returns the event list for a lower-cased interest. Callers lower-case the stored value.
pub fn recommended_events(interest: &str) -> &'static [&'static str] {
    match interest {
        "online gaming" => &[
            "Gaming Tournament on 2025-04-15",
            "Virtual LAN Party on 2025-04-20",
        ],
        "virtual reality" => &[
            "VR Meetup on 2025-04-18",
            "VR Experience Expo on 2025-04-22",
        ],
        "social media" => &[
            "Social Media Marketing Webinar on 2025-04-16",
            "Influencer Networking Event on 2025-04-21",
        ],
        _ => DEFAULT_EVENTS,
    }
}
