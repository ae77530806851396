//! View rules: how entity fields map onto semantic tones and icons.
//!
//! Every mapping is total. Unrecognized labels fall back to a default tone
//! instead of surfacing an error.

use crate::domain::{Difficulty, NotificationKind, PlantStatus, SignalStrength};

/// Semantic color band. The shell maps tones onto concrete colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Green
    Good,
    /// Amber
    Caution,
    /// Red
    Critical,
    /// Gray
    Neutral,
}

/// Glyphs the shell draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Home,
    Leaf,
    Device,
    Bell,
    User,
    QrCode,
    Back,
    Droplet,
    Thermometer,
    Eye,
    Sun,
    Alert,
}

/// Moisture band: `>= 70` good, `40..70` caution, below 40 critical.
pub fn moisture_tone(moisture: u8) -> Tone {
    match moisture {
        m if m >= 70 => Tone::Good,
        m if m >= 40 => Tone::Caution,
        _ => Tone::Critical,
    }
}

/// Fill angle of the circular moisture gauge, percent mapped onto 360 degrees.
pub fn gauge_degrees(moisture: u8) -> f64 {
    f64::from(moisture) * 3.6
}

pub fn status_tone(status: &PlantStatus) -> Tone {
    match status {
        PlantStatus::Good => Tone::Good,
        PlantStatus::Warning => Tone::Caution,
        PlantStatus::Error => Tone::Critical,
        PlantStatus::Other(_) => Tone::Good,
    }
}

/// Capitalized label for known statuses; unknown labels are shown as stored.
pub fn status_label(status: &PlantStatus) -> String {
    if let PlantStatus::Other(raw) = status {
        return raw.clone();
    }
    let mut chars = status.as_str().chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn difficulty_tone(difficulty: &Difficulty) -> Tone {
    match difficulty {
        Difficulty::Easy => Tone::Good,
        Difficulty::Medium => Tone::Caution,
        Difficulty::Hard => Tone::Critical,
        Difficulty::Other(_) => Tone::Neutral,
    }
}

pub fn notification_icon(kind: &NotificationKind) -> Icon {
    match kind {
        NotificationKind::Warning => Icon::Alert,
        NotificationKind::Success => Icon::Droplet,
        NotificationKind::Info => Icon::Device,
        NotificationKind::Other(_) => Icon::Bell,
    }
}

/// Tone of the notification icon; unknown kinds are neutral.
pub fn notification_tone(kind: &NotificationKind) -> Tone {
    match kind {
        NotificationKind::Warning => Tone::Caution,
        NotificationKind::Success => Tone::Good,
        NotificationKind::Info => Tone::Neutral,
        NotificationKind::Other(_) => Tone::Neutral,
    }
}

/// Decoration for a notification card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnreadMarker {
    pub accent_bar: bool,
    pub dot: bool,
}

pub fn unread_marker(read: bool) -> UnreadMarker {
    UnreadMarker {
        accent_bar: !read,
        dot: !read,
    }
}

pub fn signal_tone(signal: &SignalStrength) -> Tone {
    match signal {
        SignalStrength::Strong => Tone::Good,
        SignalStrength::Good => Tone::Caution,
        _ => Tone::Critical,
    }
}

/// Battery dot is always green; charge level is not color coded.
pub fn battery_tone(_battery: u8) -> Tone {
    Tone::Good
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moisture_bands() {
        assert_eq!(moisture_tone(75), Tone::Good);
        assert_eq!(moisture_tone(45), Tone::Caution);
        assert_eq!(moisture_tone(30), Tone::Critical);
    }

    #[test]
    fn moisture_boundaries() {
        assert_eq!(moisture_tone(100), Tone::Good);
        assert_eq!(moisture_tone(70), Tone::Good);
        assert_eq!(moisture_tone(69), Tone::Caution);
        assert_eq!(moisture_tone(40), Tone::Caution);
        assert_eq!(moisture_tone(39), Tone::Critical);
        assert_eq!(moisture_tone(0), Tone::Critical);
    }

    #[test]
    fn gauge_maps_percent_to_degrees() {
        assert_eq!(gauge_degrees(0), 0.0);
        assert!((gauge_degrees(75) - 270.0).abs() < 1e-9);
        assert!((gauge_degrees(100) - 360.0).abs() < 1e-9);
    }

    #[test]
    fn status_tones_with_fallback() {
        assert_eq!(status_tone(&PlantStatus::Good), Tone::Good);
        assert_eq!(status_tone(&PlantStatus::Warning), Tone::Caution);
        assert_eq!(status_tone(&PlantStatus::Error), Tone::Critical);
        assert_eq!(status_tone(&PlantStatus::from("thirsty")), Tone::Good);
    }

    #[test]
    fn status_labels_capitalized() {
        assert_eq!(status_label(&PlantStatus::Warning), "Warning");
        assert_eq!(status_label(&PlantStatus::Good), "Good");
        assert_eq!(status_label(&PlantStatus::from("thirsty")), "thirsty");
    }

    #[test]
    fn difficulty_badges() {
        assert_eq!(difficulty_tone(&Difficulty::Easy), Tone::Good);
        assert_eq!(difficulty_tone(&Difficulty::Medium), Tone::Caution);
        assert_eq!(difficulty_tone(&Difficulty::Hard), Tone::Critical);
        assert_eq!(difficulty_tone(&Difficulty::from("Expert".to_string())), Tone::Neutral);
    }

    #[test]
    fn notification_icons() {
        assert_eq!(notification_icon(&NotificationKind::Warning), Icon::Alert);
        assert_eq!(notification_icon(&NotificationKind::Success), Icon::Droplet);
        assert_eq!(notification_icon(&NotificationKind::Info), Icon::Device);
        assert_eq!(
            notification_icon(&NotificationKind::from("promo".to_string())),
            Icon::Bell
        );
    }

    #[test]
    fn unread_gets_bar_and_dot() {
        assert_eq!(
            unread_marker(false),
            UnreadMarker {
                accent_bar: true,
                dot: true
            }
        );
        assert_eq!(
            unread_marker(true),
            UnreadMarker {
                accent_bar: false,
                dot: false
            }
        );
    }

    #[test]
    fn signal_tones() {
        assert_eq!(signal_tone(&SignalStrength::Strong), Tone::Good);
        assert_eq!(signal_tone(&SignalStrength::Good), Tone::Caution);
        assert_eq!(signal_tone(&SignalStrength::Weak), Tone::Critical);
        assert_eq!(signal_tone(&SignalStrength::from("None".to_string())), Tone::Critical);
        assert_eq!(battery_tone(5), Tone::Good);
    }
}
