use clap::ValueEnum;
use include_dir::{include_dir, Dir};
use serde::Deserialize;
use serde_json::from_str;

static DRILL_DIR: Dir = include_dir!("src/drills");

/// The sports the drill catalog knows about.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, strum_macros::Display)]
pub enum Sport {
    Basketball,
    Track,
    Softball,
    #[strum(to_string = "General Workout")]
    GeneralWorkout,
}

impl Sport {
    pub const ALL: [Sport; 4] = [
        Sport::Basketball,
        Sport::Track,
        Sport::Softball,
        Sport::GeneralWorkout,
    ];

    /// Case-insensitive lookup; spaces, hyphens and underscores are ignored
    /// so "general workout", "general-workout" and "GeneralWorkout" all match.
    pub fn from_name(name: &str) -> Option<Sport> {
        let normalized: String = name
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "basketball" => Some(Sport::Basketball),
            "track" => Some(Sport::Track),
            "softball" => Some(Sport::Softball),
            "generalworkout" => Some(Sport::GeneralWorkout),
            _ => None,
        }
    }

    fn file_name(&self) -> &'static str {
        match self {
            Sport::Basketball => "basketball.json",
            Sport::Track => "track.json",
            Sport::Softball => "softball.json",
            Sport::GeneralWorkout => "general_workout.json",
        }
    }

    /// The ordered drill list for this sport. Order is fixed by the embedded
    /// catalog file and stable across calls.
    pub fn drills(&self) -> Vec<DrillDefinition> {
        read_catalog_from_file(self.file_name()).drills
    }
}

/// A single named exercise with a progressive numeric target.
///
/// Loaded once from the embedded catalog; never mutated afterwards.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct DrillDefinition {
    pub name: String,
    pub base_value: f64,
    pub weekly_increment: f64,
    /// Display label for the target value, e.g. "makes" or "seconds".
    pub unit: String,
    /// Human-readable rest label, e.g. "90s" or "2m". Parsed lazily when a
    /// rest timer is started, see [`crate::timer::parse_rest_duration`].
    pub rest_duration: String,
    #[serde(default)]
    pub demo_link: Option<String>,
}

#[allow(dead_code)]
#[derive(Deserialize, Clone, Debug)]
struct SportCatalog {
    sport: String,
    drills: Vec<DrillDefinition>,
}

/// String-keyed catalog access. Unrecognized sport names fall back to an
/// empty list rather than an error.
pub fn get_drills(sport: &str) -> Vec<DrillDefinition> {
    match Sport::from_name(sport) {
        Some(s) => s.drills(),
        None => Vec::new(),
    }
}

fn read_catalog_from_file(file_name: &str) -> SportCatalog {
    let file = DRILL_DIR
        .get_file(file_name)
        .expect("Drill catalog file not found");

    let file_as_str = file
        .contents_utf8()
        .expect("Unable to interpret file as a string");

    from_str(file_as_str).expect("Unable to deserialize drill catalog json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_sport_has_eight_drills() {
        for sport in Sport::ALL {
            let drills = sport.drills();
            assert_eq!(drills.len(), 8, "{sport} should carry 8 drills");
        }
    }

    #[test]
    fn test_drill_order_is_stable() {
        for sport in Sport::ALL {
            let first = sport.drills();
            let second = sport.drills();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_basketball_anchor_drills() {
        let drills = Sport::Basketball.drills();

        let perfects = drills
            .iter()
            .find(|d| d.name == "Perfects (Form Shooting)")
            .expect("basketball catalog should include Perfects");
        assert_eq!(perfects.base_value, 10.0);
        assert_eq!(perfects.weekly_increment, 2.0);
        assert_eq!(perfects.unit, "swishes");

        let mikan = drills
            .iter()
            .find(|d| d.name == "Mikan Drill")
            .expect("basketball catalog should include the Mikan Drill");
        assert_eq!(mikan.base_value, 20.0);
        assert_eq!(mikan.weekly_increment, 4.0);
        assert_eq!(mikan.unit, "makes");
    }

    #[test]
    fn test_get_drills_known_sports() {
        assert!(!get_drills("basketball").is_empty());
        assert!(!get_drills("Track").is_empty());
        assert!(!get_drills("SOFTBALL").is_empty());
        assert!(!get_drills("general workout").is_empty());
        assert!(!get_drills("general-workout").is_empty());
    }

    #[test]
    fn test_get_drills_unknown_sport_is_empty() {
        assert!(get_drills("curling").is_empty());
        assert!(get_drills("").is_empty());
        assert!(get_drills("basket ball 2").is_empty());
    }

    #[test]
    fn test_from_name_round_trips_display() {
        for sport in Sport::ALL {
            assert_eq!(Sport::from_name(&sport.to_string()), Some(sport));
        }
    }

    #[test]
    fn test_sport_display_labels() {
        assert_eq!(Sport::Basketball.to_string(), "Basketball");
        assert_eq!(Sport::GeneralWorkout.to_string(), "General Workout");
    }

    #[test]
    fn test_drill_deserialization_without_demo_link() {
        let json_data = r#"
        {
            "name": "Test Drill",
            "base_value": 5,
            "weekly_increment": 1.5,
            "unit": "reps",
            "rest_duration": "45s"
        }
        "#;

        let drill: DrillDefinition = from_str(json_data).expect("Failed to deserialize drill");

        assert_eq!(drill.name, "Test Drill");
        assert_eq!(drill.base_value, 5.0);
        assert_eq!(drill.weekly_increment, 1.5);
        assert_eq!(drill.demo_link, None);
    }

    #[test]
    #[should_panic(expected = "Drill catalog file not found")]
    fn test_read_nonexistent_catalog_file() {
        let _result = read_catalog_from_file("cricket.json");
    }
}
