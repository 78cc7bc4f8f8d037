// End-to-end pass over the whole catalog: every sport's drill list must be
// renderable (targets computable, rest labels parseable) for a spread of
// training weeks.

use reps::catalog::{get_drills, Sport};
use reps::progression::{compute_target, format_target};
use reps::session::{Readiness, SessionContext, SessionView, Setting};
use reps::timer::parse_rest_duration;

#[test]
fn every_sport_is_fully_renderable() {
    for sport in Sport::ALL {
        let drills = sport.drills();
        assert_eq!(drills.len(), 8, "{sport}");

        for week in [1, 2, 3, 8, 52] {
            for drill in &drills {
                let target = compute_target(drill.base_value, drill.weekly_increment, week);
                assert!(target >= drill.base_value, "{sport} / {}", drill.name);
                assert!(!format_target(target).is_empty());
            }
        }

        for drill in &drills {
            let seconds = parse_rest_duration(&drill.rest_duration)
                .unwrap_or_else(|e| panic!("{sport} / {}: {e}", drill.name));
            assert!(seconds > 0, "{sport} / {}", drill.name);
        }
    }
}

#[test]
fn week_one_targets_equal_base_everywhere() {
    for sport in Sport::ALL {
        for drill in sport.drills() {
            let target = compute_target(drill.base_value, drill.weekly_increment, 1);
            assert_eq!(target, drill.base_value, "{sport} / {}", drill.name);
        }
    }
}

#[test]
fn basketball_week_three_worked_example() {
    let view = SessionView::new(SessionContext {
        sport: Sport::Basketball,
        setting: Setting::Indoor,
        week: 3,
        session: 1,
        readiness: Readiness::default(),
    });

    let perfects = view
        .drills
        .iter()
        .position(|d| d.name == "Perfects (Form Shooting)")
        .unwrap();
    let mikan = view
        .drills
        .iter()
        .position(|d| d.name == "Mikan Drill")
        .unwrap();

    assert_eq!(view.target_for(perfects), Some(14.0));
    assert_eq!(view.target_for(mikan), Some(28.0));
}

#[test]
fn unknown_sport_name_renders_an_empty_view() {
    assert!(get_drills("underwater basket weaving").is_empty());
    assert!(get_drills("").is_empty());
}

#[test]
fn string_and_enum_catalog_access_agree() {
    for sport in Sport::ALL {
        assert_eq!(get_drills(&sport.to_string()), sport.drills());
    }
}
