use std::path::PathBuf;

use mobility_ai::guidance::culture::CultureGuide;

fn guide() -> CultureGuide {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/culture_data.json");
    CultureGuide::from_path(path).expect("bundled culture data loads")
}

#[test]
fn bundled_dataset_covers_the_major_destinations() {
    let guide = guide();
    let countries = guide.available_countries();

    for expected in ["United States", "United Kingdom", "Germany", "Japan", "India"] {
        assert!(countries.contains(&expected), "{expected} missing");
    }
}

#[test]
fn japan_briefing_is_fully_populated() {
    let guide = guide();

    let workplace = guide.workplace_culture("Japan").expect("workplace data");
    assert_eq!(
        workplace.get("work_style").map(String::as_str),
        Some("Group-oriented, consensus-based, detail-focused")
    );

    let style = guide.communication_style("Japan").expect("style data");
    assert!(style.contains_key("directness"));

    assert!(!guide.tips("Japan").is_empty());
    assert_eq!(guide.time_zone("Japan"), Some("JST (UTC+9), no daylight saving"));
    assert!(guide.working_hours("Japan").is_some());
    assert!(!guide.holidays("Japan").is_empty());
}

#[test]
fn unknown_country_degrades_to_absent_everywhere() {
    let guide = guide();

    assert!(guide.country_profile("Atlantis").is_none());
    assert!(guide.communication_style("Atlantis").is_none());
    assert!(guide.tips("Atlantis").is_empty());
    assert!(guide.working_hours("Atlantis").is_none());
}

#[test]
fn comparison_works_across_known_and_unknown_countries() {
    let guide = guide();

    let comparison = guide.compare_communication_styles("United States", "Japan");
    let us_style = comparison.first.style.expect("us style");
    let jp_style = comparison.second.style.expect("jp style");
    assert_ne!(us_style.get("directness"), jp_style.get("directness"));

    let half_known = guide.compare_communication_styles("Japan", "Atlantis");
    assert!(half_known.first.style.is_some());
    assert!(half_known.second.style.is_none());
}

#[test]
fn general_tips_apply_everywhere() {
    let guide = guide();
    let tips = guide.general_tips();

    assert!(!tips.email_etiquette.is_empty());
    assert!(!tips.virtual_meeting_tips.is_empty());
    assert!(!tips.cultural_adaptation.is_empty());
}
