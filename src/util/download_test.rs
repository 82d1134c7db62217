use super::*;

#[test]
fn file_name_replaces_spaces_with_underscores() {
    assert_eq!(export_file_name("lost cities"), "lost_cities_kit.txt");
}

#[test]
fn file_name_drops_unsafe_characters() {
    assert_eq!(export_file_name("why? how! 100%"), "why_how_100_kit.txt");
}

#[test]
fn file_name_truncates_long_topics() {
    let long = "a".repeat(64);
    assert_eq!(export_file_name(&long), format!("{}_kit.txt", "a".repeat(30)));
}

#[test]
fn file_name_falls_back_when_nothing_survives() {
    assert_eq!(export_file_name("???"), "kit.txt");
    assert_eq!(export_file_name(""), "kit.txt");
}

#[test]
fn file_name_trims_edge_whitespace_before_joining() {
    assert_eq!(export_file_name("  deep sea  "), "deep_sea_kit.txt");
}
