use super::*;

fn names(stops: &[StopDescriptor]) -> Vec<&str> {
    stops.iter().map(|s| s.name.as_str()).collect()
}

#[test]
fn splits_village_mountain_village() {
    let stops = parse_route("Село А - г. Б (1500, 2А) - с. В").unwrap();
    assert_eq!(stops.len(), 3);

    assert_eq!(stops[0].location_type, Some(LocationType::Settlement));
    assert_eq!(stops[0].name, "А");

    let peak = &stops[1];
    assert_eq!(peak.index, 1);
    assert_eq!(peak.name, "Б");
    assert_eq!(peak.location_type, Some(LocationType::Mountain));
    assert_eq!(peak.elevation, Some(1500.0));
    assert_eq!(peak.difficulty, Some(LocationDifficulty::SecondA));
    assert_eq!(peak.raw, "г. Б (1500, 2А)");

    assert_eq!(stops[2].location_type, Some(LocationType::Settlement));
    assert_eq!(stops[2].name, "В");
}

#[test]
fn flush_hyphen_does_not_split() {
    let stops = parse_route("Контр-скеля - фортеця").unwrap();
    assert_eq!(names(&stops), vec!["Контр-скеля", "фортеця"]);
}

#[test]
fn hyphen_with_space_on_one_side_splits() {
    assert_eq!(split_stops("a- b"), vec!["a", "b"]);
    assert_eq!(split_stops("a -b"), vec!["a", "b"]);
    assert_eq!(split_stops("a - b"), vec!["a", "b"]);
    assert_eq!(split_stops("a-b"), vec!["a-b"]);
}

#[test]
fn en_dash_and_whitespace_are_normalized() {
    let stops = parse_route("с. Кваси  \n–\tг. Петрос — с. Луги").unwrap();
    assert_eq!(names(&stops), vec!["Кваси", "Петрос", "Луги"]);
}

#[test]
fn indices_are_contiguous_after_dropping_empty_segments() {
    let stops = parse_route("- с. Кваси - - г. Петрос -").unwrap();
    let indices: Vec<u32> = stops.iter().map(|s| s.index).collect();
    assert_eq!(indices, vec![0, 1]);
    assert_eq!(names(&stops), vec!["Кваси", "Петрос"]);
}

#[test]
fn blank_route_is_an_error() {
    assert_eq!(parse_route("   \n "), Err(CoreError::EmptyRoute));
    assert_eq!(parse_route(" - - "), Err(CoreError::EmptyRoute));
}

#[test]
fn decomposed_characters_are_composed() {
    // "й" written as "и" + combining breve
    let stops = parse_route("с. Кваси - с. Ма\u{0438}\u{0306}дан").unwrap();
    assert_eq!(stops[1].name, "Майдан");
    assert_eq!(stops[1].name.chars().count(), 6);
}

#[test]
fn parenthesized_grade_only() {
    let stop = parse_stop("пер. Шпиці (1Б*)");
    assert_eq!(stop.difficulty, Some(LocationDifficulty::FirstBStar));
    assert_eq!(stop.elevation, None);
    assert_eq!(stop.location_type, Some(LocationType::MountainPass));
    assert_eq!(stop.name, "Шпиці");
}

#[test]
fn parenthesized_elevation_with_units() {
    let stop = parse_stop("г. Піп Іван (2028 м н.р.м.)");
    assert_eq!(stop.elevation, Some(2028.0));
    assert_eq!(stop.difficulty, None);
    assert_eq!(stop.name, "Піп Іван");
}

#[test]
fn bare_grade_token() {
    let stop = parse_stop("пер. Туркул 1А");
    assert_eq!(stop.difficulty, Some(LocationDifficulty::FirstA));
    assert_eq!(stop.name, "Туркул");
}

#[test]
fn bare_elevation_token() {
    let stop = parse_stop("г. Говерла 2061 м");
    assert_eq!(stop.elevation, Some(2061.0));
    assert_eq!(stop.location_type, Some(LocationType::Mountain));
    assert_eq!(stop.name, "Говерла");
}

#[test]
fn combined_rule_wins_over_bare_tokens() {
    let stop = parse_stop("г. Бребенескул (2035, н/к)");
    assert_eq!(stop.elevation, Some(2035.0));
    assert_eq!(stop.difficulty, Some(LocationDifficulty::NonCategorized));
    assert_eq!(stop.name, "Бребенескул");
}

#[test]
fn river_valley_beats_bare_river() {
    let stop = parse_stop("дол. р. Прут");
    assert_eq!(stop.location_type, Some(LocationType::Valley));
    assert_eq!(stop.name, "Прут");

    let stop = parse_stop("р. Прут");
    assert_eq!(stop.location_type, Some(LocationType::Stream));
}

#[test]
fn pass_abbreviation_beats_river() {
    let stop = parse_stop("пер. Околе");
    assert_eq!(stop.location_type, Some(LocationType::MountainPass));
    assert_eq!(stop.name, "Околе");
}

#[test]
fn filler_and_brackets_are_stripped() {
    assert_eq!(parse_stop("г. Петрос рад.").name, "Петрос");
    assert_eq!(parse_stop("г. Петрос (рад)").name, "Петрос");
    assert_eq!(parse_stop("хр. Свидовець траверс").name, "Свидовець");
    assert_eq!(parse_stop("[оз. Несамовите]").name, "Несамовите");
}

#[test]
fn no_hint_when_nothing_matches() {
    let stop = parse_stop("Заросляк");
    assert_eq!(stop.location_type, None);
    assert_eq!(stop.name, "Заросляк");
}

#[test]
fn segment_with_only_metadata_keeps_unbracketed_text() {
    let stop = parse_stop("(2А)");
    assert_eq!(stop.difficulty, Some(LocationDifficulty::SecondA));
    assert_eq!(stop.name, "2А");

    assert_eq!(parse_stop("[ 1Б* ]").name, "1Б*");
}

#[test]
fn bare_grade_before_punctuation() {
    let stop = parse_stop("пер. Шпиці 1А.");
    assert_eq!(stop.difficulty, Some(LocationDifficulty::FirstA));
    assert_eq!(stop.location_type, Some(LocationType::MountainPass));
    assert_eq!(stop.name, "Шпиці");

    let stop = parse_stop("(пер. Шпиці 1Б)");
    assert_eq!(stop.difficulty, Some(LocationDifficulty::FirstB));
    assert_eq!(stop.name, "Шпиці");
}

#[test]
fn grade_glued_to_a_word_is_not_a_grade() {
    let stop = parse_stop("г. Х 2Ап");
    assert_eq!(stop.difficulty, None);
    assert_eq!(stop.name, "Х 2Ап");
}

#[test]
fn decimal_comma_elevation() {
    let stop = parse_stop("вис. 1234,5");
    assert_eq!(stop.elevation, Some(1234.5));
    assert_eq!(stop.location_type, Some(LocationType::Height));
}
