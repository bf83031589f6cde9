use chrono::NaiveDate;
use thingsday_core::{parse_snapshot, ListId, FIELD_DELIMITER};

fn join_fields(fields: &[&str]) -> String {
    fields.join(FIELD_DELIMITER)
}

#[test]
fn parses_one_record_against_the_header_row() {
    let input = format!(
        "{}\n{}\n",
        join_fields(&["id", "name", "listID", "tagNames"]),
        join_fields(&["1", "Buy milk", "TMTodayListSource", "KIT, P2"])
    );

    let todos = parse_snapshot(&input);

    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].id, "1");
    assert_eq!(todos[0].name, "Buy milk");
    assert_eq!(todos[0].list, ListId::Today);
    assert_eq!(todos[0].list.source_id(), "TMTodayListSource");
    assert_eq!(todos[0].tags, vec!["KIT".to_string(), "P2".to_string()]);
    assert_eq!(todos[0].completion_date, None);
}

#[test]
fn blank_lines_never_change_the_record_sequence() {
    let header = join_fields(&["id", "name", "listID", "tagNames"]);
    let row_a = join_fields(&["1", "First", "TMTodayListSource", ""]);
    let row_b = join_fields(&["2", "Second", "TMLogbookListSource", "P1"]);

    let compact = format!("{header}\n{row_a}\n{row_b}");
    let padded = format!("\n\n{header}\n\n  \n{row_a}\n\n{row_b}\n\n\n");

    assert_eq!(parse_snapshot(&compact), parse_snapshot(&padded));
}

#[test]
fn short_rows_leave_trailing_fields_absent() {
    let input = format!(
        "{}\n{}",
        join_fields(&["id", "name", "listID", "tagNames", "completionDate"]),
        join_fields(&["7", "Ragged"])
    );

    let todos = parse_snapshot(&input);

    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].id, "7");
    assert_eq!(todos[0].name, "Ragged");
    assert_eq!(todos[0].list, ListId::Other(String::new()));
    assert!(todos[0].tags.is_empty());
    assert_eq!(todos[0].completion_date, None);
}

#[test]
fn duplicate_header_names_take_the_later_column() {
    let input = format!(
        "{}\n{}",
        join_fields(&["id", "name", "name"]),
        join_fields(&["1", "first", "second"])
    );

    let todos = parse_snapshot(&input);

    assert_eq!(todos[0].name, "second");
}

#[test]
fn tag_field_is_comma_split_trimmed_and_empties_dropped() {
    let input = format!(
        "{}\n{}",
        join_fields(&["id", "tagNames"]),
        join_fields(&["1", " KIT ,, P2 ,  "])
    );

    let todos = parse_snapshot(&input);

    assert_eq!(todos[0].tags, vec!["KIT".to_string(), "P2".to_string()]);
}

#[test]
fn completion_date_parses_iso_forms_and_recovers_from_garbage() {
    let header = join_fields(&["id", "completionDate"]);
    let rows = [
        join_fields(&["1", "2026-08-20T09:30:00"]),
        join_fields(&["2", "2026-08-20"]),
        join_fields(&["3", "not a date"]),
        join_fields(&["4", "2026-08-20T09:30:00+02:00"]),
    ];
    let input = format!("{header}\n{}", rows.join("\n"));

    let todos = parse_snapshot(&input);

    let expected_datetime = NaiveDate::from_ymd_opt(2026, 8, 20)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap();
    let expected_midnight = NaiveDate::from_ymd_opt(2026, 8, 20)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    assert_eq!(todos[0].completion_date, Some(expected_datetime));
    assert_eq!(todos[1].completion_date, Some(expected_midnight));
    // The bad timestamp recovers to None without aborting the later rows.
    assert_eq!(todos[2].completion_date, None);
    assert_eq!(todos[3].completion_date, Some(expected_datetime));
}

#[test]
fn input_without_data_yields_no_records() {
    assert!(parse_snapshot("").is_empty());
    assert!(parse_snapshot("\n  \n\n").is_empty());
    // A lone header row produces no records either.
    assert!(parse_snapshot(&join_fields(&["id", "name"])).is_empty());
}

#[test]
fn records_serialize_with_external_field_names() {
    let input = format!(
        "{}\n{}",
        join_fields(&["id", "name", "listID", "tagNames", "completionDate"]),
        join_fields(&["9", "Done thing", "TMLogbookListSource", "P1", "2026-08-20T09:30:00"])
    );

    let todos = parse_snapshot(&input);
    let json = serde_json::to_value(&todos[0]).unwrap();

    assert_eq!(json["id"], "9");
    assert_eq!(json["name"], "Done thing");
    assert_eq!(json["listID"], "TMLogbookListSource");
    assert_eq!(json["tags"][0], "P1");
    assert_eq!(json["completionDate"], "2026-08-20T09:30:00");
}
