// Integration tests for the single-entity query surfaces, aggregates,
// and named queries, asserted against the canonical fixture roster

use rusqlite::Connection;
use tutelage_store::queries;

fn setup_fixture_db() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    tutelage_store::migrations::apply_migrations(&mut conn).unwrap();

    conn.execute_batch(
        r#"
        INSERT INTO guides (id, staff_id, name, salary) VALUES
            (1, 'GD200331', 'Homer Simpson', 1200),
            (2, 'GD200332', 'Marge Simpson', 1600);

        INSERT INTO students (id, enrollment_id, name, guide_id) VALUES
            (1, 'ST109883', 'Bart Simpson', 1),
            (2, 'ST109884', 'Lisa Simpson', 2),
            (3, '1299384FFG', 'Sheldon Cooper', NULL);
        "#,
    )
    .unwrap();

    conn
}

#[test]
fn test_all_guides_returns_every_row() {
    let conn = setup_fixture_db();
    let guides = queries::all_guides(&conn).unwrap();

    assert_eq!(guides.len(), 2);
    assert_eq!(guides[0].name, "Homer Simpson");
    assert_eq!(guides[1].name, "Marge Simpson");
}

#[test]
fn test_guide_names_projection() {
    let conn = setup_fixture_db();
    let names = queries::guide_names(&conn).unwrap();
    assert_eq!(names, vec!["Homer Simpson", "Marge Simpson"]);
}

#[test]
fn test_salary_filter_returns_exactly_one_match() {
    let conn = setup_fixture_db();
    let guides = queries::guides_with_salary(&conn, 1200).unwrap();

    assert_eq!(guides.len(), 1);
    assert_eq!(guides[0].name, "Homer Simpson");

    // No guide earns 9999
    assert!(queries::guides_with_salary(&conn, 9999).unwrap().is_empty());
}

#[test]
fn test_salary_report_rows() {
    let conn = setup_fixture_db();
    let report = queries::salary_report(&conn).unwrap();

    assert_eq!(report.len(), 2);
    assert_eq!(report[0].name, "Homer Simpson");
    assert_eq!(report[0].salary, 1200);
    assert_eq!(report[1].name, "Marge Simpson");
    assert_eq!(report[1].salary, 1600);
}

#[test]
fn test_guide_by_name_single_result() {
    let conn = setup_fixture_db();

    let homer = queries::guide_by_name(&conn, "Homer Simpson")
        .unwrap()
        .expect("Homer should be found");
    assert_eq!(homer.id, 1);
    assert_eq!(homer.staff_id, "GD200331");

    assert!(queries::guide_by_name(&conn, "Moe Szyslak")
        .unwrap()
        .is_none());
}

#[test]
fn test_guide_by_name_is_injection_safe() {
    let conn = setup_fixture_db();

    // The classic payload arrives as data, not as SQL
    let result = queries::guide_by_name(&conn, "x' OR '1'='1").unwrap();
    assert!(result.is_none());
    assert_eq!(queries::count_guides(&conn).unwrap(), 2);
}

#[test]
fn test_wildcard_prefix_match() {
    let conn = setup_fixture_db();

    let guides = queries::guides_named_like(&conn, "M").unwrap();
    assert_eq!(guides.len(), 1);
    assert_eq!(guides[0].name, "Marge Simpson");

    assert!(queries::guides_named_like(&conn, "Z").unwrap().is_empty());
}

#[test]
fn test_scan_guides_matches_projected_query() {
    let conn = setup_fixture_db();
    assert_eq!(
        queries::scan_guides(&conn).unwrap(),
        queries::all_guides(&conn).unwrap()
    );
}

#[test]
fn test_count_guides() {
    let conn = setup_fixture_db();
    assert_eq!(queries::count_guides(&conn).unwrap(), 2);
}

#[test]
fn test_max_salary() {
    let conn = setup_fixture_db();
    assert_eq!(queries::max_salary(&conn).unwrap(), Some(1600));
}

#[test]
fn test_named_query_find_guides_by_name() {
    let conn = setup_fixture_db();

    let guides = queries::named::find_guides_by_name(&conn, "Homer Simpson").unwrap();
    assert_eq!(guides.len(), 1);
    assert_eq!(guides[0].staff_id, "GD200331");

    assert!(queries::named::find_guides_by_name(&conn, "Nobody")
        .unwrap()
        .is_empty());
}

#[test]
fn test_named_query_find_students_by_guide() {
    let conn = setup_fixture_db();

    let students = queries::named::find_students_by_guide(&conn, "GD200332").unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].name, "Lisa Simpson");
}

#[test]
fn test_unknown_named_query_is_not_found() {
    let err = queries::named::get("find_by_hair_color").unwrap_err();
    assert_eq!(err.code(), "ERR_NOT_FOUND");
}
