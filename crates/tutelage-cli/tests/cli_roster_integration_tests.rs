//! CLI integration tests
//!
//! These tests drive the compiled binary end to end: seed a roster into a
//! temporary database, enroll students, and run the query tour.

use rusqlite::Connection;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

const FIXTURE_SEED: &str = r#"
schema_version: 0
roster:
  name: simpsons-demo
guides:
  - staff_id: GD200331
    name: Homer Simpson
    salary: 1200
    students:
      - enrollment_id: ST109883
        name: Bart Simpson
  - staff_id: GD200332
    name: Marge Simpson
    salary: 1600
    students:
      - enrollment_id: ST109884
        name: Lisa Simpson
"#;

fn setup_seeded_db(temp_dir: &TempDir) -> PathBuf {
    let db_path = temp_dir.path().join("roster.db");
    let seed_path = temp_dir.path().join("simpsons.yaml");
    fs::write(&seed_path, FIXTURE_SEED).unwrap();

    let cli_bin = env!("CARGO_BIN_EXE_tutelage-cli");
    let output = Command::new(cli_bin)
        .current_dir(temp_dir.path())
        .args([
            "seed",
            "import",
            seed_path.to_str().unwrap(),
            "--db",
            db_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute CLI");

    assert!(
        output.status.success(),
        "Seed import should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    db_path
}

#[test]
fn test_cli_seed_import_populates_roster() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = setup_seeded_db(&temp_dir);

    let conn = Connection::open(&db_path).unwrap();
    let guide_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM guides", [], |row| row.get(0))
        .unwrap();
    assert_eq!(guide_count, 2, "Expected two guides in database");
}

#[test]
fn test_cli_enroll_without_guide_leaves_null_reference() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = setup_seeded_db(&temp_dir);

    let cli_bin = env!("CARGO_BIN_EXE_tutelage-cli");
    let output = Command::new(cli_bin)
        .current_dir(temp_dir.path())
        .args([
            "enroll",
            "--enrollment-id",
            "1299384FFG",
            "--name",
            "Sheldon Cooper",
            "--db",
            db_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute CLI");

    assert!(
        output.status.success(),
        "Enroll should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("unassigned"), "Output should confirm unassigned enrollment");

    let conn = Connection::open(&db_path).unwrap();
    let guide_id: Option<i64> = conn
        .query_row(
            "SELECT guide_id FROM students WHERE enrollment_id = '1299384FFG'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(guide_id, None, "Unassigned student must carry a NULL guide reference");
}

#[test]
fn test_cli_enroll_with_guide_resolves_staff_id() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = setup_seeded_db(&temp_dir);

    let cli_bin = env!("CARGO_BIN_EXE_tutelage-cli");
    let output = Command::new(cli_bin)
        .current_dir(temp_dir.path())
        .args([
            "enroll",
            "--enrollment-id",
            "ST109885",
            "--name",
            "Milhouse Van Houten",
            "--staff-id",
            "GD200331",
            "--db",
            db_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute CLI");

    assert!(
        output.status.success(),
        "Enroll with guide should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let conn = Connection::open(&db_path).unwrap();
    let (guide_id, staff_id): (Option<i64>, String) = conn
        .query_row(
            "SELECT s.guide_id, g.staff_id
             FROM students s INNER JOIN guides g ON s.guide_id = g.id
             WHERE s.enrollment_id = 'ST109885'",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert!(guide_id.is_some());
    assert_eq!(staff_id, "GD200331");
}

#[test]
fn test_cli_enroll_with_unknown_guide_fails() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = setup_seeded_db(&temp_dir);

    let cli_bin = env!("CARGO_BIN_EXE_tutelage-cli");
    let output = Command::new(cli_bin)
        .current_dir(temp_dir.path())
        .args([
            "enroll",
            "--enrollment-id",
            "ST109886",
            "--name",
            "Nelson Muntz",
            "--staff-id",
            "GD999999",
            "--db",
            db_path.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to execute CLI");

    assert!(!output.status.success(), "Unknown staff id should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("ERR_NOT_FOUND"),
        "Stderr should carry the stable error code, got: {}",
        stderr
    );

    // And: the transaction rolled back, no student row was written
    let conn = Connection::open(&db_path).unwrap();
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM students WHERE enrollment_id = 'ST109886'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn test_cli_tour_prints_every_section() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = setup_seeded_db(&temp_dir);

    // One unassigned student so the outer-join sections differ
    let conn = Connection::open(&db_path).unwrap();
    conn.execute(
        "INSERT INTO students (enrollment_id, name, guide_id) VALUES ('1299384FFG', 'Sheldon Cooper', NULL)",
        [],
    )
    .unwrap();
    drop(conn);

    let cli_bin = env!("CARGO_BIN_EXE_tutelage-cli");
    let output = Command::new(cli_bin)
        .current_dir(temp_dir.path())
        .args(["tour", "--db", db_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute CLI");

    assert!(
        output.status.success(),
        "Tour should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    for section in [
        "-- all guides --",
        "-- guide names --",
        "-- guides with salary 1200 --",
        "-- salary report --",
        "-- guide by name 'Homer Simpson' --",
        "-- guides named like 'M%' --",
        "-- scan (select *) --",
        "-- named query: find_guides_by_name --",
        "-- count --",
        "-- max salary --",
        "-- inner join: students with a guide --",
        "-- left outer join: every student --",
        "-- right outer join: every guide --",
        "-- eager join: guides with their students --",
    ] {
        assert!(stdout.contains(section), "Missing tour section: {}", section);
    }

    assert!(stdout.contains("guides: 2"));
    assert!(stdout.contains("max: 1600"));

    // The unassigned student shows up in the left join section only; the
    // simplest observable check is that his row renders as unassigned
    assert!(stdout.contains("Sheldon Cooper, unassigned"));
}

#[test]
fn test_cli_tour_on_empty_roster_suggests_seeding() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("empty.db");

    let cli_bin = env!("CARGO_BIN_EXE_tutelage-cli");
    let output = Command::new(cli_bin)
        .current_dir(temp_dir.path())
        .args(["tour", "--db", db_path.to_str().unwrap()])
        .output()
        .expect("Failed to execute CLI");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("roster is empty"));
}
