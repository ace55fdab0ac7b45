//! End-to-end tests driving the interactive session through stdin.

mod common;

use common::TestFixture;
use predicates::prelude::*;

// =============================================================================
// Happy Path
// =============================================================================

#[test]
fn chicago_march_friday_session() {
    let fixture = TestFixture::with_trip_data();

    bikeshare!()
        .current_dir(fixture.path())
        .write_stdin("chicago\nmarch\nfriday\nno\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello! Let's explore some US bikeshare data!"))
        .stdout(predicate::str::contains("Most Frequent Month: March"))
        .stdout(predicate::str::contains("Most Frequent Day of Week: Friday"))
        .stdout(predicate::str::contains(
            "Most Frequent Combined Station: Canal St & Adams St&Clark St & Lake St",
        ))
        .stdout(predicate::str::contains("Total Travel Time: 30 minutes, 0 seconds"))
        .stdout(predicate::str::contains("Average Travel Time: 15 minutes, 0 seconds"))
        .stdout(predicate::str::contains("The Most Common Year of Birth: 1985"))
        .stdout(predicate::str::contains("-".repeat(40)))
        .stdout(predicate::str::contains("Would you like to restart? Enter yes or no."));
}

#[test]
fn washington_has_no_demographics() {
    let fixture = TestFixture::with_trip_data();

    bikeshare!()
        .current_dir(fixture.path())
        .write_stdin("washington\nall\nall\nno\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Subscriber: 2"))
        .stdout(predicate::str::contains("Customer: 1"))
        .stdout(predicate::str::contains("Counts of gender").not())
        .stdout(predicate::str::contains("Year of Birth").not());
}

#[test]
fn invalid_answers_reprompt() {
    let fixture = TestFixture::with_trip_data();

    bikeshare!()
        .current_dir(fixture.path())
        .write_stdin("boston\nChicago\njuly\nALL\nsomeday\nMonday\nno\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown City!"))
        .stdout(predicate::str::contains("Unknown Choice!"))
        .stdout(predicate::str::contains("Most Frequent Day of Week: Monday"));
}

#[test]
fn restart_runs_another_iteration() {
    let fixture = TestFixture::with_trip_data();

    let output = bikeshare!()
        .current_dir(fixture.path())
        .write_stdin("chicago\nall\nall\nno\nyes\nwashington\njanuary\nall\nno\nno\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("Calculating User Stats...").count(), 2);
}

// =============================================================================
// Raw Sample Viewer
// =============================================================================

#[test]
fn sample_viewer_shows_rows_then_runs_out() {
    let fixture = TestFixture::with_trip_data();

    let output = bikeshare!()
        .current_dir(fixture.path())
        .args(["--sequential"])
        .write_stdin("washington\nall\nall\nyes\nyes\nno\nno\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("Row ").count(), 3);
    assert!(stdout.contains("there is no unseen data left"));
}

#[test]
fn sample_size_flag_limits_batch() {
    let fixture = TestFixture::with_trip_data();

    let output = bikeshare!()
        .current_dir(fixture.path())
        .args(["--sample-size", "2", "--seed", "3"])
        .write_stdin("chicago\nall\nall\nyes\nno\nno\n")
        .output()
        .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("Row ").count(), 2);
}

#[test]
fn unknown_sample_answer_is_reported() {
    let fixture = TestFixture::with_trip_data();

    bikeshare!()
        .current_dir(fixture.path())
        .write_stdin("washington\nall\nall\nperhaps\nno\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown Entry!"));
}

// =============================================================================
// Failure Handling
// =============================================================================

#[test]
fn empty_selection_reports_no_data() {
    let fixture = TestFixture::with_trip_data();

    bikeshare!()
        .current_dir(fixture.path())
        .write_stdin("washington\nfebruary\nall\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No data for this selection."))
        .stdout(predicate::str::contains("Would you like to see sample of raw data?").not());
}

#[test]
fn missing_data_file_is_reported_and_session_continues() {
    let fixture = TestFixture::with_trip_data();

    bikeshare!()
        .current_dir(fixture.path())
        .write_stdin("new york\nall\nall\nno\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("✖ DataSource:"))
        .stderr(predicate::str::contains("new_york_city.csv"))
        .stdout(predicate::str::contains("Would you like to restart?"));
}

#[test]
fn closed_input_exits_with_code_1() {
    let fixture = TestFixture::with_trip_data();

    bikeshare!()
        .current_dir(fixture.path())
        .write_stdin("chicago\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("✖ Input:"));
}

#[test]
fn data_dir_flag_points_at_files() {
    let fixture = TestFixture::new();
    fixture.create_file("trips/washington.csv", common::WASHINGTON_CSV);

    bikeshare!()
        .current_dir(fixture.path())
        .args(["--data-dir", "trips"])
        .write_stdin("washington\nall\nall\nno\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Most Frequent Start Station: Union Station"));
}

#[test]
fn json_format_emits_report_object() {
    let fixture = TestFixture::with_trip_data();

    bikeshare!()
        .current_dir(fixture.path())
        .args(["--format", "json"])
        .write_stdin("washington\nall\nall\nno\nno\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"city\": \"washington\""))
        .stdout(predicate::str::contains("\"trip_duration\""));
}

#[test]
fn verbose_logs_go_to_stderr() {
    let fixture = TestFixture::with_trip_data();

    bikeshare!()
        .current_dir(fixture.path())
        .args(["-vv"])
        .write_stdin("washington\nall\nall\nno\nno\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("loading trip data"))
        .stdout(predicate::str::contains("loading trip data").not());
}
