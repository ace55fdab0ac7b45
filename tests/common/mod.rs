#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the bikeshare binary.
///
/// Runs with `NO_COLOR` set and the user config directory pointed into
/// nowhere, so a developer's own config never leaks into a test.
#[macro_export]
macro_rules! bikeshare {
    () => {{
        let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("bikeshare"));
        cmd.env("NO_COLOR", "1")
            .env("XDG_CONFIG_HOME", "/nonexistent-bikeshare-config")
            .env_remove("RUST_LOG");
        cmd
    }};
}

pub const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1423854,2017-06-23 15:09:32,2017-06-23 15:14:53,321,Wood St & Hubbard St,Damen Ave & Chicago Ave,Subscriber,Male,1992.0
955915,2017-03-03 08:10:00,2017-03-03 08:30:00,1200,Canal St & Adams St,Clark St & Lake St,Subscriber,Female,1985.0
9031,2017-03-03 18:00:00,2017-03-03 18:10:00,600,Canal St & Adams St,Clark St & Lake St,Customer,,
304487,2017-03-06 07:00:00,2017-03-06 07:15:00,900,Clark St & Lake St,Canal St & Adams St,Subscriber,Male,1975.0
1473887,2017-01-02 08:00:00,2017-01-02 08:20:00,1200,Clark St & Lake St,Wood St & Hubbard St,Subscriber,Female,1992.0
";

pub const WASHINGTON_CSV: &str = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
2017-01-06 07:00:00,2017-01-06 07:10:00,600,Union Station,Eastern Market,Subscriber
2017-01-02 12:00:00,2017-01-02 12:30:00,1800,Eastern Market,Union Station,Customer
2017-06-23 09:00:00,2017-06-23 09:05:00,300,Union Station,Eastern Market,Subscriber
";

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// A fixture holding the Chicago and Washington trip files.
    pub fn with_trip_data() -> Self {
        let fixture = Self::new();
        fixture.create_file("chicago.csv", CHICAGO_CSV);
        fixture.create_file("washington.csv", WASHINGTON_CSV);
        fixture
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a `.bikeshare.toml` in the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".bikeshare.toml", content);
    }
}
