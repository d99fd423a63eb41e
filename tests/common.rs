#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use empmanager::models::{Employee, EmployeeDraft, Gender, State};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Minimal PNG: signature + IHDR chunk header is enough for MIME sniffing.
pub const PNG_BYTES: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x00, 0x00, 0x00, 0x00,
];

pub const IMAGE_URI: &str = "data:image/png;base64,iVBORw0KGgo=";

/// Binary under test, with HOME pointed at an empty directory so a real
/// user configuration never leaks into the tests.
pub fn emp() -> Command {
    let mut home = env::temp_dir();
    home.push("empmanager_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("empmanager");
    cmd.env("HOME", &home).env("APPDATA", &home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_empmanager.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a small PNG to the temp dir and return its path
pub fn sample_image(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_profile.png", name));
    fs::write(&path, PNG_BYTES).expect("write sample image");
    path.to_string_lossy().to_string()
}

/// Init DB (seeded roster) and open a session
pub fn init_and_login(db_path: &str) {
    emp()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    emp()
        .args([
            "--db", db_path, "login", "--username", "admin", "--password", "admin123",
        ])
        .assert()
        .success();
}

pub fn draft(id: &str, name: &str, gender: &str, active: bool) -> EmployeeDraft {
    EmployeeDraft {
        id: id.to_string(),
        name: name.to_string(),
        gender: gender.to_string(),
        dob: "1990-01-15".to_string(),
        state: "Kerala".to_string(),
        is_active: active,
        image: IMAGE_URI.to_string(),
    }
}

pub fn employee(id: &str, name: &str, gender: Gender, active: bool) -> Employee {
    Employee {
        id: id.to_string(),
        name: name.to_string(),
        gender,
        dob: chrono::NaiveDate::from_ymd_opt(1990, 1, 15).expect("valid date"),
        state: State::Kerala,
        is_active: active,
        image: IMAGE_URI.to_string(),
    }
}

/// JSON payload for the `employees` slot
pub fn roster_json(list: &[Employee]) -> String {
    serde_json::to_string(list).expect("serialize roster")
}
