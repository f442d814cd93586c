use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::str as p_str;
use std::path::Path;
use std::process::Command;

pub fn gqlts_command_with_fake_dir() -> (Command, TempDir) {
    let mut cmd = Command::cargo_bin("gqlts").unwrap();
    let temp_dir = TempDir::new().unwrap();
    cmd.current_dir(temp_dir.path());
    (cmd, temp_dir)
}

pub fn gqlts_command_with_fake_dir_and_schema() -> (Command, TempDir) {
    let (cmd, temp_dir) = gqlts_command_with_fake_dir();
    let schema_file_copy = Path::new("tests/schema.json");
    temp_dir
        .child("schema.json")
        .write_file(schema_file_copy)
        .unwrap();
    (cmd, temp_dir)
}

/// The basic outline of a successful compile:
///  * Make a fake dir with the schema
///  * Run against the given type references
///  * Expect one compiled type per line on stdout
pub fn basic_mapping_assert(extra_args: &[&str], type_refs: &[&str], expected_output: &str) {
    let (mut cmd, _temp_dir) = gqlts_command_with_fake_dir_and_schema();
    cmd.args(extra_args).args(type_refs);
    cmd.assert()
        .success()
        .stderr(p_str::is_empty())
        .stdout(p_str::diff(expected_output.to_string()));
}
