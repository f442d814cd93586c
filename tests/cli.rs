use crate::helpers::{gqlts_command_with_fake_dir, gqlts_command_with_fake_dir_and_schema};
use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::{contains, is_empty};

#[test]
fn run_with_no_type_references() {
    let (mut cmd, _temp_dir) = gqlts_command_with_fake_dir_and_schema();
    cmd.assert().success().stdout(is_empty());
}

#[test]
fn run_without_schema_file() {
    let (mut cmd, _temp_dir) = gqlts_command_with_fake_dir();
    cmd.arg("String!");
    cmd.assert()
        .failure()
        .stderr(is_empty())
        .stdout(contains("error: could not read `schema.json`:"));
}

#[test]
fn run_with_invalid_schema_json_syntax() {
    let (mut cmd, temp_dir) = gqlts_command_with_fake_dir();
    temp_dir
        .child("schema.json")
        .write_str("{ \"notvalidJs: true ")
        .unwrap();
    cmd.arg("String!");
    cmd.assert()
        .failure()
        .stdout(contains("error: malformed schema: JSON parse error:"));
}

#[test]
fn run_with_wrong_shape_schema_json() {
    let (mut cmd, temp_dir) = gqlts_command_with_fake_dir();
    temp_dir
        .child("schema.json")
        .write_str("{ \"unexpected\": 3 }")
        .unwrap();
    cmd.arg("String!");
    cmd.assert()
        .failure()
        .stdout(contains("error: malformed schema: JSON parse error: missing field `data`"));
}

#[test]
fn run_with_unknown_type_name() {
    let (mut cmd, _temp_dir) = gqlts_command_with_fake_dir_and_schema();
    cmd.arg("Episod!");
    cmd.assert()
        .failure()
        .stdout(contains("error: unknown type `Episod`").and(contains("Did you mean `Episode`")));
}

#[test]
fn run_with_unparseable_type_reference() {
    let (mut cmd, _temp_dir) = gqlts_command_with_fake_dir_and_schema();
    cmd.arg("[User");
    cmd.assert()
        .failure()
        .stdout(contains("error: could not parse type reference `[User`"));
}

#[test]
fn run_still_compiles_valid_references_before_failing() {
    let (mut cmd, _temp_dir) = gqlts_command_with_fake_dir_and_schema();
    cmd.arg("String!").arg("Episod!");
    cmd.assert()
        .failure()
        .stdout(contains("string\n").and(contains("error: unknown type `Episod`")));
}

#[test]
fn run_with_broken_config_file() {
    let (mut cmd, temp_dir) = gqlts_command_with_fake_dir_and_schema();
    let config_file = temp_dir.child(".gqltsrc.json");
    config_file.write_str("{ \"notValidJson: true }").unwrap();
    cmd.arg("-c").arg(config_file.path()).arg("String!");
    cmd.assert()
        .failure()
        .stdout(contains("program error: error in config file").and(contains(".gqltsrc.json`")));
}

#[test]
fn run_with_missing_explicit_config_file() {
    let (mut cmd, _temp_dir) = gqlts_command_with_fake_dir_and_schema();
    cmd.arg("-c").arg("not_a_real_config.json").arg("String!");
    cmd.assert()
        .failure()
        .stdout(contains("program error: error in config file `not_a_real_config.json`"));
}

#[test]
fn run_with_default_config_file() {
    let (mut cmd, temp_dir) = gqlts_command_with_fake_dir_and_schema();
    temp_dir
        .child(".gqltsrc.json")
        .write_str("{ \"tsInterfacePrefix\": \"I\" }")
        .unwrap();
    cmd.arg("User!");
    cmd.assert()
        .success()
        .stdout(predicates::str::diff("IJUser\n"));
}

#[test]
fn run_with_config_file_scalar_passthrough() {
    let (mut cmd, temp_dir) = gqlts_command_with_fake_dir_and_schema();
    temp_dir
        .child(".gqltsrc.json")
        .write_str("{ \"passthroughCustomScalars\": true, \"customScalarsPrefix\": \"GQL\" }")
        .unwrap();
    cmd.arg("Money!");
    cmd.assert()
        .success()
        .stdout(predicates::str::diff("GQLMoney\n"));
}

#[test]
fn run_with_config_file_schema_path_and_cli_override() {
    let (mut cmd, temp_dir) = gqlts_command_with_fake_dir_and_schema();
    temp_dir
        .child(".gqltsrc.json")
        .write_str("{ \"schemaFile\": \"not_default_schema.json\" }")
        .unwrap();
    // The config file points at a missing schema, but the CLI flag wins.
    cmd.arg("-s").arg("schema.json").arg("String!");
    cmd.assert()
        .success()
        .stdout(predicates::str::diff("string\n"));
}

#[test]
fn run_with_config_file_missing_schema() {
    let (mut cmd, temp_dir) = gqlts_command_with_fake_dir_and_schema();
    temp_dir
        .child(".gqltsrc.json")
        .write_str("{ \"schemaFile\": \"not_default_schema.json\" }")
        .unwrap();
    cmd.arg("String!");
    cmd.assert()
        .failure()
        .stdout(contains("error: could not read `not_default_schema.json`:"));
}
