//! Integration tests for the `plugfile` binary

use assert_cmd::Command;
use plugfile_test_support::{plugin_cmake, TestWorkspace, BUILD_FILE};
use predicates::prelude::*;
use pretty_assertions::assert_eq;

fn plugfile_cmd(workspace: &TestWorkspace) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_plugfile"));
    cmd.current_dir(workspace.path())
        .env_remove("RUST_LOG")
        .env_remove("LOG_FORMAT");
    cmd
}

/// Project declared the way JUCE's CMake template writes it
fn my_synth_workspace() -> TestWorkspace {
    let workspace = TestWorkspace::new();
    workspace.create_file(BUILD_FILE, &plugin_cmake("project( MySynth VERSION 1.0)"));
    workspace.create_directory("plugin/source");
    workspace
}

#[test]
fn test_creates_and_registers_header_and_source() {
    let workspace = my_synth_workspace();
    let before = workspace.build_file_lines();

    plugfile_cmd(&workspace)
        .arg("dsp/Filter")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enclosing folder is:"))
        .stdout(predicate::str::contains("Creating header file: dsp/Filter.h"))
        .stdout(predicate::str::contains("Creating source file: Filter.cpp"))
        .stdout(predicate::str::contains("File creation finished"));

    assert!(workspace.dir_exists("plugin/include/MySynth/dsp"));
    assert_eq!(
        workspace.read_file("plugin/include/MySynth/dsp/Filter.h"),
        "# pragma once"
    );
    assert_eq!(
        workspace.read_file("plugin/source/Filter.cpp"),
        "//==================================================="
    );

    let after = workspace.build_file_lines();
    assert_eq!(after.len(), before.len() + 2);

    let anchor = after
        .iter()
        .position(|line| line.contains("PluginProcessor.h"))
        .unwrap();
    assert_eq!(after[anchor + 1], "\t\t\t\t${INCLUDE_DIR}/dsp/Filter.h");
    assert_eq!(after[anchor + 2], "\t\t\t\tsource/Filter.cpp");

    let mut untouched = after.clone();
    untouched.drain(anchor + 1..anchor + 3);
    assert_eq!(untouched, before);
}

#[test]
fn test_header_only_legacy_flag() {
    let workspace = my_synth_workspace();

    plugfile_cmd(&workspace)
        .args(["-ho", "dsp/Filter"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Creating source file").not());

    assert!(workspace.file_exists("plugin/include/MySynth/dsp/Filter.h"));
    assert!(!workspace.file_exists("plugin/source/Filter.cpp"));

    let build = workspace.read_build_file();
    assert!(build.contains("${INCLUDE_DIR}/dsp/Filter.h"));
    assert!(!build.contains("source/Filter.cpp"));
}

#[test]
fn test_header_only_long_flag() {
    let workspace = my_synth_workspace();

    plugfile_cmd(&workspace)
        .args(["--header_only", "Filter"])
        .assert()
        .success();

    assert!(workspace.file_exists("plugin/include/MySynth/Filter.h"));
    assert!(!workspace.file_exists("plugin/source/Filter.cpp"));
}

#[test]
fn test_second_run_duplicates_registration() {
    let workspace = my_synth_workspace();

    plugfile_cmd(&workspace).arg("dsp/Filter").assert().success();
    let header_after_first = workspace.read_file("plugin/include/MySynth/dsp/Filter.h");
    plugfile_cmd(&workspace).arg("dsp/Filter").assert().success();

    assert_eq!(
        workspace.read_file("plugin/include/MySynth/dsp/Filter.h"),
        header_after_first
    );
    let build = workspace.read_build_file();
    assert_eq!(build.matches("${INCLUDE_DIR}/dsp/Filter.h").count(), 2);
    assert_eq!(build.matches("source/Filter.cpp").count(), 2);
}

#[test]
fn test_missing_anchor_warns_but_succeeds() {
    let workspace = TestWorkspace::new();
    workspace.create_file(BUILD_FILE, "project(Hex VERSION 0.1.0)\n");
    workspace.create_directory("plugin/source");

    plugfile_cmd(&workspace)
        .args(["-ho", "Filter"])
        .assert()
        .success()
        .stderr(predicate::str::contains("no line contains 'PluginProcessor.h'"));

    assert_eq!(workspace.read_build_file(), "project(Hex VERSION 0.1.0)\n");
    assert!(workspace.file_exists("plugin/include/Hex/Filter.h"));
}

#[test]
fn test_missing_build_file_fails() {
    let workspace = TestWorkspace::new();

    plugfile_cmd(&workspace)
        .arg("Filter")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("CMakeLists.txt"));
}

#[test]
fn test_failed_source_step_still_reports_progress() {
    // No plugin/source directory: the header lands, the source write fails
    let workspace = TestWorkspace::new();
    workspace.create_file(BUILD_FILE, &plugin_cmake("project(MySynth VERSION 1.0)"));

    plugfile_cmd(&workspace)
        .arg("Filter")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Enclosing folder is:"))
        .stdout(predicate::str::contains("Creating header file: Filter.h"))
        .stdout(predicate::str::contains("Creating source file: Filter.cpp"))
        .stdout(predicate::str::contains("File creation finished").not())
        .stderr(predicate::str::contains("Filter.cpp"));

    assert!(workspace.file_exists("plugin/include/MySynth/Filter.h"));
    let build = workspace.read_build_file();
    assert!(build.contains("${INCLUDE_DIR}/Filter.h"));
    assert!(build.contains("source/Filter.cpp"));
}

#[test]
fn test_invalid_source_path_fails() {
    let workspace = my_synth_workspace();
    let before = workspace.read_build_file();

    plugfile_cmd(&workspace)
        .arg("dsp/")
        .assert()
        .failure()
        .stderr(predicate::str::contains("base name is empty"));

    assert_eq!(workspace.read_build_file(), before);
}

#[test]
fn test_config_file_overrides_boilerplate() {
    let workspace = my_synth_workspace();
    workspace.create_file(
        "plugfile.toml",
        "[boilerplate]\nheader = \"#pragma once\\n\"\n",
    );

    plugfile_cmd(&workspace).arg("Filter").assert().success();

    assert_eq!(
        workspace.read_file("plugin/include/MySynth/Filter.h"),
        "#pragma once\n"
    );
}

#[test]
fn test_missing_src_path_is_usage_error() {
    let workspace = my_synth_workspace();

    plugfile_cmd(&workspace).assert().failure().code(2);
}
