use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn precompiler() -> Command {
    Command::new(env!("CARGO_BIN_EXE_precompiler"))
}

#[test]
fn shows_help() {
    precompiler()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--in"))
        .stdout(predicate::str::contains("--verbose"));
}

#[test]
fn missing_input_argument_fails() {
    precompiler().arg("-v").assert().failure().stderr(predicate::str::contains("--in"));
}

#[test]
fn unreadable_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    precompiler()
        .current_dir(dir.path())
        .args(["-i", "absent.c"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error:"))
        .stderr(predicate::str::contains("absent.c"));
}

#[test]
fn writes_processed_source_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("main.c"), "// hi\nint x;\n").unwrap();

    precompiler()
        .current_dir(dir.path())
        .args(["--in", "main.c"])
        .assert()
        .success()
        .stdout("\nint x;\n");
}

#[test]
fn writes_processed_source_to_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("util.h"), "int helper; /* shared */\n").unwrap();
    fs::write(dir.path().join("main.c"), "#include \"util.h\"\nint main_var;\n").unwrap();

    precompiler()
        .current_dir(dir.path())
        .args(["-i", "main.c", "-o", "out.c"])
        .assert()
        .success()
        .stdout("");

    let written = fs::read_to_string(dir.path().join("out.c")).unwrap();
    assert_eq!(written, "int helper; \nint main_var;\n");
}

#[test]
fn verbose_prints_statistics_after_source() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("main.c"), "/* a\nb */\nfloat 1bad;\n").unwrap();

    precompiler()
        .current_dir(dir.path())
        .args(["-i", "main.c", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("\n\nfloat 1bad;\n"))
        .stdout(predicate::str::contains("Errors detected: 1"))
        .stdout(predicate::str::contains("|main.c  |3     |1bad      |"))
        .stdout(predicate::str::contains("Comment lines removed: 2"));
}

#[test]
fn json_report() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("main.c"), "int a, b2, 3c;\n").unwrap();

    let output = precompiler()
        .current_dir(dir.path())
        .args(["-i", "main.c", "-o", "out.c", "-v", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["counters"]["checked_vars"], 3);
    assert_eq!(report["counters"]["errors_detected"], 1);
    assert_eq!(report["output"], "out.c");
}

#[test]
fn missing_include_warns_and_continues() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("main.c"), "#include \"gone.h\"\nint x;\n").unwrap();

    precompiler()
        .current_dir(dir.path())
        .args(["-i", "main.c"])
        .assert()
        .success()
        .stdout("int x;\n")
        .stderr(predicate::str::contains("[warn] cannot include file gone.h"));
}

#[test]
fn strict_mode_rejects_missing_include() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("main.c"), "#include \"gone.h\"\nint x;\n").unwrap();

    precompiler()
        .current_dir(dir.path())
        .args(["-i", "main.c", "--strict"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("gone.h"));
}

#[test]
fn include_root_redirects_relative_includes() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("include")).unwrap();
    fs::write(dir.path().join("include").join("defs.h"), "int from_root;\n").unwrap();
    fs::write(dir.path().join("main.c"), "#include <defs.h>\n").unwrap();

    precompiler()
        .current_dir(dir.path())
        .args(["-i", "main.c", "--include-root", "include"])
        .assert()
        .success()
        .stdout("int from_root;\n");
}

#[test]
fn unwritable_output_fails() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("main.c"), "int x;\n").unwrap();

    precompiler()
        .current_dir(dir.path())
        .args(["-i", "main.c", "-o", "no/such/dir/out.c"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out.c"));
}
