//! End-to-end CLI behaviour.

use crate::integration::test_utils::{payload_of, stderr_of, stdout_of, CliSandbox};
use rendstress::payload::{
    assemble, Intensity, Variant, VariantBuilder, ANNOUNCEMENT, START_MARKER,
};

#[test]
fn generate_prints_the_assembled_payload() {
    let sandbox = CliSandbox::new();
    let output = sandbox.run(&[
        "--quiet",
        "generate",
        "--variant",
        "vortex-chaos",
        "--intensity",
        "25",
    ]);
    assert!(output.status.success(), "stderr={}", stderr_of(&output));

    let expected = assemble(
        Variant::VortexChaos,
        Intensity::new(25).unwrap(),
        &VariantBuilder,
    )
    .unwrap();
    assert_eq!(payload_of(&output), expected.assembled());
}

#[test]
fn stdout_payload_matches_exported_file_byte_for_byte() {
    let sandbox = CliSandbox::new();
    let args = ["--quiet", "generate", "--variant", "vortex", "--intensity", "10"];
    let printed = sandbox.run(&args);
    assert!(printed.status.success(), "stderr={}", stderr_of(&printed));

    let target = sandbox.path("vortex.txt");
    let exported = sandbox
        .command()
        .args(args)
        .arg("--output")
        .arg(&target)
        .output()
        .unwrap();
    assert!(exported.status.success(), "stderr={}", stderr_of(&exported));

    let file_bytes = std::fs::read(&target).unwrap();
    assert_eq!(printed.stdout, file_bytes);
    assert!(printed.stdout.ends_with(ANNOUNCEMENT.as_bytes()));
}

#[test]
fn generate_to_file_prints_summary() {
    let sandbox = CliSandbox::new();
    let target = sandbox.path("out/payload.txt");
    let output = sandbox
        .command()
        .args(["--quiet", "generate", "--variant", "diacritic", "--intensity", "10"])
        .arg("--output")
        .arg(&target)
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr={}", stderr_of(&output));

    let json: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    let written = std::fs::read_to_string(&target).unwrap();
    assert!(written.starts_with(START_MARKER));
    assert_eq!(json["variant"], "diacritic-hell");
    assert_eq!(json["length"], written.chars().count());
    assert_eq!(json["body_length"], 620);
    assert_eq!(
        json["stats"]["digest"],
        rendstress::payload::stats::digest(&written)
    );
}

#[test]
fn out_of_range_exits_nonzero_without_output() {
    let sandbox = CliSandbox::new();
    for value in ["9", "2500001", "-10"] {
        let output = sandbox.run(&["--quiet", "generate", "--variant", "zws", "--intensity", value]);
        assert!(!output.status.success());
        assert!(output.stdout.is_empty());
        assert!(
            stderr_of(&output).contains("rejected: Intensity must be between 10 and 2500000"),
            "stderr={}",
            stderr_of(&output)
        );
    }
}

#[test]
fn unknown_variant_points_at_variants_command() {
    let sandbox = CliSandbox::new();
    let output = sandbox.run(&["--quiet", "generate", "--variant", "sparkle"]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).contains("rendstress variants"));
}

#[test]
fn variants_lists_all_four() {
    let sandbox = CliSandbox::new();
    let output = sandbox.run(&["--quiet", "variants", "--format", "json"]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        ["invisible-flood", "vortex-chaos", "diacritic-hell", "ultimate-doomsday"]
    );
}

#[test]
fn inspect_reads_back_a_generated_file() {
    let sandbox = CliSandbox::new();
    let target = sandbox.path("flood.txt");
    let generated = sandbox
        .command()
        .args(["--quiet", "generate", "--variant", "zws", "--intensity", "1000"])
        .arg("--output")
        .arg(&target)
        .output()
        .unwrap();
    assert!(generated.status.success(), "stderr={}", stderr_of(&generated));

    let output = sandbox
        .command()
        .args(["--quiet", "inspect"])
        .arg(&target)
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr={}", stderr_of(&output));
    let json: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(json["framed"], true);
    assert_eq!(json["zero_width_spaces"], 50_000 + 300);
}

#[test]
fn inspect_missing_file_fails() {
    let sandbox = CliSandbox::new();
    let output = sandbox.run(&["--quiet", "inspect", "does-not-exist.txt"]);
    assert!(!output.status.success());
    assert!(stderr_of(&output).starts_with("error: I/O error"));
}

#[test]
fn init_writes_loadable_config() {
    let sandbox = CliSandbox::new();
    let output = sandbox.run(&["--quiet", "init"]);
    assert!(output.status.success(), "stderr={}", stderr_of(&output));
    let path = sandbox.workspace().join("config").join("config.toml");
    assert!(path.exists());

    let again = sandbox.run(&["--quiet", "init"]);
    assert!(stdout_of(&again).contains("already exists, skipped"));

    let forced = sandbox.run(&["--quiet", "init", "--force"]);
    assert!(stdout_of(&forced).contains("(overwritten)"));
}

#[test]
fn logs_go_to_stderr_not_stdout() {
    let sandbox = CliSandbox::new();
    let output = sandbox.run(&[
        "--log-level",
        "info",
        "generate",
        "--variant",
        "vortex",
        "--intensity",
        "10",
    ]);
    assert!(output.status.success(), "stderr={}", stderr_of(&output));
    assert!(payload_of(&output).starts_with(START_MARKER));
    assert!(stderr_of(&output).contains("rendstress CLI starting"));
}

#[test]
fn file_logging_writes_to_requested_path() {
    let sandbox = CliSandbox::new();
    let log_file = sandbox.path("logs/run.log");
    let output = sandbox
        .command()
        .args(["--log-output", "file", "--log-file"])
        .arg(&log_file)
        .arg("variants")
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr={}", stderr_of(&output));
    let content = std::fs::read_to_string(&log_file).unwrap();
    assert!(content.contains("rendstress CLI starting"));
}
