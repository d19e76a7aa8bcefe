//! Config layering as seen by the binary.

use crate::integration::test_utils::{payload_of, stderr_of, stdout_of, write_file, CliSandbox};

#[test]
fn workspace_defaults_drive_generate() {
    let sandbox = CliSandbox::new();
    write_file(
        &sandbox.workspace().join("config").join("config.toml"),
        "[generator]\ndefault_variant = \"zws\"\ndefault_intensity = 20\n",
    );

    let output = sandbox.run(&["--quiet", "generate"]);
    assert!(output.status.success(), "stderr={}", stderr_of(&output));
    let payload = payload_of(&output);
    // 20 x 100 in the body plus 150 in each sentinel.
    assert_eq!(payload.matches('\u{200B}').count(), 2_300);
}

#[test]
fn global_config_is_overridden_by_workspace() {
    let sandbox = CliSandbox::new();
    write_file(
        &sandbox.config_home().join("rendstress").join("config.toml"),
        "[generator]\ndefault_variant = \"diacritic\"\ndefault_intensity = 30\n",
    );
    write_file(
        &sandbox.workspace().join("config").join("config.toml"),
        "[generator]\ndefault_intensity = 15\n",
    );

    let output = sandbox.run(&["--quiet", "estimate", "--format", "json"]);
    assert!(output.status.success(), "stderr={}", stderr_of(&output));
    let json: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(json["variant"], "diacritic-hell");
    assert_eq!(json["intensity"], 15);
    assert_eq!(json["body"]["chars"], 15 * 62);
}

#[test]
fn ceiling_from_config_rejects_generate() {
    let sandbox = CliSandbox::new();
    write_file(
        &sandbox.workspace().join("config").join("config.toml"),
        "[generator]\nmax_payload_chars = 1000\n",
    );

    let output = sandbox.run(&[
        "--quiet",
        "generate",
        "--variant",
        "ultimate",
        "--intensity",
        "10",
    ]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(stderr_of(&output).contains("exceeds the configured limit of 1000"));
}

#[test]
fn invalid_config_is_reported() {
    let sandbox = CliSandbox::new();
    write_file(
        &sandbox.workspace().join("config").join("config.toml"),
        "[generator]\ndefault_variant = \"glitter\"\n",
    );

    let output = sandbox.run(&["--quiet", "variants"]);
    assert!(!output.status.success());
    let stderr = stderr_of(&output);
    assert!(stderr.contains("Configuration validation failed"), "{}", stderr);
    assert!(stderr.contains("glitter"));
}

#[test]
fn explicit_config_file_replaces_layering() {
    let sandbox = CliSandbox::new();
    write_file(
        &sandbox.workspace().join("config").join("config.toml"),
        "[generator]\ndefault_variant = \"zws\"\n",
    );
    let explicit = sandbox.path("explicit.toml");
    write_file(&explicit, "[generator]\ndefault_variant = \"vortex\"\n");

    let output = sandbox
        .command()
        .arg("--config")
        .arg(&explicit)
        .args(["--quiet", "estimate", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr={}", stderr_of(&output));
    let json: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(json["variant"], "vortex-chaos");
}
