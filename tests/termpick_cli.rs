use std::process::Command;

fn combined_output(output: &std::process::Output) -> String {
    let mut combined = String::new();
    combined.push_str(&String::from_utf8_lossy(&output.stdout));
    combined.push_str(&String::from_utf8_lossy(&output.stderr));
    combined
}

fn termpick_bin() -> &'static str {
    option_env!("CARGO_BIN_EXE_termpick").expect("termpick test binary not built")
}

#[test]
fn termpick_help_mentions_name() {
    let output = Command::new(termpick_bin())
        .arg("--help")
        .output()
        .expect("run termpick --help");
    assert!(output.status.success());
    let combined = combined_output(&output);
    assert!(combined.contains("termpick"));
    assert!(combined.contains("--design-id"));
}

#[test]
fn termpick_list_designs_draws_every_design() {
    let output = Command::new(termpick_bin())
        .arg("--list-designs")
        .output()
        .expect("run termpick --list-designs");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Design 1 "));
    assert!(stdout.contains("Design 20"));
    assert!(!stdout.contains("Design 21"));
    assert!(stdout.contains("[s] Selected row"));
    assert!(stdout.contains("--design-string '┌──┬┐├/\\┼┤│ )│││[]││└\\/┴┘'"));
}

#[test]
fn termpick_without_items_explains_usage() {
    let output = Command::new(termpick_bin())
        .env_remove("TERMPICK_LOGS")
        .output()
        .expect("run termpick");
    assert!(!output.status.success());
    assert!(combined_output(&output).contains("nothing to show"));
}

#[test]
fn termpick_rejects_out_of_range_design() {
    let output = Command::new(termpick_bin())
        .args(["--design-id", "99", "a=Apples"])
        .output()
        .expect("run termpick --design-id 99");
    assert!(!output.status.success());
    assert!(combined_output(&output).contains("--design-id must be between 1 and 20"));
}
