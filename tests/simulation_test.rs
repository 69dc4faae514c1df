use std::process::{Command, Output};

fn run_headless(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_farm_sim"))
        .args(args)
        .env("RUST_LOG", "warn,farm_sim=info")
        .output()
        .expect("Failed to execute simulation")
}

/// Test that the simulation runs in headless mode without crashing
#[test]
fn test_headless_simulation_runs() {
    let output = run_headless(&["--ticks", "200", "--seed", "1"]);

    assert!(
        output.status.success(),
        "Simulation failed to run in headless mode. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("SIMULATION COMPLETE"),
        "Simulation did not complete properly. stderr: {}",
        stderr
    );
}

/// Test that the summary and map are printed
#[test]
fn test_headless_prints_summary_and_map() {
    let output = run_headless(&["--ticks", "50", "--seed", "3", "--width", "5", "--height", "4"]);
    assert!(output.status.success(), "Simulation failed to run");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("=== Farm Simulation Summary ==="));
    assert!(stdout.contains("Grid: 5x4"));
    assert!(stdout.contains("Money: $"));
    assert!(stdout.contains("=== Final State ==="));
    assert!(stdout.contains("Legend:"));
}

/// Test that final statistics are logged
#[test]
fn test_headless_statistics_logged() {
    let output = run_headless(&["--ticks", "100", "--seed", "9", "--simple-growth"]);
    assert!(output.status.success(), "Simulation failed to run");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Ticks run: 100"), "Missing tick count");
    assert!(stderr.contains("Harvests:"), "Missing harvest count");
    assert!(stderr.contains("Final money: $"), "Missing final money");
}

/// Test that a bad configuration is rejected
#[test]
fn test_invalid_configuration_fails() {
    let output = run_headless(&["--width", "0"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid farm configuration"), "stderr: {}", stderr);
}

/// Test that a non-numeric action chance is rejected instead of crashing
#[test]
fn test_nan_actions_per_tick_fails_cleanly() {
    let output = run_headless(&["--actions-per-tick", "NaN", "--ticks", "5"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid autoplay farmer settings"),
        "stderr: {}",
        stderr
    );
    assert!(!stderr.contains("panicked"), "stderr: {}", stderr);
}
