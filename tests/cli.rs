use std::process::Command;

fn run_binary(rust_log: Option<&str>) -> std::process::Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bubble_sort"));
    cmd.env_remove("RUST_LOG");
    if let Some(filter) = rust_log {
        cmd.env("RUST_LOG", filter);
    }

    cmd.output().unwrap()
}

#[test]
fn prints_before_and_after() {
    let output = run_binary(None);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Before Sorting: 5 1 4 2 8 \nAfter Sorting: 1 2 4 5 8 \n"
    );
    // Default filter is warn, nothing to report.
    assert!(output.stderr.is_empty());
}

#[test]
fn logs_stay_off_stdout() {
    let output = run_binary(Some("trace"));

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Before Sorting: 5 1 4 2 8 \nAfter Sorting: 1 2 4 5 8 \n"
    );

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("bubble sort done"));
    assert!(stderr.contains("bubble pass done"));
}
