use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn kmeanspp() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_kmeanspp"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write_inputs(temp_dir: &TempDir) -> (String, String) {
    let a = temp_dir.path().join("a.txt");
    let b = temp_dir.path().join("b.txt");
    fs::write(&a, "1,0.0\n2,0.0\n3,10.0\n4,10.0\n").unwrap();
    fs::write(&b, "1,0.0\n2,1.0\n3,0.0\n4,1.0\n").unwrap();
    (
        a.to_string_lossy().into_owned(),
        b.to_string_lossy().into_owned(),
    )
}

#[test]
fn test_invalid_k_prints_message_and_fails() {
    let temp_dir = TempDir::new().unwrap();
    let (a, b) = write_inputs(&temp_dir);

    let output = kmeanspp().args(["4", "0.001", &a, &b]).output().unwrap();

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Invalid number of clusters!\n"
    );
}

#[test]
fn test_wrong_argument_count_is_generic_failure() {
    let output = kmeanspp().args(["2", "0.001"]).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "An Error Has Occurred\n");
}

#[test]
fn test_missing_file_hides_cause() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.txt");
    let missing = missing.to_string_lossy().into_owned();

    let output = kmeanspp()
        .args(["2", "0.001", &missing, &missing])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "An Error Has Occurred\n");
}

#[test]
fn test_success_prints_report() {
    let temp_dir = TempDir::new().unwrap();
    let (a, b) = write_inputs(&temp_dir);

    let output = kmeanspp()
        .args(["--seed", "3", "2", "100", "0.0001", &a, &b])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].split(',').count(), 2);
    assert!(lines[1..].iter().all(|l| l.split(',').count() == 2));
}
