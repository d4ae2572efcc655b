use atml::AccountReport;

use std::{fs, path::PathBuf, process::Command};

use csv::{ReaderBuilder, Trim};

#[test]
fn example_files() {
    let input_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources/test-examples/inputs");
    let expected_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources/test-examples/expected");

    // Each example is a roster plus a script
    let files_to_test = fs::read_dir(input_dir.clone()).unwrap().count() / 2;

    assert!(files_to_test > 0);

    for idx in 1..=files_to_test {
        let roster_file = input_dir.join(format!("roster_{idx}.csv"));
        let script_file = input_dir.join(format!("script_{idx}.csv"));
        let expected_file = expected_dir.join(format!("accounts_{idx}.csv"));

        println!("Testing input: {roster_file:?}, {script_file:?}");
        println!("Expected: {expected_file:?}");

        // Running the binary directly to prove everything works as expected
        let output = Command::new(env!("CARGO_BIN_EXE_atm-sim"))
            .args([roster_file.to_str().unwrap(), script_file.to_str().unwrap()])
            .output()
            .unwrap();

        println!("{}", String::from_utf8(output.stderr).unwrap());

        assert!(output.status.success());

        // Build actual from output
        let output = String::from_utf8(output.stdout).unwrap();

        let mut output_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .from_reader(output.as_bytes());

        let mut actual: Vec<AccountReport> = vec![];

        for record in output_reader.deserialize() {
            actual.push(record.unwrap());
        }

        // Build expected from expected_file
        let mut expected_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .from_path(expected_file)
            .unwrap();

        let mut expected: Vec<AccountReport> = vec![];

        for record in expected_reader.deserialize() {
            expected.push(record.unwrap());
        }

        // Sort to ensure order doesn't matter
        actual.sort();
        expected.sort();

        assert_eq!(actual, expected);
    }
}

#[test]
fn missing_arguments() {
    let output = Command::new(env!("CARGO_BIN_EXE_atm-sim"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
