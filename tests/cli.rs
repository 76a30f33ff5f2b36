use anyhow::Result;
use std::{fs, process::Command};
use tempfile::TempDir;

const RESULTS_FILE_NAME: &str = "SalesResults.txt";

fn calculator(dir: &TempDir) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_sales-cost-calculator"));
    command.current_dir(dir.path()).env_remove("RUST_LOG");
    command
}

#[test]
fn wrong_argument_count_prints_usage() -> Result<()> {
    let dir = TempDir::new()?;
    for args in [vec![], vec!["catalogue.json"], vec!["a.json", "b.json", "c.json"]].iter() {
        let output = calculator(&dir).args(args).output()?;
        assert!(output.status.success(), "args {:?}: {:?}", args, output);
        assert!(
            String::from_utf8_lossy(&output.stderr).contains("Usage: sales-cost-calculator"),
            "args {:?}: {:?}",
            args,
            output
        );
        assert!(output.stdout.is_empty());
        assert!(!dir.path().join(RESULTS_FILE_NAME).exists());
    }
    Ok(())
}

#[test]
fn echoes_report_and_writes_results_file() -> Result<()> {
    let dir = TempDir::new()?;
    let catalogue = dir.path().join("catalogue.json");
    let sales = dir.path().join("sales.json");
    fs::write(&catalogue, r#"[{"title": "Widget", "price": 9.99}]"#)?;
    fs::write(
        &sales,
        r#"[{"Product": "Widget", "Quantity": 3}, {"Product": "Gadget", "Quantity": 1}]"#,
    )?;

    let output = calculator(&dir).arg(&catalogue).arg(&sales).output()?;
    assert!(output.status.success(), "{:?}", output);

    let stdout = String::from_utf8(output.stdout)?;
    assert!(stdout.starts_with("Total Sales Cost: 29.97\nExecution Time: "));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("'Gadget' not found"), "stderr: {}", stderr);

    let written = fs::read_to_string(dir.path().join(RESULTS_FILE_NAME))?;
    assert_eq!(stdout, written);
    Ok(())
}

#[test]
fn malformed_input_fails_without_results_file() -> Result<()> {
    let dir = TempDir::new()?;
    let catalogue = dir.path().join("catalogue.json");
    let sales = dir.path().join("sales.json");
    fs::write(&catalogue, "[{\"title\": ")?;
    fs::write(&sales, r#"[{"Product": "Widget", "Quantity": 3}]"#)?;

    let output = calculator(&dir).arg(&catalogue).arg(&sales).output()?;
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("catalogue.json"), "stderr: {}", stderr);
    assert!(!dir.path().join(RESULTS_FILE_NAME).exists());
    Ok(())
}
