/// End-to-end tests for the CLI
use std::path::PathBuf;
use update_checker::prelude::*;

const INVENTORY: &str = "tests/fixtures/inventory.json";
const CATALOG: &str = "tests/fixtures/vergrabber.json";

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;
    use assert_cmd::cargo::cargo_bin_cmd;

    /// Exit code 0: Success - outdated software alone does not fail the run
    #[test]
    fn test_exit_code_success() {
        cargo_bin_cmd!("update-checker")
            .args(["-i", INVENTORY, "--catalog", CATALOG])
            .assert()
            .code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("update-checker").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("update-checker")
            .arg("--version")
            .assert()
            .code(0);
    }

    /// Exit code 1: outdated software with --fail-on-outdated
    #[test]
    fn test_exit_code_outdated_detected() {
        cargo_bin_cmd!("update-checker")
            .args(["-i", INVENTORY, "--catalog", CATALOG, "--fail-on-outdated"])
            .assert()
            .code(1);
    }

    /// Exit code 0: --fail-on-outdated when everything outdated is ignored
    #[test]
    fn test_exit_code_fail_on_outdated_without_findings() {
        cargo_bin_cmd!("update-checker")
            .args([
                "-i",
                INVENTORY,
                "--catalog",
                CATALOG,
                "--fail-on-outdated",
                "--ignore",
                "Adobe Flash",
                "--ignore",
                "Mozilla Thunderbird",
            ])
            .assert()
            .code(0);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("update-checker")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("update-checker")
            .args(["-f", "invalid_format"])
            .assert()
            .code(2);
    }

    /// Exit code 2: --catalog and --catalog-url are mutually exclusive
    #[test]
    fn test_exit_code_conflicting_catalog_options() {
        cargo_bin_cmd!("update-checker")
            .args([
                "--catalog",
                CATALOG,
                "--catalog-url",
                "http://127.0.0.1:9/vergrabber.json",
            ])
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - missing inventory
    #[test]
    fn test_exit_code_application_error_missing_inventory() {
        cargo_bin_cmd!("update-checker")
            .args(["-i", "/nonexistent/inventory.json", "--catalog", CATALOG])
            .assert()
            .code(3)
            .stderr(predicates::str::contains("Inventory file not found"));
    }

    /// Exit code 3: Application error - catalog is not a vergrabber document
    #[test]
    fn test_exit_code_application_error_bad_catalog() {
        cargo_bin_cmd!("update-checker")
            .args(["-i", INVENTORY, "--catalog", "Cargo.toml"])
            .assert()
            .code(3)
            .stderr(predicates::str::contains("Failed to parse release catalog"));
    }
}

mod output_tests {
    use super::*;
    use assert_cmd::cargo::cargo_bin_cmd;
    use predicates::prelude::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_text_output() {
        cargo_bin_cmd!("update-checker")
            .args(["-i", INVENTORY, "--catalog", CATALOG])
            .assert()
            .success()
            .stdout(predicate::str::contains("Release catalog updated 2021-08-23"))
            .stdout(predicate::str::contains("Mozilla Thunderbird 78.12.0 (x64 en-US)"))
            .stdout(predicate::str::contains("91.0.3"))
            .stdout(predicate::str::contains("2 outdated, 4 up to date, 1 unknown (7 checked)"))
            .stdout(predicate::str::contains("Acme Widget").not())
            .stderr(predicate::str::contains("Detected 7 installed program(s)"));
    }

    #[test]
    fn test_text_output_show_unknown() {
        cargo_bin_cmd!("update-checker")
            .args(["-i", INVENTORY, "--catalog", CATALOG, "--show-unknown"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Acme Widget"));
    }

    #[test]
    fn test_no_color_when_piped() {
        cargo_bin_cmd!("update-checker")
            .args(["-i", INVENTORY, "--catalog", CATALOG])
            .assert()
            .success()
            .stdout(predicate::str::contains("\u{1b}[").not());
    }

    #[test]
    fn test_json_output() {
        let output = cargo_bin_cmd!("update-checker")
            .args(["-i", INVENTORY, "--catalog", CATALOG, "-f", "json"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(value["metadata"]["tool_name"], "update-checker");
        assert_eq!(value["metadata"]["catalog_updated"], "2021-08-23");
        assert!(value["metadata"]["report_id"]
            .as_str()
            .unwrap()
            .starts_with("urn:uuid:"));
        assert_eq!(value["summary"]["outdated"], 2);
        assert_eq!(value["summary"]["up_to_date"], 4);
        assert_eq!(value["summary"]["unknown"], 1);

        let entries = value["entries"].as_array().unwrap();
        assert_eq!(entries.len(), 7);
        assert_eq!(entries[0]["name"], "Adobe Flash Player 32 NPAPI");
        assert_eq!(entries[0]["remark"], "End of life - please uninstall");
        assert_eq!(entries[1]["current_version"], "91.0.3");
        assert_eq!(entries[6]["status"], "Unknown");
    }

    #[test]
    fn test_markdown_output_to_file() {
        let dir = TempDir::new().unwrap();
        let output_path = dir.path().join("report.md");

        cargo_bin_cmd!("update-checker")
            .args(["-i", INVENTORY, "--catalog", CATALOG, "-f", "markdown", "--show-unknown"])
            .arg("-o")
            .arg(&output_path)
            .assert()
            .success()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Report written to"));

        let content = fs::read_to_string(&output_path).unwrap();
        assert!(content.starts_with("# Software Update Report"));
        assert!(content.contains("| Microsoft Windows 10 | Up-to-date | 19042.1165 | 19042.1165 |"));
        assert!(content.contains("## Other installed software"));
    }

    #[test]
    fn test_output_to_missing_directory_fails() {
        cargo_bin_cmd!("update-checker")
            .args([
                "-i",
                INVENTORY,
                "--catalog",
                CATALOG,
                "-o",
                "/nonexistent/directory/report.txt",
            ])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Parent directory does not exist"));
    }
}

mod cache_tests {
    use super::*;
    use assert_cmd::cargo::cargo_bin_cmd;
    use predicates::prelude::*;
    use std::fs;
    use tempfile::TempDir;

    /// Port 9 (discard) is closed on test machines, so downloads fail fast
    const UNREACHABLE_URL: &str = "http://127.0.0.1:9/vergrabber.json";

    fn write_cache(dir: &TempDir, updated: chrono::NaiveDate) -> PathBuf {
        let catalog = fs::read_to_string(fixtures_path().join("vergrabber.json")).unwrap();
        let cache = catalog.replace("\"2021-08-23\"", &format!("\"{}\"", updated.format("%Y-%m-%d")));
        let path = dir.path().join("vergrabber.json");
        fs::write(&path, cache).unwrap();
        path
    }

    #[test]
    fn test_fresh_cache_avoids_download() {
        let dir = TempDir::new().unwrap();
        let cache = write_cache(&dir, chrono::Local::now().date_naive());

        cargo_bin_cmd!("update-checker")
            .args(["-i", INVENTORY, "--catalog-url", UNREACHABLE_URL])
            .arg("--cache-file")
            .arg(&cache)
            .assert()
            .success()
            .stdout(predicate::str::contains("Mozilla Thunderbird"));
    }

    #[test]
    fn test_stale_cache_with_unreachable_feed_fails() {
        let dir = TempDir::new().unwrap();
        let cache = write_cache(&dir, chrono::NaiveDate::from_ymd_opt(2021, 8, 23).unwrap());

        cargo_bin_cmd!("update-checker")
            .args(["-i", INVENTORY, "--catalog-url", UNREACHABLE_URL])
            .arg("--cache-file")
            .arg(&cache)
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to fetch release catalog"));
    }
}

#[tokio::test]
async fn test_e2e_with_file_adapters() {
    let inventory_source = JsonInventoryReader::new(fixtures_path().join("inventory.json"));
    let catalog_source = FileCatalogSource::new(fixtures_path().join("vergrabber.json"));
    let progress_reporter = StderrProgressReporter::quiet();

    let use_case = CheckUpdatesUseCase::new(
        inventory_source,
        catalog_source,
        progress_reporter,
        NoopDiagnostics,
    );

    let response = use_case
        .execute(UpdateCheckRequest::default())
        .await
        .unwrap();

    assert_eq!(response.results.len(), 7);
    assert_eq!(response.summary.outdated, 2);

    let windows = response
        .results
        .iter()
        .find(|r| r.name == "Microsoft Windows 10")
        .unwrap();
    assert_eq!(windows.status, Classification::UpToDate);
    assert_eq!(windows.matched.ends, "2022-05-10");

    let thunderbird = response
        .results
        .iter()
        .find(|r| r.name.starts_with("Mozilla Thunderbird"))
        .unwrap();
    assert_eq!(thunderbird.status, Classification::Outdated);
    assert_eq!(thunderbird.matched.catalog_key(), "Mozilla Thunderbird 91.0");

    assert!(response.results.iter().all(|r| r.name != "Java Auto Updater"));
}

#[tokio::test]
async fn test_e2e_formatters_agree_on_counts() {
    let use_case = CheckUpdatesUseCase::new(
        JsonInventoryReader::new(fixtures_path().join("inventory.json")),
        FileCatalogSource::new(fixtures_path().join("vergrabber.json")),
        StderrProgressReporter::quiet(),
        NoopDiagnostics,
    );
    let response = use_case
        .execute(UpdateCheckRequest::default())
        .await
        .unwrap();
    let report = UpdateReportBuilder::build(&response);

    let text = TextFormatter::new(false, true).format(&report).unwrap();
    assert!(text.contains("2 outdated, 4 up to date, 1 unknown (7 checked)"));

    let markdown = MarkdownFormatter::new(false).format(&report).unwrap();
    assert!(markdown.contains("- Outdated: 2\n"));
    assert!(markdown.contains("- Up to date: 4\n"));
}
