use super::*;

/// Helper: write `contents` to a temp file with the given name.
fn temp_source(dir: &tempfile::TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write temp source");
    path.to_string_lossy().into_owned()
}

#[test]
fn check_reports_balanced_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = temp_source(&dir, "page.html", "<html><body></body></html>");
    let code = check_file(&path, &CliOptions::default()).expect("check runs");
    assert_eq!(code, 0);
}

#[test]
fn check_flags_unclosed_tags() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = temp_source(&dir, "page.html", "<html><body>");
    let code = check_file(&path, &CliOptions::default()).expect("check runs");
    assert_eq!(code, 1);
}

#[test]
fn unsupported_extension_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = temp_source(&dir, "main.rs", "fn main() {}");
    let err = scan_file(&path, &CliOptions::default()).expect_err("must reject .rs");
    assert!(matches!(err, CliError::UnsupportedFile { .. }));
}

#[test]
fn missing_file_is_reported() {
    let err = scan_file("/nonexistent/page.tsx", &CliOptions::default()).expect_err("must fail");
    assert!(matches!(err, CliError::Read { .. }));
}

#[test]
fn config_file_drives_the_scan() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_path = temp_source(
        &dir,
        "settings.json",
        r##"{ "colors": ["#102030"], "ignoredTags": ["html"] }"##,
    );
    let source_path = temp_source(&dir, "page.html", "<html><p></p></html>");
    let options = CliOptions {
        config_path: Some(config_path.into()),
    };
    let code = scan_file(&source_path, &options).expect("scan runs");
    assert_eq!(code, 0);
}

#[test]
fn broken_config_surfaces_a_config_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config_path = temp_source(&dir, "settings.json", r#"{ "colors": ["teal"] }"#);
    let source_path = temp_source(&dir, "page.html", "<p></p>");
    let options = CliOptions {
        config_path: Some(config_path.into()),
    };
    let err = scan_file(&source_path, &options).expect_err("must reject bad color");
    assert!(matches!(err, CliError::Config(_)));
}

#[test]
fn ansi_output_runs_on_supported_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = temp_source(&dir, "app.tsx", "const x = <div id=\"a\">hi</div>;\n");
    let code = render_ansi(&path, &CliOptions::default()).expect("render runs");
    assert_eq!(code, 0);
}
