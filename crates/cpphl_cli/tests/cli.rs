use std::io::Write;

use assert_cmd::Command;

fn cpphl() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cpphl"));
    cmd.env_remove("CPPHL_LOG");
    cmd
}

fn source_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".cpp").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn usage_without_args() {
    let out = cpphl().output().unwrap();
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Usage: cpphl"), "{stderr}");
}

#[test]
fn html_requires_file() {
    let out = cpphl().arg("html").output().unwrap();
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Missing <file>"));
}

#[test]
fn html_from_file() {
    let file = source_file("int x = 5; // comment");
    let out = cpphl().arg("html").arg(file.path()).output().unwrap();
    assert!(out.status.success());
    assert_eq!(
        stdout_of(&out),
        "<span class=\"cpp-keyword\">int</span> x = <span class=\"cpp-literal\">5</span>; \
         <span class=\"cpp-comment\">// comment</span>"
    );
}

#[test]
fn html_from_stdin_with_flags() {
    let out = cpphl()
        .args(["html", "--scheme", "split", "--prefix", "hl-", "--element", "em", "-"])
        .write_stdin("return 0x10;")
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(
        stdout_of(&out),
        "<em class=\"hl-keyword\">return</em> <em class=\"hl-number\">0x10</em>;"
    );
}

#[test]
fn config_file_is_overridden_by_flags() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("hl.json");
    std::fs::write(&config, r#"{ "scheme": "string-only", "class_prefix": "x-" }"#).unwrap();

    let out = cpphl()
        .arg("html")
        .arg("--config")
        .arg(&config)
        .args(["--prefix", "y-", "-"])
        .write_stdin("\"s\" 1")
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(stdout_of(&out), "<span class=\"y-string\">\"s\"</span> 1");
}

#[test]
fn bad_config_is_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("bad.json");
    std::fs::write(&config, r#"{ "colour": "red" }"#).unwrap();
    let out = cpphl()
        .arg("html")
        .arg("--config")
        .arg(&config)
        .arg("-")
        .write_stdin("")
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Invalid config"));
}

#[test]
fn fragments_text_and_json() {
    let out = cpphl()
        .args(["fragments", "-"])
        .write_stdin("#if A\nint")
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(
        stdout_of(&out),
        "preprocessor\t0..5\t#if A\nplain\t5..6\t\\n\nkeyword\t6..9\tint\n"
    );

    let out = cpphl()
        .args(["fragments", "--json", "-"])
        .write_stdin("'c'")
        .output()
        .unwrap();
    let line: serde_json::Value = serde_json::from_str(stdout_of(&out).trim()).unwrap();
    assert_eq!(line["category"], "literal");
    assert_eq!(line["end"], 3);
    assert_eq!(line["text"], "'c'");
}

#[test]
fn check_reports_unterminated_constructs() {
    let file = source_file("int a;\nconst char* s = \"open\n");
    let out = cpphl().arg("check").arg(file.path()).output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Unterminated string literal"), "{stderr}");
    assert!(stderr.contains(":2:17:"), "{stderr}");
    assert!(stderr.contains('^'), "{stderr}");
}

#[test]
fn check_clean_source_succeeds() {
    let out = cpphl()
        .args(["check", "-"])
        .write_stdin("/* ok */ int main() { return 0; }\n")
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stderr.is_empty());
}

#[test]
fn keywords_are_listed_sorted() {
    let out = cpphl().arg("keywords").output().unwrap();
    assert!(out.status.success());
    let stdout = stdout_of(&out);
    let words: Vec<&str> = stdout.lines().collect();
    assert_eq!(words.len(), 85);
    assert!(words.windows(2).all(|w| w[0] < w[1]));
    assert!(words.contains(&"reinterpret_cast"));
}

#[test]
fn unknown_command() {
    let out = cpphl().arg("render").output().unwrap();
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Unknown command: render"));
}
