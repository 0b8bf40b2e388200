// pinyin/tests/cli.rs
//
// Runs the hanzi-pinyin binary.
//
// Tests cover:
// - Positional text and stdin input
// - Style, array and slug flags
// - Options file, dictionary config file and extra tables
// - Rejection of bad separators

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_hanzi-pinyin"))
}

fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn converts_positional_text() {
    let out = bin().args(["--style", "tone", "中国人"]).output().unwrap();
    assert_eq!(stdout_of(&out), "zhōng guó rén\n");
}

#[test]
fn array_output_is_json() {
    let out = bin()
        .args(["--array", "--style", "tone-num", "银行"])
        .output()
        .unwrap();
    let fields: Vec<String> = serde_json::from_str(stdout_of(&out).trim()).unwrap();
    assert_eq!(fields, ["yin2", "hang2"]);
}

#[test]
fn slug_flag() {
    let out = bin().args(["--slug", "银行行长"]).output().unwrap();
    assert_eq!(stdout_of(&out), "yin-hang-hang-zhang\n");
}

#[test]
fn reads_stdin_lines() {
    let mut child = bin()
        .args(["--keep-unknown"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all("中国人...\n你好\n".as_bytes())
        .unwrap();
    let out = child.wait_with_output().unwrap();
    assert_eq!(stdout_of(&out), "zhong guo ren ...\nni hao\n");
}

#[test]
fn options_file_and_extra_table() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("options.toml");
    std::fs::write(&config, "style = \"tone_num\"\nseparator = \"/\"\n").unwrap();
    let table = dir.path().join("extra.txt");
    std::fs::write(&table, "鿏: mai4\n").unwrap();

    let out = bin()
        .arg("--config")
        .arg(&config)
        .arg("--table")
        .arg(&table)
        .arg("中鿏")
        .output()
        .unwrap();
    assert_eq!(stdout_of(&out), "zhong1/mai4\n");
}

#[test]
fn bad_separator_fails() {
    let out = bin().args(["--separator", "ab", "中国"]).output().unwrap();
    assert!(!out.status.success());
}

#[test]
fn dictionary_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let table = dir.path().join("mini.txt");
    std::fs::write(&table, "中: zhong1\n国: guo2\n").unwrap();
    let dict_config = dir.path().join("dict.toml");
    std::fs::write(
        &dict_config,
        format!(
            "embedded_tables = false\ntables = [{:?}]\n",
            table.display().to_string()
        ),
    )
    .unwrap();

    // 人 is only in the embedded data, which the config turns off.
    let out = bin()
        .arg("--dict-config")
        .arg(&dict_config)
        .arg("中国人")
        .output()
        .unwrap();
    assert_eq!(stdout_of(&out), "zhong guo\n");
}
