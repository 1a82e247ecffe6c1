use std::io::Write;
use std::process::{Command, Output, Stdio};

fn combined_output(output: &Output) -> String {
    let mut combined = String::new();
    combined.push_str(&String::from_utf8_lossy(&output.stdout));
    combined.push_str(&String::from_utf8_lossy(&output.stderr));
    combined
}

fn overlay_bin() -> &'static str {
    option_env!("CARGO_BIN_EXE_hhd-overlay").expect("hhd-overlay test binary not built")
}

fn overlay_command() -> Command {
    let mut command = Command::new(overlay_bin());
    command
        .env_remove("HHD_RENDERER_CMD")
        .env_remove("SteamGamepadUI")
        .env_remove("NATIVE_RESOLUTION")
        .env("STEAM_OVERLAY", "1")
        .arg("--no-logs");
    command
}

/// Run the shell in overlay mode, feed `input` on stdin, and collect output.
fn run_overlay(args: &[&str], input: &str) -> Output {
    let mut child = overlay_command()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn hhd-overlay");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(input.as_bytes())
        .expect("write commands");
    child.wait_with_output().expect("wait for hhd-overlay")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn help_mentions_overlay() {
    let output = Command::new(overlay_bin())
        .arg("--help")
        .output()
        .expect("run hhd-overlay --help");
    assert!(output.status.success());
    assert!(combined_output(&output).contains("overlay"));
}

#[test]
fn rejects_invalid_display_size() {
    let output = Command::new(overlay_bin())
        .args(["--display-width", "0"])
        .output()
        .expect("run hhd-overlay");
    assert!(!output.status.success());
    assert!(combined_output(&output).contains("--display-width"));
}

#[test]
fn close_now_reports_closed_status() {
    let output = run_overlay(
        &[],
        "cmd:open_qam\ncmd:open_qam\ncmd:open_expanded\ncmd:close_now\n",
    );
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["stat:closed".to_string()]);
}

#[test]
fn unknown_lines_produce_no_output() {
    let output = run_overlay(&[], "hello world\ncmd:open_banana\n\ncmd:close\n");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[cfg(unix)]
#[test]
fn renderer_status_is_forwarded_to_host() {
    // Renderer confirms the expanded panel once told to show it, then exits.
    let script = r#"while read -r line; do
        case "$line" in
            *'"ui_type":"expanded"'*) echo '{"event":"update_status","status":"expanded"}'; exit 0 ;;
        esac
    done"#;
    let output = run_overlay(
        &["--renderer-cmd", "sh", "--renderer-arg", "-c", "--renderer-arg", script],
        "cmd:open_expanded\n",
    );
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["stat:expanded".to_string()]);
}
