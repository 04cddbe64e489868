use std::{
    io::{Read, Write},
    path::Path,
    process::{Child, Command, Stdio},
    thread,
    time::{Duration, Instant},
};

const PROMPT: &str = "Enter a command: ";

fn spawn(dir: &Path, rust_log: Option<&str>) -> Child {
    let mut command = Command::new(env!("CARGO_BIN_EXE_address_book"));
    command
        .current_dir(dir)
        .env("ADDRESS_BOOK_PATH", dir.join("book.json"))
        .env_remove("RUST_LOG")
        .env_remove("BIRTHDAY_WINDOW_DAYS")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(filter) = rust_log {
        command.env("RUST_LOG", filter);
    }
    command.spawn().unwrap()
}

fn wait_with_deadline(child: &mut Child, deadline: Duration) -> Option<std::process::ExitStatus> {
    let start = Instant::now();
    while start.elapsed() < deadline {
        if let Some(status) = child.try_wait().unwrap() {
            return Some(status);
        }
        thread::sleep(Duration::from_millis(50));
    }
    None
}

#[test]
fn test_rust_log_enables_crate_logs() {
    let dir = tempfile::tempdir().unwrap();
    let mut child = spawn(dir.path(), Some("address_book=info"));

    child.stdin.take().unwrap().write_all(b"exit\n").unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.ends_with("Good bye!\n"), "{}", stdout);
    assert!(stderr.contains("Saved 0 contacts"), "{}", stderr);
}

#[test]
fn test_default_filter_is_quiet() {
    let dir = tempfile::tempdir().unwrap();
    let mut child = spawn(dir.path(), None);

    child.stdin.take().unwrap().write_all(b"exit\n").unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}

#[cfg(unix)]
#[test]
fn test_interrupt_saves_and_exits_while_input_stays_open() {
    let dir = tempfile::tempdir().unwrap();
    let mut child = spawn(dir.path(), None);

    // Keep stdin open for the whole test
    let mut stdin = child.stdin.take().unwrap();
    stdin.write_all(b"add John 1234567890\n").unwrap();

    let mut stdout = child.stdout.take().unwrap();
    let mut seen = String::new();
    let mut buf = [0u8; 256];
    while seen.matches(PROMPT).count() < 2 {
        let n = stdout.read(&mut buf).unwrap();
        assert!(n > 0, "output closed early: {}", seen);
        seen.push_str(&String::from_utf8_lossy(&buf[..n]));
    }
    // Let the runtime install its signal handler
    thread::sleep(Duration::from_millis(300));

    let killed = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(killed.success());

    let status = wait_with_deadline(&mut child, Duration::from_secs(5));
    if status.is_none() {
        child.kill().unwrap();
    }
    drop(stdin);

    let status = status.expect("process still running after interrupt");
    assert!(status.success(), "{:?}", status);

    let snapshot = std::fs::read_to_string(dir.path().join("book.json")).unwrap();
    assert!(snapshot.contains("1234567890"), "{}", snapshot);
}
