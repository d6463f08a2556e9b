use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use custom_lock::ambient::quote::{attributed, QuoteSource};
use tempfile::TempDir;

const FALLBACK: &str = "fallback quote";

fn script(dir: &TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("quote.sh");
    fs::write(&path, body).unwrap();
    path
}

fn source(path: PathBuf, timeout_ms: u64) -> QuoteSource {
    QuoteSource::new(path, Duration::from_millis(timeout_ms), FALLBACK.to_string())
}

#[tokio::test]
async fn script_output_is_trimmed() {
    let dir = TempDir::new().unwrap();
    let path = script(&dir, "echo '  Know thyself.  '\n");
    assert_eq!(source(path, 2000).fetch().await, "Know thyself.");
}

#[tokio::test]
async fn missing_script_uses_fallback() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.sh");
    assert_eq!(source(path, 2000).fetch().await, FALLBACK);
}

#[tokio::test]
async fn empty_output_uses_fallback() {
    let dir = TempDir::new().unwrap();
    let path = script(&dir, "printf '   \\n'\n");
    assert_eq!(source(path, 2000).fetch().await, FALLBACK);
}

#[tokio::test]
async fn slow_script_times_out() {
    let dir = TempDir::new().unwrap();
    let path = script(&dir, "sleep 5\necho late\n");

    let start = Instant::now();
    assert_eq!(source(path, 200).fetch().await, FALLBACK);
    assert!(start.elapsed() < Duration::from_secs(3));
}

#[test]
fn attribution_format() {
    assert_eq!(attributed("Be water.", "Bruce Lee"), "\"Be water.\" — Bruce Lee");
}
