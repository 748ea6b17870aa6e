use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use super::*;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Capture {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

fn captured(f: impl FnOnce()) -> String {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .event_format(LevelPrefix)
        .with_max_level(tracing::Level::TRACE)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    capture.text()
}

#[test]
fn test_lines_are_level_prefixed() {
    let out = captured(|| {
        tracing::info!("launched terminal");
        tracing::warn!("no terminal could be launched");
        tracing::debug!("trying terminal");
    });
    assert_eq!(
        out,
        "[info] launched terminal\n[warn] no terminal could be launched\n[debug] trying terminal\n"
    );
}

#[test]
fn test_fields_follow_message() {
    let out = captured(|| tracing::info!(terminal = "Kitty", "launched terminal"));
    assert_eq!(out, "[info] launched terminal terminal=\"Kitty\"\n");
}

// The only test touching the process-wide sink.
#[test]
fn test_get_or_create_is_single_and_installed() {
    let tmp = tempfile::tempdir().unwrap();
    let paths: Vec<PathBuf> = (0..8)
        .map(|i| tmp.path().join(format!("logs-{i}")).join("termhere.log"))
        .collect();

    let sinks: Vec<&'static LogSink> = std::thread::scope(|scope| {
        let handles: Vec<_> = paths
            .iter()
            .map(|p| scope.spawn(move || get_or_create(p, "info").unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let sink = sinks[0];
    assert!(sinks.iter().all(|s| std::ptr::eq(*s, sink)));
    assert_eq!(paths.iter().filter(|p| p.exists()).count(), 1);
    assert!(sink.path().exists());
    assert!(sink.is_installed());

    let later = tmp.path().join("later.log");
    assert!(std::ptr::eq(get_or_create(&later, "trace").unwrap(), sink));
    assert!(!later.exists());

    tracing::warn!(terminal = "Kitty", "sink check");
    let written = std::fs::read_to_string(sink.path()).unwrap();
    assert!(written.contains("[warn] sink check terminal=\"Kitty\"\n"));
}
