use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use fanlog::{debugf, errorf, fatalf, infof, warnf, Logger, MemorySink, Sink};
use serial_test::serial;

/// Unsets the active logger and restores the default exit handler when
/// dropped, so no test leaks state into the next.
struct TearDown;

impl Drop for TearDown {
    fn drop(&mut self) {
        fanlog::unset();
        fanlog::reset_exit_handler();
    }
}

fn setup(level: &str) -> (MemorySink, MemorySink, TearDown) {
    let output = MemorySink::new();
    let log_file = MemorySink::new();
    let logger = Logger::new(
        level,
        vec![
            Box::new(output.clone()) as Box<dyn Sink>,
            Box::new(log_file.clone()) as Box<dyn Sink>,
        ],
    )
    .unwrap();
    fanlog::set(logger);

    (output, log_file, TearDown)
}

#[test]
#[serial]
fn debug_log() {
    let (output, _, _guard) = setup("debug");

    debugf!("test debug log!");

    let l = output.contents();
    assert!(l.contains("[DEBUG]"));
    assert!(l.contains("test debug log!"));
}

#[test]
#[serial]
fn info_log() {
    let (output, _, _guard) = setup("info");

    infof!("test info log!");

    let l = output.contents();
    assert!(l.contains("[INFO]"));
    assert!(l.contains("test info log!"));
}

#[test]
#[serial]
fn warning_log() {
    let (output, _, _guard) = setup("warning");

    warnf!("test warning log!");

    let l = output.contents();
    assert!(l.contains("[WARN]"));
    assert!(l.contains("test warning log!"));
}

#[test]
#[serial]
fn error_log() {
    let (output, _, _guard) = setup("error");

    errorf!("test error log!");

    let l = output.contents();
    assert!(l.contains("[ERROR]"));
    assert!(l.contains("test error log!"));

    output.clear();

    fanlog::error(&std::io::Error::other("some error string"));

    let l = output.contents();
    assert!(l.contains("[ERROR]"));
    assert!(l.contains("some error string"));
}

#[test]
#[serial]
fn fatal_log_invokes_exit_handler_after_the_write() {
    let (output, _, _guard) = setup("fatal");

    let exits = Arc::new(AtomicUsize::new(0));
    let seen_at_exit = Arc::new(Mutex::new(String::new()));
    {
        let exits = Arc::clone(&exits);
        let seen_at_exit = Arc::clone(&seen_at_exit);
        let output = output.clone();
        fanlog::set_exit_handler(move || {
            exits.fetch_add(1, Ordering::SeqCst);
            *seen_at_exit.lock().unwrap() = output.contents();
        });
    }

    fatalf!("test fatal log!");

    assert_eq!(exits.load(Ordering::SeqCst), 1);

    // The record was already in the sink when the handler ran.
    let snapshot = seen_at_exit.lock().unwrap().clone();
    assert!(snapshot.contains("[FATAL]"));
    assert!(snapshot.contains("test fatal log!"));

    let l = output.contents();
    assert!(l.contains("[FATAL]"));
    assert!(l.contains("test fatal log!"));

    output.clear();
    exits.store(0, Ordering::SeqCst);

    fanlog::fatal(&std::io::Error::other("some error string"));

    assert_eq!(exits.load(Ordering::SeqCst), 1);
    let l = output.contents();
    assert!(l.contains("[FATAL]"));
    assert!(l.contains("some error string"));
}

#[test]
#[serial]
fn log_file_receives_the_same_lines_as_the_console() {
    let (output, log_file, guard) = setup("debug");

    debugf!("test debug log!");

    assert_eq!(output.contents(), log_file.contents());
    assert!(!output.contents().is_empty());

    // make sure sinks are released
    drop(guard);
}

#[test]
#[serial]
fn threshold_warning_filters_debug_but_passes_warn_and_error() {
    let (a, b, _guard) = setup("warning");

    debugf!("x");
    assert_eq!(a.contents(), "");
    assert_eq!(b.contents(), "");

    warnf!("y");
    for sink in [&a, &b] {
        assert!(sink.contents().contains("[WARN]"));
        assert!(sink.contents().contains("y"));
    }

    errorf!("z");
    for sink in [&a, &b] {
        assert!(sink.contents().contains("[ERROR]"));
        assert!(sink.contents().contains("z"));
    }
}

#[test]
#[serial]
fn emits_without_an_installed_logger_are_silent_noops() {
    fanlog::unset();

    let exits = Arc::new(AtomicUsize::new(0));
    {
        let exits = Arc::clone(&exits);
        fanlog::set_exit_handler(move || {
            exits.fetch_add(1, Ordering::SeqCst);
        });
    }
    let _guard = TearDown;

    debugf!("dropped");
    infof!("dropped");
    warnf!("dropped");
    errorf!("dropped");
    fatalf!("dropped");
    fanlog::error(&std::io::Error::other("dropped"));
    fanlog::fatal(&std::io::Error::other("dropped"));

    // No logger means no write and no hook.
    assert_eq!(exits.load(Ordering::SeqCst), 0);
}

#[test]
#[serial]
fn set_replaces_the_previous_logger_atomically() {
    let (first, _, _guard) = setup("debug");

    let second = MemorySink::new();
    let replacement = Logger::new(
        "debug",
        vec![Box::new(second.clone()) as Box<dyn Sink>],
    )
    .unwrap();
    fanlog::set(replacement);

    infof!("after the swap");

    assert_eq!(first.contents(), "");
    assert!(second.contents().contains("after the swap"));
}

#[test]
#[serial]
fn concurrent_emits_and_swaps_never_tear_a_record() {
    let (output, _, _guard) = setup("debug");

    let writers: Vec<_> = (0..4)
        .map(|id| {
            std::thread::spawn(move || {
                for n in 0..50 {
                    infof!("writer {} line {}", id, n);
                }
            })
        })
        .collect();

    let swapper = std::thread::spawn(|| {
        for _ in 0..20 {
            let sink = MemorySink::new();
            let logger =
                Logger::new("debug", vec![Box::new(sink) as Box<dyn Sink>]).unwrap();
            fanlog::set(logger);
        }
    });

    for handle in writers {
        handle.join().unwrap();
    }
    swapper.join().unwrap();

    // Every line that reached the first logger is complete.
    for line in output.contents().lines() {
        assert!(line.contains("[INFO]"), "torn line: {line:?}");
        assert!(line.contains("writer"), "torn line: {line:?}");
    }
}
