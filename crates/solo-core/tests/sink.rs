use std::fs;

use solo_core::{EventKind, FileLogSink, LogSink, NullSink, RunId, TaskEvent};

#[test]
fn file_sink_writes_banners_and_timestamped_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs").join("scheduler.log");

    {
        let sink = FileLogSink::open(&path).unwrap();
        assert_eq!(sink.path(), path.as_path());
        sink.write_line("TaskScheduler started").unwrap();
        sink.write_line("TaskScheduler stopped").unwrap();
    }

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<_> = text.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("===== Log Open: "));
    assert!(lines[1].starts_with('[') && lines[1].ends_with("] TaskScheduler started"));
    assert!(lines[2].ends_with("] TaskScheduler stopped"));
    assert_eq!(lines[3], "===== Log Close =====");
}

#[test]
fn file_sink_appends_across_opens() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scheduler.log");

    for _ in 0..2 {
        let sink = FileLogSink::open(&path).unwrap();
        sink.write_line("hello").unwrap();
    }

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text.matches("===== Log Open").count(), 2);
    assert_eq!(text.matches("] hello").count(), 2);
}

#[test]
fn null_sink_accepts_everything() {
    assert!(NullSink.write_line("anything").is_ok());
}

#[test]
fn event_display_matches_sink_format() {
    let run = RunId::new();
    assert_eq!(
        TaskEvent::started("backup", run).to_string(),
        "Task=backup Event=Started"
    );
    assert_eq!(
        TaskEvent::new(EventKind::Failed, "backup", "disk full", run).to_string(),
        "Task=backup Event=Failed Msg=disk full"
    );
}

#[test]
fn event_serializes_for_front_ends() {
    let event = TaskEvent::new(EventKind::Cancelled, "stats", "stopped", RunId::new());
    let json = serde_json::to_value(&event).unwrap();

    assert_eq!(json["kind"], "Cancelled");
    assert_eq!(json["task_name"], "stats");
    assert_eq!(json["message"], "stopped");

    let back: TaskEvent = serde_json::from_value(json).unwrap();
    assert_eq!(back, event);
}
