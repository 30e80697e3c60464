use chrono::{DateTime, Duration, TimeZone, Utc};
use focusboard_core::{
    deserialize, deserialize_strict, serialize, Quadrant, Task, TaskDraft, TaskStatus, TimeEntry,
};
use proptest::prelude::*;
use std::collections::HashSet;

fn quadrant() -> impl Strategy<Value = Quadrant> {
    prop::sample::select(Quadrant::ALL.to_vec())
}

fn status() -> impl Strategy<Value = TaskStatus> {
    prop::sample::select(TaskStatus::ALL.to_vec())
}

fn score() -> impl Strategy<Value = Option<f64>> {
    prop::option::of((0u8..=10).prop_map(f64::from))
}

fn plain_task() -> impl Strategy<Value = Task> {
    (
        ".{0,24}",
        prop::option::of(".{0,48}"),
        (score(), score(), score()),
        any::<bool>(),
        quadrant(),
        status(),
        prop::option::of((0u32..10_000).prop_map(f64::from)),
    )
        .prop_map(
            |(title, description, (priority, importance, urgency), completed, quadrant, status, goal_time)| {
                let mut task = TaskDraft::new(title)
                    .quadrant(quadrant)
                    .status(status)
                    .build();
                task.description = description;
                task.priority = priority;
                task.importance = importance;
                task.urgency = urgency;
                task.completed = completed;
                task.goal_time = goal_time;
                task
            },
        )
}

proptest! {
    #[test]
    fn non_date_fields_round_trip(tasks in prop::collection::vec(plain_task(), 0..12)) {
        let text = serialize(&tasks).unwrap();
        prop_assert_eq!(deserialize(Some(&text)), tasks);
    }

    #[test]
    fn factory_ids_stay_unique(tasks in prop::collection::vec(plain_task(), 0..64)) {
        let ids: HashSet<_> = tasks.iter().map(|task| task.id).collect();
        prop_assert_eq!(ids.len(), tasks.len());
    }
}

fn at(seconds: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 10, 8, 0, 0).unwrap() + Duration::seconds(seconds)
}

#[test]
fn date_fields_round_trip_as_timestamps() {
    let mut task = TaskDraft::new("dated")
        .due_date(at(86_400) + Duration::milliseconds(250))
        .build();
    task.time_entries
        .push(TimeEntry::record(at(0), at(125), Some("first".to_string())));
    task.time_entries.push(TimeEntry::record(at(600), at(4_200), None));
    task.tracking_since = Some(at(5_000) + Duration::nanoseconds(1_234));

    let tasks = vec![task];
    let decoded = deserialize_strict(&serialize(&tasks).unwrap()).unwrap();

    assert_eq!(decoded, tasks);
    assert_eq!(decoded[0].time_entries[0].start_time, at(0));
    assert_eq!(decoded[0].time_spent(), 62);
    assert!(decoded[0].is_tracking());
}

#[test]
fn stored_time_spent_is_not_trusted() {
    let text = r#"[{
        "id": "11111111-2222-4333-8444-555555555555",
        "title": "drifted",
        "timeSpent": 500,
        "timeEntries": [{
            "id": "aaaaaaaa-2222-4333-8444-555555555555",
            "startTime": "2026-01-10T08:00:00Z",
            "endTime": "2026-01-10T08:10:00Z",
            "duration": 10
        }]
    }]"#;

    let tasks = deserialize_strict(text).unwrap();
    assert_eq!(tasks[0].time_spent(), 10);

    let rewritten: serde_json::Value = serde_json::from_str(&serialize(&tasks).unwrap()).unwrap();
    assert_eq!(rewritten[0]["timeSpent"], 10);
}

#[test]
fn strict_decode_reports_errors() {
    let err = deserialize_strict("[1, 2]").unwrap_err();
    assert!(err.to_string().starts_with("task collection codec error"));
}
