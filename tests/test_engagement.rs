mod common;

use common::setup;
use readnext::domain::error::DomainError;
use readnext::domain::values::engagement::EngagementSummary;
use readnext::domain::values::event_type::EventType;

#[test]
fn test_summary_aggregates_events() {
    let rn = setup();
    let a = rn.add_article("Article", "Body", None).unwrap();

    rn.log_event(a.id, EventType::View, None, None).unwrap();
    rn.log_event(a.id, EventType::View, Some(7), None).unwrap();
    rn.log_event(a.id, EventType::Like, Some(7), None).unwrap();
    rn.log_event(a.id, EventType::TimeSpent, Some(7), Some(45_000)).unwrap();
    rn.log_event(a.id, EventType::TimeSpent, None, Some(30_000)).unwrap();

    let summary = rn.engagement_summary(a.id).unwrap();
    assert_eq!(summary, EngagementSummary::new(2, 1, 75_000));
}

#[test]
fn test_summary_for_untouched_article_is_zero() {
    let rn = setup();
    let a = rn.add_article("Quiet", "Nobody reads this", None).unwrap();
    assert_eq!(rn.engagement_summary(a.id).unwrap(), EngagementSummary::default());
}

#[test]
fn test_durations_on_views_do_not_count_as_dwell_time() {
    let rn = setup();
    let a = rn.add_article("Article", "Body", None).unwrap();
    rn.log_event(a.id, EventType::View, None, Some(5_000)).unwrap();
    assert_eq!(rn.engagement_summary(a.id).unwrap().time_spent_ms, 0);
}

#[test]
fn test_events_listed_newest_first() {
    let rn = setup();
    let a = rn.add_article("Article", "Body", None).unwrap();
    let first = rn.log_event(a.id, EventType::View, None, None).unwrap();
    let second = rn.log_event(a.id, EventType::Like, None, None).unwrap();

    let events = rn.recent_events(a.id, 10).unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].id, second.id);
    assert_eq!(events[1].id, first.id);
    assert_eq!(events[0].event_type, EventType::Like);

    assert_eq!(rn.recent_events(a.id, 1).unwrap().len(), 1);
}

#[test]
fn test_time_spent_requires_duration() {
    let rn = setup();
    let a = rn.add_article("Article", "Body", None).unwrap();
    let err = rn.log_event(a.id, EventType::TimeSpent, None, None).unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));
}

#[test]
fn test_negative_duration_rejected() {
    let rn = setup();
    let a = rn.add_article("Article", "Body", None).unwrap();
    let err = rn.log_event(a.id, EventType::TimeSpent, None, Some(-1)).unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));
}

#[test]
fn test_event_for_unknown_article_rejected() {
    let rn = setup();
    let err = rn.log_event(404, EventType::View, None, None).unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}
