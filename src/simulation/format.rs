//! Grouping the event log into per-day report sheets.

use chrono::{NaiveDate, Timelike};

use crate::models::{DailyLog, DutyEvent, DutyStatus, LogEvent, StatusTotals};

/// Per-day accumulator while walking the event log.
struct DayBucket {
    date: NaiveDate,
    events: Vec<LogEvent>,
    minutes: [i64; 4],
}

fn status_slot(status: DutyStatus) -> usize {
    match status {
        DutyStatus::OffDuty => 0,
        DutyStatus::SleeperBerth => 1,
        DutyStatus::Driving => 2,
        DutyStatus::OnDutyNotDriving => 3,
    }
}

/// Groups the event log by the calendar date of each event's start time
/// and computes per-status hour totals.
///
/// An event is attributed wholly to its start day even when it crosses
/// midnight; days appear in first-occurrence order. Pure function of the
/// log: formatting the same events twice yields identical output.
pub fn build_daily_logs(events: &[DutyEvent]) -> Vec<DailyLog> {
    let mut buckets: Vec<DayBucket> = Vec::new();

    for event in events {
        let date = event.start_time.date();
        let index = match buckets.iter().position(|b| b.date == date) {
            Some(index) => index,
            None => {
                buckets.push(DayBucket {
                    date,
                    events: Vec::new(),
                    minutes: [0; 4],
                });
                buckets.len() - 1
            }
        };
        let bucket = &mut buckets[index];

        bucket.events.push(LogEvent {
            status: event.status,
            start_minutes: i64::from(event.start_time.time().num_seconds_from_midnight() / 60),
            duration_minutes: event.duration_minutes,
            remarks: event.remarks.clone(),
        });
        bucket.minutes[status_slot(event.status)] += event.duration_minutes;
    }

    buckets
        .into_iter()
        .map(|bucket| DailyLog {
            date: bucket.date.format("%m-%d-%Y").to_string(),
            events: bucket.events,
            totals: StatusTotals::from_minutes(
                bucket.minutes[0],
                bucket.minutes[1],
                bucket.minutes[2],
                bucket.minutes[3],
            ),
        })
        .collect()
}
