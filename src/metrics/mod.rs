use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;

/// Counters accumulated by a [`crate::FitChecker`] session.
#[derive(Debug, Default, Clone)]
pub struct CheckerMetrics {
    submissions: u64,
    rejected_submissions: u64,
    selections: u64,
    fit_checks: u64,
    renders: u64,
    stale_draws: u64,
}

impl CheckerMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_submission(&mut self, accepted: bool) {
        if accepted {
            self.submissions = self.submissions.saturating_add(1);
        } else {
            self.rejected_submissions = self.rejected_submissions.saturating_add(1);
        }
    }

    pub fn record_selection(&mut self) {
        self.selections = self.selections.saturating_add(1);
    }

    pub fn record_fit_checks(&mut self, count: usize) {
        if count > 0 {
            self.fit_checks = self.fit_checks.saturating_add(count as u64);
        }
    }

    pub fn record_render(&mut self, stale: bool) {
        self.renders = self.renders.saturating_add(1);
        if stale {
            self.stale_draws = self.stale_draws.saturating_add(1);
        }
    }

    pub fn snapshot(&self) -> MetricSnapshot {
        MetricSnapshot {
            submissions: self.submissions,
            rejected_submissions: self.rejected_submissions,
            selections: self.selections,
            fit_checks: self.fit_checks,
            renders: self.renders,
            stale_draws: self.stale_draws,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub submissions: u64,
    pub rejected_submissions: u64,
    pub selections: u64,
    pub fit_checks: u64,
    pub renders: u64,
    pub stale_draws: u64,
}

impl MetricSnapshot {
    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, "checker_metrics", self.as_fields())
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("submissions".to_string(), json!(self.submissions));
        map.insert(
            "rejected_submissions".to_string(),
            json!(self.rejected_submissions),
        );
        map.insert("selections".to_string(), json!(self.selections));
        map.insert("fit_checks".to_string(), json!(self.fit_checks));
        map.insert("renders".to_string(), json!(self.renders));
        map.insert("stale_draws".to_string(), json!(self.stale_draws));
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_reflects_counters() {
        let mut metrics = CheckerMetrics::new();
        metrics.record_submission(true);
        metrics.record_submission(false);
        metrics.record_fit_checks(4);
        metrics.record_render(false);
        metrics.record_render(true);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.submissions, 1);
        assert_eq!(snapshot.rejected_submissions, 1);
        assert_eq!(snapshot.fit_checks, 4);
        assert_eq!(snapshot.renders, 2);
        assert_eq!(snapshot.stale_draws, 1);

        let event = snapshot.to_log_event("room_fit::metrics");
        assert_eq!(event.message, "checker_metrics");
        assert_eq!(event.fields["renders"], json!(2));
    }
}
