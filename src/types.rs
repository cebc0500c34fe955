use crate::error::FetchError;

/// A puzzle day, `1..=25`.
pub type Day = u32;

/// Which days a run has to fetch, given the files already on disk and the
/// current date.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DownloadPlan {
    pub to_fetch: Vec<Day>,
    pub existing: Vec<Day>,
    pub locked: Vec<Day>,
}

#[derive(Debug)]
pub enum DayOutcome {
    Fetched { bytes: usize },
    Existing,
    Locked,
    Failed(FetchError),
}

impl DayOutcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self, DayOutcome::Existing | DayOutcome::Locked)
    }
}

/// One outcome per puzzle day, ordered by day.
#[derive(Debug, Default)]
pub struct DownloadReport {
    outcomes: Vec<(Day, DayOutcome)>,
}

impl DownloadReport {
    pub fn new(mut outcomes: Vec<(Day, DayOutcome)>) -> Self {
        outcomes.sort_by_key(|(day, _)| *day);
        Self { outcomes }
    }

    pub fn outcomes(&self) -> &[(Day, DayOutcome)] {
        &self.outcomes
    }

    pub fn outcome(&self, day: Day) -> Option<&DayOutcome> {
        self.outcomes
            .iter()
            .find(|(d, _)| *d == day)
            .map(|(_, outcome)| outcome)
    }

    pub fn fetched(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, DayOutcome::Fetched { .. }))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| o.is_skipped()).count()
    }

    pub fn failures(&self) -> usize {
        self.failed_days().len()
    }

    pub fn failed_days(&self) -> Vec<Day> {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, DayOutcome::Failed(_)))
            .map(|(day, _)| *day)
            .collect()
    }

    /// Turns a report with any failed day into `FetchError::Incomplete`.
    pub fn into_result(self) -> Result<Self, FetchError> {
        let failed = self.failed_days();
        if failed.is_empty() {
            Ok(self)
        } else {
            Err(FetchError::Incomplete { failed })
        }
    }
}
