//! Name-keyed registry of statistics

use crate::error::StatsError;
use crate::presenter::PresenterManager;
use crate::statistics::Statistics;
use std::collections::HashMap;
use tracing::warn;

/// Owns a set of statistics, each under a unique name.
#[derive(Default)]
pub struct StatisticsManager {
    statistics: HashMap<String, Box<dyn Statistics>>,
}

impl StatisticsManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a statistic under a unique name.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        statistics: Box<dyn Statistics>,
    ) -> Result<(), StatsError> {
        let name = name.into();
        if self.statistics.contains_key(&name) {
            return Err(StatsError::DuplicateName(name));
        }
        self.statistics.insert(name, statistics);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&dyn Statistics, StatsError> {
        self.statistics
            .get(name)
            .map(|s| s.as_ref())
            .ok_or_else(|| StatsError::NotFound(name.to_string()))
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut (dyn Statistics + 'static), StatsError> {
        self.statistics
            .get_mut(name)
            .map(|s| s.as_mut())
            .ok_or_else(|| StatsError::NotFound(name.to_string()))
    }

    pub fn remove(&mut self, name: &str) -> Result<Box<dyn Statistics>, StatsError> {
        self.statistics
            .remove(name)
            .ok_or_else(|| StatsError::NotFound(name.to_string()))
    }

    /// Registered names, sorted for deterministic iteration.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.statistics.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.statistics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statistics.is_empty()
    }

    pub fn clear(&mut self) {
        self.statistics.clear();
    }

    /// Process one named statistic; `NotFound` when the name is unknown.
    pub fn process(&mut self, name: &str) -> Result<(), StatsError> {
        self.get_mut(name)?.process_all_replications()
    }

    /// Process every registered statistic.
    ///
    /// A failure in one statistic is logged and does not abort the others;
    /// the names of the failed statistics are returned.
    pub fn process_all(&mut self) -> Vec<String> {
        let mut failed = Vec::new();
        for name in self.names() {
            if let Some(statistics) = self.statistics.get_mut(&name) {
                if let Err(e) = statistics.process_all_replications() {
                    warn!(statistics = %name, error = %e, "statistics processing failed");
                    failed.push(name);
                }
            }
        }
        failed
    }

    /// Populate views for one named statistic.
    ///
    /// `presenters` mirrors the front end being optional at the call site:
    /// passing `None` is a configuration error, not a silent no-op.
    pub fn setup_presenters(
        &self,
        name: &str,
        presenters: Option<&mut dyn PresenterManager>,
    ) -> Result<(), StatsError> {
        let presenters = presenters.ok_or(StatsError::MissingPresenter)?;
        self.get(name)?.setup_presenters(presenters)
    }
}
