//! A results folder paired with its statistics

use crate::manager::StatisticsManager;
use std::path::{Path, PathBuf};

/// Associates a display name and a results directory with the
/// [`StatisticsManager`] that analyzes it. Front ends keep a list of these,
/// one per simulation output folder.
pub struct FolderStatistics {
    name: String,
    path: PathBuf,
    manager: StatisticsManager,
}

impl FolderStatistics {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<PathBuf>,
        manager: StatisticsManager,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            manager,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn manager(&self) -> &StatisticsManager {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut StatisticsManager {
        &mut self.manager
    }

    /// Point every registered statistic at this folder.
    pub fn bind_base_path(&mut self) {
        let path = self.path.clone();
        for name in self.manager.names() {
            if let Ok(statistics) = self.manager.get_mut(&name) {
                statistics.set_base_path(&path);
            }
        }
    }
}
