use std::sync::Arc;
use std::time::{Instant, SystemTime};

use storylex_algo::SchedulerConfig;

use crate::store::{ContentStore, ProfileStore};

#[derive(Clone)]
pub struct AppState {
    started_at: Instant,
    started_at_system: SystemTime,
    profile: Arc<ProfileStore>,
    content: Arc<ContentStore>,
    scheduler: SchedulerConfig,
}

impl AppState {
    pub fn new(
        profile: Arc<ProfileStore>,
        content: Arc<ContentStore>,
        scheduler: SchedulerConfig,
    ) -> Self {
        Self {
            started_at: Instant::now(),
            started_at_system: SystemTime::now(),
            profile,
            content,
            scheduler,
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    pub fn started_at_system(&self) -> SystemTime {
        self.started_at_system
    }

    pub fn profile(&self) -> &ProfileStore {
        &self.profile
    }

    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    pub fn scheduler(&self) -> &SchedulerConfig {
        &self.scheduler
    }
}
