use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use storylex_algo::{SchedulerConfig, DEFAULT_LEARNED_STREAK_THRESHOLD, DEFAULT_PRACTICE_SET_SIZE};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    /// Learner profile document (the saved-word list).
    pub profile_path: PathBuf,
    /// Read-only story/chapter content document.
    pub content_path: PathBuf,
    pub learned_streak_threshold: u32,
    pub practice_set_size: usize,
}

impl Config {
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(3000);

        let host = std::env::var("HOST")
            .ok()
            .and_then(|value| value.parse::<IpAddr>().ok())
            .unwrap_or(IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0)));

        let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let profile_path = std::env::var("PROFILE_PATH")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./data/profile.json"));

        let content_path = std::env::var("CONTENT_PATH")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./data/content.json"));

        let learned_streak_threshold = std::env::var("LEARNED_STREAK_THRESHOLD")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .unwrap_or(DEFAULT_LEARNED_STREAK_THRESHOLD);

        let practice_set_size = std::env::var("PRACTICE_SET_SIZE")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|value| *value > 0)
            .unwrap_or(DEFAULT_PRACTICE_SET_SIZE);

        Self {
            host,
            port,
            log_level,
            profile_path,
            content_path,
            learned_streak_threshold,
            practice_set_size,
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn scheduler_config(&self) -> SchedulerConfig {
        SchedulerConfig {
            learned_streak_threshold: self.learned_streak_threshold,
            practice_set_size: self.practice_set_size,
        }
    }
}
