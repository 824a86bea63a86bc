//! Session persistence between CLI invocations.
//!
//! The session is parked as JSON in a state file; each command loads it,
//! ticks the timer pool with the real clock so auto-advances fire while the
//! user was away, applies the command, and writes it back.

use std::path::PathBuf;

use chrono::Utc;
use laya_core::{DemoConfig, Session};

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

pub struct Ctx {
    state_path: PathBuf,
    config_path: Option<PathBuf>,
}

impl Ctx {
    pub fn new(state: Option<PathBuf>, config: Option<PathBuf>) -> Self {
        let state_path =
            state.unwrap_or_else(|| std::env::temp_dir().join("laya-session.json"));
        Self {
            state_path,
            config_path: config,
        }
    }

    /// Current wall clock in epoch milliseconds, the session's time base.
    pub fn now_ms(&self) -> u64 {
        Utc::now().timestamp_millis().max(0) as u64
    }

    /// Load the parked session, or start a fresh one from the profile.
    /// Due timers are applied before the command sees the session.
    pub fn load(&self) -> Result<Session, Box<dyn std::error::Error>> {
        let mut session = match std::fs::read_to_string(&self.state_path) {
            Ok(json) => serde_json::from_str(&json)?,
            Err(_) => self.fresh()?,
        };
        session.tick(self.now_ms());
        Ok(session)
    }

    pub fn fresh(&self) -> Result<Session, Box<dyn std::error::Error>> {
        let config = match &self.config_path {
            Some(path) => DemoConfig::load(path)?,
            None => DemoConfig::default(),
        };
        Ok(Session::start_at(config, self.now_ms()))
    }

    pub fn save(&self, session: &Session) -> CliResult {
        let json = serde_json::to_string_pretty(session)?;
        std::fs::write(&self.state_path, json)?;
        Ok(())
    }

    pub fn reset(&self) -> CliResult {
        if self.state_path.exists() {
            std::fs::remove_file(&self.state_path)?;
        }
        Ok(())
    }
}
