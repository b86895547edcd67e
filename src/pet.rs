use std::collections::VecDeque;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::locale::Locale;

pub const MAX_LOG_ENTRIES: usize = 20;

const STAT_MIN: i32 = 0;
const STAT_MAX: i32 = 100;
const HUNGRY_AT: i32 = 80;
const SLEEPY_AT: i32 = 20;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PetError {
    #[error("unknown action: {0:?}")]
    UnknownAction(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Full,
    Excited,
    Sleepy,
    Hungry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetAction {
    Feed,
    Play,
    Sleep,
    Dance,
}

impl PetAction {
    pub const ALL: [PetAction; 4] = [
        PetAction::Feed,
        PetAction::Play,
        PetAction::Sleep,
        PetAction::Dance,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PetAction::Feed => "feed",
            PetAction::Play => "play",
            PetAction::Sleep => "sleep",
            PetAction::Dance => "dance",
        }
    }

    /// Mood the action sets before hunger/energy thresholds are checked.
    pub fn base_mood(self) -> Mood {
        match self {
            PetAction::Feed => Mood::Full,
            PetAction::Play => Mood::Excited,
            PetAction::Sleep => Mood::Sleepy,
            PetAction::Dance => Mood::Happy,
        }
    }
}

impl FromStr for PetAction {
    type Err = PetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PetAction::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| PetError::UnknownAction(s.to_string()))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PetState {
    pub mood: Mood,
    pub energy: i32,
    pub hunger: i32,
    pub last_updated: String,
}

impl PetState {
    /// The state every fresh service starts from: happy, energy 80, hunger 20.
    pub fn initial(now: DateTime<Utc>) -> Self {
        Self {
            mood: Mood::Happy,
            energy: 80,
            hunger: 20,
            last_updated: iso_timestamp(now),
        }
    }

    /// Applies the action's base rule, then the threshold override.
    /// Hunger wins over energy when both thresholds are crossed.
    pub fn apply(&mut self, action: PetAction, now: DateTime<Utc>) {
        match action {
            PetAction::Feed => {
                self.hunger = clamp_stat(self.hunger - 20);
                self.energy = clamp_stat(self.energy + 5);
            }
            PetAction::Play => {
                self.energy = clamp_stat(self.energy - 15);
                self.hunger = clamp_stat(self.hunger + 10);
            }
            PetAction::Sleep => {
                self.energy = STAT_MAX;
            }
            PetAction::Dance => {
                self.hunger = clamp_stat(self.hunger + 15);
            }
        }

        self.mood = if self.hunger >= HUNGRY_AT {
            Mood::Hungry
        } else if self.energy <= SLEEPY_AT {
            Mood::Sleepy
        } else {
            action.base_mood()
        };
        self.last_updated = iso_timestamp(now);
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub action: String,
    pub result: String,
    pub timestamp: String,
}

/// Newest-first record of applied actions, bounded to `capacity` entries.
#[derive(Debug, Clone)]
pub struct ActionLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
    evicted: u64,
}

impl Default for ActionLog {
    fn default() -> Self {
        Self::with_capacity(MAX_LOG_ENTRIES)
    }
}

impl ActionLog {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
            evicted: 0,
        }
    }

    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push_front(entry);
        while self.entries.len() > self.capacity {
            self.entries.pop_back();
            self.evicted = self.evicted.saturating_add(1);
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Entries dropped off the tail since the log was created.
    pub fn evicted(&self) -> u64 {
        self.evicted
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.iter().cloned().collect()
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub state: PetState,
    pub message: String,
}

/// Owns the single pet and its action log for the lifetime of the process.
pub struct PetService {
    state: PetState,
    log: ActionLog,
    locale: Locale,
}

impl PetService {
    pub fn new(locale: Locale) -> Self {
        Self {
            state: PetState::initial(Utc::now()),
            log: ActionLog::default(),
            locale,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn state(&self) -> PetState {
        self.state.clone()
    }

    pub fn log(&self) -> Vec<LogEntry> {
        self.log.entries()
    }

    pub fn apply_action(&mut self, raw: &str) -> Result<ActionOutcome, PetError> {
        self.apply_action_at(raw, Utc::now())
    }

    pub fn apply_action_at(
        &mut self,
        raw: &str,
        now: DateTime<Utc>,
    ) -> Result<ActionOutcome, PetError> {
        let action: PetAction = raw.parse()?;
        self.state.apply(action, now);

        let message = self.locale.action_message(action).to_string();
        let evicted_before = self.log.evicted();
        self.log.push(LogEntry {
            action: action.as_str().to_string(),
            result: message.clone(),
            timestamp: self.state.last_updated.clone(),
        });
        if self.log.evicted() > evicted_before {
            tracing::debug!(
                "[petbox] Log at capacity {}, dropped oldest entry (total dropped: {})",
                self.log.capacity(),
                self.log.evicted()
            );
        }

        Ok(ActionOutcome {
            state: self.state.clone(),
            message,
        })
    }

    #[cfg(test)]
    pub(crate) fn with_state(state: PetState) -> Self {
        Self {
            state,
            log: ActionLog::default(),
            locale: Locale::En,
        }
    }
}

pub fn iso_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn clamp_stat(value: i32) -> i32 {
    value.clamp(STAT_MIN, STAT_MAX)
}
