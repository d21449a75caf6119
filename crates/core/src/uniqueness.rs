//! Uniqueness Tracker
//!
//! Keeps a per-session record of which pool items have already been served and
//! hands out bundles of items the session has not seen recently. When a
//! category runs dry, only the older part of the history is released, so short
//! term repetition stays suppressed while long sessions can still cycle through
//! the pool.

use crate::pool::{Category, ContentBundle, Subject};
use chrono::{DateTime, Utc};
use rand::{Rng, RngCore, SeedableRng, rngs::StdRng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use tracing::{debug, info, warn};
use utoipa::ToSchema;

// --- Session State ---

/// Items a single session has been served, per category.
#[derive(Debug, Clone, Default)]
pub struct SessionHistory {
    themes: VecDeque<String>,
    scenarios: VecDeque<String>,
    activities: VecDeque<String>,
    contexts: VecDeque<String>,
    last_generated: Option<DateTime<Utc>>,
    generations: u32,
}

impl SessionHistory {
    /// Used items for `category`, oldest first.
    pub fn used(&self, category: Category) -> &VecDeque<String> {
        match category {
            Category::Themes => &self.themes,
            Category::Scenarios => &self.scenarios,
            Category::Activities => &self.activities,
            Category::Contexts => &self.contexts,
        }
    }

    fn used_mut(&mut self, category: Category) -> &mut VecDeque<String> {
        match category {
            Category::Themes => &mut self.themes,
            Category::Scenarios => &mut self.scenarios,
            Category::Activities => &mut self.activities,
            Category::Contexts => &mut self.contexts,
        }
    }

    pub fn last_generated(&self) -> Option<DateTime<Utc>> {
        self.last_generated
    }

    /// Number of bundles drawn since the session was created or last cleared.
    pub fn generations(&self) -> u32 {
        self.generations
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// All session histories, keyed by caller-supplied session id.
///
/// Owned by whoever wires up the engine; there is no process-wide instance.
#[derive(Debug, Clone, Default)]
pub struct SessionRegistry {
    sessions: HashMap<String, SessionHistory>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, session_id: &str) -> Option<&SessionHistory> {
        self.sessions.get(session_id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn history_mut(&mut self, session_id: &str) -> &mut SessionHistory {
        self.sessions.entry(session_id.to_string()).or_default()
    }
}

// --- Usage Statistics ---

/// Per-session counts reported by `UniquenessTracker::usage_stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SessionUsage {
    pub session_id: String,
    pub themes_used: usize,
    pub scenarios_used: usize,
    pub activities_used: usize,
    pub contexts_used: usize,
    pub generations: u32,
    pub last_generated: Option<DateTime<Utc>>,
}

/// A debugging snapshot of every tracked session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UsageStats {
    pub total_sessions: usize,
    /// Sorted by session id.
    pub sessions: Vec<SessionUsage>,
}

// --- Tracker ---

/// Draws not-recently-used content for a session.
///
/// Randomness comes from the injected generator, so a seeded tracker replays
/// exactly the same draws.
pub struct UniquenessTracker {
    registry: SessionRegistry,
    rng: Box<dyn RngCore + Send>,
}

impl UniquenessTracker {
    /// Creates a tracker over an existing registry with the given generator.
    pub fn new(registry: SessionRegistry, rng: Box<dyn RngCore + Send>) -> Self {
        Self { registry, rng }
    }

    /// A tracker with an empty registry and a reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SessionRegistry::new(), Box::new(StdRng::seed_from_u64(seed)))
    }

    /// A tracker with an empty registry seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(SessionRegistry::new(), Box::new(StdRng::from_os_rng()))
    }

    pub fn registry(&self) -> &SessionRegistry {
        &self.registry
    }

    /// Returns a bundle for `subject`, resolving unknown subjects to the
    /// default pool.
    pub fn unique_content(&mut self, subject: &str, session_id: &str) -> ContentBundle {
        self.unique_content_for(Subject::resolve(subject), session_id)
    }

    /// Returns a bundle of items `session_id` has not been served recently and
    /// records them in the session's history.
    ///
    /// Never fails: when a pool is too small to avoid repeats, items are reused.
    pub fn unique_content_for(&mut self, subject: Subject, session_id: &str) -> ContentBundle {
        let pool = subject.pool();
        let history = self.registry.history_mut(session_id);

        let mut bundle = ContentBundle::default();
        for category in Category::ALL {
            *bundle.items_mut(category) = draw(
                self.rng.as_mut(),
                pool.items(category),
                history.used_mut(category),
                category,
                session_id,
            );
        }

        history.last_generated = Some(Utc::now());
        history.generations += 1;
        bundle
    }

    /// Forgets everything `session_id` has been served.
    pub fn clear_session_history(&mut self, session_id: &str) {
        match self.registry.sessions.get_mut(session_id) {
            Some(history) => {
                history.clear();
                info!(session_id, "Session content history cleared");
            }
            None => debug!(session_id, "No content history to clear"),
        }
    }

    pub fn usage_stats(&self) -> UsageStats {
        let mut sessions: Vec<SessionUsage> = self
            .registry
            .sessions
            .iter()
            .map(|(id, history)| SessionUsage {
                session_id: id.clone(),
                themes_used: history.themes.len(),
                scenarios_used: history.scenarios.len(),
                activities_used: history.activities.len(),
                contexts_used: history.contexts.len(),
                generations: history.generations,
                last_generated: history.last_generated,
            })
            .collect();
        sessions.sort_by(|a, b| a.session_id.cmp(&b.session_id));

        UsageStats {
            total_sessions: sessions.len(),
            sessions,
        }
    }
}

impl Default for UniquenessTracker {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

/// Pool items not present in `used`, in pool order.
fn unused<'a>(pool: &[&'a str], used: &VecDeque<String>) -> Vec<&'a str> {
    pool.iter()
        .copied()
        .filter(|item| !used.iter().any(|u| u.as_str() == *item))
        .collect()
}

/// Samples one category for one request and updates its used list.
fn draw<R: Rng + ?Sized>(
    rng: &mut R,
    pool: &[&str],
    used: &mut VecDeque<String>,
    category: Category,
    session_id: &str,
) -> Vec<String> {
    let policy = category.policy();
    let mut available = unused(pool, used);

    // Release older history, keeping only the most recent slice.
    if (available.len() < policy.recycle_below || available.len() < policy.sample_size)
        && used.len() > policy.keep_on_recycle
    {
        let released = used.len() - policy.keep_on_recycle;
        used.drain(..released);
        available = unused(pool, used);
        debug!(
            session_id,
            category = category.as_str(),
            released,
            available = available.len(),
            "Content pool nearly exhausted, recycling older history"
        );
    }

    let mut picked: Vec<&str> = available
        .choose_multiple(rng, policy.sample_size)
        .copied()
        .collect();

    if picked.len() < policy.sample_size && !pool.is_empty() {
        warn!(
            session_id,
            category = category.as_str(),
            pool_size = pool.len(),
            "Not enough unused content, sampling from the full pool"
        );
        let fallback: Vec<&str> = pool
            .iter()
            .copied()
            .filter(|item| !picked.contains(item))
            .collect();
        let missing = policy.sample_size - picked.len();
        picked.extend(fallback.choose_multiple(rng, missing).copied());

        // Pool smaller than one sample: repeats within the draw.
        while picked.len() < policy.sample_size {
            match pool.choose(rng) {
                Some(item) => picked.push(*item),
                None => break,
            }
        }
    }

    used.extend(picked.iter().map(|item| item.to_string()));
    if used.len() > policy.history_cap {
        let overflow = used.len() - policy.history_cap;
        used.drain(..overflow);
    }

    picked.into_iter().map(str::to_string).collect()
}
