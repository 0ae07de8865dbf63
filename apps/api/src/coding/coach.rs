//! Live code coaching with a per-task check cap.
//!
//! The cap is enforced against the larger of the client-reported counter and
//! the server-side `CheckLedger`. The ledger only applies when the client
//! identifies itself with `candidateEmail` + `taskId`; anonymous requests
//! still fall back to the client counter alone (known trust gap).

use std::num::NonZeroUsize;
use std::sync::Mutex;

use lru::LruCache;
use tracing::info;

use crate::coding::prompts::{COACHING_SYSTEM, COACHING_USER_TEMPLATE};
use crate::errors::AppError;
use crate::llm_client::gateway::{Completion, LlmGateway, MAX_CODE_CHECKS};
use crate::llm_client::prompts::{fill_template, PromptBundle, CANDIDATE_FACING_TONE};

const COACHING_MAX_TOKENS: u32 = 500;
const COACHING_TEMPERATURE: f32 = 0.8;

/// Most (candidate, task) pairs tracked at once.
pub const LEDGER_CAPACITY: usize = 10_000;

/// One coaching request as seen by the server.
#[derive(Debug, Clone, Default)]
pub struct CodeCheckSession {
    pub code: String,
    pub task_description: String,
    pub starter_code: String,
    pub checks_used: u32,
    pub candidate_email: Option<String>,
    pub task_id: Option<String>,
}

impl CodeCheckSession {
    fn ledger_key(&self) -> Option<CheckKey> {
        let email = self.candidate_email.as_deref().map(str::trim)?;
        let task = self.task_id.as_deref().map(str::trim)?;
        if email.is_empty() || task.is_empty() {
            return None;
        }
        Some(CheckKey {
            candidate_email: email.to_lowercase(),
            task_id: task.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CheckKey {
    pub candidate_email: String,
    pub task_id: String,
}

/// Server-side count of coaching checks per (candidate, task).
///
/// In-memory and bounded: once `capacity` pairs are tracked the least recently
/// used one is evicted, and that pair falls back to the client counter.
pub struct CheckLedger {
    counts: Mutex<LruCache<CheckKey, u32>>,
}

impl CheckLedger {
    pub fn new() -> Self {
        Self::with_capacity(LEDGER_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            counts: Mutex::new(LruCache::new(capacity)),
        }
    }

    pub fn used(&self, key: &CheckKey) -> u32 {
        let counts = self.counts.lock().unwrap_or_else(|e| e.into_inner());
        counts.peek(key).copied().unwrap_or(0)
    }

    /// Takes one check slot for `key` under a single lock.
    ///
    /// `admit` sees the effective count (`max(stored, floor)`) before the slot
    /// is taken; if it rejects, the ledger is left untouched. Returns that count.
    pub fn reserve<E>(
        &self,
        key: &CheckKey,
        floor: u32,
        admit: impl FnOnce(u32) -> Result<(), E>,
    ) -> Result<u32, E> {
        let mut counts = self.counts.lock().unwrap_or_else(|e| e.into_inner());
        let used = counts.get(key).copied().unwrap_or(0).max(floor);
        admit(used)?;
        counts.put(key.clone(), used + 1);
        Ok(used)
    }

    /// Gives back a slot taken by `reserve` when the check did not happen.
    pub fn release(&self, key: &CheckKey) {
        let mut counts = self.counts.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(count) = counts.get_mut(key) {
            *count = count.saturating_sub(1);
        }
    }
}

impl Default for CheckLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct CoachingOutcome {
    pub completion: Completion,
    pub checks_remaining: u32,
}

pub fn build_coaching_prompt(session: &CodeCheckSession) -> PromptBundle {
    let user = fill_template(
        COACHING_USER_TEMPLATE,
        &[
            ("task_description", &session.task_description),
            ("starter_code", &session.starter_code),
            ("code", &session.code),
        ],
    );

    PromptBundle {
        system: format!("{COACHING_SYSTEM}\n\n{CANDIDATE_FACING_TONE}"),
        user,
    }
}

/// Validates the request, enforces the check cap, and asks the model for a hint.
pub async fn coach_code(
    llm: &LlmGateway,
    ledger: &CheckLedger,
    session: &CodeCheckSession,
) -> Result<CoachingOutcome, AppError> {
    if session.code.trim().is_empty() || session.task_description.trim().is_empty() {
        return Err(AppError::Validation(
            "Missing required fields: code and taskDescription".to_string(),
        ));
    }

    let key = session.ledger_key();
    let checks_used = match &key {
        Some(key) => ledger.reserve(key, session.checks_used, |used| {
            llm.ensure_check_available(used)
        })?,
        None => {
            llm.ensure_check_available(session.checks_used)?;
            session.checks_used
        }
    };

    let prompt = build_coaching_prompt(session);
    let completion = match llm
        .invoke(&prompt, COACHING_MAX_TOKENS, COACHING_TEMPERATURE)
        .await
    {
        Ok(completion) => completion,
        Err(err) => {
            if let Some(key) = &key {
                ledger.release(key);
            }
            return Err(err.into());
        }
    };

    if key.is_some() {
        info!("Code check recorded ({}/{MAX_CODE_CHECKS})", checks_used + 1);
    }

    Ok(CoachingOutcome {
        completion,
        checks_remaining: MAX_CODE_CHECKS - 1 - checks_used,
    })
}
