use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use crate::infrastructure::storage::file_storage::{Storage, Submission};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub creator: String,
    pub total_score: u64,
    pub scored_submissions: u32,
    pub first_submission_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leaderboard {
    /// None for the platform-wide board.
    pub campaign_id: Option<String>,
    pub entries: Vec<LeaderboardEntry>,
    pub generated_at: DateTime<Utc>,
}

/// Computes standings on demand from scored submissions. Nothing is cached or
/// persisted; every request recomputes from the store.
pub struct LeaderboardService {
    storage: Arc<Storage>,
}

impl LeaderboardService {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }

    pub fn campaign_leaderboard(&self, campaign_id: &str) -> Result<Leaderboard> {
        if self.storage.get_campaign(campaign_id).is_none() {
            return Err(anyhow!("Campaign not found: {}", campaign_id));
        }
        let submissions = self.storage.get_submissions_for_campaign(campaign_id);
        Ok(Leaderboard {
            campaign_id: Some(campaign_id.to_string()),
            entries: compute_standings(&submissions),
            generated_at: Utc::now(),
        })
    }

    pub fn platform_leaderboard(&self) -> Leaderboard {
        let submissions = self.storage.get_all_submissions();
        Leaderboard {
            campaign_id: None,
            entries: compute_standings(&submissions),
            generated_at: Utc::now(),
        }
    }
}

/// Aggregate scored submissions per creator and rank them: total score
/// descending, ties broken by earliest first submission, then by creator name
/// for determinism. Ranks are dense, equal totals share a rank.
pub fn compute_standings(submissions: &[Submission]) -> Vec<LeaderboardEntry> {
    struct Tally {
        total_score: u64,
        scored_submissions: u32,
        first_submission_at: DateTime<Utc>,
    }

    let mut tallies: HashMap<String, Tally> = HashMap::new();

    for submission in submissions {
        let Some(score) = submission.score else {
            continue;
        };
        let tally = tallies
            .entry(submission.creator.clone())
            .or_insert(Tally {
                total_score: 0,
                scored_submissions: 0,
                first_submission_at: submission.submitted_at,
            });
        tally.total_score += u64::from(score);
        tally.scored_submissions += 1;
        if submission.submitted_at < tally.first_submission_at {
            tally.first_submission_at = submission.submitted_at;
        }
    }

    let mut entries: Vec<LeaderboardEntry> = tallies
        .into_iter()
        .map(|(creator, tally)| LeaderboardEntry {
            rank: 0,
            creator,
            total_score: tally.total_score,
            scored_submissions: tally.scored_submissions,
            first_submission_at: tally.first_submission_at,
        })
        .collect();

    entries.sort_by(|a, b| {
        b.total_score
            .cmp(&a.total_score)
            .then(a.first_submission_at.cmp(&b.first_submission_at))
            .then(a.creator.cmp(&b.creator))
    });

    let mut rank = 0;
    let mut previous_score = None;
    for entry in entries.iter_mut() {
        if previous_score != Some(entry.total_score) {
            rank += 1;
            previous_score = Some(entry.total_score);
        }
        entry.rank = rank;
    }

    entries
}
