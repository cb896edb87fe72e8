use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Mutex;
use uuid::Uuid;

use crate::utils::database::StoreHealth;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Draft,
    Active,
    Closed,
}

impl CampaignStatus {
    /// Campaigns only move forward: draft -> active -> closed.
    pub fn can_transition(self, next: CampaignStatus) -> bool {
        matches!(
            (self, next),
            (CampaignStatus::Draft, CampaignStatus::Active)
                | (CampaignStatus::Active, CampaignStatus::Closed)
        )
    }
}

impl std::fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CampaignStatus::Draft => write!(f, "draft"),
            CampaignStatus::Active => write!(f, "active"),
            CampaignStatus::Closed => write!(f, "closed"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Campaign {
    pub id: String,
    pub title: String,
    pub description: String,
    pub host: String,
    pub reward_pool: f64,
    pub status: CampaignStatus,
    pub deadline: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Campaign {
    pub fn new(
        title: String,
        description: String,
        host: String,
        reward_pool: f64,
        deadline: Option<DateTime<Utc>>,
    ) -> Self {
        let now = Utc::now();
        Campaign {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            host,
            reward_pool,
            status: CampaignStatus::Draft,
            deadline,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Submission {
    pub id: String,
    pub campaign_id: String,
    pub creator: String,
    pub content_url: String,
    pub notes: Option<String>,
    pub status: String,
    pub score: Option<u32>,
    pub submitted_at: DateTime<Utc>,
    pub scored_at: Option<DateTime<Utc>>,
}

impl Submission {
    pub fn new(
        campaign_id: String,
        creator: String,
        content_url: String,
        notes: Option<String>,
    ) -> Self {
        Submission {
            id: Uuid::new_v4().to_string(),
            campaign_id,
            creator,
            content_url,
            notes,
            status: "pending".to_string(),
            score: None,
            submitted_at: Utc::now(),
            scored_at: None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WalletLink {
    pub id: String,
    pub user: String,
    pub address: String,
    pub chain: String,
    pub connected_at: DateTime<Utc>,
}

impl WalletLink {
    pub fn new(user: String, address: String, chain: String) -> Self {
        WalletLink {
            id: Uuid::new_v4().to_string(),
            user,
            address,
            chain,
            connected_at: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Metrics {
    pub campaigns_created: u64,
    pub submissions_received: u64,
    pub submissions_scored: u64,
    pub wallets_connected: u64,
    pub reports_generated: u64,
    pub last_updated: DateTime<Utc>,
}

pub struct Storage {
    data_dir: String,
    campaigns: Mutex<Vec<Campaign>>,
    submissions: Mutex<Vec<Submission>>,
    wallets: Mutex<Vec<WalletLink>>,
    metrics: Mutex<Metrics>,
}

impl Storage {
    pub fn new(data_dir: &str) -> Result<Self> {
        fs::create_dir_all(data_dir)?;

        let storage = Storage {
            data_dir: data_dir.to_string(),
            campaigns: Mutex::new(Vec::new()),
            submissions: Mutex::new(Vec::new()),
            wallets: Mutex::new(Vec::new()),
            metrics: Mutex::new(Metrics {
                campaigns_created: 0,
                submissions_received: 0,
                submissions_scored: 0,
                wallets_connected: 0,
                reports_generated: 0,
                last_updated: Utc::now(),
            }),
        };

        storage.load_data()?;
        Ok(storage)
    }

    fn collection_file(&self, name: &str) -> String {
        format!("{}/{}.json", self.data_dir, name)
    }

    fn load_data(&self) -> Result<()> {
        let campaigns_file = self.collection_file("campaigns");
        if Path::new(&campaigns_file).exists() {
            let data = fs::read_to_string(&campaigns_file)?;
            *self.campaigns.lock().unwrap() = serde_json::from_str(&data)?;
        }

        let submissions_file = self.collection_file("submissions");
        if Path::new(&submissions_file).exists() {
            let data = fs::read_to_string(&submissions_file)?;
            *self.submissions.lock().unwrap() = serde_json::from_str(&data)?;
        }

        let wallets_file = self.collection_file("wallets");
        if Path::new(&wallets_file).exists() {
            let data = fs::read_to_string(&wallets_file)?;
            *self.wallets.lock().unwrap() = serde_json::from_str(&data)?;
        }

        let metrics_file = self.collection_file("metrics");
        if Path::new(&metrics_file).exists() {
            let data = fs::read_to_string(&metrics_file)?;
            *self.metrics.lock().unwrap() = serde_json::from_str(&data)?;
        }

        Ok(())
    }

    pub fn save_data(&self) -> Result<()> {
        let campaigns = self.campaigns.lock().unwrap();
        fs::write(
            self.collection_file("campaigns"),
            serde_json::to_string_pretty(&*campaigns)?,
        )?;

        let submissions = self.submissions.lock().unwrap();
        fs::write(
            self.collection_file("submissions"),
            serde_json::to_string_pretty(&*submissions)?,
        )?;

        let wallets = self.wallets.lock().unwrap();
        fs::write(
            self.collection_file("wallets"),
            serde_json::to_string_pretty(&*wallets)?,
        )?;

        let mut metrics = self.metrics.lock().unwrap();
        metrics.last_updated = Utc::now();
        fs::write(
            self.collection_file("metrics"),
            serde_json::to_string_pretty(&*metrics)?,
        )?;

        Ok(())
    }

    pub fn save_campaign(&self, campaign: Campaign) -> Result<()> {
        self.campaigns.lock().unwrap().push(campaign);
        self.save_data()
    }

    pub fn get_campaign(&self, id: &str) -> Option<Campaign> {
        self.campaigns
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }

    pub fn get_campaigns(&self, status: Option<CampaignStatus>) -> Vec<Campaign> {
        let campaigns = self.campaigns.lock().unwrap();
        campaigns
            .iter()
            .filter(|c| status.map(|s| c.status == s).unwrap_or(true))
            .cloned()
            .collect()
    }

    /// Apply field updates to a campaign. A status change must be a legal
    /// forward transition.
    pub fn update_campaign(
        &self,
        id: &str,
        title: Option<String>,
        description: Option<String>,
        status: Option<CampaignStatus>,
    ) -> Result<Campaign> {
        let mut campaigns = self.campaigns.lock().unwrap();
        let campaign = campaigns
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| anyhow!("Campaign not found: {}", id))?;

        if let Some(next) = status {
            if !campaign.status.can_transition(next) {
                return Err(anyhow!(
                    "Invalid status transition: {} -> {}",
                    campaign.status,
                    next
                ));
            }
            campaign.status = next;
        }
        if let Some(title) = title {
            campaign.title = title;
        }
        if let Some(description) = description {
            campaign.description = description;
        }
        campaign.updated_at = Utc::now();
        let updated = campaign.clone();
        drop(campaigns);

        self.save_data()?;
        Ok(updated)
    }

    pub fn delete_campaign(&self, id: &str) -> Result<()> {
        let mut campaigns = self.campaigns.lock().unwrap();
        let before = campaigns.len();
        campaigns.retain(|c| c.id != id);
        if campaigns.len() == before {
            return Err(anyhow!("Campaign not found: {}", id));
        }
        drop(campaigns);

        // submissions of a deleted campaign are orphans, drop them too
        self.submissions
            .lock()
            .unwrap()
            .retain(|s| s.campaign_id != id);
        self.save_data()
    }

    pub fn save_submission(&self, submission: Submission) -> Result<()> {
        self.submissions.lock().unwrap().push(submission);
        self.save_data()
    }

    pub fn get_submission(&self, id: &str) -> Option<Submission> {
        self.submissions
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .cloned()
    }

    pub fn get_submissions_for_campaign(&self, campaign_id: &str) -> Vec<Submission> {
        self.submissions
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.campaign_id == campaign_id)
            .cloned()
            .collect()
    }

    pub fn get_all_submissions(&self) -> Vec<Submission> {
        self.submissions.lock().unwrap().clone()
    }

    /// Record a score. Re-scoring overwrites the previous score and timestamp.
    pub fn score_submission(&self, id: &str, score: u32) -> Result<Submission> {
        let mut submissions = self.submissions.lock().unwrap();
        let submission = submissions
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| anyhow!("Submission not found: {}", id))?;

        submission.score = Some(score);
        submission.scored_at = Some(Utc::now());
        submission.status = "scored".to_string();
        let updated = submission.clone();
        drop(submissions);

        self.save_data()?;
        Ok(updated)
    }

    pub fn save_wallet_link(&self, wallet: WalletLink) -> Result<()> {
        let mut wallets = self.wallets.lock().unwrap();
        let duplicate = wallets.iter().any(|w| {
            w.user == wallet.user && w.address == wallet.address && w.chain == wallet.chain
        });
        if duplicate {
            return Err(anyhow!(
                "Wallet {} on {} is already connected for {}",
                wallet.address,
                wallet.chain,
                wallet.user
            ));
        }
        wallets.push(wallet);
        drop(wallets);
        self.save_data()
    }

    pub fn get_wallets_for_user(&self, user: &str) -> Vec<WalletLink> {
        self.wallets
            .lock()
            .unwrap()
            .iter()
            .filter(|w| w.user == user)
            .cloned()
            .collect()
    }

    pub fn delete_wallet_link(&self, id: &str) -> Result<()> {
        let mut wallets = self.wallets.lock().unwrap();
        let before = wallets.len();
        wallets.retain(|w| w.id != id);
        if wallets.len() == before {
            return Err(anyhow!("Wallet link not found: {}", id));
        }
        drop(wallets);
        self.save_data()
    }

    pub fn update_metrics(&self, field: &str, value: u64) -> Result<()> {
        let mut metrics = self.metrics.lock().unwrap();
        match field {
            "campaigns_created" => metrics.campaigns_created += value,
            "submissions_received" => metrics.submissions_received += value,
            "submissions_scored" => metrics.submissions_scored += value,
            "wallets_connected" => metrics.wallets_connected += value,
            "reports_generated" => metrics.reports_generated += value,
            _ => return Err(anyhow!("Unknown metric field: {}", field)),
        }
        drop(metrics);
        self.save_data()
    }

    pub fn get_metrics(&self) -> Metrics {
        self.metrics.lock().unwrap().clone()
    }

    pub fn check_health(&self) -> StoreHealth {
        let test_file = format!("{}/health_check.tmp", self.data_dir);
        let is_healthy = fs::write(&test_file, "health_check").is_ok()
            && fs::remove_file(&test_file).is_ok();

        StoreHealth {
            is_healthy,
            total_campaigns: self.campaigns.lock().unwrap().len() as u32,
            total_submissions: self.submissions.lock().unwrap().len() as u32,
            total_wallets: self.wallets.lock().unwrap().len() as u32,
            error_count: if is_healthy { 0 } else { 1 },
            data_integrity_ok: is_healthy,
            checked_at: Utc::now(),
        }
    }
}
