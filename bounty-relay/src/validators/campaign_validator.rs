use chrono::{DateTime, Utc};

use super::ValidationResult;

const MAX_TITLE_LEN: usize = 200;
const MAX_DESCRIPTION_LEN: usize = 5000;

pub struct CampaignValidator;

impl CampaignValidator {
    pub fn validate_create(
        title: &str,
        description: &str,
        host: &str,
        reward_pool: f64,
        deadline: Option<DateTime<Utc>>,
    ) -> ValidationResult {
        let mut result = ValidationResult::new();

        if title.trim().is_empty() {
            result.error("Title cannot be empty");
        } else if title.len() > MAX_TITLE_LEN {
            result.error(format!("Title exceeds {MAX_TITLE_LEN} characters"));
        }

        if description.len() > MAX_DESCRIPTION_LEN {
            result.error(format!("Description exceeds {MAX_DESCRIPTION_LEN} characters"));
        } else if description.trim().is_empty() {
            result.warning("Description is empty");
        }

        if host.trim().is_empty() {
            result.error("Host cannot be empty");
        }

        if !reward_pool.is_finite() || reward_pool < 0.0 {
            result.error("Reward pool must be a non-negative number");
        } else if reward_pool == 0.0 {
            result.warning("Reward pool is zero, creators will not be paid");
        }

        if let Some(deadline) = deadline {
            if deadline <= Utc::now() {
                result.error("Deadline is in the past");
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_valid_campaign_passes() {
        let result = CampaignValidator::validate_create(
            "Docs sprint",
            "Write the missing docs",
            "acme",
            500.0,
            Some(Utc::now() + Duration::days(7)),
        );
        assert!(result.valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_empty_title_and_host_rejected() {
        let result = CampaignValidator::validate_create("  ", "desc", "", 10.0, None);
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 2);
    }

    #[test]
    fn test_past_deadline_rejected() {
        let result = CampaignValidator::validate_create(
            "t",
            "d",
            "h",
            10.0,
            Some(Utc::now() - Duration::hours(1)),
        );
        assert!(!result.valid);
    }

    #[test]
    fn test_zero_reward_warns_but_passes() {
        let result = CampaignValidator::validate_create("t", "d", "h", 0.0, None);
        assert!(result.valid);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_negative_and_nan_reward_rejected() {
        assert!(!CampaignValidator::validate_create("t", "d", "h", -5.0, None).valid);
        assert!(!CampaignValidator::validate_create("t", "d", "h", f64::NAN, None).valid);
    }
}
