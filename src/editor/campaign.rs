//! Paragraph and quota period editing for campaigns.

use serde::Deserialize;

use super::{ordered, DraftAction};
use crate::errors::AppError;
use crate::models::{Campaign, QuotaPeriod};

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum CampaignAction {
    AddParagraph {
        #[serde(default)]
        text: String,
    },
    UpdateParagraph { id: String, text: String },
    RemoveParagraph { id: String },
    MoveParagraphUp { index: usize },
    MoveParagraphDown { index: usize },
    AddQuotaPeriod {
        #[serde(default)]
        date: String,
        #[serde(default)]
        quota_per_period: u32,
        #[serde(default)]
        quota_per_user: u32,
    },
    UpdateQuotaPeriod { period: QuotaPeriod },
    RemoveQuotaPeriod { id: String },
}

impl DraftAction<Campaign> for CampaignAction {
    fn apply(self, campaign: &mut Campaign) -> Result<bool, AppError> {
        let changed = match self {
            CampaignAction::AddParagraph { text } => {
                campaign.add_paragraph(text);
                true
            }
            CampaignAction::UpdateParagraph { id, text } => campaign.update_paragraph(&id, text),
            CampaignAction::RemoveParagraph { id } => campaign.remove_paragraph(&id),
            CampaignAction::MoveParagraphUp { index } => {
                ordered::move_up(&mut campaign.paragraphs, index)
            }
            CampaignAction::MoveParagraphDown { index } => {
                ordered::move_down(&mut campaign.paragraphs, index)
            }
            CampaignAction::AddQuotaPeriod {
                date,
                quota_per_period,
                quota_per_user,
            } => {
                campaign.add_quota_period(date, quota_per_period, quota_per_user);
                true
            }
            CampaignAction::UpdateQuotaPeriod { period } => {
                let id = period.id.clone();
                campaign.update_quota_period(&id, |p| *p = period)
            }
            CampaignAction::RemoveQuotaPeriod { id } => campaign.remove_quota_period(&id),
        };
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Entity;
    use serde_json::json;

    fn apply(campaign: &mut Campaign, value: serde_json::Value) -> bool {
        let action: CampaignAction = serde_json::from_value(value).unwrap();
        action.apply(campaign).unwrap()
    }

    #[test]
    fn test_paragraph_actions() {
        let mut campaign = Campaign::blank();
        for text in ["First", "Second"] {
            let add = json!({"type": "addParagraph", "text": text});
            assert!(apply(&mut campaign, add));
        }
        let first = campaign.paragraphs[0].id.clone();

        let up = json!({"type": "moveParagraphUp", "index": 0});
        assert!(!apply(&mut campaign, up));
        let down = json!({"type": "moveParagraphDown", "index": 0});
        assert!(apply(&mut campaign, down));
        assert_eq!(campaign.paragraphs[1].id, first);

        let edit = json!({"type": "updateParagraph", "id": first, "text": "Edited"});
        assert!(apply(&mut campaign, edit));
        assert_eq!(campaign.paragraphs[1].text, "Edited");

        let remove = json!({"type": "removeParagraph", "id": first});
        assert!(apply(&mut campaign, remove.clone()));
        assert!(!apply(&mut campaign, remove));
        assert_eq!(campaign.paragraphs.len(), 1);
    }

    #[test]
    fn test_out_of_range_move_is_ignored() {
        let mut campaign = Campaign::blank();
        campaign.add_paragraph("Only");
        let action = CampaignAction::MoveParagraphDown { index: usize::MAX };
        assert!(!action.apply(&mut campaign).unwrap());
        assert_eq!(campaign.paragraphs.len(), 1);
    }

    #[test]
    fn test_quota_period_actions() {
        let mut campaign = Campaign::blank();
        let add = json!({
            "type": "addQuotaPeriod",
            "date": "2024-01-01",
            "quotaPerPeriod": 50,
            "quotaPerUser": 1
        });
        assert!(apply(&mut campaign, add));

        let mut period = campaign.quota_periods[0].clone();
        period.quota_per_period = 75;
        let update = CampaignAction::UpdateQuotaPeriod { period };
        assert!(update.apply(&mut campaign).unwrap());
        assert_eq!(campaign.quota_periods[0].quota_per_period, 75);
        assert_eq!(campaign.quota_periods[0].date, "2024-01-01");

        let id = campaign.quota_periods[0].id.clone();
        let remove = json!({"type": "removeQuotaPeriod", "id": id});
        assert!(apply(&mut campaign, remove));
        assert!(campaign.quota_periods.is_empty());
    }
}
