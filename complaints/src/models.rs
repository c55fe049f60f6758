use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::complaint_id::ComplaintId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplaintCategory {
    #[serde(rename = "Account Issue")]
    AccountIssue,
    #[serde(rename = "Transaction Problem")]
    TransactionProblem,
    #[serde(rename = "Technical Support")]
    TechnicalSupport,
    #[serde(rename = "Feature Request")]
    FeatureRequest,
    #[serde(rename = "Billing Inquiry")]
    BillingInquiry,
    #[serde(rename = "Security Concern")]
    SecurityConcern,
    #[serde(rename = "Other")]
    Other,
}

impl ComplaintCategory {
    /// Every category, in the order the form lists them.
    pub const ALL: [ComplaintCategory; 7] = [
        ComplaintCategory::AccountIssue,
        ComplaintCategory::TransactionProblem,
        ComplaintCategory::TechnicalSupport,
        ComplaintCategory::FeatureRequest,
        ComplaintCategory::BillingInquiry,
        ComplaintCategory::SecurityConcern,
        ComplaintCategory::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ComplaintCategory::AccountIssue => "Account Issue",
            ComplaintCategory::TransactionProblem => "Transaction Problem",
            ComplaintCategory::TechnicalSupport => "Technical Support",
            ComplaintCategory::FeatureRequest => "Feature Request",
            ComplaintCategory::BillingInquiry => "Billing Inquiry",
            ComplaintCategory::SecurityConcern => "Security Concern",
            ComplaintCategory::Other => "Other",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|category| category.label() == label)
    }
}

impl std::fmt::Display for ComplaintCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplaintField {
    Name,
    Email,
    Phone,
    Category,
    Subject,
    Description,
}

/// What the user has typed so far. Nothing here is validated until
/// [`ComplaintForm::is_complete`] is asked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComplaintForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub category: Option<ComplaintCategory>,
    pub subject: String,
    pub description: String,
}

impl ComplaintForm {
    pub fn set(&mut self, field: ComplaintField, value: &str) {
        match field {
            ComplaintField::Name => self.name = value.to_string(),
            ComplaintField::Email => self.email = value.to_string(),
            ComplaintField::Phone => self.phone = value.to_string(),
            ComplaintField::Category => self.category = ComplaintCategory::from_label(value),
            ComplaintField::Subject => self.subject = value.to_string(),
            ComplaintField::Description => self.description = value.to_string(),
        }
    }

    pub fn value(&self, field: ComplaintField) -> &str {
        match field {
            ComplaintField::Name => &self.name,
            ComplaintField::Email => &self.email,
            ComplaintField::Phone => &self.phone,
            ComplaintField::Category => self.category.map(|c| c.label()).unwrap_or(""),
            ComplaintField::Subject => &self.subject,
            ComplaintField::Description => &self.description,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.category.is_some()
            && [
                &self.name,
                &self.email,
                &self.phone,
                &self.subject,
                &self.description,
            ]
            .iter()
            .all(|value| !value.trim().is_empty())
    }

    /// Builds the record for one submission. Returns `None` while the form is
    /// incomplete, so a record can never exist with a blank field.
    pub fn to_record(&self, complaint_id: ComplaintId, timestamp: DateTime<Utc>) -> Option<ComplaintRecord> {
        if !self.is_complete() {
            return None;
        }
        let category = self.category?;

        Some(ComplaintRecord {
            complaint_id,
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            category,
            subject: self.subject.clone(),
            description: self.description.clone(),
            timestamp,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintRecord {
    pub complaint_id: ComplaintId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub category: ComplaintCategory,
    pub subject: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}
