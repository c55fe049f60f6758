use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::ComplaintRecord;

pub fn human_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%-m/%-d/%Y, %-I:%M:%S %p UTC").to_string()
}

pub fn email_subject(record: &ComplaintRecord) -> String {
    format!("Complaint Registered - {}", record.complaint_id)
}

pub fn email_body(record: &ComplaintRecord) -> String {
    format!(
        "Dear {name},\n\
         \n\
         Thank you for contacting Vault. Your complaint has been registered successfully.\n\
         \n\
         Complaint ID: {id}\n\
         Category: {category}\n\
         Subject: {subject}\n\
         Date & Time: {when}\n\
         \n\
         Your Complaint Details:\n\
         {description}\n\
         \n\
         Our support team will review your complaint and get back to you within 24-48 hours.\n\
         \n\
         If you have any urgent concerns, please contact our support team directly.\n\
         \n\
         Best regards,\n\
         Vault Support Team",
        name = record.name,
        id = record.complaint_id,
        category = record.category,
        subject = record.subject,
        when = human_timestamp(record.timestamp),
        description = record.description,
    )
}

pub fn sms_message(record: &ComplaintRecord) -> String {
    format!(
        "Vault: Complaint {} registered. Subject: {}. Our team will contact you soon. Thank you!",
        record.complaint_id, record.subject
    )
}

/// Variables handed to the hosted email template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailTemplateParams {
    pub to_email: String,
    pub to_name: String,
    pub complaint_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub complaint_category: String,
    pub complaint_subject: String,
    pub complaint_description: String,
    pub complaint_timestamp: String,
}

impl EmailTemplateParams {
    pub fn from_record(record: &ComplaintRecord) -> Self {
        Self {
            to_email: record.email.clone(),
            to_name: record.name.clone(),
            complaint_id: record.complaint_id.to_string(),
            customer_name: record.name.clone(),
            customer_email: record.email.clone(),
            customer_phone: record.phone.clone(),
            complaint_category: record.category.label().to_string(),
            complaint_subject: record.subject.clone(),
            complaint_description: record.description.clone(),
            complaint_timestamp: human_timestamp(record.timestamp),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SmsRequest {
    pub phone: String,
    pub message: String,
}

impl SmsRequest {
    pub fn from_record(record: &ComplaintRecord) -> Self {
        Self {
            phone: record.phone.clone(),
            message: sms_message(record),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complaint_id::ComplaintId;
    use crate::models::ComplaintCategory;
    use chrono::TimeZone;

    fn record() -> ComplaintRecord {
        ComplaintRecord {
            complaint_id: ComplaintId::from("COMP-MVDRWQO0-AB12"),
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "+15551234567".to_string(),
            category: ComplaintCategory::BillingInquiry,
            subject: "Double charge".to_string(),
            description: "I was charged twice.".to_string(),
            timestamp: Utc.with_ymd_and_hms(2026, 10, 18, 15, 4, 5).unwrap(),
        }
    }

    #[test]
    fn timestamp_is_readable() {
        assert_eq!(human_timestamp(record().timestamp), "10/18/2026, 3:04:05 PM UTC");
    }

    #[test]
    fn email_body_addresses_submitter_and_lists_details() {
        let body = email_body(&record());
        assert!(body.starts_with("Dear Jane Doe,\n\nThank you for contacting Vault."));
        assert!(body.contains("\nComplaint ID: COMP-MVDRWQO0-AB12\n"));
        assert!(body.contains("\nCategory: Billing Inquiry\n"));
        assert!(body.contains("\nSubject: Double charge\n"));
        assert!(body.contains("\nDate & Time: 10/18/2026, 3:04:05 PM UTC\n"));
        assert!(body.contains("Your Complaint Details:\nI was charged twice.\n"));
        assert!(body.ends_with("Best regards,\nVault Support Team"));
    }

    #[test]
    fn subject_carries_id() {
        assert_eq!(email_subject(&record()), "Complaint Registered - COMP-MVDRWQO0-AB12");
    }

    #[test]
    fn sms_is_single_line_summary() {
        let message = sms_message(&record());
        assert_eq!(
            message,
            "Vault: Complaint COMP-MVDRWQO0-AB12 registered. Subject: Double charge. Our team will contact you soon. Thank you!"
        );
        assert!(!message.contains('\n'));
    }

    #[test]
    fn template_params_cover_every_record_field() {
        let params = serde_json::to_value(EmailTemplateParams::from_record(&record())).unwrap();
        assert_eq!(params["to_email"], "jane@example.com");
        assert_eq!(params["to_name"], "Jane Doe");
        assert_eq!(params["complaint_id"], "COMP-MVDRWQO0-AB12");
        assert_eq!(params["customer_phone"], "+15551234567");
        assert_eq!(params["complaint_category"], "Billing Inquiry");
        assert_eq!(params["complaint_subject"], "Double charge");
        assert_eq!(params["complaint_description"], "I was charged twice.");
        assert_eq!(params["complaint_timestamp"], "10/18/2026, 3:04:05 PM UTC");
    }
}
