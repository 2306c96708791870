use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use validator::Validate;

use crate::domain::customer::NewCustomer;

fn default_is_lead() -> bool {
    true
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
/// Payload for creating a customer, and for replacing one on update.
pub struct CreateCustomerRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email, length(max = 255))]
    pub email: String,
    #[validate(length(min = 1, max = 20))]
    pub phone_number: String,
    #[validate(length(min = 1, max = 500))]
    pub address: String,
    #[validate(length(max = 100))]
    pub referral_source: Option<String>,
    pub price: Option<f64>,
    /// Days between contact.
    pub contact_frequency: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    /// Minutes.
    pub estimated_duration: Option<i32>,
    /// A new record is a lead unless the caller says otherwise.
    #[serde(default = "default_is_lead")]
    pub is_lead: bool,
}

impl From<&CreateCustomerRequest> for NewCustomer {
    /// Convert the wire payload into the domain record, applying the
    /// domain normalization rules.
    fn from(request: &CreateCustomerRequest) -> Self {
        NewCustomer::new(
            request.name.clone(),
            request.email.clone(),
            request.phone_number.clone(),
            request.address.clone(),
            request.referral_source.clone(),
            request.price,
            request.contact_frequency,
            request.start_date,
            request.start_time,
            request.estimated_duration,
            request.is_lead,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_lead_defaults_to_true() {
        let request: CreateCustomerRequest = serde_json::from_str(
            r#"{
                "name": "Alice",
                "email": "alice@example.com",
                "phoneNumber": "555-0100",
                "address": "1 Main St"
            }"#,
        )
        .unwrap();
        assert!(request.is_lead);
        assert!(request.validate().is_ok());

        let new: NewCustomer = (&request).into();
        assert!(new.is_lead);
        assert_eq!(new.referral_source, None);
    }

    #[test]
    fn explicit_is_lead_false_is_kept() {
        let request: CreateCustomerRequest = serde_json::from_str(
            r#"{
                "name": "Bob",
                "email": "bob@example.com",
                "phoneNumber": "555-0101",
                "address": "2 Main St",
                "isLead": false
            }"#,
        )
        .unwrap();
        assert!(!request.is_lead);
    }

    #[test]
    fn rejects_malformed_email_and_oversized_name() {
        let request: CreateCustomerRequest = serde_json::from_str(&format!(
            r#"{{
                "name": "{}",
                "email": "not-an-email",
                "phoneNumber": "555-0100",
                "address": "1 Main St"
            }}"#,
            "x".repeat(101)
        ))
        .unwrap();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
        assert!(errors.field_errors().contains_key("email"));
    }
}
