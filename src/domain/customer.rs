use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::customer_image::CustomerImage;

/// A customer or lead record as exposed on the wire, with its images
/// eagerly attached.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub referral_source: Option<String>,
    pub price: Option<f64>,
    /// Days between contact.
    pub contact_frequency: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    /// Minutes.
    pub estimated_duration: Option<i32>,
    pub is_lead: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub images: Vec<CustomerImage>,
}

/// Candidate record for both create and full-replacement update.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub referral_source: Option<String>,
    pub price: Option<f64>,
    pub contact_frequency: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub estimated_duration: Option<i32>,
    pub is_lead: bool,
}

impl NewCustomer {
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        email: String,
        phone_number: String,
        address: String,
        referral_source: Option<String>,
        price: Option<f64>,
        contact_frequency: Option<i32>,
        start_date: Option<NaiveDate>,
        start_time: Option<NaiveTime>,
        estimated_duration: Option<i32>,
        is_lead: bool,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.to_lowercase().trim().to_string(),
            phone_number: phone_number.trim().to_string(),
            address: address.trim().to_string(),
            referral_source: referral_source
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            // SQLite has no decimal type; amounts are kept at two decimal
            // places of precision.
            price: price.map(|p| (p * 100.0).round() / 100.0),
            contact_frequency,
            start_date,
            start_time,
            estimated_duration,
            is_lead,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_customer_normalizes_input() {
        let new = NewCustomer::new(
            "  Alice  ".to_string(),
            " Alice@Example.COM ".to_string(),
            " 555-0100 ".to_string(),
            " 1 Main St ".to_string(),
            Some("   ".to_string()),
            Some(19.999),
            None,
            None,
            None,
            None,
            true,
        );
        assert_eq!(new.name, "Alice");
        assert_eq!(new.email, "alice@example.com");
        assert_eq!(new.phone_number, "555-0100");
        assert_eq!(new.address, "1 Main St");
        assert_eq!(new.referral_source, None);
        assert_eq!(new.price, Some(20.0));
    }
}
