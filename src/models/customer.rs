use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use diesel::prelude::*;

use crate::domain::customer::{Customer as DomainCustomer, NewCustomer as DomainNewCustomer};
use crate::domain::customer_image::CustomerImage as DomainCustomerImage;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::customers)]
/// Diesel row for [`crate::domain::customer::Customer`].
pub struct Customer {
    pub id: i32,
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
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::customers)]
/// Insertable form of [`Customer`].
pub struct NewCustomer<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone_number: &'a str,
    pub address: &'a str,
    pub referral_source: Option<&'a str>,
    pub price: Option<f64>,
    pub contact_frequency: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub estimated_duration: Option<i32>,
    pub is_lead: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::customers)]
#[diesel(treat_none_as_null = true)]
/// Full-replacement changeset for a [`Customer`] row. `None` overwrites the
/// stored value with NULL; this is not a patch.
pub struct UpdateCustomer<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone_number: &'a str,
    pub address: &'a str,
    pub referral_source: Option<&'a str>,
    pub price: Option<f64>,
    pub contact_frequency: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub estimated_duration: Option<i32>,
    pub is_lead: bool,
    pub updated_at: NaiveDateTime,
}

impl Customer {
    /// Convert the row into the domain record, attaching the given images.
    pub fn into_domain(self, images: Vec<DomainCustomerImage>) -> DomainCustomer {
        DomainCustomer {
            id: self.id,
            name: self.name,
            email: self.email,
            phone_number: self.phone_number,
            address: self.address,
            referral_source: self.referral_source,
            price: self.price,
            contact_frequency: self.contact_frequency,
            start_date: self.start_date,
            start_time: self.start_time,
            estimated_duration: self.estimated_duration,
            is_lead: self.is_lead,
            created_at: self.created_at,
            updated_at: self.updated_at,
            images,
        }
    }
}

impl From<Customer> for DomainCustomer {
    fn from(customer: Customer) -> Self {
        customer.into_domain(Vec::new())
    }
}

impl<'a> NewCustomer<'a> {
    /// Build the insertable row, stamping both timestamps with the same
    /// creation instant.
    pub fn from_domain(customer: &'a DomainNewCustomer, now: NaiveDateTime) -> Self {
        Self {
            name: customer.name.as_str(),
            email: customer.email.as_str(),
            phone_number: customer.phone_number.as_str(),
            address: customer.address.as_str(),
            referral_source: customer.referral_source.as_deref(),
            price: customer.price,
            contact_frequency: customer.contact_frequency,
            start_date: customer.start_date,
            start_time: customer.start_time,
            estimated_duration: customer.estimated_duration,
            is_lead: customer.is_lead,
            created_at: now,
            updated_at: now,
        }
    }
}

impl<'a> UpdateCustomer<'a> {
    /// Build the replacement changeset, refreshing `updated_at`.
    pub fn from_domain(customer: &'a DomainNewCustomer, now: NaiveDateTime) -> Self {
        Self {
            name: customer.name.as_str(),
            email: customer.email.as_str(),
            phone_number: customer.phone_number.as_str(),
            address: customer.address.as_str(),
            referral_source: customer.referral_source.as_deref(),
            price: customer.price,
            contact_frequency: customer.contact_frequency,
            start_date: customer.start_date,
            start_time: customer.start_time,
            estimated_duration: customer.estimated_duration,
            is_lead: customer.is_lead,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_domain_new() -> DomainNewCustomer {
        DomainNewCustomer::new(
            "Alice".to_string(),
            "alice@example.com".to_string(),
            "555-0100".to_string(),
            "1 Main St".to_string(),
            Some("web".to_string()),
            Some(99.5),
            Some(7),
            None,
            None,
            Some(60),
            true,
        )
    }

    #[test]
    fn from_domain_stamps_equal_timestamps() {
        let domain = sample_domain_new();
        let now = Utc::now().naive_utc();
        let new = NewCustomer::from_domain(&domain, now);
        assert_eq!(new.name, domain.name);
        assert_eq!(new.email, domain.email);
        assert_eq!(new.referral_source, domain.referral_source.as_deref());
        assert_eq!(new.created_at, now);
        assert_eq!(new.updated_at, now);
    }

    #[test]
    fn update_changeset_refreshes_updated_at() {
        let domain = sample_domain_new();
        let now = Utc::now().naive_utc();
        let update = UpdateCustomer::from_domain(&domain, now);
        assert_eq!(update.updated_at, now);
        assert_eq!(update.price, Some(99.5));
        assert!(update.is_lead);
    }

    #[test]
    fn row_into_domain_attaches_images() {
        let now = Utc::now().naive_utc();
        let row = Customer {
            id: 1,
            name: "n".to_string(),
            email: "e@example.com".to_string(),
            phone_number: "p".to_string(),
            address: "a".to_string(),
            referral_source: None,
            price: None,
            contact_frequency: None,
            start_date: None,
            start_time: None,
            estimated_duration: None,
            is_lead: false,
            created_at: now,
            updated_at: now,
        };
        let domain: DomainCustomer = row.into();
        assert_eq!(domain.id, 1);
        assert!(!domain.is_lead);
        assert!(domain.images.is_empty());
    }
}
