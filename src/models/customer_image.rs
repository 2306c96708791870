use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::customer_image::{
    CustomerImage as DomainCustomerImage, NewCustomerImage as DomainNewCustomerImage,
};
use crate::models::customer::Customer;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::customer_images)]
#[diesel(belongs_to(Customer, foreign_key = customer_id))]
/// Diesel row for [`crate::domain::customer_image::CustomerImage`].
pub struct CustomerImage {
    pub id: i32,
    pub customer_id: i32,
    pub image_data: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub uploaded_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::customer_images)]
/// Insertable form of [`CustomerImage`].
pub struct NewCustomerImage<'a> {
    pub customer_id: i32,
    pub image_data: &'a str,
    pub file_name: Option<&'a str>,
    pub content_type: Option<&'a str>,
    pub uploaded_at: NaiveDateTime,
}

impl From<CustomerImage> for DomainCustomerImage {
    fn from(image: CustomerImage) -> Self {
        Self {
            id: image.id,
            customer_id: image.customer_id,
            image_data: image.image_data,
            file_name: image.file_name,
            content_type: image.content_type,
            uploaded_at: image.uploaded_at,
        }
    }
}

impl<'a> NewCustomerImage<'a> {
    pub fn from_domain(image: &'a DomainNewCustomerImage, now: NaiveDateTime) -> Self {
        Self {
            customer_id: image.customer_id,
            image_data: image.image_data.as_str(),
            file_name: image.file_name.as_deref(),
            content_type: image.content_type.as_deref(),
            uploaded_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn row_into_domain() {
        let now = Utc::now().naive_utc();
        let row = CustomerImage {
            id: 3,
            customer_id: 7,
            image_data: "aGVsbG8=".to_string(),
            file_name: Some("photo.png".to_string()),
            content_type: Some("image/png".to_string()),
            uploaded_at: now,
        };
        let domain: DomainCustomerImage = row.into();
        assert_eq!(domain.id, 3);
        assert_eq!(domain.customer_id, 7);
        assert_eq!(domain.file_name.as_deref(), Some("photo.png"));
        assert_eq!(domain.uploaded_at, now);
    }

    #[test]
    fn from_domain_stamps_uploaded_at() {
        let domain = DomainNewCustomerImage::new(
            7,
            "aGVsbG8=".to_string(),
            Some("photo.png".to_string()),
            None,
        );
        let now = Utc::now().naive_utc();
        let new = NewCustomerImage::from_domain(&domain, now);
        assert_eq!(new.customer_id, 7);
        assert_eq!(new.image_data, "aGVsbG8=");
        assert_eq!(new.content_type, None);
        assert_eq!(new.uploaded_at, now);
    }
}
