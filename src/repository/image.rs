use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::MAX_IMAGES_PER_CUSTOMER;
use crate::domain::customer_image::{CustomerImage, NewCustomerImage};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, ImageReader, ImageWriter};

fn count_for_customer(conn: &mut SqliteConnection, customer_id: i32) -> QueryResult<i64> {
    use crate::schema::customer_images;

    customer_images::table
        .filter(customer_images::customer_id.eq(customer_id))
        .count()
        .get_result(conn)
}

impl ImageReader for DieselRepository {
    fn list_images(&self, customer_id: i32) -> RepositoryResult<Vec<CustomerImage>> {
        use crate::models::customer_image::CustomerImage as DbCustomerImage;
        use crate::schema::customer_images;

        let mut conn = self.conn()?;
        let rows = customer_images::table
            .filter(customer_images::customer_id.eq(customer_id))
            .order(customer_images::uploaded_at.desc())
            .load::<DbCustomerImage>(&mut conn)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    fn count_images(&self, customer_id: i32) -> RepositoryResult<i64> {
        let mut conn = self.conn()?;
        Ok(count_for_customer(&mut conn, customer_id)?)
    }
}

impl ImageWriter for DieselRepository {
    fn create_image(&self, new_image: &NewCustomerImage) -> RepositoryResult<CustomerImage> {
        use crate::models::customer_image::{
            CustomerImage as DbCustomerImage, NewCustomerImage as DbNewCustomerImage,
        };
        use crate::schema::customer_images;

        let mut conn = self.conn()?;
        let now = Utc::now().naive_utc();

        // The count check runs in the same transaction as the insert so
        // concurrent uploads for one customer cannot overshoot the quota.
        let created = conn.immediate_transaction::<_, RepositoryError, _>(|conn| {
            let current = count_for_customer(conn, new_image.customer_id)?;
            if current as usize + 1 > MAX_IMAGES_PER_CUSTOMER {
                return Err(RepositoryError::quota_exceeded(current, 1));
            }

            let created = diesel::insert_into(customer_images::table)
                .values(DbNewCustomerImage::from_domain(new_image, now))
                .get_result::<DbCustomerImage>(conn)?;

            Ok(created)
        })?;

        Ok(created.into())
    }

    fn create_images(
        &self,
        new_images: &[NewCustomerImage],
    ) -> RepositoryResult<Vec<CustomerImage>> {
        use crate::models::customer_image::{
            CustomerImage as DbCustomerImage, NewCustomerImage as DbNewCustomerImage,
        };
        use crate::schema::customer_images;

        let Some(first) = new_images.first() else {
            return Ok(Vec::new());
        };
        let customer_id = first.customer_id;

        let mut conn = self.conn()?;
        // One shared timestamp for the whole batch.
        let now = Utc::now().naive_utc();

        let created = conn.immediate_transaction::<_, RepositoryError, _>(|conn| {
            let current = count_for_customer(conn, customer_id)?;
            if current as usize + new_images.len() > MAX_IMAGES_PER_CUSTOMER {
                return Err(RepositoryError::quota_exceeded(current, new_images.len()));
            }

            let mut created = Vec::with_capacity(new_images.len());
            for new_image in new_images {
                let row = diesel::insert_into(customer_images::table)
                    .values(DbNewCustomerImage::from_domain(new_image, now))
                    .get_result::<DbCustomerImage>(conn)?;
                created.push(row);
            }

            Ok(created)
        })?;

        Ok(created.into_iter().map(Into::into).collect())
    }

    fn delete_image(&self, image_id: i32) -> RepositoryResult<bool> {
        use crate::schema::customer_images;

        let mut conn = self.conn()?;
        let affected =
            diesel::delete(customer_images::table.find(image_id)).execute(&mut conn)?;

        Ok(affected > 0)
    }
}
