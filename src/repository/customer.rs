use std::collections::HashMap;

use chrono::Utc;
use diesel::prelude::*;

use crate::domain::customer::{Customer, NewCustomer};
use crate::domain::customer_image::CustomerImage;
use crate::repository::errors::RepositoryResult;
use crate::repository::{CustomerListQuery, CustomerReader, CustomerWriter, DieselRepository};

impl DieselRepository {
    /// Load the images for the given customer ids, most recent upload
    /// first, grouped by owner.
    fn images_by_customer(
        &self,
        conn: &mut crate::db::DbConnection,
        customer_ids: &[i32],
    ) -> RepositoryResult<HashMap<i32, Vec<CustomerImage>>> {
        use crate::models::customer_image::CustomerImage as DbCustomerImage;
        use crate::schema::customer_images;

        let rows = customer_images::table
            .filter(customer_images::customer_id.eq_any(customer_ids))
            .order(customer_images::uploaded_at.desc())
            .load::<DbCustomerImage>(conn)?;

        let mut grouped: HashMap<i32, Vec<CustomerImage>> = HashMap::new();
        for row in rows {
            grouped
                .entry(row.customer_id)
                .or_default()
                .push(row.into());
        }

        Ok(grouped)
    }
}

impl CustomerReader for DieselRepository {
    fn get_customer_by_id(&self, customer_id: i32) -> RepositoryResult<Option<Customer>> {
        use crate::models::customer::Customer as DbCustomer;
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let row = customers::table
            .find(customer_id)
            .first::<DbCustomer>(&mut conn)
            .optional()?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut images = self.images_by_customer(&mut conn, &[row.id])?;
        let images = images.remove(&row.id).unwrap_or_default();

        Ok(Some(row.into_domain(images)))
    }

    fn list_customers(&self, query: CustomerListQuery) -> RepositoryResult<Vec<Customer>> {
        use crate::models::customer::Customer as DbCustomer;
        use crate::schema::customers;

        let mut conn = self.conn()?;

        let mut items = customers::table.into_boxed::<diesel::sqlite::Sqlite>();
        if let Some(is_lead) = query.is_lead {
            items = items.filter(customers::is_lead.eq(is_lead));
        }

        let rows = items
            .order(customers::created_at.desc())
            .load::<DbCustomer>(&mut conn)?;

        let ids: Vec<i32> = rows.iter().map(|c| c.id).collect();
        let mut images = self.images_by_customer(&mut conn, &ids)?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let owned = images.remove(&row.id).unwrap_or_default();
                row.into_domain(owned)
            })
            .collect())
    }

    fn customer_exists(&self, customer_id: i32) -> RepositoryResult<bool> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let found = customers::table
            .find(customer_id)
            .select(customers::id)
            .first::<i32>(&mut conn)
            .optional()?;

        Ok(found.is_some())
    }
}

impl CustomerWriter for DieselRepository {
    fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer> {
        use crate::models::customer::{Customer as DbCustomer, NewCustomer as DbNewCustomer};
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let now = Utc::now().naive_utc();

        let created = diesel::insert_into(customers::table)
            .values(DbNewCustomer::from_domain(new_customer, now))
            .get_result::<DbCustomer>(&mut conn)?;

        Ok(created.into())
    }

    fn update_customer(
        &self,
        customer_id: i32,
        updates: &NewCustomer,
    ) -> RepositoryResult<Customer> {
        use crate::models::customer::{Customer as DbCustomer, UpdateCustomer as DbUpdateCustomer};
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let now = Utc::now().naive_utc();

        let updated = diesel::update(customers::table.find(customer_id))
            .set(DbUpdateCustomer::from_domain(updates, now))
            .get_result::<DbCustomer>(&mut conn)?;

        let mut images = self.images_by_customer(&mut conn, &[updated.id])?;
        let owned = images.remove(&updated.id).unwrap_or_default();

        Ok(updated.into_domain(owned))
    }

    fn delete_customer(&self, customer_id: i32) -> RepositoryResult<bool> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let affected = diesel::delete(customers::table.find(customer_id)).execute(&mut conn)?;

        Ok(affected > 0)
    }
}
