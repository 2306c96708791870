use crate::db::{DbConnection, DbPool};
use crate::domain::customer::{Customer, NewCustomer};
use crate::domain::customer_image::{CustomerImage, NewCustomerImage};
use crate::repository::errors::RepositoryResult;

pub mod customer;
pub mod errors;
pub mod image;
#[cfg(test)]
pub mod mock;

/// Filter applied when listing customers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CustomerListQuery {
    pub is_lead: Option<bool>,
}

impl CustomerListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the listing to leads.
    pub fn leads_only(mut self) -> Self {
        self.is_lead = Some(true);
        self
    }

    /// Restrict the listing to confirmed customers.
    pub fn customers_only(mut self) -> Self {
        self.is_lead = Some(false);
        self
    }
}

pub trait CustomerReader {
    fn get_customer_by_id(&self, customer_id: i32) -> RepositoryResult<Option<Customer>>;
    fn list_customers(&self, query: CustomerListQuery) -> RepositoryResult<Vec<Customer>>;
    fn customer_exists(&self, customer_id: i32) -> RepositoryResult<bool>;
}

pub trait CustomerWriter {
    fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer>;
    fn update_customer(&self, customer_id: i32, updates: &NewCustomer)
    -> RepositoryResult<Customer>;
    /// Returns whether a row was found and removed. Owned images go with
    /// the customer through the foreign key cascade.
    fn delete_customer(&self, customer_id: i32) -> RepositoryResult<bool>;
}

pub trait ImageReader {
    fn list_images(&self, customer_id: i32) -> RepositoryResult<Vec<CustomerImage>>;
    fn count_images(&self, customer_id: i32) -> RepositoryResult<i64>;
}

pub trait ImageWriter {
    fn create_image(&self, new_image: &NewCustomerImage) -> RepositoryResult<CustomerImage>;
    /// Inserts the whole batch atomically; either every image is persisted
    /// or none is.
    fn create_images(
        &self,
        new_images: &[NewCustomerImage],
    ) -> RepositoryResult<Vec<CustomerImage>>;
    /// Returns whether a row was found and removed.
    fn delete_image(&self, image_id: i32) -> RepositoryResult<bool>;
}

/// Diesel implementation of the repository traits.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub(crate) fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}
