//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::customer::{Customer, NewCustomer};
use crate::domain::customer_image::{CustomerImage, NewCustomerImage};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    CustomerListQuery, CustomerReader, CustomerWriter, ImageReader, ImageWriter,
};

mock! {
    pub Repository {}

    impl CustomerReader for Repository {
        fn get_customer_by_id(&self, customer_id: i32) -> RepositoryResult<Option<Customer>>;
        fn list_customers(&self, query: CustomerListQuery) -> RepositoryResult<Vec<Customer>>;
        fn customer_exists(&self, customer_id: i32) -> RepositoryResult<bool>;
    }

    impl CustomerWriter for Repository {
        fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer>;
        fn update_customer(
            &self,
            customer_id: i32,
            updates: &NewCustomer,
        ) -> RepositoryResult<Customer>;
        fn delete_customer(&self, customer_id: i32) -> RepositoryResult<bool>;
    }

    impl ImageReader for Repository {
        fn list_images(&self, customer_id: i32) -> RepositoryResult<Vec<CustomerImage>>;
        fn count_images(&self, customer_id: i32) -> RepositoryResult<i64>;
    }

    impl ImageWriter for Repository {
        fn create_image(&self, new_image: &NewCustomerImage) -> RepositoryResult<CustomerImage>;
        fn create_images(
            &self,
            new_images: &[NewCustomerImage],
        ) -> RepositoryResult<Vec<CustomerImage>>;
        fn delete_image(&self, image_id: i32) -> RepositoryResult<bool>;
    }
}
