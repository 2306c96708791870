use crate::domain::customer::{Customer, NewCustomer};
use crate::repository::{CustomerListQuery, CustomerReader, CustomerWriter};
use crate::services::{ServiceError, ServiceResult};

/// Lists customers matching the filter, images attached, most recently
/// created first.
pub fn list_customers<R>(repo: &R, query: CustomerListQuery) -> ServiceResult<Vec<Customer>>
where
    R: CustomerReader + ?Sized,
{
    repo.list_customers(query).map_err(ServiceError::from)
}

/// Fetches a customer with its images by identifier.
pub fn get_customer<R>(repo: &R, customer_id: i32) -> ServiceResult<Option<Customer>>
where
    R: CustomerReader + ?Sized,
{
    repo.get_customer_by_id(customer_id)
        .map_err(ServiceError::from)
}

/// Persists a new customer. An email collision surfaces from the storage
/// uniqueness constraint as a validation failure.
pub fn create_customer<R>(repo: &R, new_customer: &NewCustomer) -> ServiceResult<Customer>
where
    R: CustomerWriter + ?Sized,
{
    repo.create_customer(new_customer)
        .map_err(ServiceError::from)
}

/// Overwrites every mutable field of the customer with the given record.
/// This is a full replacement, not a patch.
pub fn update_customer<R>(
    repo: &R,
    customer_id: i32,
    updates: &NewCustomer,
) -> ServiceResult<Customer>
where
    R: CustomerWriter + ?Sized,
{
    repo.update_customer(customer_id, updates)
        .map_err(ServiceError::from)
}

/// Removes the customer and, through the storage cascade, all its images.
pub fn delete_customer<R>(repo: &R, customer_id: i32) -> ServiceResult<()>
where
    R: CustomerWriter + ?Sized,
{
    match repo.delete_customer(customer_id) {
        Ok(true) => Ok(()),
        Ok(false) => Err(ServiceError::NotFound),
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    fn sample_new() -> NewCustomer {
        NewCustomer::new(
            "Alice".to_string(),
            "alice@example.com".to_string(),
            "555-0100".to_string(),
            "1 Main St".to_string(),
            None,
            None,
            None,
            None,
            None,
            None,
            true,
        )
    }

    #[test]
    fn delete_missing_customer_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_delete_customer().return_once(|_| Ok(false));

        assert_eq!(delete_customer(&repo, 42), Err(ServiceError::NotFound));
    }

    #[test]
    fn create_maps_unique_violation_to_validation() {
        let mut repo = MockRepository::new();
        repo.expect_create_customer().return_once(|_| {
            Err(RepositoryError::ConstraintViolation(
                "Unique constraint violation: customers.email".to_string(),
            ))
        });

        let err = create_customer(&repo, &sample_new()).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn update_missing_customer_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_update_customer()
            .return_once(|_, _| Err(RepositoryError::NotFound));

        let err = update_customer(&repo, 42, &sample_new()).unwrap_err();
        assert_eq!(err, ServiceError::NotFound);
    }
}
