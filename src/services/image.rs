use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::MAX_IMAGES_PER_CUSTOMER;
use crate::domain::customer_image::{CustomerImage, NewCustomerImage};
use crate::repository::{CustomerReader, ImageReader, ImageWriter};
use crate::services::{ServiceError, ServiceResult};

/// Lists a customer's images, most recent upload first. An unknown
/// customer id yields an empty list, not a failure.
pub fn list_customer_images<R>(repo: &R, customer_id: i32) -> ServiceResult<Vec<CustomerImage>>
where
    R: ImageReader + ?Sized,
{
    repo.list_images(customer_id).map_err(ServiceError::from)
}

/// Counts the images currently owned by the customer.
pub fn count_customer_images<R>(repo: &R, customer_id: i32) -> ServiceResult<i64>
where
    R: ImageReader + ?Sized,
{
    repo.count_images(customer_id).map_err(ServiceError::from)
}

/// Uploads a single image. Returns `Ok(None)` when the customer does not
/// exist; the batch path reports the same condition as a validation
/// failure instead. The asymmetry is inherited behavior and kept on
/// purpose.
pub fn upload_image<R>(
    repo: &R,
    new_image: NewCustomerImage,
) -> ServiceResult<Option<CustomerImage>>
where
    R: CustomerReader + ImageReader + ImageWriter + ?Sized,
{
    if !repo.customer_exists(new_image.customer_id)? {
        return Ok(None);
    }

    let current = repo.count_images(new_image.customer_id)?;
    if current as usize >= MAX_IMAGES_PER_CUSTOMER {
        return Err(ServiceError::QuotaExceeded(format!(
            "Cannot upload more than {MAX_IMAGES_PER_CUSTOMER} images per customer"
        )));
    }

    validate_image_data(&new_image.image_data, None)?;

    // The repository re-checks the quota inside the insert transaction to
    // close the race between concurrent uploads.
    let created = repo.create_image(&new_image)?;
    Ok(Some(created))
}

/// Uploads a batch of images atomically: any quota or encoding failure
/// rejects the entire batch and no rows are inserted.
pub fn upload_images<R>(
    repo: &R,
    customer_id: i32,
    new_images: Vec<NewCustomerImage>,
) -> ServiceResult<Vec<CustomerImage>>
where
    R: CustomerReader + ImageReader + ImageWriter + ?Sized,
{
    if !repo.customer_exists(customer_id)? {
        return Err(ServiceError::Validation(format!(
            "Customer {customer_id} not found"
        )));
    }

    let current = repo.count_images(customer_id)?;
    let incoming = new_images.len();
    if current as usize + incoming > MAX_IMAGES_PER_CUSTOMER {
        return Err(ServiceError::QuotaExceeded(format!(
            "Cannot upload {incoming} images: customer already has {current} images, \
             maximum allowed is {MAX_IMAGES_PER_CUSTOMER} images per customer"
        )));
    }

    for new_image in &new_images {
        validate_image_data(&new_image.image_data, new_image.file_name.as_deref())?;
    }

    repo.create_images(&new_images).map_err(ServiceError::from)
}

/// Deletes an image by its own id. The route the request came through is
/// irrelevant; any existing image id qualifies.
pub fn delete_image<R>(repo: &R, image_id: i32) -> ServiceResult<()>
where
    R: ImageWriter + ?Sized,
{
    match repo.delete_image(image_id) {
        Ok(true) => Ok(()),
        Ok(false) => Err(ServiceError::NotFound),
        Err(err) => Err(err.into()),
    }
}

/// Checks that the payload decodes as base64. A data-URL prefix
/// (`data:<mime>;base64,`) is discarded: everything after the first comma
/// is the candidate payload.
fn validate_image_data(image_data: &str, file_name: Option<&str>) -> ServiceResult<()> {
    let fail = || {
        ServiceError::Validation(match file_name {
            Some(name) => format!("Invalid base64 image data for file: {name}"),
            None => "Invalid base64 image data".to_string(),
        })
    };

    if image_data.trim().is_empty() {
        return Err(fail());
    }

    let payload = match image_data.split_once(',') {
        Some((_scheme, payload)) => payload,
        None => image_data,
    };

    BASE64.decode(payload).map(|_| ()).map_err(|_| fail())
}
