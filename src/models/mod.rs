pub mod config;
pub mod customer;
pub mod customer_image;
