pub mod customer;
pub mod image;
