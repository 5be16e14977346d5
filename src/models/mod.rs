pub mod category;
pub mod customer;
pub mod order;
pub mod payment;
pub mod product;
pub mod report;
