pub mod checkout;
pub mod categories;
pub mod orders;
pub mod products;
pub mod resource;
pub mod stores;
