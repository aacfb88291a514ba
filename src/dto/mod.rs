pub mod auth;
pub mod layout;
pub mod purchase_orders;
pub mod suppliers;
pub mod warehouses;
