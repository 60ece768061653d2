pub mod admin;
pub mod cart;
pub mod cart_item;
pub mod client;
pub mod company;
pub mod product;
