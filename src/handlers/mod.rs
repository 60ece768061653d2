pub mod cart;
pub mod crud;
pub mod images;
