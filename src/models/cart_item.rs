use bigdecimal::BigDecimal;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::crud_resource;
use crate::schema::cart_items;

#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = cart_items)]
#[diesel(primary_key(id_cart_item))]
#[diesel(belongs_to(crate::models::cart::Cart, foreign_key = cart_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CartItem {
    pub id_cart_item: i32,
    pub cart_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: BigDecimal,
    pub subtotal: BigDecimal,
}

#[derive(Debug, Deserialize, Insertable)]
#[diesel(table_name = cart_items)]
pub struct NewCartItem {
    pub cart_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price: BigDecimal,
    pub subtotal: BigDecimal,
}

#[derive(Debug, Deserialize, AsChangeset)]
#[diesel(table_name = cart_items)]
pub struct CartItemChanges {
    pub cart_id: Option<i32>,
    pub product_id: Option<i32>,
    pub quantity: Option<i32>,
    pub unit_price: Option<BigDecimal>,
    pub subtotal: Option<BigDecimal>,
}

crud_resource!(CartItem {
    entity: "cart item",
    table: cart_items,
    id: id_cart_item,
    new: NewCartItem,
    changes: CartItemChanges { cart_id, product_id, quantity, unit_price, subtotal },
});
