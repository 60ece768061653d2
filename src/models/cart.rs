use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::crud_resource;
use crate::schema::carts;

/// Status of a cart still being filled. A partial unique index on
/// `carts (client_id) WHERE status = 'Processing'` guarantees at most one
/// such cart per client.
pub const OPEN_CART_STATUS: &str = "Processing";

#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = carts)]
#[diesel(primary_key(id_cart))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Cart {
    pub id_cart: i32,
    pub client_id: i32,
    pub status: String,
    pub total: BigDecimal,
    pub created_at: DateTime<Utc>,
}

/// `status`, `total` and `created_at` fall back to the column defaults
/// ('Processing', 0, now()) when omitted.
#[derive(Debug, Deserialize, Insertable)]
#[diesel(table_name = carts)]
pub struct NewCart {
    pub client_id: i32,
    pub status: Option<String>,
    pub total: Option<BigDecimal>,
}

#[derive(Debug, Deserialize, AsChangeset)]
#[diesel(table_name = carts)]
pub struct CartChanges {
    pub client_id: Option<i32>,
    pub status: Option<String>,
    pub total: Option<BigDecimal>,
}

crud_resource!(Cart {
    entity: "cart",
    table: carts,
    id: id_cart,
    new: NewCart,
    changes: CartChanges { client_id, status, total },
});
