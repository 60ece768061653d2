//! The one multi-step workflow: adding a product to a client's open cart.

use actix_web::{web, HttpResponse};
use bigdecimal::BigDecimal;
use diesel::prelude::*;
use diesel::upsert::DecoratableTarget;
use serde::Deserialize;

use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::cart::{Cart, NewCart, OPEN_CART_STATUS};
use crate::models::cart_item::{CartItem, NewCartItem};
use crate::schema::{cart_items, carts};

#[derive(Debug, Deserialize)]
pub struct AddCartItemRequest {
    pub client_id: i32,
    pub product_id: i32,
    /// Defaults to 1 when absent.
    pub quantity: Option<i32>,
    /// Defaults to 0 when absent.
    pub unit_price: Option<BigDecimal>,
}

pub fn line_subtotal(quantity: i32, unit_price: &BigDecimal) -> BigDecimal {
    unit_price.clone() * BigDecimal::from(quantity)
}

/// POST /carts/items
///
/// Ensures the client has an open cart and appends the line item to it, all
/// inside one transaction (READ COMMITTED). The conditional insert targets
/// the partial unique index on open carts, so a concurrent request for the
/// same client can never create a second open cart; both requests land their
/// items on the same cart. Answers 200 with the stored line item.
pub async fn add_item(
    pool: web::Data<DbPool>,
    body: web::Json<AddCartItemRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let quantity = body.quantity.unwrap_or(1);
    let unit_price = body.unit_price.unwrap_or_else(|| BigDecimal::from(0));
    let subtotal = line_subtotal(quantity, &unit_price);

    let item = web::block(move || {
        let mut conn = pool.get()?;

        conn.transaction::<_, AppError, _>(|conn| {
            // 1. Open a cart for the client unless one already exists.
            diesel::insert_into(carts::table)
                .values(&NewCart {
                    client_id: body.client_id,
                    status: Some(OPEN_CART_STATUS.to_string()),
                    total: Some(BigDecimal::from(0)),
                })
                .on_conflict(carts::client_id)
                .filter_target(carts::status.eq(OPEN_CART_STATUS))
                .do_nothing()
                .execute(conn)?;

            // 2. The open cart now exists either way; fetch it.
            let cart: Cart = carts::table
                .filter(carts::client_id.eq(body.client_id))
                .filter(carts::status.eq(OPEN_CART_STATUS))
                .select(Cart::as_select())
                .first(conn)?;

            // 3. Attach the line item.
            let item: CartItem = diesel::insert_into(cart_items::table)
                .values(&NewCartItem {
                    cart_id: cart.id_cart,
                    product_id: body.product_id,
                    quantity,
                    unit_price,
                    subtotal,
                })
                .returning(CartItem::as_returning())
                .get_result(conn)?;

            Ok(item)
        })
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(item))
}

/// GET /carts/status/{status}
///
/// The status value is bound as a query parameter, never spliced into SQL.
/// An unknown status answers 200 with an empty array.
pub async fn list_by_status(
    pool: web::Data<DbPool>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let status = path.into_inner();

    let rows = web::block(move || {
        let mut conn = pool.get()?;
        Ok::<_, AppError>(
            carts::table
                .filter(carts::status.eq(status))
                .select(Cart::as_select())
                .order(carts::id_cart.asc())
                .load::<Cart>(&mut conn)?,
        )
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    Ok(HttpResponse::Ok().json(rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn subtotal_is_quantity_times_unit_price() {
        let price = BigDecimal::from_str("9.99").expect("valid decimal");
        assert_eq!(
            line_subtotal(3, &price),
            BigDecimal::from_str("29.97").expect("valid decimal")
        );
    }

    #[test]
    fn subtotal_of_free_item_is_zero() {
        assert_eq!(line_subtotal(5, &BigDecimal::from(0)), BigDecimal::from(0));
    }

    #[test]
    fn request_defaults_are_absent_not_zeroed() {
        let req: AddCartItemRequest =
            serde_json::from_str(r#"{"client_id":1,"product_id":2}"#).expect("valid json");
        assert_eq!(req.quantity, None);
        assert_eq!(req.unit_price, None);
    }
}
