use bigdecimal::BigDecimal;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::crud_resource;
use crate::schema::products;

#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = products)]
#[diesel(primary_key(id_product))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Product {
    pub id_product: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub stock: i32,
}

/// `price` and `stock` fall back to the column defaults when omitted.
#[derive(Debug, Deserialize, Insertable)]
#[diesel(table_name = products)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: Option<BigDecimal>,
    pub stock: Option<i32>,
}

#[derive(Debug, Deserialize, AsChangeset)]
#[diesel(table_name = products)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<BigDecimal>,
    pub stock: Option<i32>,
}

crud_resource!(Product {
    entity: "product",
    table: products,
    id: id_product,
    new: NewProduct,
    changes: ProductChanges { name, description, price, stock },
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crud::Patch;

    #[test]
    fn empty_body_deserializes_to_empty_changeset() {
        let changes: ProductChanges = serde_json::from_str("{}").expect("valid json");
        assert!(changes.is_empty());
    }

    #[test]
    fn partial_body_is_not_empty() {
        let changes: ProductChanges =
            serde_json::from_str(r#"{"name":"Widget"}"#).expect("valid json");
        assert!(!changes.is_empty());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let changes: ProductChanges =
            serde_json::from_str(r#"{"color":"red"}"#).expect("valid json");
        assert!(changes.is_empty());
    }
}
