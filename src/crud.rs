//! The generic CRUD surface shared by every exposed table.
//!
//! A table joins the HTTP surface by implementing [`Resource`], which pins
//! down its table, identifier column, insert payload and update payload at
//! registration time. The [`crud_resource!`] macro writes that impl from the
//! schema definitions, so a new entity is one model file plus one macro call;
//! the route handlers in `handlers::crud` are written once against the trait.

use diesel::{PgConnection, QueryResult};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A partial update payload. `is_empty` lets `update` skip the SQL `UPDATE`
/// entirely when the request body carries no recognized fields, since diesel
/// rejects an empty changeset.
pub trait Patch {
    fn is_empty(&self) -> bool;
}

/// One database table exposed through the uniform CRUD routes.
///
/// `ENTITY` is the singular name used in client-facing messages
/// ("product not found"). All operations bind every value, including row
/// limits, through the query builder; no request-derived value is ever
/// spliced into SQL text.
pub trait Resource: Serialize + Sized + Send + 'static {
    const ENTITY: &'static str;

    /// Payload accepted by create. Generated and defaulted columns stay out
    /// of it; the database fills them in.
    type New: DeserializeOwned + Send + 'static;

    /// Payload accepted by update; every field optional.
    type Changes: DeserializeOwned + Patch + Send + 'static;

    fn list(conn: &mut PgConnection) -> QueryResult<Vec<Self>>;
    fn list_limited(conn: &mut PgConnection, limit: i64) -> QueryResult<Vec<Self>>;
    fn find(conn: &mut PgConnection, id: i32) -> QueryResult<Option<Self>>;
    fn insert(conn: &mut PgConnection, new: Self::New) -> QueryResult<Self>;
    fn update(conn: &mut PgConnection, id: i32, changes: Self::Changes) -> QueryResult<Option<Self>>;
    fn delete(conn: &mut PgConnection, id: i32) -> QueryResult<usize>;
}

/// Implement [`Resource`] (and [`Patch`] for the changeset) for a row type.
///
/// ```ignore
/// crud_resource!(Product {
///     entity: "product",
///     table: products,
///     id: id_product,
///     new: NewProduct,
///     changes: ProductChanges { name, description, price, stock },
/// });
/// ```
#[macro_export]
macro_rules! crud_resource {
    (
        $row:ty {
            entity: $entity:literal,
            table: $table:ident,
            id: $id_col:ident,
            new: $new:ty,
            changes: $changes:ty { $($field:ident),+ $(,)? } $(,)?
        }
    ) => {
        impl $crate::crud::Patch for $changes {
            fn is_empty(&self) -> bool {
                $(self.$field.is_none())&&+
            }
        }

        impl $crate::crud::Resource for $row {
            const ENTITY: &'static str = $entity;
            type New = $new;
            type Changes = $changes;

            fn list(conn: &mut diesel::PgConnection) -> diesel::QueryResult<Vec<Self>> {
                use diesel::prelude::*;
                $crate::schema::$table::table
                    .select(Self::as_select())
                    .order($crate::schema::$table::$id_col.asc())
                    .load(conn)
            }

            fn list_limited(
                conn: &mut diesel::PgConnection,
                limit: i64,
            ) -> diesel::QueryResult<Vec<Self>> {
                use diesel::prelude::*;
                $crate::schema::$table::table
                    .select(Self::as_select())
                    .order($crate::schema::$table::$id_col.asc())
                    .limit(limit)
                    .load(conn)
            }

            fn find(conn: &mut diesel::PgConnection, id: i32) -> diesel::QueryResult<Option<Self>> {
                use diesel::prelude::*;
                $crate::schema::$table::table
                    .filter($crate::schema::$table::$id_col.eq(id))
                    .select(Self::as_select())
                    .first(conn)
                    .optional()
            }

            fn insert(conn: &mut diesel::PgConnection, new: Self::New) -> diesel::QueryResult<Self> {
                use diesel::prelude::*;
                diesel::insert_into($crate::schema::$table::table)
                    .values(&new)
                    .returning(Self::as_returning())
                    .get_result(conn)
            }

            fn update(
                conn: &mut diesel::PgConnection,
                id: i32,
                changes: Self::Changes,
            ) -> diesel::QueryResult<Option<Self>> {
                use diesel::prelude::*;
                use $crate::crud::Patch;
                if changes.is_empty() {
                    // Nothing to set; an empty body still answers with the row.
                    return Self::find(conn, id);
                }
                diesel::update(
                    $crate::schema::$table::table
                        .filter($crate::schema::$table::$id_col.eq(id)),
                )
                .set(&changes)
                .returning(Self::as_returning())
                .get_result(conn)
                .optional()
            }

            fn delete(conn: &mut diesel::PgConnection, id: i32) -> diesel::QueryResult<usize> {
                use diesel::prelude::*;
                diesel::delete(
                    $crate::schema::$table::table
                        .filter($crate::schema::$table::$id_col.eq(id)),
                )
                .execute(conn)
            }
        }
    };
}
