use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::crud_resource;
use crate::schema::admins;

#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = admins)]
#[diesel(primary_key(id_admin))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Admin {
    pub id_admin: i32,
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, Insertable)]
#[diesel(table_name = admins)]
pub struct NewAdmin {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, AsChangeset)]
#[diesel(table_name = admins)]
pub struct AdminChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

crud_resource!(Admin {
    entity: "admin",
    table: admins,
    id: id_admin,
    new: NewAdmin,
    changes: AdminChanges { name, email, password },
});
