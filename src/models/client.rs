use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::crud_resource;
use crate::schema::clients;

#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = clients)]
#[diesel(primary_key(id_client))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Client {
    pub id_client: i32,
    pub name: String,
    pub email: String,
    pub password: String,
    pub address: Option<String>,
}

#[derive(Debug, Deserialize, Insertable)]
#[diesel(table_name = clients)]
pub struct NewClient {
    pub name: String,
    pub email: String,
    pub password: String,
    pub address: Option<String>,
}

#[derive(Debug, Deserialize, AsChangeset)]
#[diesel(table_name = clients)]
pub struct ClientChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub address: Option<String>,
}

crud_resource!(Client {
    entity: "client",
    table: clients,
    id: id_client,
    new: NewClient,
    changes: ClientChanges { name, email, password, address },
});
