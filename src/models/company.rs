use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::crud_resource;
use crate::schema::companies;

#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = companies)]
#[diesel(primary_key(id_company))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Company {
    pub id_company: i32,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize, Insertable)]
#[diesel(table_name = companies)]
pub struct NewCompany {
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize, AsChangeset)]
#[diesel(table_name = companies)]
pub struct CompanyChanges {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

crud_resource!(Company {
    entity: "company",
    table: companies,
    id: id_company,
    new: NewCompany,
    changes: CompanyChanges { name, address, phone },
});
