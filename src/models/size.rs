use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::size::{
    NewSize as DomainNewSize, Size as DomainSize, UpdateSize as DomainUpdateSize,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::sizes)]
pub struct Size {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::sizes)]
pub struct NewSize<'a> {
    pub name: &'a str,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::sizes)]
pub struct UpdateSize<'a> {
    pub name: &'a str,
    pub updated_at: NaiveDateTime,
}

impl From<Size> for DomainSize {
    fn from(value: Size) -> Self {
        Self {
            id: value.id,
            name: value.name,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewSize> for NewSize<'a> {
    fn from(value: &'a DomainNewSize) -> Self {
        Self {
            name: value.name.as_str(),
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateSize> for UpdateSize<'a> {
    fn from(value: &'a DomainUpdateSize) -> Self {
        Self {
            name: value.name.as_str(),
            updated_at: value.updated_at,
        }
    }
}
