use diesel::prelude::*;

use crate::domain::category::Category as DomainCategory;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::categories)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub description: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::categories)]
pub struct NewCategory<'a> {
    pub id: i32,
    pub name: &'a str,
    pub description: &'a str,
}

impl From<Category> for DomainCategory {
    fn from(value: Category) -> Self {
        Self {
            id: value.id,
            name: value.name,
            description: value.description,
        }
    }
}

impl<'a> From<&'a DomainCategory> for NewCategory<'a> {
    fn from(value: &'a DomainCategory) -> Self {
        Self {
            id: value.id,
            name: value.name.as_str(),
            description: value.description.as_str(),
        }
    }
}
