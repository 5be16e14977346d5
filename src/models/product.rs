use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::product::Product as DomainProduct;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub category_id: i32,
    pub stock_quantity: i32,
    pub created_date: NaiveDate,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub id: i32,
    pub name: &'a str,
    pub description: &'a str,
    pub price_cents: i64,
    pub category_id: i32,
    pub stock_quantity: i32,
    pub created_date: NaiveDate,
}

impl From<Product> for DomainProduct {
    fn from(value: Product) -> Self {
        Self {
            id: value.id,
            name: value.name,
            description: value.description,
            price_cents: value.price_cents,
            category_id: value.category_id,
            stock_quantity: value.stock_quantity,
            created_date: value.created_date,
        }
    }
}

impl<'a> From<&'a DomainProduct> for NewProduct<'a> {
    fn from(value: &'a DomainProduct) -> Self {
        Self {
            id: value.id,
            name: value.name.as_str(),
            description: value.description.as_str(),
            price_cents: value.price_cents,
            category_id: value.category_id,
            stock_quantity: value.stock_quantity,
            created_date: value.created_date,
        }
    }
}
