use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::order::{
    Order as DomainOrder, OrderItem as DomainOrderItem, OrderStatus, UnknownVariant,
};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::orders)]
pub struct Order {
    pub id: i32,
    pub customer_id: i32,
    pub order_date: NaiveDate,
    pub status: String,
    pub shipping_address: String,
    pub shipping_city: String,
    pub shipping_state: String,
    pub shipping_zip: String,
    pub total_cents: i64,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::order_items)]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price_cents: i64,
    pub subtotal_cents: i64,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::orders)]
pub struct NewOrder<'a> {
    pub id: i32,
    pub customer_id: i32,
    pub order_date: NaiveDate,
    pub status: &'a str,
    pub shipping_address: &'a str,
    pub shipping_city: &'a str,
    pub shipping_state: &'a str,
    pub shipping_zip: &'a str,
    pub total_cents: i64,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::order_items)]
pub struct NewOrderItem {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price_cents: i64,
    pub subtotal_cents: i64,
}

impl TryFrom<Order> for DomainOrder {
    type Error = UnknownVariant;

    fn try_from(value: Order) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id,
            customer_id: value.customer_id,
            order_date: value.order_date,
            status: OrderStatus::try_from(value.status.as_str())?,
            shipping_address: value.shipping_address,
            shipping_city: value.shipping_city,
            shipping_state: value.shipping_state,
            shipping_zip: value.shipping_zip,
            total_cents: value.total_cents,
        })
    }
}

impl From<OrderItem> for DomainOrderItem {
    fn from(value: OrderItem) -> Self {
        Self {
            id: value.id,
            order_id: value.order_id,
            product_id: value.product_id,
            quantity: value.quantity,
            unit_price_cents: value.unit_price_cents,
            subtotal_cents: value.subtotal_cents,
        }
    }
}

impl<'a> From<&'a DomainOrder> for NewOrder<'a> {
    fn from(value: &'a DomainOrder) -> Self {
        Self {
            id: value.id,
            customer_id: value.customer_id,
            order_date: value.order_date,
            status: value.status.into(),
            shipping_address: value.shipping_address.as_str(),
            shipping_city: value.shipping_city.as_str(),
            shipping_state: value.shipping_state.as_str(),
            shipping_zip: value.shipping_zip.as_str(),
            total_cents: value.total_cents,
        }
    }
}

impl From<&DomainOrderItem> for NewOrderItem {
    fn from(value: &DomainOrderItem) -> Self {
        Self {
            id: value.id,
            order_id: value.order_id,
            product_id: value.product_id,
            quantity: value.quantity,
            unit_price_cents: value.unit_price_cents,
            subtotal_cents: value.subtotal_cents,
        }
    }
}
