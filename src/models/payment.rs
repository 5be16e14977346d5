use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::order::UnknownVariant;
use crate::domain::payment::{Payment as DomainPayment, PaymentMethod, PaymentStatus};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::payments)]
pub struct Payment {
    pub id: i32,
    pub order_id: i32,
    pub payment_method: String,
    pub payment_date: NaiveDate,
    pub amount_cents: i64,
    pub payment_status: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::payments)]
pub struct NewPayment<'a> {
    pub id: i32,
    pub order_id: i32,
    pub payment_method: &'a str,
    pub payment_date: NaiveDate,
    pub amount_cents: i64,
    pub payment_status: &'a str,
}

impl TryFrom<Payment> for DomainPayment {
    type Error = UnknownVariant;

    fn try_from(value: Payment) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id,
            order_id: value.order_id,
            payment_method: PaymentMethod::try_from(value.payment_method.as_str())?,
            payment_date: value.payment_date,
            amount_cents: value.amount_cents,
            payment_status: PaymentStatus::try_from(value.payment_status.as_str())?,
        })
    }
}

impl<'a> From<&'a DomainPayment> for NewPayment<'a> {
    fn from(value: &'a DomainPayment) -> Self {
        Self {
            id: value.id,
            order_id: value.order_id,
            payment_method: value.payment_method.into(),
            payment_date: value.payment_date,
            amount_cents: value.amount_cents,
            payment_status: value.payment_status.into(),
        }
    }
}
