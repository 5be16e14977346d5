use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::customer::Customer as DomainCustomer;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::customers)]
pub struct Customer {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub registration_date: NaiveDate,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::customers)]
pub struct NewCustomer<'a> {
    pub id: i32,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub address: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub zip_code: &'a str,
    pub country: &'a str,
    pub registration_date: NaiveDate,
}

impl From<Customer> for DomainCustomer {
    fn from(value: Customer) -> Self {
        Self {
            id: value.id,
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            phone: value.phone,
            address: value.address,
            city: value.city,
            state: value.state,
            zip_code: value.zip_code,
            country: value.country,
            registration_date: value.registration_date,
        }
    }
}

impl<'a> From<&'a DomainCustomer> for NewCustomer<'a> {
    fn from(value: &'a DomainCustomer) -> Self {
        Self {
            id: value.id,
            first_name: value.first_name.as_str(),
            last_name: value.last_name.as_str(),
            email: value.email.as_str(),
            phone: value.phone.as_str(),
            address: value.address.as_str(),
            city: value.city.as_str(),
            state: value.state.as_str(),
            zip_code: value.zip_code.as_str(),
            country: value.country.as_str(),
            registration_date: value.registration_date,
        }
    }
}
