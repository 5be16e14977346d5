//! Customer accounts with synthetic contact and address details.

use std::collections::HashSet;

use fake::Fake;
use fake::faker::address::en::{BuildingNumber, CityName, StateAbbr, StreetName, ZipCode};
use fake::faker::internet::en::FreeEmailProvider;
use fake::faker::name::en::{FirstName, LastName};
use fake::faker::phone_number::en::PhoneNumber;
use rand::Rng;

use crate::config::GenerationConfig;
use crate::domain::customer::Customer;
use crate::generator::catalog::months_before;
use crate::generator::random_date_between;

const COUNTRY: &str = "USA";

/// Customers signed up at most this many months before `as_of`.
const REGISTRATION_WINDOW_MONTHS: u32 = 36;

/// A street address drawn from the `fake` US locale.
pub(crate) struct PostalAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl PostalAddress {
    pub(crate) fn fake<R: Rng>(rng: &mut R) -> Self {
        let number: String = BuildingNumber().fake_with_rng(rng);
        let street: String = StreetName().fake_with_rng(rng);
        Self {
            street: format!("{number} {street}"),
            city: CityName().fake_with_rng(rng),
            state: StateAbbr().fake_with_rng(rng),
            zip: ZipCode().fake_with_rng(rng),
        }
    }
}

/// Build `config.customers` customers with unique lowercase emails.
pub fn generate_customers<R: Rng>(rng: &mut R, config: &GenerationConfig) -> Vec<Customer> {
    let registered_from = months_before(config.as_of, REGISTRATION_WINDOW_MONTHS);
    let mut taken = HashSet::with_capacity(config.customers);

    (1..=config.customers as i32)
        .map(|id| {
            let first_name: String = FirstName().fake_with_rng(rng);
            let last_name: String = LastName().fake_with_rng(rng);
            let provider: String = FreeEmailProvider().fake_with_rng(rng);
            let email = unique_email(&mut taken, id, &first_name, &last_name, &provider);
            let phone: String = PhoneNumber().fake_with_rng(rng);
            let address = PostalAddress::fake(rng);

            Customer {
                id,
                first_name,
                last_name,
                email,
                phone,
                address: address.street,
                city: address.city,
                state: address.state,
                zip_code: address.zip,
                country: COUNTRY.to_string(),
                registration_date: random_date_between(rng, registered_from, config.as_of),
            }
        })
        .collect()
}

fn unique_email(
    taken: &mut HashSet<String>,
    id: i32,
    first_name: &str,
    last_name: &str,
    provider: &str,
) -> String {
    let local = format!("{}.{}", email_part(first_name), email_part(last_name));
    let mut email = format!("{local}@{provider}");
    if taken.contains(&email) {
        email = format!("{local}{id}@{provider}");
    }
    taken.insert(email.clone());
    email
}

/// Lowercase `value` and keep only ASCII letters and digits.
fn email_part(value: &str) -> String {
    let part: String = value
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if part.is_empty() { "user".to_string() } else { part }
}
