//! Reference data: categories and the products listed in them.

use chrono::{Months, NaiveDate};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::GenerationConfig;
use crate::domain::category::Category;
use crate::domain::product::Product;
use crate::generator::random_date_between;

/// Department names, assigned to categories in order.
pub const CATEGORY_NAMES: [&str; 15] = [
    "Electronics",
    "Clothing",
    "Home & Garden",
    "Books",
    "Sports & Outdoors",
    "Toys & Games",
    "Health & Beauty",
    "Automotive",
    "Pet Supplies",
    "Food & Beverages",
    "Office Supplies",
    "Musical Instruments",
    "Baby Products",
    "Jewelry",
    "Furniture",
];

/// Base product names per department, indexed like `CATEGORY_NAMES`.
#[rustfmt::skip]
const PRODUCT_NAMES: [[&str; 8]; 15] = [
    ["Smartphone", "Laptop", "Tablet", "Headphones", "Smartwatch", "Camera", "Speaker", "Monitor"],
    ["T-Shirt", "Jeans", "Dress", "Jacket", "Sneakers", "Hat", "Sweater", "Shorts"],
    ["Coffee Maker", "Lamp", "Plant Pot", "Garden Tool", "Cushion", "Curtains", "Rug", "Vase"],
    ["Novel", "Cookbook", "Biography", "Textbook", "Comic Book", "Dictionary", "Atlas", "Guide"],
    ["Basketball", "Tennis Racket", "Yoga Mat", "Dumbbells", "Bicycle", "Tent", "Backpack", "Running Shoes"],
    ["Board Game", "Action Figure", "Puzzle", "Building Blocks", "Doll", "RC Car", "Card Game", "Stuffed Animal"],
    ["Shampoo", "Moisturizer", "Perfume", "Toothbrush", "Vitamins", "Face Mask", "Lipstick", "Sunscreen"],
    ["Car Battery", "Tire", "Oil Filter", "Brake Pad", "Car Mat", "Phone Mount", "Dash Cam", "Air Freshener"],
    ["Dog Food", "Cat Litter", "Pet Toy", "Leash", "Pet Bed", "Food Bowl", "Treats", "Collar"],
    ["Coffee", "Tea", "Chocolate", "Snacks", "Juice", "Cereal", "Pasta", "Sauce"],
    ["Notebook", "Pen", "Stapler", "Folder", "Desk Organizer", "Calculator", "Printer Paper", "Binder"],
    ["Guitar", "Piano", "Drums", "Violin", "Microphone", "Keyboard", "Ukulele", "Harmonica"],
    ["Diapers", "Baby Formula", "Pacifier", "Baby Clothes", "Stroller", "Car Seat", "Baby Bottle", "Rattle"],
    ["Necklace", "Ring", "Earrings", "Bracelet", "Watch", "Brooch", "Anklet", "Pendant"],
    ["Chair", "Table", "Sofa", "Desk", "Bookshelf", "Bed Frame", "Dresser", "Coffee Table"],
];

const BRANDS: [&str; 5] = ["Premium", "Pro", "Elite", "Classic", "Modern"];

const BRAND_PROBABILITY: f64 = 0.3;
const MAX_VARIANT: u32 = 3;

/// Price bounds in cents, inclusive.
const MIN_PRICE_CENTS: i64 = 999;
const MAX_PRICE_CENTS: i64 = 99_999;

const MAX_STOCK: i32 = 500;

/// Products are listed at most this many months before `as_of`.
const LISTING_WINDOW_MONTHS: u32 = 24;

/// Build the first `config.categories` categories of the catalogue.
pub fn generate_categories(config: &GenerationConfig) -> Vec<Category> {
    CATEGORY_NAMES
        .iter()
        .take(config.categories)
        .zip(1..)
        .map(|(name, id)| Category::new(id, *name))
        .collect()
}

/// Build `config.products` products spread uniformly over `categories`.
pub fn generate_products<R: Rng>(
    rng: &mut R,
    config: &GenerationConfig,
    categories: &[Category],
) -> Vec<Product> {
    let listed_from = months_before(config.as_of, LISTING_WINDOW_MONTHS);

    (1..=config.products as i32)
        .filter_map(|id| {
            let category = categories.choose(rng)?;
            let name = product_name(rng, category.id);
            let description = format!(
                "High-quality {} perfect for your needs. Features excellent design and durability.",
                name.to_lowercase()
            );

            Some(Product {
                id,
                name,
                description,
                price_cents: rng.gen_range(MIN_PRICE_CENTS..=MAX_PRICE_CENTS),
                category_id: category.id,
                stock_quantity: rng.gen_range(0..=MAX_STOCK),
                created_date: random_date_between(rng, listed_from, config.as_of),
            })
        })
        .collect()
}

fn product_name<R: Rng>(rng: &mut R, category_id: i32) -> String {
    let names = &PRODUCT_NAMES[(category_id as usize - 1) % PRODUCT_NAMES.len()];
    let base = names.choose(rng).copied().unwrap_or("Product");

    let variant = rng.gen_range(1..=MAX_VARIANT);
    let mut name = if variant > 1 {
        format!("{base} {variant}")
    } else {
        base.to_string()
    };

    if rng.gen_bool(BRAND_PROBABILITY) {
        if let Some(brand) = BRANDS.choose(rng) {
            name = format!("{brand} {name}");
        }
    }
    name
}

pub(crate) fn months_before(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(months)).unwrap_or(date)
}
