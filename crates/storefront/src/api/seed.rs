//! Static seed datasets for the mock backend.
//!
//! The grocery catalog, demo users, order history, and default banners
//! the repositories start from. Dates are relative to process start so
//! the order history always reads as recent.

#![allow(clippy::unwrap_used)] // literal seed values are known-valid

use chrono::{DateTime, Duration, Utc};

use baksho_core::{
    AddressId, AddressKind, BannerKind, Category, Email, OrderId, OrderStatus, Price, ProductId,
    UserId,
};

use crate::models::banner::Banner;
use crate::models::user::Address;

use super::types::{DeliveryAddress, Order, OrderItem, Product, UserRecord};

#[allow(clippy::too_many_arguments)]
fn product(
    id: i32,
    name: &str,
    category: Category,
    cents: i64,
    original_cents: i64,
    rating: f32,
    reviews: u32,
    unit: &str,
    description: &str,
    in_stock: bool,
) -> Product {
    let price = Price::from_cents(cents);
    let original_price = Price::from_cents(original_cents);
    let slug = name.to_lowercase().replace(' ', "-");

    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        category,
        price,
        original_price,
        discount: price.percent_off(original_price),
        rating,
        reviews,
        image: format!("/images/products/{slug}.jpg"),
        description: description.to_owned(),
        in_stock,
        unit: unit.to_owned(),
    }
}

/// The seed grocery catalog.
#[must_use]
pub fn products() -> Vec<Product> {
    use Category::{Bakery, Beverages, Dairy, Fruits, MeatFish, Pantry, Snacks, Vegetables};

    vec![
        product(1, "Banana", Fruits, 69, 79, 4.7, 342, "per lb",
            "Sweet Cavendish bananas, ripened on the shelf.", true),
        product(2, "Honeycrisp Apple", Fruits, 249, 299, 4.8, 521, "per lb",
            "Crisp and juicy with a honeyed finish.", true),
        product(3, "Strawberries", Fruits, 399, 499, 4.6, 287, "1 lb box",
            "Bright red berries picked at peak season.", true),
        product(4, "Avocado", Fruits, 149, 149, 4.5, 198, "each",
            "Hass avocados, ready to eat in a day or two.", true),
        product(5, "Roma Tomatoes", Vegetables, 129, 159, 4.4, 176, "per lb",
            "Firm plum tomatoes for sauces and salads.", true),
        product(6, "Baby Spinach", Vegetables, 299, 349, 4.6, 231, "5 oz bag",
            "Tender leaves, triple-washed.", true),
        product(7, "Broccoli Crowns", Vegetables, 199, 199, 4.3, 143, "per lb",
            "Tight green crowns, trimmed and ready.", false),
        product(8, "Red Onions", Vegetables, 99, 129, 4.2, 98, "per lb",
            "Mild and sweet, great raw or roasted.", true),
        product(9, "Whole Milk", Dairy, 349, 399, 4.7, 412, "1 gal",
            "Grade A whole milk from local dairies.", true),
        product(10, "Large Eggs", Dairy, 279, 329, 4.8, 634, "dozen",
            "Cage-free brown eggs.", true),
        product(11, "Greek Yogurt", Dairy, 499, 599, 4.6, 389, "32 oz tub",
            "Thick strained yogurt, plain.", true),
        product(12, "Sharp Cheddar", Dairy, 399, 449, 4.5, 267, "8 oz block",
            "Aged twelve months for a proper bite.", true),
        product(13, "Sourdough Loaf", Bakery, 449, 499, 4.7, 298, "24 oz loaf",
            "Naturally leavened, baked in-store every morning.", true),
        product(14, "Butter Croissants", Bakery, 599, 699, 4.6, 187, "4 pack",
            "Flaky, all-butter, laminated by hand.", true),
        product(15, "Whole Wheat Bread", Bakery, 299, 349, 4.4, 224, "20 oz loaf",
            "Soft sandwich loaf with whole grain flour.", true),
        product(16, "Chicken Breast", MeatFish, 599, 699, 4.5, 456, "per lb",
            "Boneless skinless, air-chilled.", true),
        product(17, "Atlantic Salmon", MeatFish, 999, 1299, 4.7, 312, "per lb",
            "Fresh fillets, skin on.", true),
        product(18, "Ground Beef", MeatFish, 649, 699, 4.4, 278, "per lb",
            "85/15 chuck, ground in-store daily.", true),
        product(19, "Orange Juice", Beverages, 399, 449, 4.5, 345, "52 fl oz",
            "Not from concentrate, no pulp.", true),
        product(20, "Cold Brew Coffee", Beverages, 449, 499, 4.6, 203, "32 fl oz",
            "Slow-steeped 18 hours, unsweetened.", false),
        product(21, "Sparkling Water", Beverages, 549, 599, 4.3, 156, "12 pack",
            "Lime-essence sparkling water, unsweetened.", true),
        product(22, "Tortilla Chips", Snacks, 329, 379, 4.4, 189, "13 oz bag",
            "Stone-ground corn, sea salt.", true),
        product(23, "Trail Mix", Snacks, 699, 799, 4.5, 134, "26 oz jar",
            "Roasted nuts, raisins, and dark chocolate.", true),
        product(24, "Basmati Rice", Pantry, 899, 999, 4.8, 423, "10 lb bag",
            "Extra-long grain, aged two years.", true),
        product(25, "Olive Oil", Pantry, 1199, 1399, 4.7, 356, "25.4 fl oz",
            "Cold-extracted extra virgin.", true),
    ]
}

fn demo_addresses() -> Vec<Address> {
    vec![
        Address {
            id: AddressId::new(1),
            kind: AddressKind::Home,
            street: "42 Maple Street".to_owned(),
            city: "Springfield".to_owned(),
            state: "IL".to_owned(),
            zip: "62704".to_owned(),
            is_default: true,
        },
        Address {
            id: AddressId::new(2),
            kind: AddressKind::Work,
            street: "901 Commerce Drive".to_owned(),
            city: "Springfield".to_owned(),
            state: "IL".to_owned(),
            zip: "62701".to_owned(),
            is_default: false,
        },
    ]
}

/// The seed user collection.
///
/// Passwords are plaintext demo values (`demo@example.com` /
/// `password123`); see the crate docs for why that is acceptable only
/// here.
#[must_use]
pub fn users() -> Vec<UserRecord> {
    vec![
        UserRecord {
            id: UserId::new(1),
            email: Email::parse("demo@example.com").unwrap(),
            password: "password123".to_owned(),
            first_name: "Demo".to_owned(),
            last_name: "Shopper".to_owned(),
            phone: "555-0134".to_owned(),
            is_admin: false,
            addresses: demo_addresses(),
            created_at: Utc::now() - Duration::days(240),
        },
        UserRecord {
            id: UserId::new(2),
            email: Email::parse("admin@example.com").unwrap(),
            password: "admin123".to_owned(),
            first_name: "Asha".to_owned(),
            last_name: "Rahman".to_owned(),
            phone: "555-0188".to_owned(),
            is_admin: true,
            addresses: Vec::new(),
            created_at: Utc::now() - Duration::days(400),
        },
        UserRecord {
            id: UserId::new(3),
            email: Email::parse("sofia@example.com").unwrap(),
            password: "gardenia42".to_owned(),
            first_name: "Sofia".to_owned(),
            last_name: "Keller".to_owned(),
            phone: "555-0172".to_owned(),
            is_admin: false,
            addresses: Vec::new(),
            created_at: Utc::now() - Duration::days(31),
        },
    ]
}

fn item(product_id: i32, name: &str, quantity: u32, cents: i64) -> OrderItem {
    let slug = name.to_lowercase().replace(' ', "-");
    OrderItem {
        product_id: ProductId::new(product_id),
        name: name.to_owned(),
        quantity,
        price: Price::from_cents(cents),
        image: format!("/images/products/{slug}.jpg"),
    }
}

#[allow(clippy::too_many_arguments)]
fn order(
    sequence: usize,
    days_ago: i64,
    status: OrderStatus,
    items: Vec<OrderItem>,
    subtotal_cents: i64,
    tax_cents: i64,
    fee_cents: i64,
) -> Order {
    use chrono::Datelike;

    let date: DateTime<Utc> = Utc::now() - Duration::days(days_ago);
    let subtotal = Price::from_cents(subtotal_cents);
    let tax = Price::from_cents(tax_cents);
    let delivery_fee = Price::from_cents(fee_cents);

    Order {
        id: OrderId::from_sequence(date.year(), sequence),
        user_id: Some(UserId::new(1)),
        email: Some(Email::parse("demo@example.com").unwrap()),
        date,
        status,
        items,
        subtotal,
        tax,
        delivery_fee,
        total: subtotal + tax + delivery_fee,
        delivery_address: DeliveryAddress {
            street: "42 Maple Street".to_owned(),
            city: "Springfield".to_owned(),
            state: "IL".to_owned(),
            zip: "62704".to_owned(),
        },
        payment_method: "card".to_owned(),
        estimated_delivery: (date + Duration::days(3)).date_naive(),
    }
}

/// The seed order history, all for the demo shopper.
#[must_use]
pub fn orders() -> Vec<Order> {
    vec![
        order(
            1,
            9,
            OrderStatus::Delivered,
            vec![
                item(9, "Whole Milk", 1, 349),
                item(10, "Large Eggs", 2, 279),
                item(1, "Banana", 3, 69),
            ],
            1114,
            89,
            499,
        ),
        order(
            2,
            5,
            OrderStatus::Shipped,
            vec![
                item(17, "Atlantic Salmon", 1, 999),
                item(6, "Baby Spinach", 2, 299),
                item(13, "Sourdough Loaf", 1, 449),
            ],
            2046,
            164,
            499,
        ),
        order(
            3,
            1,
            OrderStatus::Processing,
            vec![
                item(24, "Basmati Rice", 1, 899),
                item(25, "Olive Oil", 2, 1199),
                item(16, "Chicken Breast", 3, 599),
            ],
            5094,
            408,
            0,
        ),
    ]
}

/// The default banner list, used when no `baksho_banners` snapshot
/// exists.
#[must_use]
pub fn banners() -> Vec<Banner> {
    vec![
        Banner {
            id: baksho_core::BannerId::generate(),
            title: "Fresh Picks of the Week".to_owned(),
            subtitle: "Up to 25% off seasonal produce".to_owned(),
            image_url: "/images/banners/weekly-sale.jpg".to_owned(),
            link: "/products?category=fruits".to_owned(),
            kind: BannerKind::WeeklySale,
            active: true,
            priority: 1,
        },
        Banner {
            id: baksho_core::BannerId::generate(),
            title: "Free Delivery Over $50".to_owned(),
            subtitle: "Stock the pantry, skip the fee".to_owned(),
            image_url: "/images/banners/free-delivery.jpg".to_owned(),
            link: "/products".to_owned(),
            kind: BannerKind::Ad,
            active: true,
            priority: 2,
        },
        Banner {
            id: baksho_core::BannerId::generate(),
            title: "Bakery Mornings".to_owned(),
            subtitle: "Croissants fresh from the oven at 7am".to_owned(),
            image_url: "/images/banners/bakery.jpg".to_owned(),
            link: "/products?category=bakery".to_owned(),
            kind: BannerKind::Ad,
            active: false,
            priority: 3,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_fits_mock_budget() {
        let products = products();
        assert!(products.len() <= 50);
        // Ids are unique
        let mut ids: Vec<i32> = products.iter().map(|p| p.id.as_i32()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_catalog_prices_never_exceed_original() {
        assert!(products().iter().all(|p| p.price <= p.original_price));
    }

    #[test]
    fn test_seed_order_totals_are_consistent() {
        for order in orders() {
            let items_total: Price = order.items.iter().map(|i| i.price * i.quantity).sum();
            assert_eq!(items_total, order.subtotal, "order {}", order.id);
            assert_eq!(
                order.total,
                order.subtotal + order.tax + order.delivery_fee,
                "order {}",
                order.id
            );
        }
    }

    #[test]
    fn test_default_banners_include_an_inactive_entry() {
        let banners = banners();
        assert!(banners.iter().any(|b| b.active));
        assert!(banners.iter().any(|b| !b.active));
    }
}
