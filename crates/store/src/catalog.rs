//! Bundled default catalog.
//!
//! A fresh store has no products or coupons key; reads fall back to the
//! records here so the shop is browsable before an admin touches
//! anything. The first admin save materializes the bundle into storage.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use guava_core::{CouponId, CouponKind, ProductId};

use crate::models::{Coupon, Product};

fn product(
    id: &str,
    name: &str,
    description: &str,
    price: u32,
    discount: u32,
    category: &str,
    subcategory: &str,
    sizes: &[&str],
    colors: &[&str],
    stock: u32,
    rating: f32,
    reviews: u32,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        description: description.to_owned(),
        price: Decimal::from(price),
        discount: Decimal::from(discount),
        images: vec![format!("/images/{id}-1.jpg"), format!("/images/{id}-2.jpg")],
        category: category.to_owned(),
        subcategory: subcategory.to_owned(),
        sizes: sizes.iter().map(|s| (*s).to_owned()).collect(),
        colors: colors.iter().map(|c| (*c).to_owned()).collect(),
        stock,
        rating,
        reviews,
        featured: false,
        trending: false,
        bestseller: false,
        specifications: None,
    }
}

/// Products served before any admin override is stored.
#[must_use]
pub fn default_products() -> Vec<Product> {
    let mut oxford = product(
        "prod-001",
        "Classic Oxford Shirt",
        "Button-down oxford in breathable combed cotton.",
        2499,
        20,
        "Men",
        "Shirts",
        &["S", "M", "L", "XL"],
        &["White", "Sky Blue"],
        40,
        4.6,
        128,
    );
    oxford.featured = true;
    oxford.bestseller = true;
    oxford.specifications = Some(BTreeMap::from([
        ("Fabric".to_owned(), "100% cotton".to_owned()),
        ("Fit".to_owned(), "Regular".to_owned()),
    ]));

    let mut kurta = product(
        "prod-002",
        "Chanderi Silk Kurta",
        "Handloom chanderi kurta with zari detailing.",
        3999,
        10,
        "Women",
        "Ethnic Wear",
        &["S", "M", "L"],
        &["Teal", "Maroon"],
        25,
        4.8,
        86,
    );
    kurta.featured = true;
    kurta.trending = true;

    let mut tee = product(
        "prod-003",
        "Graphic Crew Tee",
        "Heavyweight crew-neck tee with screen print.",
        899,
        0,
        "Men",
        "T-Shirts",
        &["S", "M", "L", "XL", "XXL"],
        &["Black", "Olive", "Rust"],
        120,
        4.2,
        311,
    );
    tee.trending = true;

    let mut saree = product(
        "prod-004",
        "Mysore Crepe Saree",
        "Lightweight crepe saree with printed pallu.",
        5499,
        15,
        "Women",
        "Sarees",
        &["Free Size"],
        &["Emerald", "Rose Gold"],
        15,
        4.7,
        54,
    );
    saree.bestseller = true;

    let denim = product(
        "prod-005",
        "Slim Fit Denim",
        "Mid-rise stretch denim, stone washed.",
        2199,
        25,
        "Men",
        "Jeans",
        &["30", "32", "34", "36"],
        &["Indigo", "Charcoal"],
        60,
        4.4,
        203,
    );

    let dupatta = product(
        "prod-006",
        "Bandhani Dupatta",
        "Tie-dye georgette dupatta with mirror work.",
        1299,
        0,
        "Women",
        "Accessories",
        &["Free Size"],
        &["Yellow", "Pink"],
        35,
        4.1,
        19,
    );

    vec![oxford, kurta, tee, saree, denim, dupatta]
}

/// Coupons honored before any admin override is stored.
#[must_use]
pub fn default_coupons() -> Vec<Coupon> {
    let expiry = NaiveDate::from_ymd_opt(2026, 12, 31).expect("valid calendar date");

    vec![
        Coupon {
            id: CouponId::new("c1"),
            code: "WELCOME10".to_owned(),
            discount: Decimal::from(10),
            kind: CouponKind::Percentage,
            min_purchase: Decimal::from(2000),
            max_discount: Some(Decimal::from(500)),
            expiry_date: expiry,
            active: true,
        },
        Coupon {
            id: CouponId::new("c2"),
            code: "FLAT500".to_owned(),
            discount: Decimal::from(500),
            kind: CouponKind::Fixed,
            min_purchase: Decimal::from(5000),
            max_discount: None,
            expiry_date: expiry,
            active: true,
        },
        Coupon {
            id: CouponId::new("c3"),
            code: "MEGA20".to_owned(),
            discount: Decimal::from(20),
            kind: CouponKind::Percentage,
            min_purchase: Decimal::from(10_000),
            max_discount: Some(Decimal::from(2000)),
            expiry_date: expiry,
            active: true,
        },
    ]
}
