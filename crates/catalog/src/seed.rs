//! Built-in catalog contents.

use storefront_core::{DomainResult, Money, ProductId};

use crate::image::placeholder_image_url;
use crate::product::{NewProduct, ProductRecord};

struct SeedRow {
    id: u32,
    name: &'static str,
    price: Money,
    category: &'static str,
    in_stock: bool,
    description: &'static str,
}

const fn row(
    id: u32,
    name: &'static str,
    price: Money,
    category: &'static str,
    in_stock: bool,
    description: &'static str,
) -> SeedRow {
    SeedRow { id, name, price, category, in_stock, description }
}

const ROWS: &[SeedRow] = &[
    row(1, "iPhone 14 Pro", Money::new(999, 99), "Electronics", true, "Latest iPhone with ProRAW camera and A16 Bionic chip"),
    row(2, "Samsung Galaxy S23", Money::new(899, 99), "Electronics", true, "Powerful Android smartphone with advanced camera system"),
    row(3, "MacBook Pro M2", Money::new(1999, 99), "Electronics", false, "Professional laptop with M2 chip for creative professionals"),
    row(4, "Dell XPS 13", Money::new(1299, 99), "Electronics", true, "Ultra-portable laptop with InfinityEdge display"),
    row(5, "Nike Air Jordan 1", Money::new(199, 99), "Shoes", true, "Iconic basketball shoes with timeless design"),
    row(6, "Adidas Ultraboost 22", Money::new(179, 99), "Shoes", true, "Energy-returning running shoes with Boost technology"),
    row(7, "Levi's 501 Original", Money::new(89, 99), "Clothing", true, "Classic straight-leg jeans with authentic details"),
    row(8, "Uniqlo Heattech T-Shirt", Money::new(19, 99), "Clothing", true, "Moisture-wicking and heat-retaining base layer"),
    row(9, "Sony WH-1000XM5", Money::new(399, 99), "Electronics", true, "Industry-leading noise canceling headphones"),
    row(10, "Apple AirPods Pro 2", Money::new(249, 99), "Electronics", true, "Wireless earbuds with adaptive transparency"),
    row(11, "iPad Air 5th Gen", Money::new(599, 99), "Electronics", true, "Powerful tablet with M1 chip and Apple Pencil support"),
    row(12, "Samsung Galaxy Tab S8", Money::new(499, 99), "Electronics", false, "Premium Android tablet with S Pen included"),
    row(13, "Zara Wool Coat", Money::new(149, 99), "Clothing", true, "Elegant wool coat for winter styling"),
    row(14, "Patagonia Fleece Jacket", Money::new(129, 99), "Clothing", true, "Sustainable fleece jacket for outdoor activities"),
    row(15, "New Balance 990v5", Money::new(184, 99), "Shoes", true, "Premium running shoes made in USA"),
    row(16, "Converse Chuck 70", Money::new(85, 99), "Shoes", true, "Premium version of the classic Chuck Taylor"),
    row(17, "Canon EOS R6 Mark II", Money::new(2499, 99), "Electronics", false, "Full-frame mirrorless camera for professionals"),
    row(18, "Nintendo Switch OLED", Money::new(349, 99), "Electronics", true, "Enhanced Nintendo Switch with OLED screen"),
    row(19, "Tommy Hilfiger Polo", Money::new(79, 99), "Clothing", true, "Classic polo shirt with iconic flag logo"),
    row(20, "Dr. Martens 1460", Money::new(169, 99), "Shoes", true, "Iconic leather boots with air-cushioned sole"),
];

/// Build the built-in product list, in catalog order.
pub fn builtin_products() -> DomainResult<Vec<ProductRecord>> {
    ROWS.iter()
        .map(|r| {
            ProductRecord::new(NewProduct {
                id: ProductId::new(r.id),
                name: r.name.to_string(),
                price: r.price,
                category: r.category.to_string(),
                image_url: placeholder_image_url(r.name),
                in_stock: r.in_stock,
                description: r.description.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use storefront_core::Entity;

    #[test]
    fn builtin_catalog_is_valid() {
        let products = builtin_products().unwrap();
        assert_eq!(products.len(), 20);

        let ids: HashSet<_> = products.iter().map(|p| p.id()).collect();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn builtin_catalog_keeps_insertion_order() {
        let products = builtin_products().unwrap();
        let ids: Vec<u32> = products.iter().map(|p| p.id().get()).collect();
        assert_eq!(ids, (1..=20).collect::<Vec<_>>());
    }

    #[test]
    fn image_urls_are_derived_from_names() {
        let products = builtin_products().unwrap();
        let jordan = products.iter().find(|p| p.id() == ProductId::new(5)).unwrap();
        assert_eq!(
            jordan.image_url(),
            "https://placehold.co/600x400/cccccc/333333?text=Nike%20Air%20Jordan%201"
        );
    }
}
