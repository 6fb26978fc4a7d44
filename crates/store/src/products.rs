//! Product catalog management.

use guava_core::ProductId;

use crate::catalog;
use crate::collection::upsert_where;
use crate::error::StoreError;
use crate::events::StoreEvent;
use crate::keys;
use crate::models::Product;
use crate::store::Store;

impl Store {
    /// The catalog: the stored override when present, the bundled catalog
    /// otherwise.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        self.read_collection_or(keys::PRODUCTS, catalog::default_products)
    }

    /// Look up a single product.
    #[must_use]
    pub fn find_product(&self, product_id: &ProductId) -> Option<Product> {
        self.products()
            .into_iter()
            .find(|product| product.id == *product_id)
    }

    /// Insert or replace a product by ID.
    ///
    /// The first save materializes the bundled catalog into storage, so
    /// later reads see one consistent collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be written back.
    pub fn save_product(&self, product: Product) -> Result<(), StoreError> {
        let mut products = self.products();
        let id = product.id.clone();
        upsert_where(&mut products, product, |existing| existing.id == id);
        self.write_collection(keys::PRODUCTS, &products, StoreEvent::ProductsChanged)
    }

    /// Delete the product with the given ID; other products and all
    /// placed orders are unaffected.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be written back.
    pub fn delete_product(&self, product_id: &ProductId) -> Result<(), StoreError> {
        let mut products = self.products();
        products.retain(|product| product.id != *product_id);
        self.write_collection(keys::PRODUCTS, &products, StoreEvent::ProductsChanged)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn product(id: &str, name: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_owned(),
            description: String::new(),
            price: Decimal::from(999),
            discount: Decimal::ZERO,
            images: Vec::new(),
            category: "Men".to_owned(),
            subcategory: "T-Shirts".to_owned(),
            sizes: vec!["M".to_owned(), "L".to_owned()],
            colors: vec!["Black".to_owned()],
            stock: 25,
            rating: 4.0,
            reviews: 3,
            featured: false,
            trending: false,
            bestseller: false,
            specifications: None,
        }
    }

    #[test]
    fn test_fresh_store_serves_bundled_catalog() {
        let store = Store::in_memory();
        let products = store.products();
        assert!(!products.is_empty());
        assert_eq!(products, catalog::default_products());
    }

    #[test]
    fn test_save_materializes_catalog_plus_new_product() {
        let store = Store::in_memory();
        let bundled = catalog::default_products().len();

        store.save_product(product("p-new", "Linen Shirt")).unwrap();

        let products = store.products();
        assert_eq!(products.len(), bundled + 1);
        assert!(store.find_product(&ProductId::new("p-new")).is_some());
    }

    #[test]
    fn test_save_replaces_by_id() {
        let store = Store::in_memory();
        store.save_product(product("p-1", "Old Name")).unwrap();
        store.save_product(product("p-1", "New Name")).unwrap();

        let found = store.find_product(&ProductId::new("p-1")).unwrap();
        assert_eq!(found.name, "New Name");
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let store = Store::in_memory();
        store.save_product(product("p-1", "A")).unwrap();
        store.save_product(product("p-2", "B")).unwrap();
        let before = store.products().len();

        store.delete_product(&ProductId::new("p-1")).unwrap();

        let products = store.products();
        assert_eq!(products.len(), before - 1);
        assert!(store.find_product(&ProductId::new("p-1")).is_none());
        assert!(store.find_product(&ProductId::new("p-2")).is_some());
    }
}
