//! Core types for the Fake Store API

use serde::{Deserialize, Serialize};

/// Login credentials
///
/// Only ever sent as the body of a login request.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Product rating summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u64,
}

/// A product as served by `GET /products` and `GET /products/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

/// Fields submitted when creating a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl NewProduct {
    pub fn new(
        title: impl Into<String>,
        price: f64,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            price,
            description: description.into(),
            category: category.into(),
            image: None,
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// Echo returned by `POST /products`
///
/// The service assigns `id`; everything else is whatever it chose to echo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedProduct {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_hides_password() {
        let creds = Credentials::new("mor_2314", "83r5^_");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("mor_2314"));
        assert!(!debug.contains("83r5^_"));
    }

    #[test]
    fn test_new_product_omits_missing_image() {
        let product = NewProduct::new("A new product", 100.0, "An awesome new gadget.", "electronics");
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["title"], "A new product");
        assert_eq!(json["price"], 100.0);
        assert!(json.get("image").is_none());

        let json = serde_json::to_value(product.with_image("https://i.pravatar.cc")).unwrap();
        assert_eq!(json["image"], "https://i.pravatar.cc");
    }

    #[test]
    fn test_parse_catalog_product() {
        let json = r#"{
            "id": 1,
            "title": "Fjallraven - Foldsack No. 1 Backpack, Fits 15 Laptops",
            "price": 109.95,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.category, "men's clothing");
        assert_eq!(product.rating.unwrap().count, 120);
    }

    #[test]
    fn test_parse_created_product_echo() {
        let json = r#"{"id": 21, "title": "A new product", "price": 100}"#;
        let created: CreatedProduct = serde_json::from_str(json).unwrap();
        assert_eq!(created.id, 21);
        assert_eq!(created.title.as_deref(), Some("A new product"));
        assert_eq!(created.category, None);
    }
}
