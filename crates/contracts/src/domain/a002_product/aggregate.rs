use crate::domain::a001_category::aggregate::CategoryId;
use crate::domain::common::{AggregateId, Entity};
use crate::shared::serde_utils::{f64_lenient, i64_lenient, null_as_default};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Types
// ============================================================================

crate::integer_id!(
    /// Unique product identifier
    ProductId
);

crate::integer_id!(
    /// Unique review identifier
    ReviewId
);

// ============================================================================
// Entities
// ============================================================================

/// Customer review attached to a product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comment: String,
    #[serde(default, deserialize_with = "i64_lenient")]
    pub rating: i64,
}

/// Catalog product as listed by the admin API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub price: f64,
    #[serde(default, deserialize_with = "i64_lenient")]
    pub stock: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_url: String,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    /// Joined by the list endpoint; absent on create/update responses
    #[serde(default, deserialize_with = "null_as_default")]
    pub category_name: String,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub average_rating: f64,
    #[serde(default, deserialize_with = "i64_lenient")]
    pub rating_count: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reviews: Vec<Review>,
}

impl Entity for Product {
    type Id = ProductId;

    fn entity_id(&self) -> ProductId {
        self.id
    }
}

impl Product {
    /// Create/update responses carry only the product row. Keep the joined
    /// category name and the review data from the copy that was listed.
    pub fn inherit_joined(&mut self, listed: &Product) {
        if self.category_name.is_empty() && self.category_id == listed.category_id {
            self.category_name = listed.category_name.clone();
        }
        if self.reviews.is_empty() && self.rating_count == 0 {
            self.reviews = listed.reviews.clone();
            self.average_rating = listed.average_rating;
            self.rating_count = listed.rating_count;
        }
    }
}

/// Decode a product list page.
///
/// The backend occasionally pads the array with empty objects (`{}`); those
/// are dropped before decoding the rest.
pub fn parse_product_list(value: serde_json::Value) -> Result<Vec<Product>, serde_json::Error> {
    let items: Vec<serde_json::Value> = serde_json::from_value(value)?;
    items
        .into_iter()
        .filter(|item| !matches!(item, serde_json::Value::Object(map) if map.is_empty()))
        .map(serde_json::from_value)
        .collect()
}

// ============================================================================
// Request body
// ============================================================================

/// Body for `POST /products` and `PUT /products/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i64,
    pub image_url: String,
    pub category_id: CategoryId,
}

// ============================================================================
// Form
// ============================================================================

/// Draft edited in the product modal. Numeric fields stay as typed text
/// until submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub id: Option<ProductId>,
    pub name: String,
    pub description: String,
    pub price: String,
    pub stock: String,
    pub image_url: String,
    pub category_id: String,
}

impl ProductForm {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: Some(product.id),
            name: product.name.clone(),
            description: product.description.clone(),
            price: format_price_input(product.price),
            stock: product.stock.to_string(),
            image_url: product.image_url.clone(),
            category_id: product
                .category_id
                .map(|id| id.as_string())
                .unwrap_or_default(),
        }
    }

    /// Validate and convert into the request body
    pub fn to_dto(&self) -> Result<ProductDto, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Product name is required".into());
        }

        let price = self
            .price
            .trim()
            .parse::<f64>()
            .map_err(|_| "Price must be a number".to_string())?;
        if !price.is_finite() || price < 0.0 {
            return Err("Price cannot be negative".into());
        }

        let stock = if self.stock.trim().is_empty() {
            0
        } else {
            self.stock
                .trim()
                .parse::<i64>()
                .map_err(|_| "Stock must be a whole number".to_string())?
        };
        if stock < 0 {
            return Err("Stock cannot be negative".into());
        }

        if self.category_id.trim().is_empty() {
            return Err("Select a category".into());
        }
        let category_id = CategoryId::from_string(&self.category_id)?;

        Ok(ProductDto {
            name: name.to_string(),
            description: self.description.trim().to_string(),
            price,
            stock,
            image_url: self.image_url.trim().to_string(),
            category_id,
        })
    }
}

fn format_price_input(price: f64) -> String {
    if price.fract() == 0.0 {
        format!("{:.0}", price)
    } else {
        format!("{:.2}", price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ProductForm {
        ProductForm {
            id: None,
            name: "Kettle".into(),
            description: "1.5L".into(),
            price: "799.50".into(),
            stock: "12".into(),
            image_url: "https://cdn.example/kettle.png".into(),
            category_id: "3".into(),
        }
    }

    #[test]
    fn test_valid_form_converts() {
        let dto = filled_form().to_dto().unwrap();
        assert_eq!(dto.price, 799.5);
        assert_eq!(dto.stock, 12);
        assert_eq!(dto.category_id, CategoryId(3));
    }

    #[test]
    fn test_form_validation_messages() {
        let mut form = filled_form();
        form.name = " ".into();
        assert_eq!(form.to_dto().unwrap_err(), "Product name is required");

        let mut form = filled_form();
        form.price = "cheap".into();
        assert_eq!(form.to_dto().unwrap_err(), "Price must be a number");

        let mut form = filled_form();
        form.price = "-1".into();
        assert_eq!(form.to_dto().unwrap_err(), "Price cannot be negative");

        let mut form = filled_form();
        form.category_id = String::new();
        assert_eq!(form.to_dto().unwrap_err(), "Select a category");
    }

    #[test]
    fn test_empty_stock_defaults_to_zero() {
        let mut form = filled_form();
        form.stock = String::new();
        assert_eq!(form.to_dto().unwrap().stock, 0);
    }

    #[test]
    fn test_form_prefills_from_product() {
        let product = Product {
            id: ProductId(9),
            name: "Mug".into(),
            description: String::new(),
            price: 250.0,
            stock: 4,
            image_url: String::new(),
            category_id: Some(CategoryId(2)),
            category_name: "Kitchen".into(),
            average_rating: 0.0,
            rating_count: 0,
            reviews: vec![],
        };
        let form = ProductForm::from_product(&product);
        assert_eq!(form.id, Some(ProductId(9)));
        assert_eq!(form.price, "250");
        assert_eq!(form.category_id, "2");
    }

    #[test]
    fn test_product_list_drops_empty_objects() {
        let raw = serde_json::json!([
            {},
            {"id": 1, "name": "Lamp", "price": "1200.00", "stock": 3, "category_id": 2,
             "average_rating": "4.5", "rating_count": 2,
             "reviews": [{"id": 10, "comment": "Bright", "rating": 5}]},
            {"id": 2, "name": "Desk", "price": 5400, "reviews": null}
        ]);
        let products = parse_product_list(raw).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].price, 1200.0);
        assert_eq!(products[0].average_rating, 4.5);
        assert_eq!(products[0].reviews[0].id, ReviewId(10));
        assert!(products[1].reviews.is_empty());
        assert_eq!(products[1].category_id, None);
    }

    #[test]
    fn test_update_response_keeps_listed_joins() {
        let listed = parse_product_list(serde_json::json!([
            {"id": 1, "name": "Lamp", "price": 1200, "category_id": 2, "category_name": "Lighting",
             "average_rating": 4.5, "rating_count": 1,
             "reviews": [{"id": 10, "comment": "Bright", "rating": 5}]}
        ]))
        .unwrap()
        .remove(0);
        let mut saved: Product = serde_json::from_value(serde_json::json!({
            "id": 1, "name": "Lamp XL", "price": 1500, "category_id": 2
        }))
        .unwrap();
        saved.inherit_joined(&listed);
        assert_eq!(saved.name, "Lamp XL");
        assert_eq!(saved.category_name, "Lighting");
        assert_eq!(saved.reviews.len(), 1);
        assert_eq!(saved.rating_count, 1);

        let mut moved: Product = serde_json::from_value(serde_json::json!({
            "id": 1, "name": "Lamp", "price": 1200, "category_id": 3
        }))
        .unwrap();
        moved.inherit_joined(&listed);
        assert!(moved.category_name.is_empty());
    }

    #[test]
    fn test_product_list_requires_array() {
        assert!(parse_product_list(serde_json::json!({"id": 1})).is_err());
    }
}
