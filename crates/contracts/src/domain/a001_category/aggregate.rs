use crate::domain::common::Entity;
use crate::shared::serde_utils::{null_as_default, opt_datetime_lenient};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

crate::integer_id!(
    /// Unique category identifier
    CategoryId
);

// ============================================================================
// Entity
// ============================================================================

/// Product category as returned by the admin API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "opt_datetime_lenient")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "opt_datetime_lenient")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Entity for Category {
    type Id = CategoryId;

    fn entity_id(&self) -> CategoryId {
        self.id
    }
}

// ============================================================================
// Request bodies
// ============================================================================

/// `POST /categories` body. The backend reads the name from `category`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateCategoryDto {
    #[serde(rename = "category")]
    pub name: String,
    pub description: String,
}

/// `PUT /categories/{id}` body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateCategoryDto {
    pub name: String,
    pub description: String,
}

// ============================================================================
// Form
// ============================================================================

/// Draft edited in the category modal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryForm {
    pub id: Option<CategoryId>,
    pub name: String,
    pub description: String,
}

impl CategoryForm {
    pub fn from_category(category: &Category) -> Self {
        Self {
            id: Some(category.id),
            name: category.name.clone(),
            description: category.description.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Category name is required".into());
        }
        Ok(())
    }

    pub fn to_create_dto(&self) -> Result<CreateCategoryDto, String> {
        self.validate()?;
        Ok(CreateCategoryDto {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
        })
    }

    pub fn to_update_dto(&self) -> Result<UpdateCategoryDto, String> {
        self.validate()?;
        Ok(UpdateCategoryDto {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_body_sends_name_as_category() {
        let form = CategoryForm {
            id: None,
            name: " Shoes ".into(),
            description: "Footwear".into(),
        };
        let body = serde_json::to_value(form.to_create_dto().unwrap()).unwrap();
        assert_eq!(body["category"], "Shoes");
        assert_eq!(body["description"], "Footwear");
        assert!(body.get("name").is_none());
    }

    #[test]
    fn test_update_body_sends_name() {
        let form = CategoryForm {
            id: Some(CategoryId(5)),
            name: "Bags".into(),
            description: String::new(),
        };
        let body = serde_json::to_value(form.to_update_dto().unwrap()).unwrap();
        assert_eq!(body["name"], "Bags");
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let form = CategoryForm {
            name: "   ".into(),
            ..Default::default()
        };
        assert_eq!(form.validate(), Err("Category name is required".to_string()));
        assert!(form.to_create_dto().is_err());
    }

    #[test]
    fn test_category_decodes_with_null_description() {
        let cat: Category = serde_json::from_str(
            r#"{"id": 5, "name": "Toys", "description": null, "created_at": "2024-05-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(cat.id, CategoryId(5));
        assert_eq!(cat.description, "");
        assert!(cat.created_at.is_some());
        assert!(cat.updated_at.is_none());
    }
}
