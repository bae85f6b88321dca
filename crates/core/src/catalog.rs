//! Catalog read models
//!
//! A menu item is a dish offered within a specific menu, carrying its own
//! price independent of the dish's base price. The cart copies display
//! fields from a [`MenuItem`] at add-time and never re-syncs them.

use serde::{Deserialize, Serialize};

use crate::ids::TypedId;

/// Menu item id.
pub type MenuItemId = TypedId<MenuItem>;

/// Dish id.
pub type DishId = TypedId<Dish>;

/// Marker for dish identifiers. Dishes are managed by the backend; only
/// their ids travel through this crate.
#[derive(Debug, Clone, Copy)]
pub struct Dish;

/// One sellable entry of a menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// Backend id of this menu entry.
    pub id: MenuItemId,

    /// Id of the underlying dish. Informational only; the menu item id is
    /// the key a cart de-duplicates on.
    pub dish_id: DishId,

    /// Display name.
    pub name: String,

    /// Display image, when the backend has one.
    #[serde(default)]
    pub image_url: Option<String>,

    /// Price in minor currency units, in the context of this menu.
    pub unit_price: u64,

    /// Category display name.
    #[serde(default)]
    pub category_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn deserializes_camel_case_wire_shape() -> TestResult {
        let item: MenuItem = serde_json::from_str(
            r#"{
                "id": 12,
                "dishId": 3,
                "name": "Phở bò",
                "imageUrl": "https://cdn.example/pho.jpg",
                "unitPrice": 50000,
                "categoryName": "Noodles"
            }"#,
        )?;

        assert_eq!(item.id, MenuItemId::from_raw(12));
        assert_eq!(item.dish_id, DishId::from_raw(3));
        assert_eq!(item.name, "Phở bò");
        assert_eq!(item.unit_price, 50_000);
        assert_eq!(item.category_name.as_deref(), Some("Noodles"));

        Ok(())
    }

    #[test]
    fn optional_display_fields_default_to_none() -> TestResult {
        let item: MenuItem = serde_json::from_str(
            r#"{"id": 1, "dishId": 1, "name": "Trà đá", "unitPrice": 5000}"#,
        )?;

        assert_eq!(item.image_url, None);
        assert_eq!(item.category_name, None);

        Ok(())
    }
}
