//! Order draft
//!
//! Projection of a cart into the shape the order-creation endpoint expects:
//! one `(menu item, quantity)` pair per line, with the denormalized display
//! fields dropped.

use thiserror::Error;

use crate::{cart::Cart, catalog::MenuItemId};

/// Errors from projecting a cart into a draft.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    /// The cart has no lines. Refused before any request is built.
    #[error("the order draft is empty")]
    EmptyCart,
}

/// One line of a draft: a menu item reference and a quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftLine {
    /// The menu item to order.
    pub menu_item_id: MenuItemId,

    /// How many units to order. At least 1.
    pub quantity: u32,
}

/// The payload-shaped projection of a non-empty cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    lines: Vec<DraftLine>,
}

impl OrderDraft {
    /// Project a cart into a draft, preserving line order.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::EmptyCart`] when the cart has no lines.
    pub fn from_cart(cart: &Cart) -> Result<Self, DraftError> {
        if cart.is_empty() {
            return Err(DraftError::EmptyCart);
        }

        let lines = cart
            .lines()
            .map(|line| DraftLine {
                menu_item_id: line.menu_item_id(),
                quantity: line.quantity(),
            })
            .collect();

        Ok(Self { lines })
    }

    /// The draft lines, in cart insertion order.
    pub fn lines(&self) -> &[DraftLine] {
        &self.lines
    }

    /// Number of draft lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the draft has no lines. Always false for a draft built
    /// through [`OrderDraft::from_cart`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::catalog::{DishId, MenuItem};

    use super::*;

    fn item(id: u64, unit_price: u64) -> MenuItem {
        MenuItem {
            id: MenuItemId::from_raw(id),
            dish_id: DishId::from_raw(id),
            name: format!("item {id}"),
            image_url: Some("https://cdn.example/item.jpg".to_string()),
            unit_price,
            category_name: Some("Mains".to_string()),
        }
    }

    #[test]
    fn empty_cart_is_refused() {
        let cart = Cart::new();

        let result = OrderDraft::from_cart(&cart);

        assert_eq!(result, Err(DraftError::EmptyCart));
    }

    #[test]
    fn draft_keeps_keys_and_quantities_only() -> TestResult {
        let mut cart = Cart::new();
        let first = item(1, 40_000);
        let second = item(2, 25_000);

        cart.add_item(&first);
        cart.add_item(&second);
        cart.add_item(&second);

        let draft = OrderDraft::from_cart(&cart)?;

        assert_eq!(
            draft.lines(),
            &[
                DraftLine {
                    menu_item_id: first.id,
                    quantity: 1,
                },
                DraftLine {
                    menu_item_id: second.id,
                    quantity: 2,
                },
            ]
        );

        Ok(())
    }

    #[test]
    fn draft_does_not_consume_the_cart() -> TestResult {
        let mut cart = Cart::new();
        cart.add_item(&item(1, 40_000));

        let _draft = OrderDraft::from_cart(&cart)?;

        assert_eq!(cart.len(), 1, "projection must leave the cart intact");

        Ok(())
    }
}
