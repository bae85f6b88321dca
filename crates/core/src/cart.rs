//! Cart
//!
//! The transient, unpersisted set of items an order is assembled from. A
//! cart lives only as long as the screen that created it; it is dropped on
//! navigation away and cleared after a successful submit.

use smallvec::SmallVec;

use crate::catalog::{DishId, MenuItem, MenuItemId};

/// One staged line of an order draft.
///
/// Display fields are copied from the catalog entry when the line is
/// created and are not re-synced if the catalog changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    menu_item_id: MenuItemId,
    dish_id: DishId,
    name: String,
    image_url: Option<String>,
    unit_price: u64,
    category_name: Option<String>,
    quantity: u32,
}

impl CartLine {
    fn from_item(item: &MenuItem) -> Self {
        Self {
            menu_item_id: item.id,
            dish_id: item.dish_id,
            name: item.name.clone(),
            image_url: item.image_url.clone(),
            unit_price: item.unit_price,
            category_name: item.category_name.clone(),
            quantity: 1,
        }
    }

    /// The menu item this line refers to. Unique within a cart.
    pub fn menu_item_id(&self) -> MenuItemId {
        self.menu_item_id
    }

    /// The underlying dish. Informational only.
    pub fn dish_id(&self) -> DishId {
        self.dish_id
    }

    /// Display name, as copied at add-time.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display image, as copied at add-time.
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    /// Unit price in minor currency units, as copied at add-time.
    pub fn unit_price(&self) -> u64 {
        self.unit_price
    }

    /// Category display name, as copied at add-time.
    pub fn category_name(&self) -> Option<&str> {
        self.category_name.as_deref()
    }

    /// Staged quantity. Always at least 1; a line that would reach 0 is
    /// removed from the cart instead.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Price of this line: unit price times quantity.
    pub fn line_total(&self) -> u64 {
        self.unit_price.saturating_mul(u64::from(self.quantity))
    }
}

/// Insertion-ordered collection of [`CartLine`], unique by menu item id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: SmallVec<[CartLine; 8]>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage one unit of a menu item.
    ///
    /// If a line for the same menu item already exists its quantity is
    /// incremented; otherwise a new line with quantity 1 is appended,
    /// copying display fields from `item`.
    pub fn add_item(&mut self, item: &MenuItem) {
        if let Some(line) = self.line_mut(item.id) {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.lines.push(CartLine::from_item(item));
        }
    }

    /// Replace a line's quantity.
    ///
    /// A quantity of 0 or less removes the line, exactly as
    /// [`Cart::remove_item`] would. There is no upper bound; values beyond
    /// `u32::MAX` saturate. Unknown keys are a no-op.
    pub fn set_quantity(&mut self, key: MenuItemId, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(key);
            return;
        }

        if let Some(line) = self.line_mut(key) {
            line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// Delete the line for `key`. Absent keys are a no-op.
    pub fn remove_item(&mut self, key: MenuItemId) {
        self.lines.retain(|line| line.menu_item_id != key);
    }

    /// Sum of all line totals. 0 for an empty cart.
    pub fn total(&self) -> u64 {
        self.lines
            .iter()
            .fold(0, |total, line| total.saturating_add(line.line_total()))
    }

    /// Look up the line for `key`.
    pub fn line(&self, key: MenuItemId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.menu_item_id == key)
    }

    fn line_mut(&mut self, key: MenuItemId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.menu_item_id == key)
    }

    /// Iterate over the lines in insertion order.
    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.iter()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Drop every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
