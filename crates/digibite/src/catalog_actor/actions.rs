//! Custom actions for the catalog actor.

/// Operations on a menu item beyond CRUD.
#[derive(Debug, Clone)]
pub enum CatalogAction {
    /// Flips the availability flag. Unavailable items stay listed but cannot be
    /// added to a cart.
    ToggleAvailability,
    /// Reads the stock count without changing it.
    CheckStock,
}

/// Results from CatalogActions - variants match 1:1 with CatalogAction
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogActionResult {
    /// The availability flag after the toggle.
    ToggleAvailability(bool),
    CheckStock(u32),
}
