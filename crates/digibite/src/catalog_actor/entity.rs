//! [`ActorEntity`] implementation for [`Item`].

use super::actions::{CatalogAction, CatalogActionResult};
use super::error::CatalogError;
use crate::model::{Item, ItemCreate, ItemId, ItemUpdate, Price};
use async_trait::async_trait;
use resource_actor::ActorEntity;

fn validate(name: &str, price: Price) -> Result<(), CatalogError> {
    if name.trim().is_empty() {
        return Err(CatalogError::EmptyName);
    }
    if price == 0 {
        return Err(CatalogError::InvalidPrice(price));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Item {
    type Id = ItemId;
    type Create = ItemCreate;
    type Update = ItemUpdate;
    type Action = CatalogAction;
    type ActionResult = CatalogActionResult;
    type Context = ();
    type Error = CatalogError;

    /// New items start available.
    fn from_create_params(id: ItemId, params: ItemCreate) -> Result<Self, Self::Error> {
        validate(&params.name, params.price)?;
        Ok(Self {
            id,
            tenant_id: params.tenant_id,
            tenant_name: params.tenant_name,
            name: params.name.trim().to_string(),
            description: params.description,
            category: params.category,
            price: params.price,
            stock: params.stock,
            available: true,
        })
    }

    async fn on_update(&mut self, update: ItemUpdate, _ctx: &()) -> Result<(), Self::Error> {
        let name = update.name.as_deref().unwrap_or(&self.name);
        validate(name, update.price.unwrap_or(self.price))?;

        if let Some(name) = update.name {
            self.name = name.trim().to_string();
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CatalogAction,
        _ctx: &(),
    ) -> Result<CatalogActionResult, Self::Error> {
        match action {
            CatalogAction::ToggleAvailability => {
                self.available = !self.available;
                Ok(CatalogActionResult::ToggleAvailability(self.available))
            }
            CatalogAction::CheckStock => Ok(CatalogActionResult::CheckStock(self.stock)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TenantId;

    fn params(name: &str, price: Price) -> ItemCreate {
        ItemCreate {
            tenant_id: TenantId(1),
            tenant_name: "Dapur Nusantara".to_string(),
            name: name.to_string(),
            description: String::new(),
            category: "Makanan".to_string(),
            price,
            stock: 3,
        }
    }

    #[test]
    fn test_create_validates_name_and_price() {
        assert_eq!(
            Item::from_create_params(ItemId(1), params("  ", 1_000)).unwrap_err(),
            CatalogError::EmptyName
        );
        assert_eq!(
            Item::from_create_params(ItemId(1), params("Soto", 0)).unwrap_err(),
            CatalogError::InvalidPrice(0)
        );

        let item = Item::from_create_params(ItemId(1), params(" Soto Ayam ", 18_000)).unwrap();
        assert_eq!(item.name, "Soto Ayam");
        assert!(item.available);
    }

    #[tokio::test]
    async fn test_update_rejects_zero_price_without_touching_item() {
        let mut item = Item::from_create_params(ItemId(1), params("Soto", 18_000)).unwrap();
        let update = ItemUpdate {
            stock: Some(9),
            price: Some(0),
            ..Default::default()
        };

        assert_eq!(item.on_update(update, &()).await, Err(CatalogError::InvalidPrice(0)));
        assert_eq!(item.stock, 3);
    }

    #[tokio::test]
    async fn test_actions() {
        let mut item = Item::from_create_params(ItemId(1), params("Soto", 18_000)).unwrap();

        assert_eq!(
            item.handle_action(CatalogAction::ToggleAvailability, &()).await,
            Ok(CatalogActionResult::ToggleAvailability(false))
        );
        assert_eq!(
            item.handle_action(CatalogAction::CheckStock, &()).await,
            Ok(CatalogActionResult::CheckStock(3))
        );
    }
}
