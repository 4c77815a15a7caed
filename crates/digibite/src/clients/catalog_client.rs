//! # Catalog Client
//!
//! Menu reads for buyers and menu edits for sellers.
use crate::catalog_actor::{CatalogAction, CatalogActionResult, CatalogError};
use crate::clients::matches_query;
use crate::model::{Item, ItemCreate, ItemId, ItemUpdate, TenantId};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

#[derive(Clone, Debug)]
pub struct CatalogClient {
    inner: ResourceClient<Item>,
}

#[async_trait]
impl ActorClient<Item> for CatalogClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<Item> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => CatalogError::NotFound(id),
            other => other
                .entity_error::<CatalogError>()
                .unwrap_or_else(|e| CatalogError::ActorCommunicationError(e.to_string())),
        }
    }
}

impl CatalogClient {
    pub fn new(inner: ResourceClient<Item>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_item(&self, params: ItemCreate) -> Result<ItemId, CatalogError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_item(&self, id: ItemId, update: ItemUpdate) -> Result<Item, CatalogError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Flips availability and returns the new flag.
    #[instrument(skip(self))]
    pub async fn toggle_availability(&self, id: ItemId) -> Result<bool, CatalogError> {
        match self.action(id, CatalogAction::ToggleAvailability).await? {
            CatalogActionResult::ToggleAvailability(available) => Ok(available),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ItemId) -> Result<u32, CatalogError> {
        match self.action(id, CatalogAction::CheckStock).await? {
            CatalogActionResult::CheckStock(stock) => Ok(stock),
            other => Err(unexpected(other)),
        }
    }

    /// A seller's menu.
    #[instrument(skip(self))]
    pub async fn items_for_tenant(&self, tenant_id: &TenantId) -> Result<Vec<Item>, CatalogError> {
        let items = self.list().await?;
        Ok(items.into_iter().filter(|item| item.tenant_id == *tenant_id).collect())
    }

    /// Items whose name, category or tenant name contains `query`.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<Vec<Item>, CatalogError> {
        let items = self.list().await?;
        Ok(items
            .into_iter()
            .filter(|item| matches_query(query, &[item.name.as_str(), item.category.as_str(), item.tenant_name.as_str()]))
            .collect())
    }

    /// Items a buyer can currently put in the cart.
    #[instrument(skip(self))]
    pub async fn available_items(&self) -> Result<Vec<Item>, CatalogError> {
        let items = self.list().await?;
        Ok(items.into_iter().filter(|item| item.available).collect())
    }

    async fn action(&self, id: ItemId, action: CatalogAction) -> Result<CatalogActionResult, CatalogError> {
        debug!(?action, "Sending action");
        self.inner.perform_action(id, action).await.map_err(Self::map_error)
    }
}

fn unexpected(result: CatalogActionResult) -> CatalogError {
    CatalogError::ActorCommunicationError(format!("unexpected action result: {result:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use resource_actor::mock::{create_mock_client, expect_action, MockClient};

    fn item(id: u32, tenant: u32, name: &str, category: &str, available: bool) -> Item {
        Item {
            id: ItemId(id),
            tenant_id: TenantId(tenant),
            tenant_name: format!("Tenant {tenant}"),
            name: name.to_string(),
            description: String::new(),
            category: category.to_string(),
            price: 10_000,
            stock: 5,
            available,
        }
    }

    #[tokio::test]
    async fn test_check_stock_returns_level() {
        let (client, mut receiver) = create_mock_client::<Item>(10);
        let catalog = CatalogClient::new(client);

        let task = tokio::spawn(async move { catalog.check_stock(ItemId(1)).await });

        let (id, action, responder) = expect_action(&mut receiver).await.expect("Expected Action request");
        assert_eq!(id, ItemId(1));
        assert!(matches!(action, CatalogAction::CheckStock));
        responder.send(Ok(CatalogActionResult::CheckStock(42))).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), 42);
    }

    #[tokio::test]
    async fn test_mismatched_action_result_is_an_error() {
        let mut mock = MockClient::<Item>::new();
        mock.expect_action(ItemId(1))
            .return_ok(CatalogActionResult::CheckStock(1));

        let catalog = CatalogClient::new(mock.client());
        assert!(matches!(
            catalog.toggle_availability(ItemId(1)).await,
            Err(CatalogError::ActorCommunicationError(_))
        ));
        mock.verify();
    }

    #[tokio::test]
    async fn test_entity_errors_pass_through() {
        let mut mock = MockClient::<Item>::new();
        mock.expect_create()
            .return_err(FrameworkError::EntityError(Box::new(CatalogError::InvalidPrice(0))));
        mock.expect_get(ItemId(9)).return_err(FrameworkError::ActorClosed);

        let catalog = CatalogClient::new(mock.client());
        let params = ItemCreate {
            tenant_id: TenantId(1),
            tenant_name: "Tenant 1".to_string(),
            name: "Gratis".to_string(),
            description: String::new(),
            category: "Makanan".to_string(),
            price: 0,
            stock: 1,
        };
        assert_eq!(catalog.create_item(params).await, Err(CatalogError::InvalidPrice(0)));
        assert_eq!(
            catalog.get(ItemId(9)).await,
            Err(CatalogError::ActorCommunicationError("Actor closed".to_string()))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_filters_over_list() {
        let menu = vec![
            item(1, 1, "Nasi Goreng", "Makanan", true),
            item(2, 1, "Es Jeruk", "Minuman", false),
            item(3, 2, "Mie Ayam", "Makanan", true),
        ];
        let mut mock = MockClient::<Item>::new();
        mock.expect_list().return_ok(menu.clone());
        mock.expect_list().return_ok(menu.clone());
        mock.expect_list().return_ok(menu.clone());
        mock.expect_list().return_ok(menu);

        let catalog = CatalogClient::new(mock.client());
        let names = |items: Vec<Item>| items.into_iter().map(|i| i.name).collect::<Vec<_>>();

        assert_eq!(names(catalog.items_for_tenant(&TenantId(1)).await.unwrap()), ["Nasi Goreng", "Es Jeruk"]);
        assert_eq!(names(catalog.search("MAKAN").await.unwrap()), ["Nasi Goreng", "Mie Ayam"]);
        assert_eq!(names(catalog.search("tenant 2").await.unwrap()), ["Mie Ayam"]);
        assert_eq!(names(catalog.available_items().await.unwrap()), ["Nasi Goreng", "Mie Ayam"]);
        mock.verify();
    }
}
