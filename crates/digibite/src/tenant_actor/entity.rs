//! [`ActorEntity`] implementation for [`Tenant`].

use super::actions::TenantAction;
use super::error::TenantError;
use crate::model::{Tenant, TenantCreate, TenantId, TenantUpdate};
use async_trait::async_trait;
use resource_actor::ActorEntity;

fn non_empty(name: &str) -> Result<String, TenantError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(TenantError::EmptyName);
    }
    Ok(name.to_string())
}

#[async_trait]
impl ActorEntity for Tenant {
    type Id = TenantId;
    type Create = TenantCreate;
    type Update = TenantUpdate;
    type Action = TenantAction;
    type ActionResult = bool;
    type Context = ();
    type Error = TenantError;

    /// New tenants start active.
    fn from_create_params(id: TenantId, params: TenantCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            name: non_empty(&params.name)?,
            description: params.description,
            owner_id: params.owner_id,
            owner_name: params.owner_name,
            category: params.category,
            rating: params.rating,
            active: true,
        })
    }

    async fn on_update(&mut self, update: TenantUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = non_empty(&name)?;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: TenantAction, _ctx: &()) -> Result<bool, Self::Error> {
        match action {
            TenantAction::ToggleActive => {
                self.active = !self.active;
                Ok(self.active)
            }
        }
    }
}
