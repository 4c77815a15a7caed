//! [`ActorEntity`] implementation for [`PaymentConfig`].
//!
//! Name and description are required, both on create and on edit. New methods
//! start active.

use super::actions::PaymentAction;
use super::error::PaymentError;
use crate::model::{PaymentConfig, PaymentConfigCreate, PaymentConfigId, PaymentConfigUpdate};
use async_trait::async_trait;
use resource_actor::ActorEntity;

fn required(value: &str, missing: PaymentError) -> Result<String, PaymentError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(missing);
    }
    Ok(value.to_string())
}

#[async_trait]
impl ActorEntity for PaymentConfig {
    type Id = PaymentConfigId;
    type Create = PaymentConfigCreate;
    type Update = PaymentConfigUpdate;
    type Action = PaymentAction;
    type ActionResult = bool;
    type Context = ();
    type Error = PaymentError;

    fn from_create_params(id: PaymentConfigId, params: PaymentConfigCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            name: required(&params.name, PaymentError::EmptyName)?,
            code: params.code,
            description: required(&params.description, PaymentError::EmptyDescription)?,
            instructions: params.instructions,
            bank: params.bank,
            qris_image: params.qris_image,
            active: true,
        })
    }

    async fn on_update(&mut self, update: PaymentConfigUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = required(&name, PaymentError::EmptyName)?;
        }
        if let Some(description) = update.description {
            self.description = required(&description, PaymentError::EmptyDescription)?;
        }
        if let Some(code) = update.code {
            self.code = code;
        }
        if let Some(instructions) = update.instructions {
            self.instructions = instructions;
        }
        if let Some(bank) = update.bank {
            self.bank = Some(bank);
        }
        if let Some(qris_image) = update.qris_image {
            self.qris_image = Some(qris_image);
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: PaymentAction, _ctx: &()) -> Result<bool, Self::Error> {
        match action {
            PaymentAction::ToggleActive => {
                self.active = !self.active;
                Ok(self.active)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BankAccount, PaymentMethod};

    fn create(name: &str, description: &str) -> PaymentConfigCreate {
        PaymentConfigCreate {
            name: name.to_string(),
            code: PaymentMethod::Cash,
            description: description.to_string(),
            instructions: String::new(),
            bank: None,
            qris_image: None,
        }
    }

    #[test]
    fn test_name_and_description_are_required() {
        assert_eq!(
            PaymentConfig::from_create_params(PaymentConfigId(1), create(" ", "Bayar di kasir")).unwrap_err(),
            PaymentError::EmptyName
        );
        assert_eq!(
            PaymentConfig::from_create_params(PaymentConfigId(1), create("Cash", "")).unwrap_err(),
            PaymentError::EmptyDescription
        );

        let config = PaymentConfig::from_create_params(PaymentConfigId(1), create(" Cash ", "Bayar di kasir")).unwrap();
        assert_eq!(config.name, "Cash");
        assert!(config.active);
    }

    #[tokio::test]
    async fn test_edit_and_toggle() {
        let mut config =
            PaymentConfig::from_create_params(PaymentConfigId(1), create("Transfer", "Ke rekening")).unwrap();

        let bca = BankAccount {
            bank_name: "BCA".to_string(),
            account_number: "1234567890".to_string(),
            account_name: "PT Digibite Indonesia".to_string(),
        };
        config
            .on_update(
                PaymentConfigUpdate {
                    code: Some(PaymentMethod::Transfer),
                    bank: Some(bca.clone()),
                    ..Default::default()
                },
                &(),
            )
            .await
            .unwrap();
        assert_eq!(config.code, PaymentMethod::Transfer);
        assert_eq!(config.bank, Some(bca));

        let blank = PaymentConfigUpdate {
            description: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.on_update(blank, &()).await, Err(PaymentError::EmptyDescription));

        assert!(!config.handle_action(PaymentAction::ToggleActive, &()).await.unwrap());
        assert!(config.handle_action(PaymentAction::ToggleActive, &()).await.unwrap());
    }
}
