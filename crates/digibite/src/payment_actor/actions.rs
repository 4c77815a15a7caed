//! Custom actions for the payment actor.

#[derive(Debug, Clone)]
pub enum PaymentAction {
    /// Enables or disables the method at checkout. Answers with the new `active` flag.
    ToggleActive,
}
