//! Custom actions for the account actor.

#[derive(Debug, Clone)]
pub enum AccountAction {
    /// Deactivates or reactivates the account. Answers with the new `active` flag.
    ToggleActive,
}
