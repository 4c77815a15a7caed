//! Custom actions for the tenant actor.

#[derive(Debug, Clone)]
pub enum TenantAction {
    /// Opens or closes the stall. Answers with the new `active` flag.
    ToggleActive,
}
