use crate::release_matching::domain::Inventory;
use crate::shared::Result;

/// InventorySource port for obtaining the host inventory
///
/// Supplies the installed software list together with the OS version
/// descriptor. How the data is collected (registry export, package
/// manager, ...) is up to the adapter.
pub trait InventorySource {
    /// Reads the complete inventory of one host
    ///
    /// # Errors
    /// Returns an error if the inventory cannot be located or parsed.
    /// No classification happens when this fails.
    fn read_inventory(&self) -> Result<Inventory>;
}
