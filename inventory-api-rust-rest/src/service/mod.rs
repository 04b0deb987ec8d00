pub mod dealers;
pub mod inventory;

pub use dealers::DealerService;
pub use inventory::{EmptyResult, InventoryService};
