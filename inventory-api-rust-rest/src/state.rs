use std::sync::Arc;

use crate::repository::{CarRepository, DealershipRepository, InMemoryStore, ReviewRepository};
use crate::service::{DealerService, InventoryService};

#[derive(Clone)]
pub struct AppState {
    pub inventory: InventoryService,
    pub dealers: DealerService,
}

impl AppState {
    pub fn new(
        cars: Arc<dyn CarRepository>,
        dealerships: Arc<dyn DealershipRepository>,
        reviews: Arc<dyn ReviewRepository>,
    ) -> Self {
        Self {
            inventory: InventoryService::new(cars),
            dealers: DealerService::new(dealerships, reviews),
        }
    }

    pub fn in_memory(store: InMemoryStore) -> Self {
        Self::new(
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(store),
        )
    }
}
