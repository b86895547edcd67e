use super::*;

/// Shared handle to the one pet service. Every handler takes the lock once
/// and releases it before responding.
#[derive(Clone)]
pub(crate) struct AppState {
    pub(super) pet: Arc<Mutex<PetService>>,
}

impl AppState {
    pub(crate) fn new(service: PetService) -> Self {
        Self {
            pet: Arc::new(Mutex::new(service)),
        }
    }

    // Operations never leave the pet half-updated, so a poisoned lock still
    // guards consistent data.
    pub(super) fn lock(&self) -> MutexGuard<'_, PetService> {
        self.pet.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
