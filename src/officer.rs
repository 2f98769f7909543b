//! Officer profile view model. Read-only; the one view with no actions.

use crate::models::OfficerProfile;
use crate::store::{AlertRepository, StoreError};

pub fn fetch_profile(repo: &dyn AlertRepository) -> Result<OfficerProfile, StoreError> {
    repo.officer_profile()
}
