//! Activity Store Module
//!
//! [`ActivityStore`] wraps the catalogue in an `Arc<RwLock<_>>`. Reads clone
//! a snapshot out under the read lock; every roster change runs its checks
//! and its mutation under one write lock.

use std::sync::Arc;

use mergington_protocol::{seed_catalog, Activity, Catalog, Result, RosterError};
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Shared handle to the activity catalogue. Cloning is cheap and every
/// clone sees the same state.
#[derive(Debug, Clone)]
pub struct ActivityStore {
    activities: Arc<RwLock<Catalog>>,
}

impl ActivityStore {
    /// Create a store holding exactly `activities`.
    pub fn from_activities(activities: Catalog) -> Self {
        Self {
            activities: Arc::new(RwLock::new(activities)),
        }
    }

    /// Create a store populated with the seed catalogue.
    pub fn seeded() -> Self {
        let catalog = seed_catalog();
        info!(activities = catalog.len(), "Seeded activity store");
        Self::from_activities(catalog)
    }

    /// Snapshot of every activity.
    pub async fn list_all(&self) -> Catalog {
        self.activities.read().await.clone()
    }

    /// Look up an activity by exact name.
    pub async fn get(&self, name: &str) -> Option<Activity> {
        self.activities.read().await.get(name).cloned()
    }

    pub async fn len(&self) -> usize {
        self.activities.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.activities.read().await.is_empty()
    }

    /// Sign `email` up for `name`, returning the updated record.
    pub async fn add_participant(&self, name: &str, email: &str) -> Result<Activity> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(name)
            .ok_or_else(|| RosterError::ActivityNotFound {
                activity: name.to_string(),
            })?;

        activity.sign_up(name, email)?;

        debug!(
            activity = %name,
            email = %email,
            participants = activity.participants.len(),
            "Participant added"
        );
        Ok(activity.clone())
    }

    /// Remove `email` from `name`, returning the updated record.
    pub async fn remove_participant(
        &self,
        name: &str,
        email: &str,
    ) -> Result<Activity> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(name)
            .ok_or_else(|| RosterError::ActivityNotFound {
                activity: name.to_string(),
            })?;

        activity.unregister(name, email)?;

        debug!(
            activity = %name,
            email = %email,
            participants = activity.participants.len(),
            "Participant removed"
        );
        Ok(activity.clone())
    }
}

impl Default for ActivityStore {
    fn default() -> Self {
        Self::seeded()
    }
}
