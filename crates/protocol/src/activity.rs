//! Activity records and the seed catalogue.
//!
//! An [`Activity`] owns its roster; the roster rules (no duplicates, no
//! signups past capacity) live here so every store implementation applies
//! them the same way.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::RosterError;
use crate::Result;

/// Activities keyed by their unique, case-sensitive name.
pub type Catalog = BTreeMap<String, Activity>;

/// A single extracurricular activity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Activity {
    /// Free-text description
    pub description: String,
    /// When the activity meets
    pub schedule: String,
    /// Roster capacity
    pub max_participants: u32,
    /// Participant emails in signup order
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
        participants: Vec<String>,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants,
        }
    }

    /// Whether `email` is on the roster. Exact match.
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }

    /// Seats left before the activity is full.
    pub fn spots_left(&self) -> u32 {
        self.max_participants
            .saturating_sub(self.participants.len() as u32)
    }

    /// Append `email` to the roster.
    ///
    /// `name` is only used to describe the error.
    pub fn sign_up(&mut self, name: &str, email: &str) -> Result<()> {
        if self.has_participant(email) {
            return Err(RosterError::AlreadySignedUp {
                activity: name.to_string(),
                email: email.to_string(),
            });
        }

        if self.is_full() {
            return Err(RosterError::ActivityFull {
                activity: name.to_string(),
                capacity: self.max_participants,
            });
        }

        self.participants.push(email.to_string());
        Ok(())
    }

    /// Remove `email` from the roster, keeping the order of the others.
    pub fn unregister(&mut self, name: &str, email: &str) -> Result<()> {
        let position = self
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| RosterError::NotRegistered {
                activity: name.to_string(),
                email: email.to_string(),
            })?;

        self.participants.remove(position);
        Ok(())
    }
}

fn seed(
    catalog: &mut Catalog,
    name: &str,
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: &[&str],
) {
    catalog.insert(
        name.to_string(),
        Activity::new(
            description,
            schedule,
            max_participants,
            participants.iter().map(|p| p.to_string()).collect(),
        ),
    );
}

/// The activities every process starts with.
pub fn seed_catalog() -> Catalog {
    let mut catalog = Catalog::new();

    seed(
        &mut catalog,
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    );
    seed(
        &mut catalog,
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    );
    seed(
        &mut catalog,
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    );
    seed(
        &mut catalog,
        "Soccer",
        "Join the school soccer team and compete in inter-school matches",
        "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        22,
        &["alex@mergington.edu", "mia@mergington.edu"],
    );
    seed(
        &mut catalog,
        "Basketball",
        "Practice drills and play games with the school basketball team",
        "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
        15,
        &["ryan@mergington.edu"],
    );
    seed(
        &mut catalog,
        "Art Club",
        "Explore painting, drawing and sculpture with other students",
        "Mondays, 3:30 PM - 5:00 PM",
        18,
        &["lily@mergington.edu"],
    );
    seed(
        &mut catalog,
        "Drama Club",
        "Act, direct and produce the school's theater performances",
        "Thursdays, 3:30 PM - 5:30 PM",
        20,
        &["ava@mergington.edu", "noah@mergington.edu"],
    );
    seed(
        &mut catalog,
        "Math Club",
        "Solve challenging problems and prepare for math competitions",
        "Wednesdays, 3:30 PM - 4:30 PM",
        16,
        &["liam@mergington.edu"],
    );
    seed(
        &mut catalog,
        "Debate Team",
        "Build public speaking skills and compete in debate tournaments",
        "Tuesdays, 4:00 PM - 5:30 PM",
        14,
        &["ethan@mergington.edu", "grace@mergington.edu"],
    );

    catalog
}
