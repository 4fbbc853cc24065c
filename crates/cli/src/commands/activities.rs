//! Activities command implementation
//!
//! Prints the seed catalogue the server starts with, without binding a port.

use anyhow::{Context, Result};
use mergington_protocol::{seed_catalog, Catalog};

/// Arguments for the activities command
pub struct ActivitiesArgs {
    /// Print JSON instead of a summary table
    pub json: bool,
}

/// Execute the activities command
pub fn execute_activities_command(args: ActivitiesArgs) -> Result<()> {
    let catalog = seed_catalog();

    if args.json {
        let json = serde_json::to_string_pretty(&catalog)
            .context("Failed to serialize activities")?;
        println!("{}", json);
    } else {
        print!("{}", render_summary(&catalog));
    }

    Ok(())
}

/// One line per activity: name, enrolment, free seats and schedule.
pub fn render_summary(catalog: &Catalog) -> String {
    let width = catalog.keys().map(|name| name.len()).max().unwrap_or(0);

    let mut out = format!("📋 {} activities\n", catalog.len());
    for (name, activity) in catalog {
        out.push_str(&format!(
            "   {:<width$}  {:>3}/{:<3}  {:>3} left  {}\n",
            name,
            activity.participants.len(),
            activity.max_participants,
            activity.spots_left(),
            activity.schedule,
            width = width
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use mergington_protocol::Activity;

    #[test]
    fn test_render_summary() {
        let mut catalog = Catalog::new();
        catalog.insert(
            "Soccer".to_string(),
            Activity::new(
                "Team",
                "Tuesdays",
                22,
                vec!["alex@mergington.edu".to_string()],
            ),
        );

        let summary = render_summary(&catalog);
        assert!(summary.starts_with("📋 1 activities"));
        assert!(summary.contains("Soccer"));
        assert!(summary.contains("1/22"));
        assert!(summary.contains("21 left"));
        assert!(summary.contains("Tuesdays"));
    }

    #[test]
    fn test_render_summary_full_activity() {
        let mut catalog = Catalog::new();
        catalog.insert(
            "Duo".to_string(),
            Activity::new(
                "Pairs",
                "Fridays",
                2,
                vec!["a@mergington.edu".to_string(), "b@mergington.edu".to_string()],
            ),
        );

        let summary = render_summary(&catalog);
        assert!(summary.contains("2/2"));
        assert!(summary.contains("  0 left"));
    }

    #[test]
    fn test_seed_summary_lists_every_activity() {
        let catalog = seed_catalog();
        let summary = render_summary(&catalog);
        for name in catalog.keys() {
            assert!(summary.contains(name.as_str()));
        }
    }
}
