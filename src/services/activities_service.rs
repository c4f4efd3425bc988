use serde::ser::{Serialize, SerializeMap, Serializer};
use sqlx::SqlitePool;

use crate::database::{activities_repo, signups_repo};
use crate::models::ActivitiesRow;

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ActivityView {
    pub description: Option<String>,
    pub schedule: Option<String>,
    pub max_participants: i64,
    pub participants: Vec<String>,
}

/// Activities keyed by name, in store order.
#[derive(Debug, Default)]
pub struct ActivityCatalog {
    entries: Vec<(String, ActivityView)>,
}

impl ActivityCatalog {
    pub fn get(&self, name: &str) -> Option<&ActivityView> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, view)| view)
    }
}

impl Serialize for ActivityCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, view) in &self.entries {
            map.serialize_entry(name, view)?;
        }
        map.end()
    }
}

pub async fn list_activities(pool: &SqlitePool) -> sqlx::Result<ActivityCatalog> {
    let rows = activities_repo::list_activities(pool).await?;

    let mut entries = Vec::with_capacity(rows.len());
    for row in rows {
        let signups = signups_repo::list_signups_for_activity(pool, row.id).await?;
        let participants = signups.into_iter().map(|s| s.email).collect();
        entries.push(build_entry(row, participants));
    }
    Ok(ActivityCatalog { entries })
}

fn build_entry(row: ActivitiesRow, participants: Vec<String>) -> (String, ActivityView) {
    (
        row.name,
        ActivityView {
            description: row.description,
            schedule: row.schedule,
            max_participants: row.max_participants,
            participants,
        },
    )
}
