use sqlx::SqlitePool;
use tracing::info;

use crate::database::activities_repo::{self, NewActivity};
use crate::database::signups_repo;

pub struct SeedActivity {
    pub name: &'static str,
    pub description: &'static str,
    pub schedule: &'static str,
    pub max_participants: i64,
    pub participants: &'static [&'static str],
}

pub const SEED_ACTIVITIES: &[SeedActivity] = &[
    SeedActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    SeedActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    SeedActivity {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
        participants: &["john@mergington.edu", "olivia@mergington.edu"],
    },
    SeedActivity {
        name: "Soccer Team",
        description: "Join the school soccer team and compete in matches",
        schedule: "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        max_participants: 22,
        participants: &["liam@mergington.edu", "noah@mergington.edu"],
    },
    SeedActivity {
        name: "Basketball Team",
        description: "Practice and play basketball with the school team",
        schedule: "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
        max_participants: 15,
        participants: &["ava@mergington.edu", "mia@mergington.edu"],
    },
    SeedActivity {
        name: "Art Club",
        description: "Explore your creativity through painting and drawing",
        schedule: "Thursdays, 3:30 PM - 5:00 PM",
        max_participants: 15,
        participants: &["amelia@mergington.edu", "harper@mergington.edu"],
    },
    SeedActivity {
        name: "Drama Club",
        description: "Act, direct, and produce plays and performances",
        schedule: "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        max_participants: 20,
        participants: &["ella@mergington.edu", "scarlett@mergington.edu"],
    },
    SeedActivity {
        name: "Math Club",
        description: "Solve challenging problems and participate in math competitions",
        schedule: "Tuesdays, 3:30 PM - 4:30 PM",
        max_participants: 10,
        participants: &["james@mergington.edu", "benjamin@mergington.edu"],
    },
    SeedActivity {
        name: "Debate Team",
        description: "Develop public speaking and argumentation skills",
        schedule: "Fridays, 4:00 PM - 5:30 PM",
        max_participants: 12,
        participants: &["charlotte@mergington.edu", "henry@mergington.edu"],
    },
];

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub seeded: bool,
    pub activities: usize,
    pub signups: usize,
}

/// Inserts the default catalog, but only into a store without any activity.
/// Existing data is left alone even if it only partially matches the catalog.
pub async fn seed_if_empty(pool: &SqlitePool) -> sqlx::Result<SeedReport> {
    if activities_repo::any_activity_exists(pool).await? {
        info!("activities already present, skipping seed");
        return Ok(SeedReport::default());
    }

    let mut report = SeedReport {
        seeded: true,
        ..SeedReport::default()
    };

    // One transaction per activity.
    for seed in SEED_ACTIVITIES {
        let mut tx = pool.begin().await?;
        let activity_id = activities_repo::insert_activity(
            &mut *tx,
            NewActivity {
                name: seed.name,
                description: Some(seed.description),
                schedule: Some(seed.schedule),
                max_participants: seed.max_participants,
            },
        )
        .await?;

        for email in seed.participants {
            let inserted = signups_repo::insert_signup(&mut *tx, activity_id, email).await?;
            report.signups += inserted as usize;
        }
        tx.commit().await?;
        report.activities += 1;
    }

    Ok(report)
}
