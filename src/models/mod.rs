pub mod activities;
pub mod signups;

pub use activities::ActivitiesRow;
pub use signups::SignupsRow;
