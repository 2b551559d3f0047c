// Skills explorer: the static catalog, the skill-gap recommendation, and the
// course-search helpers behind the /skills page.

pub mod catalog;
pub mod explore;
pub mod gap;

pub use catalog::IN_DEMAND_SKILLS;
pub use gap::missing_skills;
