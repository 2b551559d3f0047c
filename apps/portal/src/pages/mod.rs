// Page components: one module per route, each owning its handler(s) and its
// HTML rendering. Shared chrome lives in `layout`.

pub mod home;
pub mod jobs;
pub mod layout;
pub mod login;
pub mod mock;
pub mod not_found;
pub mod profile;
pub mod resume;
pub mod signup;
pub mod skills;
