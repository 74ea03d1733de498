mod editor;
pub mod fields;
pub mod plan;

pub use editor::ProfileEditor;
pub use fields::{draft_from, ProfileField};
pub use plan::{days_remaining, is_valid_logo_url, plan_summary, PLAN_PERIOD_DAYS};
