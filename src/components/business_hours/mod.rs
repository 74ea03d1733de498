mod editor;
pub mod schedule;

pub use editor::{BusinessHoursEditor, Notice, SUCCESS_NOTICE_SECS};
pub use schedule::{complete_week, default_week, open_days_payload, validate_week};
