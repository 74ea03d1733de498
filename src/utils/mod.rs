pub mod display;
pub mod i18n;
pub mod theme;
pub mod time;
