pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod format;
pub mod icons;
pub mod table_view;
