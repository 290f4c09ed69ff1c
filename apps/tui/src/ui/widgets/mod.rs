pub mod map;
pub mod palette;
pub mod popup;
pub mod sidebar;
pub mod tables;
