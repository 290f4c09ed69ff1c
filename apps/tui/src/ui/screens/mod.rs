pub mod help;
pub mod main;
pub mod marker_popup;
