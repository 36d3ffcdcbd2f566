pub mod date_range_tabs;
pub mod pagination_controls;
pub mod status_filter_bar;
