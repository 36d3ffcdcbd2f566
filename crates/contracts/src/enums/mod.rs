pub mod date_range_tab;
pub mod shipment_status;

pub use date_range_tab::DateRangeTab;
pub use shipment_status::ShipmentStatus;
