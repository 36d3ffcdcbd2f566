pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod error;
pub mod shared;
