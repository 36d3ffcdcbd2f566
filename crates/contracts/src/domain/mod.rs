pub mod a001_seller;
pub mod a002_order;
