pub mod paging;
pub mod query_params;
