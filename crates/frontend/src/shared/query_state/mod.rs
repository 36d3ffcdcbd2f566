//! Query-state synchronizer: filter selection, pagination and date window of
//! the dashboard lists, kept in sync with the address bar and turned into
//! cache keys and wire parameters for the REST API.

pub mod address_bar;
pub mod availability;
pub mod config;
pub mod context;
pub mod date_window;
pub mod latest;
pub mod query_key;
pub mod selection;
pub mod store;
pub mod url_binder;

pub use address_bar::{AddressBar, BrowserAddressBar, MemoryAddressBar};
pub use config::QueryStateConfig;
pub use context::{use_filters, use_query_key_for_path, use_resource_data, FilterContext, FilterProvider, ResourceData};
pub use date_window::DateWindow;
pub use query_key::{derive_key, to_wire_params, QueryKey, ResourceName, WireParams, WireValue};
pub use selection::{SelectOption, Selection, SelectionKey};
pub use store::{FilterState, FilterStore};
