pub mod loader;
pub mod provider;
pub mod providers;
pub mod types;

pub use loader::{load_detail, resolve_border_names};
pub use provider::{CountryDirectory, DirectoryError};
pub use providers::RestCountriesDirectory;
pub use types::{CountryName, CountryRecord, Currency, Flags, Payload, decode_records};
