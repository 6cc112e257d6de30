mod rest_countries;

pub use rest_countries::{DEFAULT_BASE_URL, RestCountriesDirectory};
