pub mod apikey;

pub use apikey::{API_KEY_SCHEME, ApiKeyError, get_api_key};
