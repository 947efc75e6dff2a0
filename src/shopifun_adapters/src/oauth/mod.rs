pub mod google_oauth_url_provider;

pub use google_oauth_url_provider::{GoogleOAuthConfig, GoogleOAuthUrlProvider};
