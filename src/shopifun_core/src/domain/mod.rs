pub mod email;
pub mod oauth_state;
pub mod password;
pub mod password_hash;
pub mod requests;
pub mod responses;
pub mod session;
pub mod user;
pub mod validation;
