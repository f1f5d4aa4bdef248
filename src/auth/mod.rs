//! Token lifecycle: claim construction, HS256 signing and the ordered
//! verification chain. Issuer and verifier are independent and share
//! nothing but the [`SigningKey`] they are constructed with.

pub mod error;
pub mod key;
pub mod models;
pub mod issuer;
pub mod verifier;

pub use error::AuthError;
pub use key::SigningKey;
pub use models::{Claims, Credentials, Token};
pub use issuer::TokenIssuer;
pub use verifier::TokenVerifier;
