pub mod account;
pub mod constants;
pub mod error;
pub mod session;
pub mod store;
pub mod summary;
pub mod types;
pub mod view;

pub use error::{ActionError, AuthError, StoreError, ValidationError};
pub use session::{Receipt, Session};
pub use store::AccountStore;
