//! Domain port interfaces
//!
//! Boundary contracts between the domain and the infrastructure layer.
//! The domain defines the interfaces; adapters in uma-infrastructure
//! implement them (dependency inversion).

pub mod crypto;
pub mod notifier;
pub mod user_repository;

pub use crypto::{PasswordHasher, TokenSigner};
pub use notifier::MailNotifier;
pub use user_repository::UserRepository;
