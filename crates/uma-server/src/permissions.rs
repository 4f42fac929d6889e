//! Permission gate
//!
//! An explicit per-operation table of required permission levels, consulted
//! by the route handlers after the authentication guard has run. The
//! decision itself is a pure function over already-resolved inputs: an
//! empty requirement admits unconditionally, otherwise any one matching
//! permission suffices.

use uma_domain::error::{Error, Result};
use uma_domain::user::{PermissionLevel, User};

/// Gated operations exposed by the user routes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    UserCreate,
    UserList,
    UserRead,
    UserSearch,
    UserReplace,
    UserUpdate,
    UserDelete,
}

/// Required-permission table. Reads need authentication only; mutations are
/// restricted to staff, deletion to the boss.
pub fn required_permissions(op: Operation) -> &'static [PermissionLevel] {
    use PermissionLevel::{Boss, Employee};
    match op {
        Operation::UserCreate | Operation::UserReplace | Operation::UserUpdate => {
            &[Boss, Employee]
        }
        Operation::UserDelete => &[Boss],
        Operation::UserList | Operation::UserRead | Operation::UserSearch => &[],
    }
}

/// Pure admission decision: admit when nothing is required, otherwise when
/// the identity holds any one of the required levels.
pub fn is_permitted(identity: Option<&User>, required: &[PermissionLevel]) -> bool {
    if required.is_empty() {
        return true;
    }
    match identity {
        Some(user) => required.contains(&user.permission),
        None => false,
    }
}

/// Table lookup plus decision, as used by the handlers.
pub fn authorize(user: &User, op: Operation) -> Result<()> {
    if is_permitted(Some(user), required_permissions(op)) {
        Ok(())
    } else {
        Err(Error::Forbidden)
    }
}
