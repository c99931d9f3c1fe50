//! Role gating for permission-dependent UI actions.

#[cfg(test)]
#[path = "roles_test.rs"]
mod roles_test;

use crate::net::types::User;

/// `true` iff `user` holds at least one of `required`.
///
/// An absent user (not signed in, or still loading) holds no roles, and an
/// empty `required` set is never satisfied.
pub fn has_any_role(user: Option<&User>, required: &[&str]) -> bool {
    let Some(user) = user else {
        return false;
    };
    required.iter().any(|role| user.roles.iter().any(|held| held == role))
}
