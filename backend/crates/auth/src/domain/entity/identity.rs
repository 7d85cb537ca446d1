//! Identity
//!
//! Who the current request acts as. A session with no bound user is
//! [`Identity::Anonymous`]; there is no separate "guest" user record.

use crate::domain::entity::user::User;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Identity {
    #[default]
    Anonymous,
    Authenticated(User),
}

impl Identity {
    #[inline]
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Identity::Anonymous)
    }

    #[inline]
    pub fn is_authenticated(&self) -> bool {
        !self.is_anonymous()
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            Identity::Anonymous => None,
            Identity::Authenticated(user) => Some(user),
        }
    }

    pub fn into_user(self) -> Option<User> {
        match self {
            Identity::Anonymous => None,
            Identity::Authenticated(user) => Some(user),
        }
    }
}

impl From<User> for Identity {
    fn from(user: User) -> Self {
        Identity::Authenticated(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_id::UserId;

    #[test]
    fn test_default_is_anonymous() {
        let identity = Identity::default();
        assert!(identity.is_anonymous());
        assert!(identity.user().is_none());
    }

    #[test]
    fn test_authenticated_exposes_user() {
        let user = User::new(UserId::new(1), "testuser");
        let identity = Identity::from(user.clone());
        assert!(identity.is_authenticated());
        assert_eq!(identity.user(), Some(&user));
        assert_eq!(identity.into_user(), Some(user));
    }
}
