use crate::shared::config::DemoUser;

/// Look up a demo user by credentials
pub fn verify_credentials<'a>(
    users: &'a [DemoUser],
    username: &str,
    password: &str,
) -> Option<&'a DemoUser> {
    let username = username.trim();
    if username.is_empty() {
        return None;
    }
    users
        .iter()
        .find(|u| u.username == username && u.password == password)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::Config;
    use contracts::system::auth::UserRole;

    #[test]
    fn test_demo_credentials() {
        let users = Config::default().users;
        assert_eq!(
            verify_credentials(&users, "admin", "admin123").map(|u| u.role),
            Some(UserRole::Admin)
        );
        assert_eq!(
            verify_credentials(&users, "user", "user123").map(|u| u.role),
            Some(UserRole::User)
        );
        assert!(verify_credentials(&users, "admin", "user123").is_none());
        assert!(verify_credentials(&users, "guest", "").is_none());
        assert!(verify_credentials(&users, "", "").is_none());
    }
}
