use super::*;
use crate::server::model::user::User;

fn user(id: i32, admin: bool) -> User {
    User {
        id,
        email: format!("user{}@example.com", id),
        username: format!("user{}", id),
        first_name: "First".to_string(),
        last_name: "Last".to_string(),
        password_hash: "!unusable".to_string(),
        admin,
    }
}

/// Tests the author-or-admin permission.
///
/// Expected: Ok for the author and for an admin, AccessDenied for anyone else
#[test]
fn allows_author_or_admin() {
    let author = user(1, false);
    let admin = user(2, true);
    let stranger = user(3, false);

    let permission = [Permission::AuthorOrAdmin(author.id)];

    assert!(AuthGuard::check(&author, &permission).is_ok());
    assert!(AuthGuard::check(&admin, &permission).is_ok());
    assert!(matches!(
        AuthGuard::check(&stranger, &permission),
        Err(AppError::AuthErr(AuthError::AccessDenied(3, _)))
    ));
}

/// Tests every listed permission must hold.
///
/// Expected: AccessDenied when the author lacks the admin flag
#[test]
fn requires_all_permissions() {
    let author = user(1, false);

    let result = AuthGuard::check(&author, &[Permission::AuthorOrAdmin(1), Permission::Admin]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(1, _)))
    ));
}
