//! User domain models and parameters.

use crate::{
    model::user::{CreateUserDto, PaginatedUsersDto, SetPasswordDto, UpdateUserDto, UserDto},
    server::{
        error::validation::ValidationErrors,
        util::validate::{self, is_valid_email, is_valid_username},
    },
};

pub const EMAIL_MAX_LENGTH: usize = 254;
pub const NAME_MAX_LENGTH: usize = 150;
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Usernames that would shadow fixed routes under `/api/users/`.
const RESERVED_USERNAMES: &[&str] = &["me"];

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    /// Argon2 PHC string.
    pub password_hash: String,
    pub admin: bool,
}

impl User {
    /// Converts to the API representation.
    ///
    /// # Arguments
    /// - `is_subscribed` - Whether the requesting user follows this user
    pub fn into_dto(self, is_subscribed: bool) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            username: self.username,
            first_name: self.first_name,
            last_name: self.last_name,
            is_subscribed,
        }
    }

    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            username: entity.username,
            first_name: entity.first_name,
            last_name: entity.last_name,
            password_hash: entity.password_hash,
            admin: entity.admin,
        }
    }
}

/// A user as seen by a particular requester.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub user: User,
    pub is_subscribed: bool,
}

impl UserProfile {
    pub fn into_dto(self) -> UserDto {
        self.user.into_dto(self.is_subscribed)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    pub users: Vec<UserProfile>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(UserProfile::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Validated registration data.
///
/// Uniqueness of email and username is checked by `UserService` against the database.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

impl CreateUserParams {
    pub fn from_dto(dto: CreateUserDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let email = validate::required(&mut errors, "email", dto.email);
        let username = validate::required(&mut errors, "username", dto.username);
        let first_name = validate::required(&mut errors, "first_name", dto.first_name);
        let last_name = validate::required(&mut errors, "last_name", dto.last_name);
        let password = validate::required(&mut errors, "password", dto.password);

        if let Some(ref email) = email {
            check_email(&mut errors, email);
        }
        if let Some(ref username) = username {
            check_username(&mut errors, username);
        }
        if let Some(ref first_name) = first_name {
            validate::max_length(&mut errors, "first_name", first_name, NAME_MAX_LENGTH);
        }
        if let Some(ref last_name) = last_name {
            validate::max_length(&mut errors, "last_name", last_name, NAME_MAX_LENGTH);
        }
        if let Some(ref password) = password {
            check_password(&mut errors, "password", password);
        }

        match (email, username, first_name, last_name, password) {
            (Some(email), Some(username), Some(first_name), Some(last_name), Some(password))
                if errors.is_empty() =>
            {
                Ok(Self {
                    email: email.trim().to_string(),
                    username,
                    first_name,
                    last_name,
                    password,
                })
            }
            _ => Err(errors),
        }
    }
}

/// Validated profile changes; `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub email: Option<String>,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UpdateUserParams {
    pub fn from_dto(dto: UpdateUserDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let email = dto
            .email
            .and_then(|email| validate::required(&mut errors, "email", Some(email)));
        let username = dto
            .username
            .and_then(|username| validate::required(&mut errors, "username", Some(username)));
        let first_name = dto.first_name.and_then(|first_name| {
            validate::required(&mut errors, "first_name", Some(first_name))
        });
        let last_name = dto
            .last_name
            .and_then(|last_name| validate::required(&mut errors, "last_name", Some(last_name)));

        if let Some(ref email) = email {
            check_email(&mut errors, email);
        }
        if let Some(ref username) = username {
            check_username(&mut errors, username);
        }
        if let Some(ref first_name) = first_name {
            validate::max_length(&mut errors, "first_name", first_name, NAME_MAX_LENGTH);
        }
        if let Some(ref last_name) = last_name {
            validate::max_length(&mut errors, "last_name", last_name, NAME_MAX_LENGTH);
        }

        errors.into_result(Self {
            email: email.map(|email| email.trim().to_string()),
            username,
            first_name,
            last_name,
        })
    }
}

#[derive(Debug, Clone)]
pub struct SetPasswordParams {
    pub current_password: String,
    pub new_password: String,
}

impl SetPasswordParams {
    pub fn from_dto(dto: SetPasswordDto) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_password(&mut errors, "new_password", &dto.new_password);

        errors.into_result(Self {
            current_password: dto.current_password,
            new_password: dto.new_password,
        })
    }
}

fn check_email(errors: &mut ValidationErrors, email: &str) {
    let email = email.trim();
    validate::max_length(errors, "email", email, EMAIL_MAX_LENGTH);
    if !is_valid_email(email) {
        errors.add("email", "Enter a valid email address.");
    }
}

fn check_username(errors: &mut ValidationErrors, username: &str) {
    validate::max_length(errors, "username", username, NAME_MAX_LENGTH);
    if !is_valid_username(username) {
        errors.add(
            "username",
            "Enter a valid username. It may contain only letters, numbers, and @/./+/-/_ characters.",
        );
    }
    if RESERVED_USERNAMES.contains(&username) {
        errors.add("username", format!("Username '{}' is reserved.", username));
    }
}

fn check_password(errors: &mut ValidationErrors, field: &str, password: &str) {
    if password.chars().count() < PASSWORD_MIN_LENGTH {
        errors.add(
            field,
            format!(
                "This password is too short. It must contain at least {} characters.",
                PASSWORD_MIN_LENGTH
            ),
        );
    }
}
