use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern must compile"));

const MIN_PASSWORD_LENGTH: usize = 8;
const DEFAULT_USER_IMAGE: &str = "https://via.placeholder.com/150";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAddress {
    pub title: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    #[serde(default)]
    pub default: bool,
}

/// An account document. No reachable flow reads or writes users yet; the
/// model exists so the `users` collection layout and its save-time
/// invariants are pinned down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    /// Never serialized, so it cannot leak into query results.
    #[serde(default, skip_serializing)]
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub addresses: Vec<UserAddress>,
    #[serde(default)]
    pub role: Role,
    /// Favorite-restaurant id references.
    #[serde(default)]
    pub favorites: Vec<String>,
    #[serde(default = "default_user_image")]
    pub image: String,
}

fn default_user_image() -> String {
    DEFAULT_USER_IMAGE.to_string()
}

impl User {
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation(
                "User name must not be empty".to_string(),
            ));
        }
        if !EMAIL_PATTERN.is_match(&self.email) {
            return Err(AppError::Validation(format!(
                "Invalid email address: {}",
                self.email
            )));
        }
        if self.password.len() < MIN_PASSWORD_LENGTH {
            return Err(AppError::Validation(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }
        for address in &self.addresses {
            let fields = [
                ("title", &address.title),
                ("street", &address.street),
                ("city", &address.city),
                ("state", &address.state),
                ("zipCode", &address.zip_code),
            ];
            for (field, value) in fields {
                if value.trim().is_empty() {
                    return Err(AppError::Validation(format!(
                        "Missing address {} for user {}",
                        field, self.email
                    )));
                }
            }
        }
        Ok(())
    }

    /// Save-time invariant repair: a non-empty address list with no default
    /// promotes the first entry. The guaranteed invariant is "at least one
    /// default when addresses exist" - multiple defaults are left alone.
    pub fn repair_default_address(&mut self) {
        if !self.addresses.is_empty() && !self.addresses.iter().any(|a| a.default) {
            self.addresses[0].default = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(title: &str, default: bool) -> UserAddress {
        UserAddress {
            title: title.to_string(),
            street: "123 Main St".to_string(),
            city: "Foodville".to_string(),
            state: "NY".to_string(),
            zip_code: "10001".to_string(),
            default,
        }
    }

    fn valid_user() -> User {
        User {
            id: "u1".to_string(),
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
            password: "hunter2hunter2".to_string(),
            phone: None,
            addresses: vec![],
            role: Role::default(),
            favorites: vec![],
            image: default_user_image(),
        }
    }

    #[test]
    fn validate_checks_email_and_password_length() {
        assert!(valid_user().validate().is_ok());

        let mut u = valid_user();
        u.email = "not-an-email".to_string();
        assert!(u.validate().is_err());

        let mut u = valid_user();
        u.email = "no@tld".to_string();
        assert!(u.validate().is_err());

        let mut u = valid_user();
        u.password = "short".to_string();
        assert!(u.validate().is_err());
    }

    #[test]
    fn repair_promotes_first_address_when_none_default() {
        let mut u = valid_user();
        u.addresses = vec![address("Home", false), address("Work", false)];
        u.repair_default_address();
        assert!(u.addresses[0].default);
        assert!(!u.addresses[1].default);
    }

    #[test]
    fn repair_leaves_existing_defaults_alone() {
        let mut u = valid_user();
        u.addresses = vec![address("Home", false), address("Work", true)];
        u.repair_default_address();
        assert!(!u.addresses[0].default);

        // Known limitation carried over from the original hook: multiple
        // defaults are not collapsed.
        let mut u = valid_user();
        u.addresses = vec![address("Home", true), address("Work", true)];
        u.repair_default_address();
        assert!(u.addresses[0].default && u.addresses[1].default);

        let mut u = valid_user();
        u.repair_default_address();
        assert!(u.addresses.is_empty());
    }

    #[test]
    fn password_is_never_serialized() {
        let json = serde_json::to_value(valid_user()).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["role"], "user");
        assert_eq!(json["image"], DEFAULT_USER_IMAGE);
    }
}
