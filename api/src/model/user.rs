use garde::Validate;
use kernel::model::id::UserId;
use kernel::model::user::User;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub email: String,
    pub password: String,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User {
            id,
            email,
            created_events: _,
        } = value;
        // password は常に空文字で返す
        Self {
            id,
            email,
            password: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_redacts_the_password() {
        let user = User {
            id: UserId::new(),
            email: "a@x.com".into(),
            created_events: Vec::new(),
        };
        let res = UserResponse::from(user);
        assert_eq!(res.password, "");

        let value = serde_json::to_value(&res).unwrap();
        assert_eq!(value["password"], "");
        assert_eq!(value["email"], "a@x.com");
    }

    #[test]
    fn malformed_email_fails_validation() {
        let req = CreateUserRequest {
            email: "not-an-email".into(),
            password: "secret123".into(),
        };
        assert!(req.validate(&()).is_err());
    }

    #[test]
    fn empty_password_fails_validation() {
        let req = CreateUserRequest {
            email: "a@x.com".into(),
            password: String::new(),
        };
        assert!(req.validate(&()).is_err());
    }
}
