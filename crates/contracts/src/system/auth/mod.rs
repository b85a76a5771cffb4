use serde::{Deserialize, Serialize};

/// Body of `POST /user/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub user_name: String,
    pub password: String,
}

/// Subset of the user record returned by a successful login.
///
/// The upstream payload is large and loosely typed; only the fields the UI
/// shows are kept, all optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginUser {
    pub id: Option<i64>,
    pub employee_id: Option<String>,
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub roles_list: Option<Vec<String>>,
}

impl LoginUser {
    /// Parse a success body; unexpected shapes yield an empty user.
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    /// Identifier to show in the page header.
    pub fn display_name(&self) -> Option<&str> {
        self.user_name
            .as_deref()
            .or(self.employee_id.as_deref())
            .filter(|s| !s.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_format() {
        let request = LoginRequest {
            user_name: "NC23550".into(),
            password: "123Ninja@".into(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "userName": "NC23550", "password": "123Ninja@" })
        );
    }

    #[test]
    fn test_user_from_body() {
        let user = LoginUser::from_body(
            r#"{"id":1759013,"userName":"NC23550","rolesList":["ADMIN"],"asgardUserPropertyMap":{}}"#,
        );
        assert_eq!(user.id, Some(1759013));
        assert_eq!(user.display_name(), Some("NC23550"));
        assert_eq!(user.roles_list, Some(vec!["ADMIN".to_string()]));

        let odd = LoginUser::from_body(r#"{"success":true,"message":"Login successful"}"#);
        assert_eq!(odd.display_name(), None);
        assert_eq!(LoginUser::from_body("not json"), LoginUser::default());
    }
}
