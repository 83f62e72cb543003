//! Stored credentials: bearer token, refresh token and role marker.

use crate::{api::LoginResponse, utils::storage};

pub const TOKEN_KEY: &str = "authToken";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";
pub const ROLE_KEY: &str = "user_type";

pub const EMPLOYEE_ROLE: &str = "Employee";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Employee,
    Admin,
    Other(String),
}

impl Role {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(EMPLOYEE_ROLE) => Role::Employee,
            Some("Admin") | None | Some("") => Role::Admin,
            Some(other) => Role::Other(other.to_string()),
        }
    }

    pub fn is_employee(&self) -> bool {
        matches!(self, Role::Employee)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub refresh_token: Option<String>,
    pub role: Role,
}

/// Dashboard a role lands on after sign-in. Anything but `Employee` is treated as an admin.
pub fn dashboard_path(role: &Role) -> &'static str {
    if role.is_employee() {
        crate::router::EMPLOYEE_DASHBOARD_PATH
    } else {
        crate::router::ADMIN_DASHBOARD_PATH
    }
}

pub fn stored_token() -> Option<String> {
    storage::get_item(TOKEN_KEY).filter(|token| !token.trim().is_empty())
}

pub fn load() -> Option<Session> {
    let token = stored_token()?;
    let role = storage::get_item(ROLE_KEY);
    Some(Session {
        token,
        refresh_token: storage::get_item(REFRESH_TOKEN_KEY),
        role: Role::parse(role.as_deref()),
    })
}

pub fn persist(response: &LoginResponse) -> Result<Session, String> {
    storage::set_item(TOKEN_KEY, &response.access)?;
    match &response.refresh {
        Some(refresh) => storage::set_item(REFRESH_TOKEN_KEY, refresh)?,
        None => storage::remove_item(REFRESH_TOKEN_KEY),
    }
    match &response.user_type {
        Some(role) => storage::set_item(ROLE_KEY, role)?,
        None => storage::remove_item(ROLE_KEY),
    }
    Ok(Session {
        token: response.access.clone(),
        refresh_token: response.refresh.clone(),
        role: Role::parse(response.user_type.as_deref()),
    })
}

pub fn clear() {
    storage::remove_item(TOKEN_KEY);
    storage::remove_item(REFRESH_TOKEN_KEY);
    storage::remove_item(ROLE_KEY);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parse_distinguishes_employee() {
        assert_eq!(Role::parse(Some("Employee")), Role::Employee);
        assert_eq!(Role::parse(Some("Admin")), Role::Admin);
        assert_eq!(Role::parse(None), Role::Admin);
        assert_eq!(Role::parse(Some("HR")), Role::Other("HR".into()));
    }

    #[test]
    fn dashboard_path_routes_by_role() {
        assert_eq!(dashboard_path(&Role::Employee), "/employee-dashboard");
        assert_eq!(dashboard_path(&Role::Admin), "/dashboard");
        assert_eq!(dashboard_path(&Role::Other("HR".into())), "/dashboard");
    }
}
