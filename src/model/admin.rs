use serde::{Deserialize, Serialize};

/// Authenticated admin identity returned by `/api/auth/user`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdminUserDto {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub mosque_id: i32,
    pub mosque_name: String,
}

/// Credential login request body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequestDto {
    pub email: String,
    pub password: String,
}
