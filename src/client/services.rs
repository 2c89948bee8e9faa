use serde_json::{Value, json};
use tracing::debug;

use crate::error::DashboardResult;

use super::{ApiRequest, HttpMethod, HttpTransport};

/// User and organization endpoints.
///
/// Each call issues exactly one request and hands back whatever the transport
/// returns; inputs and outputs are not validated here.
#[derive(Debug, Clone)]
pub struct DashboardApi<T> {
    transport: T,
}

impl<T: HttpTransport> DashboardApi<T> {
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn login(&self, email: &str, password: &str) -> DashboardResult<Value> {
        self.send(
            ApiRequest::new(HttpMethod::Post, "/users/auth")
                .with_body(json!({ "email": email, "password": password })),
        )
    }

    pub fn refresh_session(&self) -> DashboardResult<Value> {
        self.send(ApiRequest::new(HttpMethod::Post, "/users/auth/refresh"))
    }

    pub fn request_password_reset(&self, email: &str) -> DashboardResult<Value> {
        self.send(
            ApiRequest::new(HttpMethod::Post, "/users/auth/reset")
                .with_body(json!({ "email": email })),
        )
    }

    pub fn update_password(
        &self,
        email: &str,
        reset_token: &str,
        password: &str,
    ) -> DashboardResult<Value> {
        self.send(
            ApiRequest::new(HttpMethod::Put, "/users/auth/update-password").with_body(json!({
                "email": email,
                "reset_token": reset_token,
                "password": password,
            })),
        )
    }

    pub fn get_user_profile(&self, user_id: &str) -> DashboardResult<Value> {
        self.send(ApiRequest::new(
            HttpMethod::Get,
            format!("/users/{user_id}/profile"),
        ))
    }

    pub fn list_organization_members(&self, org_id: &str) -> DashboardResult<Value> {
        self.send(ApiRequest::new(
            HttpMethod::Get,
            format!("/organizations/{org_id}/members"),
        ))
    }

    pub fn remove_organization_member(&self, org_id: &str, user_id: &str) -> DashboardResult<Value> {
        self.send(ApiRequest::new(
            HttpMethod::Delete,
            format!("/organizations/{org_id}/members/{user_id}"),
        ))
    }

    pub fn change_organization_member_role(
        &self,
        org_id: &str,
        user_id: &str,
        role: &str,
    ) -> DashboardResult<Value> {
        self.send(
            ApiRequest::new(
                HttpMethod::Post,
                format!("/organizations/{org_id}/members/{user_id}/role"),
            )
            .with_body(json!({ "role": role })),
        )
    }

    fn send(&self, request: ApiRequest) -> DashboardResult<Value> {
        debug!(method = %request.method, path = %request.path, "api request");
        self.transport.send(&request)
    }
}
