//! Page-level redirects for the admin dashboard.
//!
//! Runs before the page is served so an unauthenticated visitor never sees
//! an admin page flash before the client router kicks in. API routes are
//! left alone; they return structured errors instead of redirects.

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::server::middleware::session::AuthSession;

const LOGIN_PATH: &str = "/admin/login";
const DASHBOARD_PATH: &str = "/admin";

/// Redirects admin page requests based on authentication state.
///
/// Unauthenticated requests to any `/admin` page other than the login page
/// are redirected to the login page. Authenticated requests to the login
/// page are redirected to the dashboard. Everything else passes through.
pub async fn admin_page_redirect(session: Session, request: Request, next: Next) -> Response {
    let path = request.uri().path();

    if !is_admin_page(path) {
        return next.run(request).await;
    }

    let auth_session = AuthSession::new(&session);
    // A broken session store should not lock anyone out of the login page.
    let authenticated = auth_session.is_authenticated().await.unwrap_or(false);

    let is_login_page = path == LOGIN_PATH;

    if !authenticated && !is_login_page {
        return Redirect::temporary(LOGIN_PATH).into_response();
    }

    if authenticated && is_login_page {
        return Redirect::temporary(DASHBOARD_PATH).into_response();
    }

    next.run(request).await
}

/// Matches the dashboard and its subpages, not siblings like `/admins` or
/// the `/api` routes.
fn is_admin_page(path: &str) -> bool {
    path == DASHBOARD_PATH || path.starts_with("/admin/")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn matches_dashboard_pages_only() {
        assert!(is_admin_page("/admin"));
        assert!(is_admin_page("/admin/login"));
        assert!(is_admin_page("/admin/messages"));

        assert!(!is_admin_page("/"));
        assert!(!is_admin_page("/admins"));
        assert!(!is_admin_page("/administration"));
        assert!(!is_admin_page("/api/admin/subscribers"));
    }
}
