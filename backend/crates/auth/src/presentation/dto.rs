//! Request and view-model types

use serde::{Deserialize, Serialize};

use crate::domain::entity::user::User;

// ============================================================================
// Sign In
// ============================================================================

/// Login form body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default, alias = "name")]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Query string of `/login`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NextQuery {
    pub next: Option<String>,
}

// ============================================================================
// Page Data
// ============================================================================

/// Pages reachable from the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavPage {
    Home,
    Domains,
    People,
    Portfolios,
}

impl NavPage {
    pub const ALL: [NavPage; 4] = [
        NavPage::Home,
        NavPage::Domains,
        NavPage::People,
        NavPage::Portfolios,
    ];

    pub const fn label(&self) -> &'static str {
        match self {
            NavPage::Home => "Home",
            NavPage::Domains => "Domains",
            NavPage::People => "People",
            NavPage::Portfolios => "Portfolios",
        }
    }

    pub const fn link(&self) -> &'static str {
        match self {
            NavPage::Home => "/",
            NavPage::Domains => "/domains",
            NavPage::People => "/people",
            NavPage::Portfolios => "/portfolios",
        }
    }

    pub const fn glyph(&self) -> &'static str {
        match self {
            NavPage::Home => "home",
            NavPage::Domains => "cloud",
            NavPage::People => "user",
            NavPage::Portfolios => "briefcase",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavBarItem {
    pub label: &'static str,
    pub link: &'static str,
    pub glyph: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: i64,
    pub username: String,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.get(),
            username: user.username.clone(),
        }
    }
}

/// Data handed to the renderer
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData {
    pub user: Option<UserView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    pub nav_bar_items: Vec<NavBarItem>,
}

impl PageData {
    /// Data for a signed-in page with `active` highlighted
    pub fn for_page(user: &User, active: NavPage) -> Self {
        Self {
            user: Some(UserView::from(user)),
            next: None,
            nav_bar_items: NavPage::ALL
                .iter()
                .map(|page| NavBarItem {
                    label: page.label(),
                    link: page.link(),
                    glyph: page.glyph(),
                    active: *page == active,
                })
                .collect(),
        }
    }

    /// Data for the login form
    pub fn for_login(next: Option<String>) -> Self {
        Self {
            next: next.filter(|n| !n.is_empty()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_id::UserId;

    #[test]
    fn test_exactly_one_active_item() {
        let user = User::new(UserId::new(1), "testuser");
        let data = PageData::for_page(&user, NavPage::People);

        assert_eq!(data.nav_bar_items.len(), 4);
        let active: Vec<_> = data.nav_bar_items.iter().filter(|i| i.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].link, "/people");
    }

    #[test]
    fn test_login_form_accepts_name_alias() {
        let form: LoginForm = serde_json::from_str(r#"{"name":"testuser","password":"pw"}"#).unwrap();
        assert_eq!(form.username, "testuser");

        let empty: LoginForm = serde_json::from_str("{}").unwrap();
        assert!(empty.username.is_empty() && empty.password.is_empty());
    }

    #[test]
    fn test_login_data_drops_empty_next() {
        assert!(PageData::for_login(Some(String::new())).next.is_none());
        assert_eq!(
            PageData::for_login(Some("/people".to_string())).next.as_deref(),
            Some("/people")
        );
    }
}
