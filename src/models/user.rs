use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
}

impl User {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Body of the create, update and delete requests, either form-encoded or JSON.
#[derive(Deserialize, Debug, Default)]
pub struct UserForm {
    #[serde(default)]
    pub name: Option<String>,
    /// Method override sent by HTML forms, which can only POST.
    #[serde(default, rename = "_method")]
    pub method: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum FormAction {
    Update,
    Delete,
}

impl UserForm {
    /// A missing name is stored as an empty one.
    pub fn name(&self) -> String {
        self.name.clone().unwrap_or_default()
    }

    pub fn action(&self) -> FormAction {
        match self.method.as_deref() {
            Some(m) if m.eq_ignore_ascii_case("DELETE") => FormAction::Delete,
            _ => FormAction::Update,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_name_is_empty() {
        assert_eq!(UserForm::default().name(), "");
    }

    #[test]
    fn method_override_selects_action() {
        let form = |m: Option<&str>| UserForm {
            name: None,
            method: m.map(str::to_owned),
        };
        assert_eq!(form(None).action(), FormAction::Update);
        assert_eq!(form(Some("PUT")).action(), FormAction::Update);
        assert_eq!(form(Some("delete")).action(), FormAction::Delete);
        assert_eq!(form(Some("DELETE")).action(), FormAction::Delete);
        assert_eq!(form(Some("bogus")).action(), FormAction::Update);
    }
}
