use crate::domain::common::EntityMetadata;
use crate::entity_id;
use serde::{Deserialize, Serialize};

entity_id!(AccountId);

/// Trạng thái tài khoản quản trị.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    Active,
    Inactive,
    Locked,
}

impl AccountStatus {
    pub fn code(&self) -> &'static str {
        match self {
            AccountStatus::Active => "active",
            AccountStatus::Inactive => "inactive",
            AccountStatus::Locked => "locked",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccountStatus::Active => "Đang hoạt động",
            AccountStatus::Inactive => "Ngừng hoạt động",
            AccountStatus::Locked => "Bị khóa",
        }
    }

    pub fn all() -> Vec<AccountStatus> {
        vec![
            AccountStatus::Active,
            AccountStatus::Inactive,
            AccountStatus::Locked,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "active" => Some(AccountStatus::Active),
            "inactive" => Some(AccountStatus::Inactive),
            "locked" => Some(AccountStatus::Locked),
            _ => None,
        }
    }
}

/// Admin console account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub username: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(rename = "roleId")]
    pub role_id: Option<String>,
    #[serde(rename = "roleName", default)]
    pub role_name: String,
    pub status: AccountStatus,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

/// Create/update payload for an account form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountDto {
    pub username: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(rename = "roleId")]
    pub role_id: Option<String>,
    pub status: Option<AccountStatus>,
}

impl AccountDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.username.trim().is_empty() {
            return Err("Tên đăng nhập không được để trống".into());
        }
        if self.full_name.trim().is_empty() {
            return Err("Họ tên không được để trống".into());
        }
        if !self.email.trim().is_empty() && !self.email.contains('@') {
            return Err("Email không hợp lệ".into());
        }
        Ok(())
    }
}

impl Account {
    pub fn apply(&mut self, dto: &AccountDto) {
        self.username = dto.username.clone();
        self.full_name = dto.full_name.clone();
        self.email = dto.email.clone();
        self.phone = dto.phone.clone();
        self.role_id = dto.role_id.clone();
        if let Some(status) = dto.status {
            self.status = status;
        }
        self.metadata.touch();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto() -> AccountDto {
        AccountDto {
            username: "ng.van.a".into(),
            full_name: "Nguyễn Văn A".into(),
            email: "a@agri.vn".into(),
            ..Default::default()
        }
    }

    #[test]
    fn valid_dto_passes() {
        assert!(dto().validate().is_ok());
    }

    #[test]
    fn blank_username_is_rejected() {
        let mut d = dto();
        d.username = "  ".into();
        assert!(d.validate().is_err());
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut d = dto();
        d.email = "not-an-email".into();
        assert!(d.validate().is_err());
    }

    #[test]
    fn apply_merges_dto_and_touches_metadata() {
        let mut account = Account {
            id: AccountId::new_v4(),
            username: "old".into(),
            full_name: "Cũ".into(),
            email: String::new(),
            phone: String::new(),
            role_id: None,
            role_name: String::new(),
            status: AccountStatus::Locked,
            metadata: EntityMetadata::new(),
        };
        let before = account.metadata.updated_at;

        account.apply(&dto());
        assert_eq!(account.username, "ng.van.a");
        assert_eq!(account.full_name, "Nguyễn Văn A");
        // dto without a status keeps the account's current one
        assert_eq!(account.status, AccountStatus::Locked);
        assert!(account.metadata.updated_at >= before);

        let mut d = dto();
        d.status = Some(AccountStatus::Active);
        account.apply(&d);
        assert_eq!(account.status, AccountStatus::Active);
    }

    #[test]
    fn status_codes_round_trip() {
        for status in AccountStatus::all() {
            assert_eq!(AccountStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(AccountStatus::from_code("gone"), None);
    }
}
