use crate::domain::common::EntityMetadata;
use crate::entity_id;
use serde::{Deserialize, Serialize};

entity_id!(RoleId);

/// One grantable permission, grouped by functional area for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    pub code: String,
    pub name: String,
    /// Nhóm chức năng (ví dụ "Hợp đồng", "Bồi thường").
    pub group: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub permissions: Vec<Permission>,
    #[serde(rename = "accountCount", default)]
    pub account_count: usize,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Role {
    pub fn has_permission(&self, code: &str) -> bool {
        self.permissions.iter().any(|p| p.code == code)
    }

    /// Permissions grouped for the role details screen, preserving the order
    /// groups first appear in.
    pub fn permissions_by_group(&self) -> Vec<(String, Vec<Permission>)> {
        let mut groups: Vec<(String, Vec<Permission>)> = Vec::new();
        for perm in &self.permissions {
            match groups.iter_mut().find(|(g, _)| g == &perm.group) {
                Some((_, items)) => items.push(perm.clone()),
                None => groups.push((perm.group.clone(), vec![perm.clone()])),
            }
        }
        groups
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.code.trim().is_empty() {
            return Err("Mã vai trò không được để trống".into());
        }
        if self.name.trim().is_empty() {
            return Err("Tên vai trò không được để trống".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perm(code: &str, group: &str) -> Permission {
        Permission {
            code: code.into(),
            name: code.to_uppercase(),
            group: group.into(),
        }
    }

    fn role() -> Role {
        Role {
            id: RoleId::new_v4(),
            code: "OPS".into(),
            name: "Vận hành".into(),
            description: String::new(),
            permissions: vec![
                perm("policy.read", "Hợp đồng"),
                perm("claim.read", "Bồi thường"),
                perm("policy.write", "Hợp đồng"),
            ],
            account_count: 0,
            metadata: EntityMetadata::new(),
        }
    }

    #[test]
    fn has_permission_matches_exact_code() {
        let r = role();
        assert!(r.has_permission("policy.read"));
        assert!(!r.has_permission("policy.delete"));
    }

    #[test]
    fn grouping_preserves_first_seen_order() {
        let groups = role().permissions_by_group();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Hợp đồng");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[1].0, "Bồi thường");
    }

    #[test]
    fn blank_code_fails_validation() {
        let mut r = role();
        r.code = "".into();
        assert!(r.validate().is_err());
    }
}
