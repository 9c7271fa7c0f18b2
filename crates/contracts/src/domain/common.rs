use serde::{Deserialize, Serialize};

/// Lifecycle metadata carried by every entity record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityMetadata {
    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl EntityMetadata {
    pub fn new() -> Self {
        let now = chrono::Utc::now();
        Self {
            created_at: now,
            updated_at: now,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now();
    }
}

impl Default for EntityMetadata {
    fn default() -> Self {
        Self::new()
    }
}

/// Typed UUID identifier shared by all entities.
///
/// Each entity module exposes its own alias-like newtype via this macro so
/// ids of different entities cannot be mixed up at compile time.
#[macro_export]
macro_rules! entity_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        pub struct $name(pub uuid::Uuid);

        impl $name {
            pub fn new(value: uuid::Uuid) -> Self {
                Self(value)
            }

            pub fn new_v4() -> Self {
                Self(uuid::Uuid::new_v4())
            }

            pub fn value(&self) -> uuid::Uuid {
                self.0
            }

            pub fn as_string(&self) -> String {
                self.0.to_string()
            }

            pub fn parse(s: &str) -> Result<Self, String> {
                uuid::Uuid::parse_str(s)
                    .map(Self)
                    .map_err(|e| format!("Invalid UUID: {}", e))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::entity_id;

    entity_id!(SampleId);

    #[test]
    fn entity_id_round_trips_through_string() {
        let id = SampleId::new_v4();
        let parsed = SampleId::parse(&id.as_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn entity_id_rejects_garbage() {
        assert!(SampleId::parse("not-a-uuid").is_err());
    }
}
