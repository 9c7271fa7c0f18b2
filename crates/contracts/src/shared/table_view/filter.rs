use super::record::Record;
use std::collections::BTreeMap;

/// Matching policy declared per filterable field.
///
/// `Exact` is case-sensitive equality, for enum-like fields (status, kind).
/// `Substring` is case-insensitive contains, for free-text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterPolicy {
    Exact,
    Substring,
}

/// Field name → current filter value. Empty string means "no constraint".
pub type FilterState = BTreeMap<String, String>;

/// True iff the record satisfies every active (non-empty) filter entry under
/// that field's declared policy.
///
/// An active filter naming a field the record does not carry excludes the
/// record; a silently matching no-op filter would hide misconfiguration.
pub fn matches_filters(
    record: &Record,
    filters: &FilterState,
    policies: &BTreeMap<String, FilterPolicy>,
) -> bool {
    for (field, wanted) in filters {
        if wanted.is_empty() {
            continue;
        }
        let Some(actual) = record.field_str(field) else {
            return false;
        };
        let matched = match policies.get(field) {
            Some(FilterPolicy::Exact) => actual == *wanted,
            Some(FilterPolicy::Substring) => {
                actual.to_lowercase().contains(&wanted.to_lowercase())
            }
            // Callers validate filter keys against the policy map up front;
            // an unknown key reaching this point excludes the record.
            None => false,
        };
        if !matched {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(v: serde_json::Value) -> Record {
        match v {
            serde_json::Value::Object(m) => Record(m),
            _ => unreachable!(),
        }
    }

    fn policies() -> BTreeMap<String, FilterPolicy> {
        BTreeMap::from([
            ("status".to_string(), FilterPolicy::Exact),
            ("name".to_string(), FilterPolicy::Substring),
        ])
    }

    #[test]
    fn empty_filter_state_matches_everything() {
        let rec = record(json!({"status": "active"}));
        assert!(matches_filters(&rec, &FilterState::new(), &policies()));
    }

    #[test]
    fn empty_values_are_inactive() {
        let rec = record(json!({"status": "active"}));
        let filters = FilterState::from([("status".to_string(), String::new())]);
        assert!(matches_filters(&rec, &filters, &policies()));
    }

    #[test]
    fn exact_policy_is_case_sensitive() {
        let filters = FilterState::from([("status".to_string(), "active".to_string())]);
        let lower = record(json!({"status": "active"}));
        let upper = record(json!({"status": "Active"}));
        assert!(matches_filters(&lower, &filters, &policies()));
        assert!(!matches_filters(&upper, &filters, &policies()));
    }

    #[test]
    fn substring_policy_is_case_insensitive() {
        let filters = FilterState::from([("name".to_string(), "VĂN".to_string())]);
        let rec = record(json!({"name": "Nguyễn văn A"}));
        assert!(matches_filters(&rec, &filters, &policies()));
    }

    #[test]
    fn active_filter_on_absent_field_excludes_record() {
        let filters = FilterState::from([("status".to_string(), "active".to_string())]);
        let rec = record(json!({"name": "no status here"}));
        assert!(!matches_filters(&rec, &filters, &policies()));
    }

    #[test]
    fn all_active_filters_must_match() {
        let filters = FilterState::from([
            ("status".to_string(), "active".to_string()),
            ("name".to_string(), "văn".to_string()),
        ]);
        let both = record(json!({"status": "active", "name": "Nguyễn Văn A"}));
        let one = record(json!({"status": "active", "name": "Trần Thị B"}));
        assert!(matches_filters(&both, &filters, &policies()));
        assert!(!matches_filters(&one, &filters, &policies()));
    }
}
