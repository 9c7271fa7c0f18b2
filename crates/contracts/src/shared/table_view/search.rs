use super::record::Record;

/// Free-text search: true iff the query is empty or its lower-cased form is a
/// substring of at least one of the listed fields' lower-cased values.
///
/// Fields listed but absent on a record are skipped.
pub fn matches_search(record: &Record, query: &str, fields: &[String]) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    fields.iter().any(|field| {
        record
            .field_str(field)
            .map(|value| value.to_lowercase().contains(&needle))
            .unwrap_or(false)
    })
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

    fn fields(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_query_matches_everything() {
        let rec = record(json!({"name": "Trần Thị B"}));
        assert!(matches_search(&rec, "", &fields(&["name"])));
        assert!(matches_search(&rec, "", &[]));
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let a = record(json!({"name": "Nguyen Van A"}));
        let b = record(json!({"name": "Tran Thi B"}));
        let f = fields(&["name"]);
        assert!(matches_search(&a, "van", &f));
        assert!(!matches_search(&b, "van", &f));
    }

    #[test]
    fn any_listed_field_may_match() {
        let rec = record(json!({"name": "Trần Thị B", "email": "b.tran@agri.vn"}));
        assert!(matches_search(&rec, "agri", &fields(&["name", "email"])));
    }

    #[test]
    fn absent_fields_are_skipped_not_errors() {
        let rec = record(json!({"name": "Trần Thị B"}));
        assert!(!matches_search(&rec, "agri", &fields(&["email", "phone"])));
    }

    #[test]
    fn numbers_are_searched_in_string_form() {
        let rec = record(json!({"policyNo": 20260001}));
        assert!(matches_search(&rec, "2026", &fields(&["policyNo"])));
    }
}
