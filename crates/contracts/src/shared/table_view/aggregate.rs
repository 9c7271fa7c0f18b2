use super::record::Record;
use std::collections::BTreeMap;

/// One named summary figure computed over the full record store.
#[derive(Debug, Clone)]
pub enum AggregateSpec {
    /// Number of records in the store.
    Count,
    /// Number of records satisfying the predicate.
    CountWhere(fn(&Record) -> bool),
    /// Sum of a numeric field; records without a numeric value are skipped.
    Sum(String),
    /// Mean of a numeric field over the records that carry one. Zero such
    /// records yields 0, the UI renders the value without a guard.
    Average(String),
}

impl AggregateSpec {
    pub(crate) fn field(&self) -> Option<&str> {
        match self {
            AggregateSpec::Sum(field) | AggregateSpec::Average(field) => Some(field),
            AggregateSpec::Count | AggregateSpec::CountWhere(_) => None,
        }
    }
}

/// Stat name → value, in stable name order for rendering.
pub type SummaryStats = BTreeMap<String, f64>;

/// Compute every named spec over the store. Specs are independent; each is a
/// single O(n) pass.
pub fn compute_stats(
    records: &[Record],
    specs: &BTreeMap<String, AggregateSpec>,
) -> SummaryStats {
    specs
        .iter()
        .map(|(name, spec)| (name.clone(), compute_one(records, spec)))
        .collect()
}

fn compute_one(records: &[Record], spec: &AggregateSpec) -> f64 {
    match spec {
        AggregateSpec::Count => records.len() as f64,
        AggregateSpec::CountWhere(pred) => {
            records.iter().filter(|r| pred(r)).count() as f64
        }
        AggregateSpec::Sum(field) => records
            .iter()
            .filter_map(|r| r.field_num(field))
            .sum(),
        AggregateSpec::Average(field) => {
            let values: Vec<f64> = records
                .iter()
                .filter_map(|r| r.field_num(field))
                .collect();
            if values.is_empty() {
                0.0
            } else {
                values.iter().sum::<f64>() / values.len() as f64
            }
        }
    }
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

    fn store() -> Vec<Record> {
        vec![
            record(json!({"status": "active", "premium": 100.0})),
            record(json!({"status": "draft", "premium": 50.0})),
            record(json!({"status": "active", "premium": 30.0})),
        ]
    }

    fn specs() -> BTreeMap<String, AggregateSpec> {
        BTreeMap::from([
            ("count".to_string(), AggregateSpec::Count),
            (
                "active".to_string(),
                AggregateSpec::CountWhere(|r| {
                    r.field_str("status").as_deref() == Some("active")
                }),
            ),
            (
                "totalPremium".to_string(),
                AggregateSpec::Sum("premium".into()),
            ),
            (
                "avgPremium".to_string(),
                AggregateSpec::Average("premium".into()),
            ),
        ])
    }

    #[test]
    fn stats_cover_every_spec() {
        let stats = compute_stats(&store(), &specs());
        assert_eq!(stats["count"], 3.0);
        assert_eq!(stats["active"], 2.0);
        assert_eq!(stats["totalPremium"], 180.0);
        assert_eq!(stats["avgPremium"], 60.0);
    }

    #[test]
    fn average_of_empty_store_is_exactly_zero() {
        let stats = compute_stats(&[], &specs());
        assert_eq!(stats["avgPremium"], 0.0);
        assert_eq!(stats["count"], 0.0);
    }

    #[test]
    fn non_numeric_values_are_skipped_in_sums() {
        let records = vec![
            record(json!({"premium": 10.0})),
            record(json!({"premium": "n/a"})),
            record(json!({})),
        ];
        let stats = compute_stats(&records, &specs());
        assert_eq!(stats["totalPremium"], 10.0);
        assert_eq!(stats["avgPremium"], 10.0);
    }
}
