use contracts::shared::analytics::{FilterSet, SortField, SortOrder, TransactionRecord};
use std::cmp::Ordering;

/// Records matching every set predicate, in input order.
pub fn filter_records(records: &[TransactionRecord], filter: &FilterSet) -> Vec<TransactionRecord> {
    if filter.is_unrestricted() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| matches(record, filter))
        .cloned()
        .collect()
}

fn matches(record: &TransactionRecord, filter: &FilterSet) -> bool {
    if !filter.categories.is_empty() && !filter.categories.contains(&record.category) {
        return false;
    }
    if !filter.regions.is_empty() && !filter.regions.contains(&record.region) {
        return false;
    }
    if filter.date_from.is_some_and(|from| record.date < from) {
        return false;
    }
    if filter.date_to.is_some_and(|to| record.date > to) {
        return false;
    }
    if filter.min_sales.is_some_and(|min| record.sales < min) {
        return false;
    }
    true
}

/// Stable sort; records with equal keys keep their relative order.
pub fn sort_records(records: &mut [TransactionRecord], field: SortField, order: SortOrder) {
    records.sort_by(|a, b| {
        let ordering = compare(a, b, field);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

fn compare(a: &TransactionRecord, b: &TransactionRecord, field: SortField) -> Ordering {
    match field {
        SortField::Date => a.date.cmp(&b.date),
        SortField::Sales => a.sales.cmp(&b.sales),
        SortField::Profit => a.profit.total_cmp(&b.profit),
        SortField::Category => a.category.label().cmp(b.category.label()),
        SortField::Region => a.region.label().cmp(b.region.label()),
    }
}
