//! District and province frequency counts.

use crate::record::Field;
use crate::store::{Counts, RecordStore, Subset};

/// Roads per district over the deduplicated set, in first-seen order
pub fn district_counts(store: &RecordStore) -> Counts {
    store.group_by(Subset::Deduplicated, Field::District)
}

/// Roads per source province over the deduplicated set, in first-seen order
pub fn province_counts(store: &RecordStore) -> Counts {
    store.group_by(Subset::Deduplicated, Field::Province)
}
