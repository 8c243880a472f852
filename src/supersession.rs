//! Removal of superseded deliverables.
//!
//! The search returns every published version of a document. Only the most
//! recently published one per document identifier is kept.

use crate::types::Deliverable;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::debug;

/// Keep the latest deliverable per document identifier
///
/// A later candidate replaces the kept one only when it was published strictly
/// later, so on equal dates the first one seen wins.
pub fn latest_by_doc_id(
    deliverables: impl IntoIterator<Item = Deliverable>,
) -> HashMap<String, Deliverable> {
    let mut latest: HashMap<String, Deliverable> = HashMap::new();
    for candidate in deliverables {
        match latest.entry(candidate.doc_id.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(candidate);
            }
            Entry::Occupied(mut slot) => {
                if slot.get().is_superseded_by(&candidate) {
                    debug!(
                        doc_id = %candidate.doc_id,
                        old_wki_id = slot.get().work_item_id,
                        new_wki_id = candidate.work_item_id,
                        "Dropping superseded deliverable"
                    );
                    slot.insert(candidate);
                }
            }
        }
    }
    latest
}

/// Flatten the deduplicated map into a listing ordered by document identifier
pub fn aggregate(latest: HashMap<String, Deliverable>) -> Vec<Deliverable> {
    let mut deliverables: Vec<Deliverable> = latest.into_values().collect();
    deliverables.sort_by(|a, b| a.doc_id.cmp(&b.doc_id));
    deliverables
}
