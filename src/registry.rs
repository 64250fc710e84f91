use std::sync::Mutex;

/// Reserve room before a push, growing the backing storage by 3/2 plus a
/// small constant. Growth never moves previously issued indices.
pub(crate) fn reserve_for_push<T>(records: &mut Vec<T>) {
    if records.len() == records.capacity() {
        let additional = records.len() / 2 + 8;
        records.reserve(additional);
    }
}

/// Append-mostly, index-addressable store shared between worker tasks.
///
/// Used twice in the pipeline: once for source descriptors (populated before
/// the workers start, read-only afterwards) and once for resolved sailors
/// (mutated concurrently through [`crate::resolver::IdentityResolver`]).
/// A single non-reentrant mutex guards the records; no locked operation
/// calls back into another locked operation.
pub struct Registry<T> {
    records: Mutex<Vec<T>>,
}

impl<T: Clone> Registry<T> {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    /// Appends a record and returns it unchanged.
    pub fn add(&self, record: T) -> T {
        let mut records = self.records.lock().unwrap();
        reserve_for_push(&mut records);
        records.push(record.clone());
        record
    }

    /// Returns a copy of the record at a previously issued index.
    pub fn get(&self, index: usize) -> Option<T> {
        let records = self.records.lock().unwrap();
        records.get(index).cloned()
    }

    /// Number of records stored; monotonically non-decreasing while the
    /// pipeline is running.
    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of every record in index order, for presentation after the
    /// workers have joined.
    pub fn snapshot(&self) -> Vec<T> {
        self.records.lock().unwrap().clone()
    }

    /// Runs `f` with the record vector locked. The closure is the entire
    /// critical section; callers must not nest another registry operation
    /// inside it.
    pub(crate) fn with_lock<R>(&self, f: impl FnOnce(&mut Vec<T>) -> R) -> R {
        let mut records = self.records.lock().unwrap();
        f(&mut records)
    }
}

impl<T: Clone> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_returns_record_unchanged() {
        let registry = Registry::new();
        let returned = registry.add("alpha".to_string());
        assert_eq!(returned, "alpha");
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(0), Some("alpha".to_string()));
    }

    #[test]
    fn get_out_of_range_is_none() {
        let registry: Registry<u32> = Registry::new();
        assert!(registry.get(0).is_none());
        registry.add(7);
        assert!(registry.get(1).is_none());
    }

    #[test]
    fn growth_preserves_earlier_indices() {
        let registry = Registry::new();
        // Capacity starts at zero and grows by n/2 + 8, so 100 inserts cover
        // several growth events.
        for i in 0..100usize {
            registry.add(format!("record-{i}"));
        }
        assert_eq!(registry.len(), 100);
        for i in 0..100usize {
            assert_eq!(registry.get(i), Some(format!("record-{i}")));
        }
    }

    #[test]
    fn concurrent_adds_are_all_stored() {
        use std::sync::Arc;
        use std::thread;

        let registry = Arc::new(Registry::new());
        let mut handles = Vec::new();
        for worker in 0..8usize {
            let registry = Arc::clone(&registry);
            handles.push(thread::spawn(move || {
                for i in 0..50usize {
                    registry.add(worker * 100 + i);
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(registry.len(), 400);
    }

    #[test]
    fn snapshot_preserves_insertion_order() {
        let registry = Registry::new();
        registry.add(1);
        registry.add(2);
        registry.add(3);
        assert_eq!(registry.snapshot(), vec![1, 2, 3]);
    }
}
