/// A record that can live in an [`IndexedMinHeap`]
///
/// The record owns its current heap slot so the heap can find it in O(1) when
/// its key is lowered from outside.
pub trait HeapSlot {
    /// Ordering key; smaller keys are popped first
    type Key: PartialOrd + Copy;

    /// Returns the current key
    fn key(&self) -> Self::Key;

    /// Returns the slot last assigned by the heap
    fn heap_slot(&self) -> usize;

    /// Records the slot the heap just moved this record to
    fn set_heap_slot(&mut self, slot: usize);
}

/// A binary min-heap over records stored in a caller-owned arena
///
/// The heap holds indices into the arena and keeps every record's
/// `heap_slot` in sync, which gives O(log n) `decrease_key` without
/// remove-and-reinsert. The heap does not validate indices; callers must only
/// pass indices of records that are currently enqueued.
#[derive(Debug, Default, Clone)]
pub struct IndexedMinHeap {
    /// Arena indices laid out as an implicit binary tree
    heap: Vec<usize>,
}

impl IndexedMinHeap {
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        IndexedMinHeap { heap: Vec::new() }
    }

    /// Creates a new empty priority queue with room for `capacity` records
    pub fn with_capacity(capacity: usize) -> Self {
        IndexedMinHeap {
            heap: Vec::with_capacity(capacity),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of records in the priority queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns the arena index of the minimum record without removing it
    pub fn peek(&self) -> Option<usize> {
        self.heap.first().copied()
    }

    /// Returns the enqueued arena indices in heap order
    pub fn as_slice(&self) -> &[usize] {
        &self.heap
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Enqueues `records[index]`
    pub fn insert<T: HeapSlot>(&mut self, records: &mut [T], index: usize) {
        let slot = self.heap.len();
        records[index].set_heap_slot(slot);
        self.heap.push(index);
        self.up(records, slot);
    }

    /// Removes the record with the smallest key and returns its arena index
    pub fn pop_minimum<T: HeapSlot>(&mut self, records: &mut [T]) -> Option<usize> {
        let last = self.heap.len().checked_sub(1)?;
        self.swap(records, 0, last);
        self.down(records, 0, last);
        self.heap.pop()
    }

    /// Restores heap order after the key of `records[index]` was lowered
    ///
    /// A lowered key can only move towards the root, but the downward check is
    /// a cheap no-op and keeps the fix correct for any key change.
    pub fn decrease_key<T: HeapSlot>(&mut self, records: &mut [T], index: usize) {
        let slot = records[index].heap_slot();
        if !self.down(records, slot, self.heap.len()) {
            self.up(records, slot);
        }
    }

    /// Checks the heap invariant and that every record's slot matches its position
    pub fn is_heap_ordered<T: HeapSlot>(&self, records: &[T]) -> bool {
        self.heap.iter().enumerate().all(|(slot, &index)| {
            let parent_ok = slot == 0 || {
                let parent = self.heap[(slot - 1) / 2];
                !(records[index].key() < records[parent].key())
            };
            parent_ok && records[index].heap_slot() == slot
        })
    }

    fn less<T: HeapSlot>(&self, records: &[T], i: usize, j: usize) -> bool {
        records[self.heap[i]].key() < records[self.heap[j]].key()
    }

    fn swap<T: HeapSlot>(&mut self, records: &mut [T], i: usize, j: usize) {
        self.heap.swap(i, j);
        records[self.heap[i]].set_heap_slot(i);
        records[self.heap[j]].set_heap_slot(j);
    }

    fn up<T: HeapSlot>(&mut self, records: &mut [T], mut j: usize) {
        while j > 0 {
            let parent = (j - 1) / 2;
            if !self.less(records, j, parent) {
                break;
            }
            self.swap(records, parent, j);
            j = parent;
        }
    }

    /// Sifts the record at slot `i0` down within the first `n` slots; returns
    /// true if it moved
    fn down<T: HeapSlot>(&mut self, records: &mut [T], i0: usize, n: usize) -> bool {
        let mut i = i0;
        loop {
            let left = 2 * i + 1;
            if left >= n {
                break;
            }
            let mut child = left;
            let right = left + 1;
            if right < n && self.less(records, right, left) {
                child = right;
            }
            if !self.less(records, child, i) {
                break;
            }
            self.swap(records, i, child);
            i = child;
        }
        i > i0
    }
}
