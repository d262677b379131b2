pub mod indexed_min_heap;

pub use indexed_min_heap::IndexedMinHeap;
