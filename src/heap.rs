use std::path::Path;

use log::{debug, trace};

use crate::error::{HeapError, Result};
use crate::source;

/// Initial capacity used by [`MaxHeap::default`].
pub const DEFAULT_CAPACITY: usize = 20;

/// Binary max-heap of `i32` stored in a growable array.
///
/// Slots `0..size` of `data` are live; anything past `size` is spare
/// capacity. `data.len()` is the capacity and only ever doubles.
#[derive(Debug, Clone)]
pub struct MaxHeap {
    data: Vec<i32>,
    size: usize,
}

impl Default for MaxHeap {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl MaxHeap {
    /// Creates an empty heap. A `capacity` of 0 is clamped to 1.
    pub fn new(capacity: usize) -> Self {
        Self {
            data: vec![0; capacity.max(1)],
            size: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    pub fn peek(&self) -> Option<i32> {
        if self.size == 0 {
            None
        } else {
            Some(self.data[0])
        }
    }

    /// Replaces the contents with `values` using a single bottom-up pass.
    pub fn build_heap<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = i32>,
    {
        self.size = 0;
        for v in values {
            self.ensure_capacity();
            self.data[self.size] = v;
            self.size += 1;
        }
        let end = self.size;
        for i in (0..end / 2).rev() {
            Self::sift_down(&mut self.data, i, end);
        }
        debug!("built heap of {} elements", end);
    }

    /// Replaces the contents with the integers read from `path` and
    /// returns how many were loaded.
    ///
    /// The heap is emptied before the file is opened, so a
    /// [`HeapError::SourceUnavailable`] leaves it empty.
    pub fn build_heap_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        self.size = 0;
        let values = source::read_integers(path)?;
        self.build_heap(values);
        Ok(self.size)
    }

    pub fn insert(&mut self, value: i32) {
        self.ensure_capacity();
        self.data[self.size] = value;
        Self::sift_up(&mut self.data, self.size);
        self.size += 1;
    }

    /// Removes and returns the largest element.
    pub fn delete_max(&mut self) -> Result<i32> {
        if self.size == 0 {
            return Err(HeapError::Empty);
        }
        let max = self.data[0];
        self.size -= 1;
        self.data[0] = self.data[self.size];
        Self::sift_down(&mut self.data, 0, self.size);
        Ok(max)
    }

    /// Sorts the live elements in place and returns them in ascending
    /// order. The heap is empty afterwards.
    pub fn heap_sort(&mut self) -> Result<Vec<i32>> {
        if self.size == 0 {
            return Err(HeapError::Empty);
        }
        let len = self.size;
        for end in (1..len).rev() {
            self.data.swap(0, end);
            self.size = end;
            Self::sift_down(&mut self.data, 0, end);
        }
        self.size = 0;
        debug!("sorted {} elements, heap destroyed", len);
        Ok(self.data[..len].to_vec())
    }

    /// Live elements in storage (heap) order.
    pub fn snapshot(&self) -> Result<&[i32]> {
        if self.size == 0 {
            Err(HeapError::Empty)
        } else {
            Ok(&self.data[..self.size])
        }
    }

    fn ensure_capacity(&mut self) {
        if self.size >= self.data.len() {
            let capacity = self.data.len() * 2;
            trace!("growing heap storage {} -> {}", self.data.len(), capacity);
            self.data.resize(capacity, 0);
        }
    }

    fn sift_up(data: &mut [i32], start: usize) {
        let mut i = start;
        while i > 0 {
            let parent = (i - 1) / 2;
            if data[i] <= data[parent] {
                return;
            }
            data.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(data: &mut [i32], start: usize, end: usize) {
        let mut i = start;
        while i < end {
            let mut largest = i;
            if 2 * i + 1 < end && data[2 * i + 1] > data[largest] {
                largest = 2 * i + 1;
            }
            if 2 * i + 2 < end && data[2 * i + 2] > data[largest] {
                largest = 2 * i + 2;
            }
            if largest == i {
                return;
            }
            data.swap(largest, i);
            i = largest;
        }
    }
}
