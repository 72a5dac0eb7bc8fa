use super::errors::AllocationError;
use crate::dbg_line;

/// Obtains and resizes the backing buffer of a [`Stack`](super::Stack).
///
/// A failed [`resize`](Reallocate::resize) must leave the buffer exactly as it was.
pub trait Reallocate {
    fn allocate<T>(&mut self, capacity: usize) -> Result<Vec<T>, AllocationError>;

    /// `new_capacity` is never smaller than `buffer.len()`.
    fn resize<T>(&mut self, buffer: &mut Vec<T>, new_capacity: usize) -> Result<(), AllocationError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemAllocator;

impl Reallocate for SystemAllocator {
    fn allocate<T>(&mut self, capacity: usize) -> Result<Vec<T>, AllocationError> {
        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(capacity)
            .map_err(|e| AllocationError::new(dbg_line!(), capacity).with_source(e))?;
        Ok(buffer)
    }

    fn resize<T>(&mut self, buffer: &mut Vec<T>, new_capacity: usize) -> Result<(), AllocationError> {
        debug_assert!(new_capacity >= buffer.len());

        if new_capacity > buffer.capacity() {
            // try_reserve_exact is relative to len, not capacity
            buffer
                .try_reserve_exact(new_capacity - buffer.len())
                .map_err(|e| AllocationError::new(dbg_line!(), new_capacity).with_source(e))?;
        } else if new_capacity < buffer.capacity() {
            // shrink_to aborts on allocation failure, so move into a fresh buffer instead
            let mut shrunk = Vec::new();
            shrunk
                .try_reserve_exact(new_capacity)
                .map_err(|e| AllocationError::new(dbg_line!(), new_capacity).with_source(e))?;
            shrunk.append(buffer);
            *buffer = shrunk;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn allocate_reserves_requested() {
        let buffer: Vec<i32> = SystemAllocator.allocate(4).unwrap();
        assert!(buffer.is_empty());
        assert!(buffer.capacity() >= 4);
    }

    #[test]
    fn allocate_overflow_fails() {
        let result: Result<Vec<u64>, _> = SystemAllocator.allocate(usize::MAX);
        let error = result.unwrap_err();
        assert_eq!(error.requested, usize::MAX);
        assert!(error.source.is_some());
    }

    #[test]
    fn resize_grows_and_shrinks() {
        let mut allocator = SystemAllocator;
        let mut buffer: Vec<i32> = allocator.allocate(1).unwrap();
        buffer.push(1);

        allocator.resize(&mut buffer, 16).unwrap();
        assert!(buffer.capacity() >= 16);
        assert_eq!(buffer, [1]);

        allocator.resize(&mut buffer, 2).unwrap();
        assert!(buffer.capacity() >= 2);
        assert!(buffer.capacity() < 16);
        assert_eq!(buffer, [1]);
    }

    #[test]
    fn shrink_keeps_order() {
        let mut allocator = SystemAllocator;
        let mut buffer: Vec<String> = allocator.allocate(8).unwrap();
        buffer.extend(["a", "b", "c"].map(String::from));

        allocator.resize(&mut buffer, 4).unwrap();
        assert!(buffer.capacity() >= 4);
        assert!(buffer.capacity() < 8);
        assert_eq!(buffer, ["a", "b", "c"]);
    }

    #[test]
    fn failed_grow_leaves_buffer() {
        let mut allocator = SystemAllocator;
        let mut buffer: Vec<u64> = allocator.allocate(1).unwrap();
        buffer.push(42);
        let before = buffer.capacity();

        assert!(allocator.resize(&mut buffer, usize::MAX).is_err());
        assert_eq!(buffer, [42]);
        assert_eq!(buffer.capacity(), before);
    }
}
