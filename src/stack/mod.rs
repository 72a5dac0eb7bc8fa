pub mod allocator;
pub mod errors;

use allocator::{Reallocate, SystemAllocator};
use errors::{AllocationError, EmptyStackError};

use crate::dbg_line;

/// LIFO container over a dynamically sized buffer.
///
/// Capacity starts at 1, grows by exactly one slot when a push finds the stack full,
/// and halves once a pop leaves `len() <= capacity() / 4`. It never drops below 1.
///
/// Not synchronized: wrap it in a lock to share it between threads.
#[derive(Debug)]
pub struct Stack<T, A: Reallocate = SystemAllocator> {
    elements: Vec<T>,
    capacity: usize,
    allocator: A,
}

impl<T> Stack<T> {
    pub fn new() -> Result<Self, AllocationError> {
        Self::with_allocator(SystemAllocator)
    }
}

impl<T, A: Reallocate + Default, const N: usize> TryFrom<[T; N]> for Stack<T, A> {
    type Error = AllocationError;

    fn try_from(array: [T; N]) -> Result<Self, Self::Error> {
        let mut stack = Self::with_allocator(A::default())?;
        for value in array {
            stack.push(value)?;
        }
        Ok(stack)
    }
}

impl<T: Clone, A: Reallocate + Clone> Stack<T, A> {
    /// Copies the stack into a buffer of the same capacity, obtained from a clone of the allocator.
    pub fn try_clone(&self) -> Result<Self, AllocationError> {
        let mut allocator = self.allocator.clone();
        let mut elements = allocator.allocate(self.capacity)?;
        elements.extend(self.elements.iter().cloned());
        Ok(Self {
            elements,
            capacity: self.capacity,
            allocator,
        })
    }
}

impl<T, A: Reallocate> Stack<T, A> {
    pub fn with_allocator(mut allocator: A) -> Result<Self, AllocationError> {
        let elements = allocator.allocate(1)?;
        Ok(Self {
            elements,
            capacity: 1,
            allocator,
        })
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.elements.len() == self.capacity
    }

    pub fn allocator(&self) -> &A {
        &self.allocator
    }

    pub fn allocator_mut(&mut self) -> &mut A {
        &mut self.allocator
    }

    /// Pushes `value` on top, growing the buffer by one slot first if it is full.
    ///
    /// On [`AllocationError`] the stack is left untouched and `value` is dropped.
    pub fn push(&mut self, value: T) -> Result<(), AllocationError> {
        if self.is_full() {
            let new_capacity = self.capacity + 1;
            if let Err(error) = self.allocator.resize(&mut self.elements, new_capacity) {
                log::trace!("stack grow to {new_capacity} failed: {error:?}");
                return Err(error);
            }
            log::trace!("stack grew {} -> {new_capacity}", self.capacity);
            self.capacity = new_capacity;
        }

        self.elements.push(value);
        Ok(())
    }

    /// Removes the top value, halving the buffer if it ends up at most a quarter full.
    pub fn pop(&mut self) -> Result<T, EmptyStackError> {
        let Some(value) = self.elements.pop() else {
            return Err(EmptyStackError {
                dbg_line: dbg_line!(),
                operation: "pop",
            });
        };

        if self.capacity > 1 && self.elements.len() <= self.capacity / 4 {
            let new_capacity = self.capacity / 2;
            match self.allocator.resize(&mut self.elements, new_capacity) {
                Ok(()) => {
                    log::trace!("stack shrank {} -> {new_capacity}", self.capacity);
                    self.capacity = new_capacity;
                }
                // next push grows again if needed
                Err(error) => log::trace!("stack shrink to {new_capacity} ignored: {error:?}"),
            }
        }

        Ok(value)
    }

    pub fn peek(&self) -> Result<&T, EmptyStackError> {
        self.elements.last().ok_or_else(|| EmptyStackError {
            dbg_line: dbg_line!(),
            operation: "peek",
        })
    }

    /// Live elements from bottom to top, paired with their index.
    pub fn describe(&self) -> Vec<(usize, &T)> {
        self.elements.iter().enumerate().collect()
    }

    pub fn destroy(self) {
        log::trace!("stack destroyed with {} elements", self.len());
    }
}
