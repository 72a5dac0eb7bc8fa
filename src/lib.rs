mod shared;
pub mod stack;

pub use stack::{
    allocator::{Reallocate, SystemAllocator},
    errors::{AllocationError, EmptyStackError, StackError},
    Stack,
};
