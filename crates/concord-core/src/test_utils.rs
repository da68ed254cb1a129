//! Test utilities for concord-core
//!
//! Provides the operator stubs used to exercise each clause of the
//! constraint predicates, drop accounting for generator frames, and a
//! writer that always fails.

use std::cell::{Cell, RefCell};
use std::io::{self, Write};
use std::ops::Mul;
use std::rc::Rc;

/// An operand type whose `*` is switched on by three independent bits.
///
/// - `NOEXCEPT`: when false, `*` panics on overflow instead of wrapping.
/// - `OPERATOR_STAR`: whether `*` exists at all.
/// - `VALID_RETURN`: whether `*` returns `Self` or an unrelated `i32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stub<const NOEXCEPT: bool, const OPERATOR_STAR: bool, const VALID_RETURN: bool> {
    pub value: i64,
}

impl<const NOEXCEPT: bool, const OPERATOR_STAR: bool, const VALID_RETURN: bool>
    Stub<NOEXCEPT, OPERATOR_STAR, VALID_RETURN>
{
    pub fn of(value: i64) -> Self {
        Self { value }
    }
}

impl<const NOEXCEPT: bool> Mul for Stub<NOEXCEPT, true, true> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let value = if NOEXCEPT {
            self.value.wrapping_mul(rhs.value)
        } else {
            self.value
                .checked_mul(rhs.value)
                .expect("stub product overflowed")
        };
        Stub { value }
    }
}

impl<const NOEXCEPT: bool> Mul for Stub<NOEXCEPT, true, false> {
    type Output = i32;

    fn mul(self, _rhs: Self) -> i32 {
        0
    }
}

pub type NoMultiply = Stub<true, false, true>;
pub type ValidClass = Stub<true, true, true>;
pub type NotNoexcept = Stub<false, true, true>;
pub type DifferentReturnType = Stub<true, true, false>;

/// Increments a shared counter when dropped.
#[derive(Debug)]
pub struct DropGuard {
    drops: Rc<Cell<usize>>,
}

impl DropGuard {
    /// Creates a guard and the counter it reports to.
    pub fn new() -> (Self, Rc<Cell<usize>>) {
        let drops = Rc::new(Cell::new(0));
        (
            Self {
                drops: Rc::clone(&drops),
            },
            drops,
        )
    }

    /// Creates another guard reporting to the same counter.
    pub fn sibling(&self) -> Self {
        Self {
            drops: Rc::clone(&self.drops),
        }
    }
}

impl Drop for DropGuard {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

/// Records the names of [`Tracked`] values in the order they are dropped.
#[derive(Debug, Default, Clone)]
pub struct DropLog {
    order: Rc<RefCell<Vec<&'static str>>>,
}

impl DropLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a value that appends `name` to this log when dropped.
    pub fn track(&self, name: &'static str) -> Tracked {
        Tracked {
            name,
            order: Rc::clone(&self.order),
        }
    }

    pub fn order(&self) -> Vec<&'static str> {
        self.order.borrow().clone()
    }
}

#[derive(Debug)]
pub struct Tracked {
    name: &'static str,
    order: Rc<RefCell<Vec<&'static str>>>,
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.order.borrow_mut().push(self.name);
    }
}

/// A sink whose every write and flush fails like a full disk.
#[derive(Debug, Default)]
pub struct FullDevice;

impl Write for FullDevice {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("no space left on device"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::other("no space left on device"))
    }
}
