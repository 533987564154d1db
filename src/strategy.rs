//! The two ownership disciplines being compared.
//!
//! [`Exclusive`] keeps raw owning pointers that must be freed by an explicit
//! [`OwnershipStrategy::release`]. [`Shared`] keeps `Rc` handles that free
//! their variable when the last handle is dropped.

use std::ptr::NonNull;
use std::rc::Rc;

use crate::error::Result;
use crate::table::KeyedTable;
use crate::variable::{variable_name, DiscreteVariable, LabelizedVariable};

pub trait OwnershipStrategy {
    type Table;

    /// Prefix used when reporting this strategy.
    const LABEL: &'static str;

    /// Builds a table of `n` variables, `factory(i)` providing the one under key `i`.
    fn populate_with<V, F>(n: usize, factory: F) -> Result<Self::Table>
    where
        V: DiscreteVariable + 'static,
        F: FnMut(i64) -> Result<V>;

    /// Builds a table of `n` binary variables named `var_<i>`.
    fn populate(n: usize) -> Result<Self::Table> {
        Self::populate_with(n, |i| Ok(LabelizedVariable::new(variable_name(i))))
    }

    /// Product of every domain size in the table (wrapping on overflow).
    fn aggregate(table: &Self::Table) -> i64;

    fn release(table: Self::Table);
}

fn multiply_sizes<'a>(vars: impl Iterator<Item = &'a (dyn DiscreteVariable + 'static)>) -> i64 {
    vars.fold(1i64, |size, var| size.wrapping_mul(var.domain_size() as i64))
}

// ============================================================================
// Exclusive: raw owning pointers
// ============================================================================

/// Raw owning pointers leaked from `Box`.
///
/// Dropping the table without [`OwnershipStrategy::release`] leaks every variable.
pub struct ExclusiveTable {
    entries: KeyedTable<NonNull<dyn DiscreteVariable>>,
}

impl ExclusiveTable {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: KeyedTable::with_capacity(capacity),
        }
    }

    fn insert<V: DiscreteVariable + 'static>(&mut self, key: i64, var: V) -> Result<()> {
        let boxed: Box<dyn DiscreteVariable> = Box::new(var);
        let ptr = NonNull::from(Box::leak(boxed));
        if let Err(err) = self.entries.insert(key, ptr) {
            // SAFETY: `ptr` was leaked just above and never stored.
            drop(unsafe { Box::from_raw(ptr.as_ptr()) });
            return Err(err);
        }
        Ok(())
    }

    fn vars(&self) -> impl Iterator<Item = &(dyn DiscreteVariable + 'static)> + '_ {
        // SAFETY: every stored pointer is live until `free_all` drains it.
        self.entries.iter().map(|(_, ptr)| unsafe { ptr.as_ref() })
    }

    fn free_all(&mut self) {
        for (_, ptr) in self.entries.drain() {
            // SAFETY: each pointer came from `Box::leak` and is removed from
            // the table as it is freed, so none is freed twice.
            drop(unsafe { Box::from_raw(ptr.as_ptr()) });
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub struct Exclusive;

impl OwnershipStrategy for Exclusive {
    type Table = ExclusiveTable;

    const LABEL: &'static str = "Normal";

    fn populate_with<V, F>(n: usize, mut factory: F) -> Result<ExclusiveTable>
    where
        V: DiscreteVariable + 'static,
        F: FnMut(i64) -> Result<V>,
    {
        let mut table = ExclusiveTable::with_capacity(n);
        for i in 0..n as i64 {
            let inserted = factory(i).and_then(|var| table.insert(i, var));
            if let Err(err) = inserted {
                table.free_all();
                return Err(err);
            }
        }
        Ok(table)
    }

    fn aggregate(table: &ExclusiveTable) -> i64 {
        multiply_sizes(table.vars())
    }

    fn release(mut table: ExclusiveTable) {
        table.free_all();
    }
}

// ============================================================================
// Shared: reference counted
// ============================================================================

pub type SharedTable = KeyedTable<Rc<dyn DiscreteVariable>>;

pub struct Shared;

impl OwnershipStrategy for Shared {
    type Table = SharedTable;

    const LABEL: &'static str = "Shared";

    fn populate_with<V, F>(n: usize, mut factory: F) -> Result<SharedTable>
    where
        V: DiscreteVariable + 'static,
        F: FnMut(i64) -> Result<V>,
    {
        let mut table = SharedTable::with_capacity(n);
        for i in 0..n as i64 {
            let var: Rc<dyn DiscreteVariable> = Rc::new(factory(i)?);
            table.insert(i, var)?;
        }
        Ok(table)
    }

    fn aggregate(table: &SharedTable) -> i64 {
        multiply_sizes(table.iter().map(|(_, var)| &**var))
    }

    fn release(table: SharedTable) {
        drop(table);
    }
}
