//! Registry mapping numeric types to their operation sets.
//!
//! Lookups are keyed by `TypeId`. Each slot is either a resolved operation
//! set or a memoized "unsupported" marker, so a type that failed once fails
//! again without searching. Optional and wrapped shapes of a registered
//! type (`Option<K>`, `Number<K>`, `Number<Option<K>>`, `Option<Number<K>>`)
//! are derived on first use and cached like any other entry.
//!
//! Entries are `&'static dyn NumericOps<T>`. Built-in sets are statics;
//! derived and user sets are leaked once when they are installed, which is
//! bounded by the number of distinct types a program touches.

use std::any::{Any, TypeId};
use std::sync::OnceLock;

use num_bigint::BigInt;
use parking_lot::RwLock;
use rust_decimal::Decimal;
use rustc_hash::FxHashMap;

use crate::adapters::{NullableOps, NumberOps, RelabeledOps, Relabeling};
use crate::builtin;
use crate::contract::NumericOps;
use crate::error::{NumericError, NumericResult};
use crate::number::Number;

/// Global registry singleton.
static GLOBAL_REGISTRY: OnceLock<OpsRegistry> = OnceLock::new();

/// Type-erased `&'static dyn NumericOps<T>`.
type Entry = Box<dyn Any + Send + Sync>;

/// Builds the entry of a derived shape from the entries it is derived from.
type Derivation = fn(&OpsRegistry) -> NumericResult<Entry>;

enum Slot {
    Resolved(Entry),
    Unsupported,
}

#[derive(Default)]
struct State {
    slots: FxHashMap<TypeId, Slot>,
    derivations: FxHashMap<TypeId, Derivation>,
}

impl State {
    fn is_taken(&self, id: TypeId) -> bool {
        matches!(self.slots.get(&id), Some(Slot::Resolved(_)))
            || self.derivations.contains_key(&id)
    }

    /// Make the derived shapes of `K` resolvable, dropping any memoized
    /// failure recorded for them before `K` was known.
    fn install_shapes<K: 'static>(&mut self) {
        self.install_derivation::<Option<K>>(derive_nullable::<K>);
        self.install_derivation::<Number<K>>(derive_number::<K>);
        self.install_derivation::<Number<Option<K>>>(derive_number::<Option<K>>);
        self.install_derivation::<Option<Number<K>>>(derive_nullable::<Number<K>>);
    }

    fn install_derivation<T: 'static>(&mut self, derive: Derivation) {
        let id = TypeId::of::<T>();
        if matches!(self.slots.get(&id), Some(Slot::Unsupported)) {
            self.slots.remove(&id);
        }
        self.derivations.entry(id).or_insert(derive);
    }

    fn insert_builtin<K: 'static>(&mut self, ops: &'static dyn NumericOps<K>) {
        self.slots.insert(TypeId::of::<K>(), Slot::Resolved(Box::new(ops)));
        self.install_shapes::<K>();
    }
}

fn derive_nullable<K: 'static>(registry: &OpsRegistry) -> NumericResult<Entry> {
    let base = registry.resolve::<K>()?;
    let ops: &'static dyn NumericOps<Option<K>> = Box::leak(Box::new(NullableOps::new(base)));
    Ok(Box::new(ops))
}

fn derive_number<K: 'static>(registry: &OpsRegistry) -> NumericResult<Entry> {
    let base = registry.resolve::<K>()?;
    let ops: &'static dyn NumericOps<Number<K>> = Box::leak(Box::new(NumberOps::new(base)));
    Ok(Box::new(ops))
}

fn lookup<T: 'static>(slot: &Slot) -> NumericResult<&'static dyn NumericOps<T>> {
    match slot {
        Slot::Resolved(entry) => entry
            .downcast_ref::<&'static dyn NumericOps<T>>()
            .copied()
            .ok_or_else(NumericError::unsupported_type::<T>),
        Slot::Unsupported => Err(NumericError::unsupported_type::<T>()),
    }
}

/// Registry of numeric operation sets.
///
/// Thread-safe: resolution takes a read lock on the fast path and a write
/// lock only to record a new entry.
pub struct OpsRegistry {
    state: RwLock<State>,
}

impl OpsRegistry {
    /// Create a registry holding the built-in kinds and their derived shapes.
    pub fn new() -> Self {
        let mut state = State::default();
        state.insert_builtin::<i8>(&builtin::I8);
        state.insert_builtin::<i16>(&builtin::I16);
        state.insert_builtin::<i32>(&builtin::I32);
        state.insert_builtin::<i64>(&builtin::I64);
        state.insert_builtin::<i128>(&builtin::I128);
        state.insert_builtin::<isize>(&builtin::ISIZE);
        state.insert_builtin::<u8>(&builtin::U8);
        state.insert_builtin::<u16>(&builtin::U16);
        state.insert_builtin::<u32>(&builtin::U32);
        state.insert_builtin::<u64>(&builtin::U64);
        state.insert_builtin::<u128>(&builtin::U128);
        state.insert_builtin::<usize>(&builtin::USIZE);
        state.insert_builtin::<f32>(&builtin::F32);
        state.insert_builtin::<f64>(&builtin::F64);
        state.insert_builtin::<Decimal>(&builtin::DECIMAL);
        state.insert_builtin::<BigInt>(&builtin::BIG_INT);
        OpsRegistry {
            state: RwLock::new(state),
        }
    }

    /// The process-wide registry used by `Number<T>` and the free functions
    /// in `generic`.
    pub fn global() -> &'static OpsRegistry {
        GLOBAL_REGISTRY.get_or_init(OpsRegistry::new)
    }

    /// Operation set for `T`.
    ///
    /// # Errors
    ///
    /// `UnsupportedType` when nothing is registered for `T` and it is not a
    /// derivable shape of a registered type. The failure is memoized.
    pub fn resolve<T: 'static>(&self) -> NumericResult<&'static dyn NumericOps<T>> {
        let id = TypeId::of::<T>();
        let derive = {
            let state = self.state.read();
            if let Some(slot) = state.slots.get(&id) {
                if matches!(slot, Slot::Unsupported) {
                    tracing::trace!(
                        type_name = std::any::type_name::<T>(),
                        "unsupported (memoized)"
                    );
                }
                return lookup(slot);
            }
            state.derivations.get(&id).copied()
        };

        let derive = if let Some(derive) = derive {
            derive
        } else {
            // A registration may have installed the shape since the read.
            let mut state = self.state.write();
            if let Some(derive) = state.derivations.get(&id).copied() {
                derive
            } else {
                tracing::debug!(
                    type_name = std::any::type_name::<T>(),
                    "no numeric operations for type"
                );
                let slot = state.slots.entry(id).or_insert(Slot::Unsupported);
                return lookup(slot);
            }
        };

        // The lock is released while deriving: derivations resolve their
        // base types through this registry.
        let entry = derive(self)?;
        tracing::debug!(type_name = std::any::type_name::<T>(), "derived numeric operations");
        let mut state = self.state.write();
        let slot = state.slots.entry(id).or_insert(Slot::Resolved(entry));
        lookup(slot)
    }

    pub fn is_supported<T: 'static>(&self) -> bool {
        self.resolve::<T>().is_ok()
    }

    /// Register the operation set for `T`.
    ///
    /// A type memoized as unsupported may still be registered; its optional
    /// and wrapped shapes become available too.
    ///
    /// # Errors
    ///
    /// `AlreadyRegistered` when `T` already resolves to an operation set or
    /// is a derived shape of one.
    pub fn register<T: 'static>(&self, ops: &'static dyn NumericOps<T>) -> NumericResult<()> {
        let id = TypeId::of::<T>();
        let type_name = std::any::type_name::<T>();
        let mut state = self.state.write();
        if state.is_taken(id) {
            return Err(NumericError::AlreadyRegistered { type_name });
        }
        state.slots.insert(id, Slot::Resolved(Box::new(ops)));
        state.install_shapes::<T>();
        tracing::debug!(type_name, kind = %ops.kind(), "registered numeric operations");
        Ok(())
    }

    /// Register an owned operation set. The set lives for the rest of the
    /// process.
    ///
    /// # Errors
    ///
    /// See [`OpsRegistry::register`].
    pub fn register_boxed<T: 'static>(&self, ops: Box<dyn NumericOps<T>>) -> NumericResult<()> {
        if self.state.read().is_taken(TypeId::of::<T>()) {
            return Err(NumericError::AlreadyRegistered {
                type_name: std::any::type_name::<T>(),
            });
        }
        self.register(Box::leak(ops))
    }

    /// Register `T` as a relabeling of the registered type `U`.
    ///
    /// # Errors
    ///
    /// `UnsupportedType` when `U` has no operation set, or see
    /// [`OpsRegistry::register`].
    pub fn register_relabeled<T: 'static, U: 'static>(
        &self,
        relabeling: Relabeling<T, U>,
    ) -> NumericResult<()> {
        let base = self.resolve::<U>()?;
        self.register_boxed(Box::new(RelabeledOps::new(base, relabeling)))
    }
}

impl Default for OpsRegistry {
    fn default() -> Self {
        Self::new()
    }
}
