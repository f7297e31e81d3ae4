use std::any::{Any, TypeId, type_name};
use std::collections::BTreeMap;

use log::debug;

use crate::{Error, State};

/// Type-keyed store for application states.
///
/// The UI owns one `StateCtx`; pages and widgets borrow the states they need through
/// [`StateCtx::state`] / [`StateCtx::state_mut`]. Each state type has exactly one slot, so there
/// is one authoritative read/write path per piece of application state.
#[derive(Default)]
pub struct StateCtx {
    storage: BTreeMap<TypeId, Box<dyn Any + Send>>,
}

impl std::fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCtx")
            .field("states", &self.storage.len())
            .finish()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `state`, replacing any previous value of the same type.
    pub fn add_state<T: State>(&mut self, state: T) {
        debug!("StateCtx: registering {}", state.name());
        self.storage.insert(TypeId::of::<T>(), Box::new(state));
    }

    pub fn has_state<T: State>(&self) -> bool {
        self.storage.contains_key(&TypeId::of::<T>())
    }

    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        self.storage
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
            .ok_or_else(|| Error::state_not_found(type_name::<T>(), "try_state"))
    }

    pub fn try_state_mut<T: State>(&mut self) -> Result<&mut T, Error> {
        self.storage
            .get_mut(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_mut::<T>())
            .ok_or_else(|| Error::state_not_found(type_name::<T>(), "try_state_mut"))
    }

    /// Borrows a registered state.
    ///
    /// # Panics
    /// Panics if `T` was never registered with [`StateCtx::add_state`].
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>()
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// Mutably borrows a registered state.
    ///
    /// # Panics
    /// Panics if `T` was never registered with [`StateCtx::add_state`].
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.try_state_mut::<T>()
            .unwrap_or_else(|err| panic!("{err}"))
    }
}
