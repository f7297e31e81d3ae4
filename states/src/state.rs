use std::any::{Any, type_name};

/// A value that can live inside a [`crate::StateCtx`].
///
/// Every state type is stored at most once per context, keyed by its `TypeId`.
pub trait State: Any + Send {
    /// Name used when reporting a missing state.
    fn name(&self) -> &'static str {
        type_name::<Self>()
    }
}
