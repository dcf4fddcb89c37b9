//! Per-thread state of development and serialization code.
//!
//! A [`Context`] is created by the thread that owns it, handed by `&mut` to
//! whatever needs it and dropped when that thread is done. Nothing in here is
//! global, so there is nothing to tear down beyond dropping the value.

use std::mem;
use std::ops::Deref;

use log::debug;
use serde::Serialize;
use serde_json::Value;

/// How structured state is marshaled when serialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SharedMode {
    /// Values are serialized on their own.
    #[default]
    Copy,
    /// Values are serialized and also recorded in the shared-state log.
    Share,
}

/// Address of a serialized object.
pub type Identity = usize;

pub fn identity_of<T: ?Sized>(value: &T) -> Identity {
    value as *const T as *const () as usize
}

/// Log of `(identity, serialized value)` pairs, in serialization order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SharedState(pub Vec<(Identity, Value)>);

impl Deref for SharedState {
    type Target = [(Identity, Value)];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl SharedState {
    /// Latest logged value of the object at `id`.
    pub fn lookup(&self, id: Identity) -> Option<&Value> {
        self.0.iter().rev().find(|(i, _)| *i == id).map(|(_, v)| v)
    }
}

#[derive(Debug, Default)]
pub struct Context {
    debug_knob: String,
    shared_mode: SharedMode,
    shared_state: SharedState,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Free-form switch for development code. Not read by anything numeric.
    pub fn debug_knob(&self) -> &str {
        &self.debug_knob
    }

    pub fn set_debug_knob(&mut self, knob: impl Into<String>) {
        self.debug_knob = knob.into();
        debug!("Debug knob set to {:?}", self.debug_knob);
    }

    pub fn shared_mode(&self) -> SharedMode {
        self.shared_mode
    }

    pub fn set_shared_mode(&mut self, mode: SharedMode) {
        self.shared_mode = mode;
    }

    /// Run `f` under `mode`, then restore the previous mode.
    pub fn with_shared_mode<F, T>(&mut self, mode: SharedMode, f: F) -> T
    where
        F: FnOnce(&mut Self) -> T,
    {
        let previous = mem::replace(&mut self.shared_mode, mode);
        let result = f(self);
        self.shared_mode = previous;
        result
    }

    /// Serialize `value` to JSON. In [`SharedMode::Share`] the result is
    /// also appended to the shared-state log under the identity of `value`.
    pub fn serialize<T: Serialize + ?Sized>(&mut self, value: &T) -> serde_json::Result<Value> {
        let json = serde_json::to_value(value)?;
        if self.shared_mode == SharedMode::Share {
            self.shared_state.0.push((identity_of(value), json.clone()));
        }
        Ok(json)
    }

    pub fn shared_state(&self) -> &SharedState {
        &self.shared_state
    }

    pub fn take_shared_state(&mut self) -> SharedState {
        mem::take(&mut self.shared_state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::SaltConditions;

    #[test]
    fn test_defaults() {
        let ctx = Context::new();
        assert_eq!(ctx.debug_knob(), "");
        assert_eq!(ctx.shared_mode(), SharedMode::Copy);
        assert!(ctx.shared_state().is_empty());
    }

    #[test]
    fn test_debug_knob() {
        let mut ctx = Context::new();
        ctx.set_debug_knob("skip-dangles");
        assert_eq!(ctx.debug_knob(), "skip-dangles");
    }

    #[test]
    fn test_copy_mode_does_not_log() {
        let mut ctx = Context::new();
        let v = ctx.serialize(&[1, 2, 3]).unwrap();
        assert_eq!(v, json!([1, 2, 3]));
        assert!(ctx.shared_state().is_empty());
    }

    #[test]
    fn test_share_mode_logs_identity() {
        let mut ctx = Context::new();
        ctx.set_shared_mode(SharedMode::Share);

        let sc = SaltConditions::default();
        let other = vec!["ACGT"];
        ctx.serialize(&sc).unwrap();
        ctx.serialize(&other).unwrap();

        let log = ctx.shared_state();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].0, identity_of(&sc));
        assert_eq!(log.lookup(identity_of(&other)), Some(&json!(["ACGT"])));
        assert_eq!(log.lookup(identity_of(&sc)).unwrap()["sodium"], 1.0);
    }

    #[test]
    fn test_with_shared_mode_restores() {
        let mut ctx = Context::new();
        let n = 7u32;
        ctx.with_shared_mode(SharedMode::Share, |c| {
            assert_eq!(c.shared_mode(), SharedMode::Share);
            c.serialize(&n).unwrap();
        });
        assert_eq!(ctx.shared_mode(), SharedMode::Copy);
        ctx.serialize(&n).unwrap();

        let log = ctx.take_shared_state();
        assert_eq!(log.0, vec![(identity_of(&n), json!(7))]);
        assert!(ctx.shared_state().is_empty());
    }

    #[test]
    fn test_contexts_are_per_thread() {
        let mut ctx = Context::new();
        ctx.set_debug_knob("main");
        let other = std::thread::spawn(|| {
            let mut ctx = Context::new();
            ctx.set_shared_mode(SharedMode::Share);
            ctx.serialize("worker").unwrap();
            ctx.take_shared_state().len()
        }).join().unwrap();
        assert_eq!(other, 1);
        assert_eq!(ctx.debug_knob(), "main");
        assert!(ctx.shared_state().is_empty());
    }
}
