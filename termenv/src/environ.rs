// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Source of environment variables for detection.
//!
//! Everything that reads `TERM`, `NO_COLOR` and friends goes through [`Environ`], so tests
//! (and embedders that want to detect for a remote client) can hand in a fixed
//! [`MapEnviron`] instead of the real process environment.

use std::{collections::HashMap, env, fmt::Debug};

/// An environment variable lookup.
///
/// Missing variables are reported as the empty string, never as an error.
pub trait Environ: Debug + Send {
    /// All variables as `KEY=VALUE` strings.
    fn environ(&self) -> Vec<String>;

    /// The value of `key`, or `""` when it is not set (or not valid unicode).
    fn getenv(&self, key: &str) -> String;
}

/// Reads the real process environment on every call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessEnviron;

impl Environ for ProcessEnviron {
    fn environ(&self) -> Vec<String> {
        env::vars().map(|(key, value)| format!("{key}={value}")).collect()
    }

    fn getenv(&self, key: &str) -> String { env::var(key).unwrap_or_default() }
}

/// A fixed set of variables, typically built in tests.
///
/// ```rust
/// use r3bl_termenv::{Environ, MapEnviron};
///
/// let env = MapEnviron::default().with("TERM", "xterm").with("NO_COLOR", "1");
/// assert_eq!(env.getenv("TERM"), "xterm");
/// assert_eq!(env.getenv("COLORTERM"), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnviron {
    pub vars: HashMap<String, String>,
}

impl MapEnviron {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Builder style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) { self.vars.remove(key); }
}

impl Environ for MapEnviron {
    fn environ(&self) -> Vec<String> {
        let mut it: Vec<String> = self
            .vars
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect();
        it.sort();
        it
    }

    fn getenv(&self, key: &str) -> String { self.vars.get(key).cloned().unwrap_or_default() }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapEnviron {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl<E: Environ + Sync + ?Sized> Environ for &E {
    fn environ(&self) -> Vec<String> { (**self).environ() }

    fn getenv(&self, key: &str) -> String { (**self).getenv(key) }
}

impl<E: Environ + ?Sized> Environ for Box<E> {
    fn environ(&self) -> Vec<String> { (**self).environ() }

    fn getenv(&self, key: &str) -> String { (**self).getenv(key) }
}
