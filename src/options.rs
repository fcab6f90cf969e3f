//! Query options for the listing operations (`sent`, `received`).

use std::collections::BTreeMap;

/// Something that can modify the query of a listing request.
///
/// Options are applied in the order they are added to [`ListOptions`]; a later option
/// overwrites the parameters of an earlier one when keys collide.
pub trait ListOption {
    fn apply(&self, options: &mut ListOptions);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Accumulated query parameters for a listing request.
pub struct ListOptions {
    params: BTreeMap<String, String>,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `option` on top of the parameters collected so far.
    pub fn with(mut self, option: impl ListOption) -> Self {
        option.apply(&mut self);
        self
    }

    /// Set a query parameter, replacing any previous value for `key`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Query pairs in key order.
    pub fn params(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

impl<T: ListOption + ?Sized> ListOption for &T {
    fn apply(&self, options: &mut ListOptions) {
        (**self).apply(options);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Page window: zero-based `start_index` and page length `count`.
///
/// Values are forwarded as-is; the gateway decides what is out of range.
pub struct Page {
    pub start_index: u32,
    pub count: u32,
}

impl Page {
    pub const START_INDEX_FIELD: &'static str = "startIndex";
    pub const COUNT_FIELD: &'static str = "count";

    pub fn new(start_index: u32, count: u32) -> Self {
        Self { start_index, count }
    }
}

impl ListOption for Page {
    fn apply(&self, options: &mut ListOptions) {
        options.set(Self::START_INDEX_FIELD, self.start_index.to_string());
        options.set(Self::COUNT_FIELD, self.count.to_string());
    }
}
