//! Typelist format: the types a typekit defines, and which of them are public.
//!
//! One declaration per line, `<typename>` or `<typename> <digit>`. A trailing
//! `1` (or no flag at all) marks an interface type; any other digit keeps the
//! type internal.

use std::fmt::Write as _;
use std::sync::LazyLock;

use indexmap::IndexSet;
use regex::Regex;
use serde::Serialize;
use typekit_core::AsTypeName;

/// Only a single digit after exactly one space counts as a flag, so array
/// suffixes such as `[8]` stay part of the name.
static FLAGGED_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*) (\d)$").expect("flag pattern is valid"));

/// Ordered set of type names plus the interface subset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Typelist {
    types: IndexSet<String>,
    interface: IndexSet<String>,
}

impl Typelist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse typelist text. Blank lines are ignored.
    pub fn parse(text: &str) -> Self {
        let mut typelist = Self::new();
        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let (name, interface) = match FLAGGED_LINE.captures(line) {
                Some(caps) => {
                    let name = caps.get(1).map_or("", |m| m.as_str());
                    let flag = caps.get(2).map_or("", |m| m.as_str());
                    (name.trim_end(), flag == "1")
                }
                None => (line, true),
            };
            typelist.insert(name, interface);
        }
        typelist
    }

    /// Add a type. Re-adding an existing type can promote it to the
    /// interface, never demote it.
    pub fn insert(&mut self, name: impl Into<String>, interface: bool) {
        let name = name.into();
        if interface {
            self.interface.insert(name.clone());
        }
        self.types.insert(name);
    }

    pub fn contains(&self, name: impl AsTypeName) -> bool {
        self.types.contains(name.as_type_name())
    }

    pub fn is_interface(&self, name: impl AsTypeName) -> bool {
        self.interface.contains(name.as_type_name())
    }

    /// All type names, in declaration order.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(String::as_str)
    }

    /// Interface type names, in declaration order.
    pub fn interface_types(&self) -> impl Iterator<Item = &str> {
        self.interface.iter().map(String::as_str)
    }

    /// `(name, is_interface)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.types
            .iter()
            .map(|name| (name.as_str(), self.interface.contains(name)))
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Render back to the line format, with an explicit flag on every line.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for (name, interface) in self.iter() {
            let _ = writeln!(out, "{name} {}", u8::from(interface));
        }
        out
    }
}
