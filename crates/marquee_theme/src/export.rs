//! Rendering themes for the styling layer
//!
//! Widgets read colors through CSS custom properties named after the role
//! path (`--colors-mediaCard-barFillColor`). Themes can also be exported as
//! the nested `colors` object the stylesheet generator consumes.

use crate::error::ThemeError;
use crate::schema::Role;
use crate::theme::Theme;
use crate::tokens::ColorValue;
use indexmap::IndexMap;
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};
use std::fmt::Write;

impl Theme {
    /// `(custom property, value)` pairs in schema order
    pub fn css_variables(&self) -> Vec<(String, String)> {
        self.iter()
            .map(|(role, value)| (role.css_variable(), value.to_string()))
            .collect()
    }

    /// One CSS rule assigning every role variable under `selector`
    pub fn to_css(&self, selector: &str) -> String {
        let mut css = String::with_capacity(Role::ALL.len() * 48);
        css.push_str(selector);
        css.push_str(" {\n");
        for (name, value) in self.css_variables() {
            // Writing into a String cannot fail.
            let _ = writeln!(css, "  {name}: {value};");
        }
        css.push_str("}\n");
        css
    }

    /// Pretty-printed JSON: `name`, `extends` and the nested `colors` object
    pub fn to_json(&self) -> Result<String, ThemeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn color_tree(&self) -> Node<'_> {
        let mut root = Node::Branch(IndexMap::new());
        for (role, value) in self.iter() {
            let segments: Vec<&'static str> = role.segments().collect();
            root.insert(&segments, value);
        }
        root
    }
}

/// Nested view of the role paths, built for serialization
enum Node<'a> {
    Leaf(&'a ColorValue),
    Branch(IndexMap<&'static str, Node<'a>>),
}

impl<'a> Node<'a> {
    fn insert(&mut self, segments: &[&'static str], value: &'a ColorValue) {
        let Node::Branch(children) = self else {
            // Role paths never pass through a leaf.
            return;
        };
        match segments {
            [] => {}
            [leaf] => {
                children.insert(*leaf, Node::Leaf(value));
            }
            [head, rest @ ..] => children
                .entry(*head)
                .or_insert_with(|| Node::Branch(IndexMap::new()))
                .insert(rest, value),
        }
    }
}

impl Serialize for Node<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Leaf(value) => value.serialize(serializer),
            Node::Branch(children) => {
                let mut map = serializer.serialize_map(Some(children.len()))?;
                for (key, child) in children {
                    map.serialize_entry(key, child)?;
                }
                map.end()
            }
        }
    }
}

impl Serialize for Theme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut theme = serializer.serialize_struct("Theme", 3)?;
        theme.serialize_field("name", self.name())?;
        theme.serialize_field("extends", &self.parent())?;
        theme.serialize_field("colors", &self.color_tree())?;
        theme.end()
    }
}
