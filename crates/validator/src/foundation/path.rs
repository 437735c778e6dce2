//! Dotted-path lookup through nested mappings.

use std::borrow::Cow;

use crate::foundation::mapping::NestedLookup;
use crate::foundation::value::Value;

/// Separator between path segments.
pub const PATH_SEPARATOR: char = '.';

/// Resolves `key` inside `data`.
///
/// A direct hit on the full key always wins, so a literal `"a.b"` entry is
/// returned before `"a"` then `"b"` is tried. Otherwise the key is split on
/// [`PATH_SEPARATOR`] and every segment after the first is looked up in the
/// current item, which must be a [`Mapping`](crate::Mapping) of any shape.
/// A missing segment or a non-mapping item yields `None`; there are no
/// partial results.
///
/// # Examples
///
/// ```
/// use rulekit_validator::{Value, object, resolve_path};
///
/// let data = object([("x", Value::from(object([("y", 5)])))]);
/// assert_eq!(resolve_path("x.y", &data).as_deref(), Some(&Value::from(5)));
/// assert!(resolve_path("x.z", &data).is_none());
/// ```
pub fn resolve_path<'a, M>(key: &str, data: &'a M) -> Option<Cow<'a, Value>>
where
    M: NestedLookup + ?Sized,
{
    if let Some(found) = data.lookup(key) {
        return Some(found);
    }

    if !key.contains(PATH_SEPARATOR) {
        return None;
    }

    let mut segments = key.split(PATH_SEPARATOR);
    let top = segments.next()?;
    let mut item = data.lookup(top)?;

    for segment in segments {
        item = match item {
            Cow::Borrowed(Value::Map(mapping)) => mapping.lookup(segment)?,
            // A lookup may build an item on the fly; descend through the copy.
            Cow::Owned(Value::Map(mapping)) => Cow::Owned(mapping.lookup(segment)?.into_owned()),
            _ => return None,
        };
    }

    Some(item)
}
