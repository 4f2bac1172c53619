use crate::{obs, traits::Dto, value::Value};
use derive_more::{Deref, IntoIterator};
use serde::{Deserialize, Serialize};

///
/// DtoCollection
///
/// Ordered, duplicate-friendly sequence constrained to one DTO element
/// type. After construction every element is a typed instance, never
/// raw data. Serializes identically to `Vec<T>`.
///
/// Mutation is explicit and positional; `DtoCollection` does not expose
/// `DerefMut` to avoid accidental bypass of element typing.
///

#[repr(transparent)]
#[derive(Clone, Debug, Default, Deref, Deserialize, IntoIterator, PartialEq, Serialize)]
#[into_iterator(owned, ref)]
#[serde(transparent)]
pub struct DtoCollection<T: Dto>(Vec<T>);

impl<T: Dto> DtoCollection<T> {
    /// Create an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Build a collection from already-typed elements.
    #[must_use]
    pub const fn from_vec(items: Vec<T>) -> Self {
        Self(items)
    }

    /// Coerce a mixed sequence of raw values and typed elements.
    /// Typed elements are kept unchanged; raw values are hydrated.
    /// Order and length match the input exactly.
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = CollectionItem<T>>,
    {
        let mut reused = 0u64;
        let mut hydrated = 0u64;

        let items = items
            .into_iter()
            .map(|item| match item {
                CollectionItem::Item(dto) => {
                    reused += 1;
                    dto
                }
                CollectionItem::Raw(value) => {
                    hydrated += 1;
                    T::from_raw(&value)
                }
            })
            .collect();

        obs::record_collection_hydration(reused, hydrated);

        Self(items)
    }

    /// Hydrate from a raw value. Each list element is constructed via
    /// `T::from_raw`, so a non-map element hydrates to the element
    /// default. Non-list input yields an empty collection.
    #[must_use]
    pub fn from_raw(value: &Value) -> Self {
        match value {
            Value::List(items) => {
                Self::from_items(items.iter().cloned().map(CollectionItem::Raw))
            }
            _ => {
                obs::record_collection_hydration(0, 0);
                Self::new()
            }
        }
    }

    /// Flatten every element back to plain nested data, in order.
    #[must_use]
    pub fn to_raw(&self) -> Value {
        Value::List(self.0.iter().map(Dto::to_wire).collect())
    }

    /// Return the number of elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the collection is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Return the element at `index`, if it exists.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Append a typed element.
    pub fn push(&mut self, item: T) {
        self.0.push(item);
    }

    /// Consume the collection, returning the underlying vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T: Dto> From<Vec<T>> for DtoCollection<T> {
    fn from(items: Vec<T>) -> Self {
        Self(items)
    }
}

///
/// CollectionItem
/// One input to `DtoCollection::from_items`: either raw data still to
/// be hydrated or an already-constructed element kept as-is.
///

#[derive(Clone, Debug)]
pub enum CollectionItem<T> {
    Raw(Value),
    Item(T),
}

impl<T> CollectionItem<T> {
    /// Wrap raw data for hydration.
    #[must_use]
    pub fn raw(value: impl Into<Value>) -> Self {
        Self::Raw(value.into())
    }

    /// Wrap an already-constructed element.
    #[must_use]
    pub const fn item(item: T) -> Self {
        Self::Item(item)
    }
}
