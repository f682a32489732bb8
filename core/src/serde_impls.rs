//! `serde` support, enabled with the `serde` feature.
//!
//! Element containers serialize as sequences and maps as maps, in stored
//! order. Deserializing copies into a fresh backing store; the inline
//! variants reject inputs longer than their capacity.

use core::fmt;
use core::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::entry::MapEntry;
use crate::{
    ImmutableCollection, ImmutableList, ImmutableMap, ImmutableSet, MiniMap, MiniSet, SmallMap,
    SmallSet,
};

macro_rules! serialize_as_seq {
    ($($name:ident),* $(,)?) => {
        $(
            impl<T: Serialize> Serialize for $name<T> {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.collect_seq(self.as_slice())
                }
            }
        )*
    };
}

macro_rules! serialize_as_map {
    ($($name:ident),* $(,)?) => {
        $(
            impl<K: Serialize, V: Serialize> Serialize for $name<K, V> {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.collect_map(
                        self.as_entries().iter().map(|entry| (entry.key(), entry.value())),
                    )
                }
            }
        )*
    };
}

serialize_as_seq!(ImmutableCollection, ImmutableList, ImmutableSet, MiniSet, SmallSet);
serialize_as_map!(ImmutableMap, MiniMap, SmallMap);

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ImmutableList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(ImmutableList::from)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ImmutableSet<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(ImmutableSet::from)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for SmallSet<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(SmallSet::of)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for MiniSet<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<T>::deserialize(deserializer)?;
        MiniSet::try_from_iter(values).map_err(de::Error::custom)
    }
}

/// Collects a serialized map into entries, keeping input order.
struct EntriesVisitor<K, V>(PhantomData<(K, V)>);

impl<'de, K: Deserialize<'de>, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<K, V> {
    type Value = Vec<MapEntry<K, V>>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry()? {
            entries.push(MapEntry::new(key, value));
        }
        Ok(entries)
    }
}

fn deserialize_entries<'de, D, K, V>(deserializer: D) -> Result<Vec<MapEntry<K, V>>, D::Error>
where
    D: Deserializer<'de>,
    K: Deserialize<'de>,
    V: Deserialize<'de>,
{
    deserializer.deserialize_map(EntriesVisitor(PhantomData))
}

impl<'de, K: Deserialize<'de>, V: Deserialize<'de>> Deserialize<'de> for ImmutableMap<K, V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_entries(deserializer).map(ImmutableMap::from_entries)
    }
}

impl<'de, K: Deserialize<'de>, V: Deserialize<'de>> Deserialize<'de> for SmallMap<K, V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_entries(deserializer).map(SmallMap::of_entries)
    }
}

impl<'de, K: Deserialize<'de>, V: Deserialize<'de>> Deserialize<'de> for MiniMap<K, V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = deserialize_entries(deserializer)?;
        MiniMap::try_from_iter(entries).map_err(de::Error::custom)
    }
}
