// Copyright 2026 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use serde::de;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use ndarray::ArrayD;

use crate::key::{Key, KeyType, Name};
use crate::name_table::{check_type, unique_index, NameTable};
use crate::named_array::NamedArray;

/// Serialized format version, bumped on incompatible changes.
const NAMED_FORMAT_VERSION: u8 = 1u8;

#[derive(Serialize)]
struct TableRef<'a, K> {
    keys: &'a [K],
    key_type: Option<KeyType>,
    derived: bool,
}

#[derive(Deserialize)]
struct TableOwned<K> {
    keys: Vec<K>,
    key_type: Option<KeyType>,
    #[serde(default)]
    derived: bool,
}

/// **Requires crate feature `"serde"`**
impl<K> Serialize for NameTable<K>
where
    K: Name + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer
    {
        TableRef {
            keys: self.keys(),
            key_type: self.key_type(),
            derived: self.has_repeats(),
        }
        .serialize(serializer)
    }
}

/// **Requires crate feature `"serde"`**
///
/// Names must all be of one key type, the recorded one if any. Repeated names
/// are accepted only in a table marked as derived.
impl<'de, K> Deserialize<'de> for NameTable<K>
where
    K: Name + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where D: Deserializer<'de>
    {
        let table = TableOwned::<K>::deserialize(deserializer)?;
        check_type(&table.keys, table.key_type).map_err(de::Error::custom)?;
        if !table.derived {
            unique_index(&table.keys).map_err(de::Error::custom)?;
        }
        Ok(NameTable::derived(table.keys, table.key_type))
    }
}

#[derive(Serialize)]
#[serde(bound(serialize = "A: Serialize, K: Name + Serialize"))]
struct ArrayRef<'a, A, K> {
    v: u8,
    data: &'a ArrayD<A>,
    names: &'a [NameTable<K>],
    labels: &'a [Key],
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "A: Deserialize<'de>, K: Name + Deserialize<'de>"))]
struct ArrayOwned<A, K> {
    v: u8,
    data: ArrayD<A>,
    names: Vec<NameTable<K>>,
    labels: Vec<Key>,
}

/// **Requires crate feature `"serde"`**
impl<A, K> Serialize for NamedArray<A, K>
where
    A: Serialize,
    K: Name + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer
    {
        ArrayRef {
            v: NAMED_FORMAT_VERSION,
            data: self.array(),
            names: self.name_tables(),
            labels: self.dim_labels(),
        }
        .serialize(serializer)
    }
}

/// **Requires crate feature `"serde"`**
impl<'de, A, K> Deserialize<'de> for NamedArray<A, K>
where
    A: Deserialize<'de>,
    K: Name + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where D: Deserializer<'de>
    {
        let repr = ArrayOwned::<A, K>::deserialize(deserializer)?;
        if repr.v != NAMED_FORMAT_VERSION {
            return Err(de::Error::custom(format!("unknown named array version: {}", repr.v)));
        }
        NamedArray::from_tables(repr.data, repr.names, repr.labels).map_err(de::Error::custom)
    }
}
