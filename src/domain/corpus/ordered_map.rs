//! 保序 JSON 对象反序列化
//!
//! serde 默认的 map 类型（HashMap/BTreeMap）都会丢失源文件中的键顺序，
//! 而卷、章、节的顺序正是阅读顺序，所以这里按出现顺序收集键值对。

use std::collections::HashSet;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};

/// 按出现顺序保存的 JSON 对象，重复键视为错误
#[derive(Debug)]
pub(crate) struct OrderedMap<V>(Vec<(String, V)>);

impl<V> OrderedMap<V> {
    pub(crate) fn into_entries(self) -> Vec<(String, V)> {
        self.0
    }
}

struct OrderedMapVisitor<V> {
    marker: PhantomData<V>,
}

impl<'de, V> Visitor<'de> for OrderedMapVisitor<V>
where
    V: Deserialize<'de>,
{
    type Value = OrderedMap<V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON object")
    }

    fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        let mut seen = HashSet::new();

        while let Some((key, value)) = access.next_entry::<String, V>()? {
            if !seen.insert(key.clone()) {
                return Err(de::Error::custom(format!("duplicate key: {}", key)));
            }
            entries.push((key, value));
        }

        Ok(OrderedMap(entries))
    }
}

impl<'de, V> Deserialize<'de> for OrderedMap<V>
where
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(OrderedMapVisitor {
            marker: PhantomData,
        })
    }
}
