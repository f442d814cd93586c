//! Deserializing introspection JSON
use serde::Deserialize;
use std::io::Read;

#[derive(Deserialize, Debug)]
pub struct Type {
    pub kind: String,
    pub name: String,
}

#[derive(Deserialize, Debug)]
pub struct Schema {
    pub types: Vec<Type>,
}

impl Schema {
    pub fn try_from_reader(reader: impl Read) -> Result<Self, serde_json::Error> {
        let parsed: RawSchema = serde_json::from_reader(reader)?;
        Ok(parsed.data.schema)
    }
}

#[derive(Deserialize)]
struct Data {
    #[serde(rename(deserialize = "__schema"))]
    schema: Schema,
}

#[derive(Deserialize)]
struct RawSchema {
    data: Data,
}
