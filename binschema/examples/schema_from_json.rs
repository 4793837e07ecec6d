//! Load a schema from its JSON representation and use it to decode

use binschema::{SchemaCodec, Value};

const SCHEMA_JSON: &str = r#"{
    "struct": { "properties": [
        { "key": "enabled",  "schema": "bool" },
        { "key": "retries",  "schema": { "number": "uint8" } },
        { "key": "endpoint", "schema": "string" }
    ]}
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let codec = SchemaCodec::from_json(SCHEMA_JSON)?;
    println!("loaded schema: {}", codec.schema_json()?);

    let wire = [
        3, // presence sentinel / property count
        1, // enabled = true
        5, // retries = 5
        9, b'l', b'o', b'c', b'a', b'l', b':', b'9', b'9', b'9',
    ];
    let config = codec.decode(&wire)?;
    let fields = config.as_map().unwrap();

    println!("enabled  = {:?}", fields["enabled"]);
    println!("retries  = {:?}", fields["retries"]);
    println!("endpoint = {:?}", fields["endpoint"]);

    // Values round-trip through the same schema
    let bytes = codec.encode(&Value::Map(fields.clone()))?;
    assert_eq!(bytes, wire);
    println!("re-encoded to identical {} wire bytes", bytes.len());
    Ok(())
}
