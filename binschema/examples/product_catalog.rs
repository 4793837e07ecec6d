//! Worked example: encode a product record and walk the wire bytes

use binschema::{IndexMap, NumberKind, Property, Result, Schema, SchemaCodec, Value};

fn main() -> Result<()> {
    let codec = SchemaCodec::new(Schema::Struct {
        properties: vec![
            Property::new("product_id", Schema::Number(NumberKind::Int16)),
            Property::new("name", Schema::String),
            Property::new("price", Schema::Number(NumberKind::Int32)),
            Property::new("stock_quantity", Schema::Number(NumberKind::Int16)),
            Property::new(
                "tags",
                Schema::Array {
                    items: Box::new(Schema::String),
                },
            ),
            Property::new(
                "extra_data",
                Schema::Map {
                    value: Box::new(Schema::String),
                },
            ),
        ],
    });

    let mut extra_data = IndexMap::new();
    extra_data.insert("brand".to_string(), Value::from("Apple"));
    extra_data.insert("warranty".to_string(), Value::from("2 years"));

    let mut product = IndexMap::new();
    product.insert("product_id".to_string(), Value::Number(1));
    product.insert("name".to_string(), Value::from("Laptop"));
    product.insert("price".to_string(), Value::Number(999));
    product.insert("stock_quantity".to_string(), Value::Number(25));
    product.insert(
        "tags".to_string(),
        Value::Array(vec![Value::from("Electronics"), Value::from("Computers")]),
    );
    product.insert("extra_data".to_string(), Value::Map(extra_data));

    let bytes = codec.encode(&Value::Map(product))?;
    println!("encoded {} bytes:", bytes.len());
    for chunk in bytes.chunks(16) {
        let hex: Vec<String> = chunk.iter().map(|b| format!("{b:02x}")).collect();
        println!("  {}", hex.join(" "));
    }

    let (decoded, consumed) = codec.decode_with_consumed(&bytes)?;
    assert_eq!(consumed, bytes.len());
    println!("\ndecoded ({consumed} bytes consumed):");
    for (key, value) in decoded.as_map().unwrap() {
        println!("  {key}: {value:?}");
    }
    Ok(())
}
