//! JSON codec implementation.

use bytes::Bytes;
use statekeep_core_store::{Codec, DataShape, Error, Format, ShapeRef};

/// A codec that stores data shapes as JSON.
///
/// The encoding is a tagged envelope, `{"shape": "<kind>", "data": ...}`, so
/// a file always says which shape it holds.
///
/// # Example
///
/// ```rust
/// use statekeep_json_store::JsonCodec;
/// use statekeep_core_store::{Codec, DataShape, Format, ScalarData};
///
/// let codec = JsonCodec;
/// let shape = DataShape::from(ScalarData::new("hello"));
///
/// let bytes = codec.encode((&shape).into(), &Format::JSON).unwrap();
/// let decoded = codec.decode(&bytes, &Format::JSON).unwrap();
///
/// assert_eq!(decoded, shape);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn decode(&self, bytes: &Bytes, format: &Format) -> Result<DataShape, Error> {
        if !self.supports(format) {
            return Err(Error::UnsupportedFormat(format.clone()));
        }

        serde_json::from_slice(bytes).map_err(|e| Error::Decode {
            format: format.clone(),
            message: e.to_string(),
        })
    }

    fn encode(&self, shape: ShapeRef<'_>, format: &Format) -> Result<Bytes, Error> {
        if !self.supports(format) {
            return Err(Error::UnsupportedFormat(format.clone()));
        }

        let bytes = serde_json::to_vec_pretty(&shape).map_err(|e| Error::Encode {
            format: format.clone(),
            message: e.to_string(),
        })?;

        Ok(Bytes::from(bytes))
    }

    fn supports(&self, format: &Format) -> bool {
        format.is_json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use statekeep_core_store::{
        CollectionData, MapData, MapSchema, Reconcile, ScalarData, Shape, TableData, TableSchema,
    };

    fn sample_shapes() -> Vec<DataShape> {
        let mut table = TableData::new();
        let fields: MapSchema = [("hp", "100"), ("mana", "0")].into_iter().collect();
        table.reconcile(&TableSchema::new(fields, ["goblin", "ogre"]));
        table.set("goblin", "hp", "50").unwrap();

        let mut collection = CollectionData::new();
        collection.set_dictionary("en", [("title", "Hello")].into_iter().collect());
        collection.set_dictionary("de", MapData::new());

        vec![
            DataShape::from(ScalarData::new("3")),
            DataShape::from(ScalarData::default()),
            DataShape::from([("a", "9"), ("b", "2")].into_iter().collect::<MapData>()),
            DataShape::from(table),
            DataShape::from(collection),
        ]
    }

    #[test]
    fn json_codec_roundtrip() {
        let codec = JsonCodec;
        for shape in sample_shapes() {
            let bytes = codec.encode((&shape).into(), &Format::JSON).unwrap();
            let decoded = codec.decode(&bytes, &Format::JSON).unwrap();
            assert_eq!(decoded, shape);
        }
    }

    #[test]
    fn truncated_bytes_fail_to_decode() {
        let codec = JsonCodec;
        let shape = DataShape::from([("a", "1")].into_iter().collect::<MapData>());
        let bytes = codec.encode((&shape).into(), &Format::JSON).unwrap();
        let truncated = bytes.slice(..bytes.len() / 2);

        let result = codec.decode(&truncated, &Format::JSON);
        assert!(matches!(result, Err(Error::Decode { .. })));
    }

    #[test]
    fn untagged_json_fails_to_decode() {
        let codec = JsonCodec;
        let bytes = Bytes::from_static(br#"{"a": "9", "c": "3"}"#);
        assert!(matches!(
            codec.decode(&bytes, &Format::JSON),
            Err(Error::Decode { .. })
        ));

        let bytes = Bytes::from_static(br#"{"shape": "matrix", "data": {}}"#);
        assert!(matches!(
            codec.decode(&bytes, &Format::JSON),
            Err(Error::Decode { .. })
        ));
    }

    #[test]
    fn mistyped_data_fails_to_decode() {
        let codec = JsonCodec;
        let bytes = Bytes::from_static(br#"{"shape": "map", "data": {"a": 1}}"#);
        assert!(codec.decode(&bytes, &Format::JSON).is_err());
    }

    #[test]
    fn json_codec_rejects_other_formats() {
        let codec = JsonCodec;

        let bytes = Bytes::from_static(b"hello");
        let result = codec.decode(&bytes, &Format::new("application/octet-stream"));
        assert!(matches!(result, Err(Error::UnsupportedFormat(_))));

        let result = codec.encode(ScalarData::default().as_shape_ref(), &Format::new("text/csv"));
        assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
    }
}
