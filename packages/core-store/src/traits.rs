//! Core traits: Codec, Lifecycle.

use bytes::Bytes;

use crate::{DataShape, Error, Format, ShapeRef};

/// Codec for converting between a [`DataShape`] and bytes.
///
/// Encoding takes a borrowed [`ShapeRef`], so a store can write its data
/// without copying it.
///
/// A codec's encoding must be self-describing: decoding has to fail on
/// malformed or truncated input rather than produce a different shape.
///
/// # Implementing Custom Codecs
///
/// ```rust
/// use statekeep_core_store::{Codec, DataShape, Error, Format, ShapeRef};
/// use bytes::Bytes;
///
/// struct DebugCodec;
///
/// impl Codec for DebugCodec {
///     fn decode(&self, _bytes: &Bytes, format: &Format) -> Result<DataShape, Error> {
///         Err(Error::UnsupportedFormat(format.clone()))
///     }
///
///     fn encode(&self, shape: ShapeRef<'_>, format: &Format) -> Result<Bytes, Error> {
///         if !self.supports(format) {
///             return Err(Error::UnsupportedFormat(format.clone()));
///         }
///         Ok(Bytes::from(format!("{:?}", shape)))
///     }
///
///     fn supports(&self, format: &Format) -> bool {
///         format.as_str() == "text/x-debug"
///     }
/// }
/// ```
pub trait Codec: Send + Sync {
    /// Decode raw bytes into a data shape.
    fn decode(&self, bytes: &Bytes, format: &Format) -> Result<DataShape, Error>;

    /// Encode a data shape into raw bytes.
    fn encode(&self, shape: ShapeRef<'_>, format: &Format) -> Result<Bytes, Error>;

    /// Check if this codec supports a format.
    fn supports(&self, format: &Format) -> bool;
}

impl<T: Codec + ?Sized> Codec for Box<T> {
    fn decode(&self, bytes: &Bytes, format: &Format) -> Result<DataShape, Error> {
        self.as_ref().decode(bytes, format)
    }

    fn encode(&self, shape: ShapeRef<'_>, format: &Format) -> Result<Bytes, Error> {
        self.as_ref().encode(shape, format)
    }

    fn supports(&self, format: &Format) -> bool {
        self.as_ref().supports(format)
    }
}

/// The save/reset operations a host drives on a store.
///
/// Object-safe so orchestration code can fan out over
/// `&mut [&mut dyn Lifecycle]` without knowing each store's shape.
pub trait Lifecycle {
    /// Name the store's file is derived from.
    fn name(&self) -> &str;

    /// Persist the in-memory data, overwriting the file.
    fn save(&mut self) -> Result<(), Error>;

    /// Replace the in-memory data with a fresh default. Nothing is
    /// reconciled or written.
    fn reset(&mut self);

    /// `reset`, then reconcile against the schema, then `save`.
    fn reset_reconcile_save(&mut self) -> Result<(), Error>;
}

impl<T: Lifecycle + ?Sized> Lifecycle for &mut T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn save(&mut self) -> Result<(), Error> {
        (**self).save()
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn reset_reconcile_save(&mut self) -> Result<(), Error> {
        (**self).reset_reconcile_save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MapData, ScalarData, Shape};

    struct CountingStore {
        saves: usize,
        resets: usize,
    }

    impl Lifecycle for CountingStore {
        fn name(&self) -> &str {
            "counting"
        }

        fn save(&mut self) -> Result<(), Error> {
            self.saves += 1;
            Ok(())
        }

        fn reset(&mut self) {
            self.resets += 1;
        }

        fn reset_reconcile_save(&mut self) -> Result<(), Error> {
            self.reset();
            self.save()
        }
    }

    struct DebugCodec;

    impl Codec for DebugCodec {
        fn decode(&self, _bytes: &Bytes, format: &Format) -> Result<DataShape, Error> {
            Err(Error::UnsupportedFormat(format.clone()))
        }

        fn encode(&self, shape: ShapeRef<'_>, _format: &Format) -> Result<Bytes, Error> {
            Ok(Bytes::from(shape.kind().to_string()))
        }

        fn supports(&self, _format: &Format) -> bool {
            true
        }
    }

    #[test]
    fn lifecycle_object_safety() {
        let mut store = CountingStore { saves: 0, resets: 0 };
        {
            let stores: &mut [&mut dyn Lifecycle] = &mut [&mut store];
            for s in stores.iter_mut() {
                s.reset_reconcile_save().unwrap();
                s.save().unwrap();
            }
        }
        assert_eq!(store.saves, 2);
        assert_eq!(store.resets, 1);
    }

    #[test]
    fn boxed_codec_delegates() {
        let codec: Box<dyn Codec> = Box::new(DebugCodec);
        let bytes = codec
            .encode(MapData::new().as_shape_ref(), &Format::JSON)
            .unwrap();
        assert_eq!(bytes, Bytes::from_static(b"map"));

        let shape = DataShape::from(ScalarData::new("1"));
        assert_eq!(
            codec.encode((&shape).into(), &Format::JSON).unwrap(),
            Bytes::from_static(b"scalar")
        );
        assert!(codec.decode(&bytes, &Format::JSON).is_err());
    }
}
