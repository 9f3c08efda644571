//! The `DataShape` sum type and the `Shape` trait stores are generic over.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::collection::CollectionData;
use crate::map::MapData;
use crate::reconcile::Reconcile;
use crate::scalar::ScalarData;
use crate::table::TableData;

/// The structural kind of persisted content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Scalar,
    Map,
    Table,
    Collection,
}

impl ShapeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Scalar => "scalar",
            ShapeKind::Map => "map",
            ShapeKind::Table => "table",
            ShapeKind::Collection => "collection",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One persisted data blob, tagged with its shape.
///
/// This is what codecs encode and decode. The tag makes a store file
/// self-describing, so loading a file written for another shape is detected
/// instead of silently misread.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", content = "data", rename_all = "snake_case")]
pub enum DataShape {
    Scalar(ScalarData),
    Map(MapData),
    Table(TableData),
    Collection(CollectionData),
}

impl DataShape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            DataShape::Scalar(_) => ShapeKind::Scalar,
            DataShape::Map(_) => ShapeKind::Map,
            DataShape::Table(_) => ShapeKind::Table,
            DataShape::Collection(_) => ShapeKind::Collection,
        }
    }
}

/// A borrowed [`DataShape`], for encoding without copying the data.
///
/// Serializes to the same tagged envelope as the owned form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "shape", content = "data", rename_all = "snake_case")]
pub enum ShapeRef<'a> {
    Scalar(&'a ScalarData),
    Map(&'a MapData),
    Table(&'a TableData),
    Collection(&'a CollectionData),
}

impl ShapeRef<'_> {
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeRef::Scalar(_) => ShapeKind::Scalar,
            ShapeRef::Map(_) => ShapeKind::Map,
            ShapeRef::Table(_) => ShapeKind::Table,
            ShapeRef::Collection(_) => ShapeKind::Collection,
        }
    }
}

impl<'a> From<&'a DataShape> for ShapeRef<'a> {
    fn from(shape: &'a DataShape) -> Self {
        match shape {
            DataShape::Scalar(data) => ShapeRef::Scalar(data),
            DataShape::Map(data) => ShapeRef::Map(data),
            DataShape::Table(data) => ShapeRef::Table(data),
            DataShape::Collection(data) => ShapeRef::Collection(data),
        }
    }
}

/// A concrete data shape a store can hold.
///
/// `Default` is the freshly bootstrapped (empty, unreconciled) state.
pub trait Shape: Reconcile + Default + Clone + fmt::Debug + PartialEq {
    const KIND: ShapeKind;

    fn as_shape_ref(&self) -> ShapeRef<'_>;

    /// Unwrap a decoded blob, handing it back unchanged if it holds a
    /// different shape.
    fn from_data_shape(shape: DataShape) -> Result<Self, DataShape>;
}

macro_rules! impl_shape {
    ($ty:ty, $variant:ident) => {
        impl Shape for $ty {
            const KIND: ShapeKind = ShapeKind::$variant;

            fn as_shape_ref(&self) -> ShapeRef<'_> {
                ShapeRef::$variant(self)
            }

            fn from_data_shape(shape: DataShape) -> Result<Self, DataShape> {
                match shape {
                    DataShape::$variant(data) => Ok(data),
                    other => Err(other),
                }
            }
        }

        impl From<$ty> for DataShape {
            fn from(data: $ty) -> Self {
                DataShape::$variant(data)
            }
        }
    };
}

impl_shape!(ScalarData, Scalar);
impl_shape!(MapData, Map);
impl_shape!(TableData, Table);
impl_shape!(CollectionData, Collection);
