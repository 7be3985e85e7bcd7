pub mod dataset;
pub mod error;
pub mod geojson;
pub mod roles;
pub mod settings;
pub mod table;
pub mod validation;

pub use dataset::{
    DEFAULT_OPACITY, DEFAULT_RADIUS, Dataset, DatasetId, DatasetStyling, StylingUpdate,
};
pub use error::{ModelError, Result};
pub use geojson::{
    CrsProperties, EPSG_4326_URN, Feature, GeoFeatureCollection, NamedCrs, PointGeometry,
};
pub use roles::{ColumnRoles, CoordinateKind};
pub use settings::{DEFAULT_STYLE_URL, MapSettings, MapSettingsUpdate};
pub use table::RawTable;
pub use validation::{UNDETECTED_COLUMNS_MESSAGE, ValidationError};
