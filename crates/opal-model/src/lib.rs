pub mod record;
pub mod stops;
pub mod warning;

pub use record::{Line, ParsedStatement, RawRow, TripRecord};
pub use stops::{Coordinates, StopDirectory};
pub use warning::{RowWarning, WarningKind};
