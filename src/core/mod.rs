pub mod convert;
pub mod count;
pub mod etl;
pub mod extract;
#[cfg(test)]
pub(crate) mod testing;

pub use crate::domain::model::{
    parse_collection, parse_records, ExtractOutcome, Location, RawRecord,
};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
