pub mod record;
pub mod batch;
pub mod codec;
pub mod file;
pub mod store;
pub mod error;

pub use record::Record;
pub use batch::{build_sample_batch, count_by_name};
pub use codec::{encode_batch, decode_batch, decode_envelope, BatchFile};
pub use file::{write_file, read_file};
pub use store::RecordStore;
pub use error::{StoreError, DecodeError};
