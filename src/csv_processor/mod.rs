pub mod reader;
pub mod writer;

pub use reader::LabelFileReader;
pub use writer::{PairWriter, PairWriterOptions};
