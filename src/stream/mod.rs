pub mod reader;
pub mod writer;


pub use self::reader::*;
pub use self::writer::*;
