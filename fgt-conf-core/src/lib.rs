//! Line-level primitives for FortiGate-style block-structured configuration
//! exports (`config ... / edit ... / set ... / next / end`).

pub mod directive;
pub mod reader;
pub mod section;

pub use directive::{nth_word, quoted_name, quoted_values, Directive};
pub use reader::{read_file, read_lines, split_lines, ReadError};
pub use section::{split_sections, SectionKind, SectionLines, SplitMode};
