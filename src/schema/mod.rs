mod finder;
mod model;
mod parser;
mod validation;

pub use finder::{DEFAULT_SCHEMA_FILES, find_schema_file};
pub use model::{FileRule, SCHEMA_VERSION, SchemaDocument};
pub use parser::{ParsedSchema, SchemaFormat, parse, parse_file};
pub use validation::validate_document;
