//! Rust type mapper implementation.

use rowsmith_codegen::language::{Access, MappedType, TypeMapper};

const BOOL: MappedType = MappedType::new("bool", Access::ByValue);
const OPT_BOOL: MappedType = MappedType::new("Option<bool>", Access::ByValue);
const I32: MappedType = MappedType::new("i32", Access::ByValue);
const OPT_I32: MappedType = MappedType::new("Option<i32>", Access::ByValue);
const I64: MappedType = MappedType::new("i64", Access::ByValue);
const OPT_I64: MappedType = MappedType::new("Option<i64>", Access::ByValue);
const F32: MappedType = MappedType::new("f32", Access::ByValue);
const F64: MappedType = MappedType::new("f64", Access::ByValue);
const OPT_F64: MappedType = MappedType::new("Option<f64>", Access::ByValue);
const STRING: MappedType = MappedType::new("String", Access::Str);
const OPT_STRING: MappedType = MappedType::new("Option<String>", Access::OptionalStr);
const BYTES: MappedType = MappedType::new("Vec<u8>", Access::Bytes);

/// Maps MySQL data types to Rust types.
///
/// Temporal types use `chrono`. Only the non-null variants register an
/// import; nullable ones are written with the full path instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustTypeMapper;

impl TypeMapper for RustTypeMapper {
    fn language(&self) -> &'static str {
        "rust"
    }

    fn map_type(&self, data_type: &str, nullable: bool) -> Option<MappedType> {
        let ty = match (data_type.to_ascii_lowercase().as_str(), nullable) {
            ("tinyint", false) => BOOL,
            ("tinyint", true) => OPT_BOOL,
            ("int" | "smallint" | "mediumint", false) => I32,
            ("int" | "smallint" | "mediumint", true) => OPT_I32,
            ("bigint", false) => I64,
            ("bigint", true) => OPT_I64,
            ("float", false) => F32,
            ("double" | "decimal", false) => F64,
            // nullable float widens to f64
            ("float" | "double" | "decimal", true) => OPT_F64,
            (
                "char" | "varchar" | "nvarchar" | "enum" | "text" | "tinytext" | "mediumtext"
                | "longtext" | "json",
                false,
            ) => STRING,
            (
                "char" | "varchar" | "nvarchar" | "enum" | "text" | "tinytext" | "mediumtext"
                | "longtext" | "json",
                true,
            ) => OPT_STRING,
            ("date", false) => {
                MappedType::new("NaiveDate", Access::ByValue).with_import("chrono", "NaiveDate")
            }
            ("date", true) => MappedType::new("Option<chrono::NaiveDate>", Access::ByValue),
            ("datetime" | "timestamp", false) => MappedType::new("NaiveDateTime", Access::ByValue)
                .with_import("chrono", "NaiveDateTime"),
            ("datetime" | "timestamp", true) => {
                MappedType::new("Option<chrono::NaiveDateTime>", Access::ByValue)
            }
            ("time", false) => {
                MappedType::new("NaiveTime", Access::ByValue).with_import("chrono", "NaiveTime")
            }
            ("time", true) => MappedType::new("Option<chrono::NaiveTime>", Access::ByValue),
            ("binary" | "varbinary" | "blob" | "mediumblob" | "longblob", _) => BYTES,
            _ => return None,
        };
        Some(ty)
    }
}
