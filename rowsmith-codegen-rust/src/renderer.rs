//! Rendering of a [`GeneratedUnit`] as Rust source.

use rowsmith_codegen::{
    GeneratedUnit, UnitField,
    language::{Access, MappedType},
};
use rowsmith_core::{GENERATED_HEADER, to_screaming_snake_case};

use crate::{Const, Field, Fn, Impl, RustFile, Struct, Use, naming::getter_name};

const MODEL_DERIVES: [&str; 3] = ["Debug", "Clone", "PartialEq"];
const COLUMNS_DERIVES: [&str; 3] = ["Debug", "Clone", "Copy"];

/// Render a unit to unformatted Rust source.
///
/// The file holds, in order: the generated header, a module doc naming the
/// table, `use` lines for the required imports, the model struct, its
/// `table_name` accessor, the column-name table and the getters.
pub fn render_unit(unit: &GeneratedUnit) -> String {
    let columns_type = format!("{}Columns", unit.type_name);
    let columns_const = format!("{}_COLUMNS", to_screaming_snake_case(&unit.type_name));

    RustFile::new()
        .inner_doc(format!(
            "Model for table `{}` in module `{}`.",
            unit.table_name.escape_debug(),
            unit.package.escape_debug()
        ))
        .use_stmts(Use::from_imports(&unit.imports))
        .add(model_struct(unit))
        .add(table_name_impl(unit))
        .add(columns_struct(unit, &columns_type))
        .add(columns_const_item(unit, &columns_type, &columns_const))
        .add(getters_impl(unit))
        .render_with_header(GENERATED_HEADER)
}

fn model_struct(unit: &GeneratedUnit) -> Struct {
    Struct::new(&unit.type_name)
        .derives(MODEL_DERIVES)
        .fields(
            unit.fields
                .iter()
                .map(|field| Field::new(&field.ident, field.ty.ty).doc_attr(&field.annotation)),
        )
}

fn table_name_impl(unit: &GeneratedUnit) -> Impl {
    Impl::new(&unit.type_name).method(
        Fn::new("table_name")
            .self_ref()
            .returns("&'static str")
            .body_line(format!("{:?}", unit.table_name)),
    )
}

fn columns_struct(unit: &GeneratedUnit, columns_type: &str) -> Struct {
    Struct::new(columns_type).derives(COLUMNS_DERIVES).fields(
        unit.fields
            .iter()
            .map(|field| Field::new(&field.ident, "&'static str")),
    )
}

fn columns_const_item(unit: &GeneratedUnit, columns_type: &str, name: &str) -> Const {
    unit.fields
        .iter()
        .fold(Const::new(name, columns_type), |item, field| {
            item.field(&field.ident, format!("{:?}", field.column))
        })
}

fn getters_impl(unit: &GeneratedUnit) -> Impl {
    Impl::new(&unit.type_name).methods(unit.fields.iter().map(getter))
}

fn getter(field: &UnitField) -> Fn {
    let (returns, body) = access(&field.ty, &field.ident);
    Fn::new(getter_name(&field.name))
        .self_ref()
        .returns(returns)
        .body_line(body)
}

fn access(ty: &MappedType, ident: &str) -> (String, String) {
    match ty.access {
        Access::ByValue => (ty.ty.to_string(), format!("self.{}", ident)),
        Access::Str => ("&str".to_string(), format!("&self.{}", ident)),
        Access::OptionalStr => (
            "Option<&str>".to_string(),
            format!("self.{}.as_deref()", ident),
        ),
        Access::Bytes => ("&[u8]".to_string(), format!("&self.{}", ident)),
    }
}
