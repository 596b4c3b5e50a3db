//! Generate operation: read, render and write a batch of tables.

use std::path::Path;

use rowsmith_codegen_rust::{Generator, files::ModIndex};
use rowsmith_core::{GeneratedFile, WriteResult};
use rowsmith_schema::SchemaReader;

use crate::reports::{GenerateReport, IndexResult, TableOutcome};

/// Options for a generation batch.
#[derive(Debug, Clone)]
pub struct GenerateOptions<'a> {
    /// Directory receiving `*.table.rs` files and `mod.rs`
    pub out_dir: &'a Path,
    /// Module name recorded in every generated file
    pub package: &'a str,
    /// Render without writing
    pub dry_run: bool,
}

/// Generate one file per table, in order.
///
/// A failing table is logged and recorded; the remaining tables are still
/// processed. Once at least one file was written, `mod.rs` is refreshed to
/// list every table file in the output directory.
pub async fn generate_all(
    reader: &dyn SchemaReader,
    tables: &[String],
    options: &GenerateOptions<'_>,
) -> GenerateReport {
    let generator = Generator::new(options.package);
    let mut report = GenerateReport::new(reader.database(), options.dry_run);

    for table in tables {
        let outcome = match generate_table(reader, &generator, table, options).await {
            Ok(outcome) => outcome,
            Err(err) => {
                log::error!("table '{}': {:?}", table, err);
                TableOutcome::Failed(err.to_string())
            }
        };
        report.push(table, outcome);
    }

    if !options.dry_run && report.written() > 0 {
        report.index = Some(refresh_index(options.out_dir));
    }

    report
}

async fn generate_table(
    reader: &dyn SchemaReader,
    generator: &Generator,
    table: &str,
    options: &GenerateOptions<'_>,
) -> miette::Result<TableOutcome> {
    let columns = reader.columns(table).await?;
    let file = generator
        .generate(table, &columns)
        .map_err(|err| miette::Report::new(*err))?;
    let path = file.path(options.out_dir);

    if options.dry_run {
        return Ok(TableOutcome::Preview {
            path,
            content: file.content().to_string(),
        });
    }

    file.write(options.out_dir)
        .map_err(|err| miette::miette!("{:#}", err))?;
    log::info!("wrote {}", path.display());

    Ok(TableOutcome::Written(path))
}

fn refresh_index(out_dir: &Path) -> IndexResult {
    let result = ModIndex::scan(out_dir).and_then(|index| {
        let path = index.path(out_dir);
        index.write(out_dir).map(|written| (path, written))
    });

    match result {
        Ok((path, WriteResult::Written)) => {
            log::info!("wrote {}", path.display());
            IndexResult::Written(path)
        }
        Ok((path, WriteResult::Unchanged)) => IndexResult::Unchanged(path),
        Err(err) => {
            log::error!("failed to update module index: {:#}", err);
            IndexResult::Failed(format!("{:#}", err))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use rowsmith_schema::{ColumnDescriptor, SnapshotSchema};
    use tempfile::TempDir;

    use super::*;

    fn schema() -> SnapshotSchema {
        SnapshotSchema::new("shop")
            .with_table(
                "users",
                vec![
                    ColumnDescriptor::new("id", "int", "int(11)")
                        .primary_key()
                        .extra("auto_increment"),
                    ColumnDescriptor::new("email", "varchar", "varchar(255)"),
                ],
            )
            .with_table(
                "valid_table",
                vec![ColumnDescriptor::new("id", "int", "int(11)").primary_key()],
            )
            .with_table("empty", vec![])
            .with_table("places", vec![ColumnDescriptor::new("loc", "point", "point")])
    }

    fn tables(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn options(out_dir: &Path, dry_run: bool) -> GenerateOptions<'_> {
        GenerateOptions {
            out_dir,
            package: "model",
            dry_run,
        }
    }

    #[tokio::test]
    async fn test_partial_batch_keeps_going() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("model");

        let report = generate_all(
            &schema(),
            &tables(&["valid_table", "missing_table"]),
            &options(&out, false),
        )
        .await;

        assert!(out.join("valid_table.table.rs").is_file());
        assert_eq!(report.written(), 1);

        let failed: Vec<_> = report.failures().collect();
        assert_eq!(
            failed,
            [("missing_table", "table 'missing_table' not found in schema 'shop'")]
        );
    }

    #[tokio::test]
    async fn test_tables_processed_in_order() {
        let temp = TempDir::new().unwrap();

        let report = generate_all(
            &schema(),
            &tables(&["users", "places", "valid_table"]),
            &options(temp.path(), false),
        )
        .await;

        let order: Vec<_> = report.tables.iter().map(|t| t.table.as_str()).collect();
        assert_eq!(order, ["users", "places", "valid_table"]);
        assert!(matches!(report.tables[1].outcome, TableOutcome::Failed(_)));
    }

    #[tokio::test]
    async fn test_zero_columns_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("model");

        let report = generate_all(&schema(), &tables(&["empty"]), &options(&out, false)).await;

        let failed: Vec<_> = report.failures().collect();
        assert_eq!(failed, [("empty", "no results returned for table 'empty'")]);
        assert!(!out.exists());
        assert!(report.index.is_none());
    }

    #[tokio::test]
    async fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("model");

        let report = generate_all(&schema(), &tables(&["users"]), &options(&out, true)).await;

        assert!(!out.exists());
        assert_eq!(report.written(), 0);
        match &report.tables[0].outcome {
            TableOutcome::Preview { path, content } => {
                assert_eq!(path, &out.join("user.table.rs"));
                assert!(content.contains("pub struct User {"));
            }
            other => panic!("expected preview, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_mod_index_lists_all_table_files() {
        let temp = TempDir::new().unwrap();
        let out = temp.path();
        fs::write(out.join("order.table.rs"), "pub struct Order;\n").unwrap();

        let report = generate_all(&schema(), &tables(&["users"]), &options(out, false)).await;

        assert_eq!(report.index, Some(IndexResult::Written(out.join("mod.rs"))));
        let index = fs::read_to_string(out.join("mod.rs")).unwrap();
        assert!(index.contains("#[path = \"order.table.rs\"]\nmod order;"));
        assert!(index.contains("#[path = \"user.table.rs\"]\nmod user;"));

        let again = generate_all(&schema(), &tables(&["users"]), &options(out, false)).await;
        assert_eq!(again.index, Some(IndexResult::Unchanged(out.join("mod.rs"))));
    }

    #[tokio::test]
    async fn test_regenerate_is_byte_identical() {
        let temp = TempDir::new().unwrap();
        let out = temp.path();

        generate_all(&schema(), &tables(&["users"]), &options(out, false)).await;
        let first = fs::read(out.join("user.table.rs")).unwrap();
        generate_all(&schema(), &tables(&["users"]), &options(out, false)).await;
        let second = fs::read(out.join("user.table.rs")).unwrap();

        assert_eq!(first, second);
    }
}
