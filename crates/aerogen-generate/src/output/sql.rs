use sqlx::PgPool;
use tracing::info;

use aerogen_core::record::TableRows;

use crate::errors::GenerationError;
use crate::generator::Dataset;

/// Insert every instance of every entity kind into the database.
///
/// The whole load runs inside one transaction with a single commit; any
/// failure rolls the entire run back, so the target never holds a partial
/// dataset. Values bind through the same row view the CSV sink uses, with
/// absent fields bound as NULL.
pub async fn insert_dataset(pool: &PgPool, dataset: &Dataset) -> Result<u64, GenerationError> {
    let mut tx = pool.begin().await?;
    let mut inserted = 0_u64;

    for table in dataset.tables() {
        let statement = insert_statement(&table);
        for row in &table.rows {
            let mut query = sqlx::query(&statement);
            for value in row {
                query = query.bind(value.as_deref());
            }
            query.execute(&mut *tx).await?;
            inserted += 1;
        }
        info!(table = table.kind, rows = table.rows.len(), "table inserted");
    }

    tx.commit().await?;
    Ok(inserted)
}

fn insert_statement(table: &TableRows) -> String {
    let columns = table.header.join(", ");
    let placeholders = (1..=table.header.len())
        .map(|position| format!("${position}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({})",
        table.kind, columns, placeholders
    )
}
