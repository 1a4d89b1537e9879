use crate::sql::{
    destination::{ScriptExecutor, TripDestination},
    error::{ConnectorError, DbError},
    postgres::{client::connect_client, encoder::PgCopyValueEncoder},
};
use async_trait::async_trait;
use bytes::Bytes;
use futures_util::{SinkExt, pin_mut};
use model::records::batch::TripBatch;
use tokio_postgres::{Client, Config};
use tracing::{debug, info};

pub struct PgAdapter {
    client: Client,
}

impl PgAdapter {
    pub async fn connect(config: Config) -> Result<Self, ConnectorError> {
        let client = connect_client(config).await?;
        Ok(PgAdapter { client })
    }
}

#[async_trait]
impl TripDestination for PgAdapter {
    async fn truncate(&self, table: &str) -> Result<(), DbError> {
        let statement = format!("TRUNCATE TABLE {}", quote_table(table));
        debug!("TRUNCATE statement: {}", statement);
        self.client.batch_execute(&statement).await?;
        info!(table, "Truncated target table");
        Ok(())
    }

    async fn append(&self, table: &str, batch: &TripBatch) -> Result<u64, DbError> {
        if batch.num_rows() == 0 {
            return Ok(0);
        }

        let statement = copy_statement(table, batch.columns());
        let encoder = PgCopyValueEncoder::new();

        debug!("COPY statement: {}", statement);

        let sink = self.client.copy_in(&statement).await?;
        pin_mut!(sink);

        for row in batch.rows() {
            let mut line = String::new();
            for (i, value) in row.iter().enumerate() {
                if i > 0 {
                    line.push('\t');
                }
                line.push_str(&encoder.encode_value(value));
            }
            line.push('\n');
            sink.as_mut().send(Bytes::from(line)).await?;
        }

        let rows = sink.as_mut().finish().await?;
        Ok(rows)
    }
}

#[async_trait]
impl ScriptExecutor for PgAdapter {
    async fn execute_batch(&self, sql: &str) -> Result<(), DbError> {
        self.client.batch_execute(sql).await?;
        Ok(())
    }
}

/// Quote a possibly schema-qualified table identifier.
fn quote_table(table: &str) -> String {
    table
        .split('.')
        .map(quote_identifier)
        .collect::<Vec<_>>()
        .join(".")
}

fn quote_identifier(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

fn copy_statement(table: &str, columns: &[String]) -> String {
    let cols = columns
        .iter()
        .map(|col| quote_identifier(col))
        .collect::<Vec<_>>()
        .join(", ");
    format!("COPY {} ({}) FROM STDIN", quote_table(table), cols)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_table_plain_and_qualified() {
        assert_eq!(quote_table("fct_trips"), "\"fct_trips\"");
        assert_eq!(quote_table("core.fct_trips"), "\"core\".\"fct_trips\"");
    }

    #[test]
    fn test_quote_identifier_doubles_quotes() {
        assert_eq!(quote_identifier("we\"ird"), "\"we\"\"ird\"");
    }

    #[test]
    fn test_copy_statement() {
        let cols = vec!["vendorid".to_string(), "fare_amount".to_string()];
        assert_eq!(
            copy_statement("core.fct_trips", &cols),
            "COPY \"core\".\"fct_trips\" (\"vendorid\", \"fare_amount\") FROM STDIN"
        );
    }
}
