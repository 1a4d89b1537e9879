//! Component B: execute the fixed SQL script sequence in order, each file
//! as one auto-committed statement batch.

use crate::error::PipelineError;
use connectors::sql::destination::ScriptExecutor;
use tracing::info;

/// Strict execution order: schema build, data-quality framework, validations,
/// tests. Later scripts depend on earlier ones' schema and data changes.
pub const SQL_SCRIPTS: [&str; 4] = [
    "sql/03_core_fct_trips.sql",
    "sql/04_dq_framework.sql",
    "sql/05_dq_validations.sql",
    "sql/06_dq_tests.sql",
];

/// Run each script in list order. The first failure stops the run; files
/// already executed stay committed because there is no enclosing
/// transaction. Cross-file idempotence is a contract on the SQL payloads,
/// not enforced here.
pub async fn run_scripts<E: ScriptExecutor>(
    executor: &E,
    scripts: &[&str],
) -> Result<(), PipelineError> {
    for path in scripts {
        let sql = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| PipelineError::ScriptRead {
                path: path.to_string(),
                source,
            })?;
        info!("Running {}", path);
        executor.execute_batch(&sql).await?;
    }

    info!("SQL pipeline completed successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use connectors::sql::error::DbError;
    use std::io::Write;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Records executed payloads; fails on any payload containing "BOOM".
    #[derive(Default)]
    struct MockExecutor {
        executed: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl ScriptExecutor for MockExecutor {
        async fn execute_batch(&self, sql: &str) -> Result<(), DbError> {
            if sql.contains("BOOM") {
                return Err(DbError::Unknown("syntax error near BOOM".into()));
            }
            self.executed.lock().unwrap().push(sql.to_string());
            Ok(())
        }
    }

    fn write_script(dir: &TempDir, name: &str, body: &str) -> String {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[tokio::test]
    async fn test_scripts_run_in_list_order() {
        let dir = TempDir::new().unwrap();
        let s1 = write_script(&dir, "01.sql", "CREATE TABLE a (id int);");
        let s2 = write_script(&dir, "02.sql", "INSERT INTO a VALUES (1);");
        let executor = MockExecutor::default();

        run_scripts(&executor, &[s1.as_str(), s2.as_str()])
            .await
            .unwrap();

        let executed = executor.executed.lock().unwrap();
        assert_eq!(
            *executed,
            vec![
                "CREATE TABLE a (id int);".to_string(),
                "INSERT INTO a VALUES (1);".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_failure_stops_remaining_scripts() {
        let dir = TempDir::new().unwrap();
        let s1 = write_script(&dir, "01.sql", "CREATE TABLE a (id int);");
        let s2 = write_script(&dir, "02.sql", "BOOM;");
        // Never reached, so it need not even exist
        let s3 = "sql/never_read.sql";
        let executor = MockExecutor::default();

        let err = run_scripts(&executor, &[s1.as_str(), s2.as_str(), s3])
            .await
            .unwrap_err();
        assert!(matches!(err, PipelineError::Db(_)));

        // The first script's effects are already committed and durable
        let executed = executor.executed.lock().unwrap();
        assert_eq!(*executed, vec!["CREATE TABLE a (id int);".to_string()]);
    }

    #[tokio::test]
    async fn test_unreadable_script_is_fatal_before_execution() {
        let executor = MockExecutor::default();
        let err = run_scripts(&executor, &["sql/missing.sql"]).await.unwrap_err();
        match err {
            PipelineError::ScriptRead { path, .. } => assert_eq!(path, "sql/missing.sql"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(executor.executed.lock().unwrap().is_empty());
    }

    #[test]
    fn test_fixed_script_sequence() {
        assert_eq!(
            SQL_SCRIPTS,
            [
                "sql/03_core_fct_trips.sql",
                "sql/04_dq_framework.sql",
                "sql/05_dq_validations.sql",
                "sql/06_dq_tests.sql",
            ]
        );
    }
}
