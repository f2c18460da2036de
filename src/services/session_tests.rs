#[cfg(all(test, feature = "local-store"))]
mod tests {
    use std::io::Cursor;

    use crate::services::error::SessionError;
    use crate::services::session::SessionController;
    use crate::store::{LocalWorksheet, Table};

    fn seeded_store() -> LocalWorksheet {
        let store = LocalWorksheet::new();
        // Four previous market days; the day under entry becomes the fifth.
        store.seed_rows(
            Table::Sales,
            &[
                [10, 10, 10, 10, 10, 10],
                [10, 10, 10, 10, 10, 10],
                [10, 10, 10, 10, 10, 10],
                [10, 10, 10, 10, 10, 10],
            ],
        );
        store.seed_rows(Table::Stock, &[[20, 20, 20, 20, 20, 20]]);
        store
    }

    async fn run_session(
        store: &LocalWorksheet,
        input: &str,
    ) -> (Result<crate::services::SessionSummary, SessionError>, String) {
        let mut output = Vec::new();
        let result = {
            let mut controller =
                SessionController::new(store, Cursor::new(input.as_bytes()), &mut output);
            controller.run().await
        };
        (result, String::from_utf8(output).unwrap())
    }

    #[tokio::test]
    async fn test_full_session_appends_all_three_rows() {
        let store = seeded_store();
        let (result, output) = run_session(&store, "10,10,10,10,10,10\n").await;

        let summary = result.unwrap();
        assert_eq!(summary.sales.values(), &[10; 6]);
        assert_eq!(summary.surplus.values(), &[10; 6]);
        // Five entries of 10 -> mean 10 -> 11
        assert_eq!(summary.forecast.values(), &[11; 6]);

        assert_eq!(store.row_count(Table::Sales), 5);
        assert_eq!(store.row_count(Table::Surplus), 1);
        assert_eq!(store.row_count(Table::Stock), 2);
        assert_eq!(
            store.rows(Table::Stock)[1],
            vec!["11", "11", "11", "11", "11", "11"]
        );

        assert!(output.contains("Data is valid!"));
        assert!(output.contains("Updating sales worksheet..."));
        assert!(output.contains("surplus worksheet updated successfully."));
    }

    #[tokio::test]
    async fn test_mixed_figures_session() {
        let store = LocalWorksheet::new();
        store.seed_rows(Table::Stock, &[[20, 20, 20, 20, 20, 20]]);

        let (result, _) = run_session(&store, "10,20,30,10,5,25\n").await;

        let summary = result.unwrap();
        assert_eq!(summary.surplus.values(), &[10, 0, -10, 10, 15, -5]);
        // History is read after the append, so each column has exactly the
        // day's figure: forecast = round(value * 1.1).
        assert_eq!(summary.forecast.values(), &[11, 22, 33, 11, 6, 28]);
    }

    #[tokio::test]
    async fn test_invalid_lines_reprompt_until_valid() {
        let store = seeded_store();
        let input = "10,20,30,40,50\n10,20,thirty,40,50,60\n10,10,10,10,10,10\n";
        let (result, output) = run_session(&store, input).await;

        assert!(result.is_ok());
        assert_eq!(
            output.matches("Invalid data:").count(),
            2,
            "both bad lines should be rejected: {output}"
        );
        assert!(output.contains("exactly 6 values required, you provided 5"));
        assert!(output.contains("'thirty' is not a whole number"));
        // Only the valid line landed in the sheet.
        assert_eq!(store.row_count(Table::Sales), 5);
    }

    #[tokio::test]
    async fn test_empty_stock_aborts_before_surplus_write() {
        let store = LocalWorksheet::new();
        let (result, _) = run_session(&store, "1,2,3,4,5,6\n").await;

        assert!(matches!(result, Err(SessionError::NoStockRows)));
        // The sales append already happened; nothing later did.
        assert_eq!(store.row_count(Table::Sales), 1);
        assert_eq!(store.row_count(Table::Surplus), 0);
        assert_eq!(store.row_count(Table::Stock), 0);
    }

    #[tokio::test]
    async fn test_input_eof_is_an_error_not_a_spin() {
        let store = seeded_store();
        let (result, _) = run_session(&store, "not,valid\n").await;

        match result {
            Err(SessionError::Io(e)) => {
                assert_eq!(e.kind(), std::io::ErrorKind::UnexpectedEof);
            }
            other => panic!("expected I/O error, got {other:?}"),
        }
        assert_eq!(store.row_count(Table::Sales), 4);
    }

    #[tokio::test]
    async fn test_malformed_history_cell_aborts_forecast() {
        let store = LocalWorksheet::new();
        store.seed_raw_row(Table::Sales, &["1", "2", "x", "4", "5", "6"]);
        store.seed_rows(Table::Stock, &[[9, 9, 9, 9, 9, 9]]);

        let (result, _) = run_session(&store, "1,1,1,1,1,1\n").await;

        assert!(matches!(
            result,
            Err(SessionError::MalformedRow {
                table: Table::Sales,
                ..
            })
        ));
        // Surplus was already written before the forecast stage failed.
        assert_eq!(store.row_count(Table::Surplus), 1);
        assert_eq!(store.row_count(Table::Stock), 1);
    }
}
