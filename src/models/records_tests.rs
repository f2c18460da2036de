#[cfg(test)]
mod tests {
    use crate::models::{coerce_row, parse_cell, RowError, SalesHistory, SalesRecord, StockRow};

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_row_display_is_comma_separated() {
        let row = SalesRecord::new([10, 20, 30, 40, 50, 60]);
        assert_eq!(row.to_string(), "10,20,30,40,50,60");
    }

    #[test]
    fn test_row_display_negative_values() {
        let row = StockRow::new([-1, 0, 1, -2, 3, -4]);
        assert_eq!(row.to_string(), "-1,0,1,-2,3,-4");
    }

    #[test]
    fn test_parse_cell_accepts_negatives() {
        assert_eq!(parse_cell("-12"), Ok(-12));
    }

    #[test]
    fn test_parse_cell_rejects_text() {
        assert_eq!(
            parse_cell("thirty"),
            Err(RowError::BadCell {
                value: "thirty".to_string()
            })
        );
    }

    #[test]
    fn test_parse_cell_rejects_padded_number() {
        // Worksheet cells are used verbatim, no trimming.
        assert!(parse_cell(" 7").is_err());
    }

    #[test]
    fn test_coerce_row_round_trip() {
        let coerced = coerce_row(&cells(&["1", "2", "3", "4", "5", "6"])).unwrap();
        assert_eq!(coerced, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_coerce_row_wrong_width() {
        let err = coerce_row(&cells(&["1", "2", "3"])).unwrap_err();
        assert_eq!(err, RowError::WrongWidth { found: 3 });
    }

    #[test]
    fn test_coerce_row_bad_cell() {
        let err = coerce_row(&cells(&["1", "2", "x", "4", "5", "6"])).unwrap_err();
        assert_eq!(
            err,
            RowError::BadCell {
                value: "x".to_string()
            }
        );
    }

    #[test]
    fn test_history_columns_in_order() {
        let history = SalesHistory::new([
            vec![1],
            vec![2],
            vec![3],
            vec![4],
            vec![5],
            vec![6],
        ]);
        let firsts: Vec<i64> = history.columns().map(|c| c[0]).collect();
        assert_eq!(firsts, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(history.column(2), &[3]);
    }
}
