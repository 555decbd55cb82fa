//! Property-based tests over generated tables

mod common;

use common::strings;
use eda_polars::{ColumnSelection, EdaStatsExt, OutlierMethod, LABEL_COLUMN};
use polars::prelude::*;
use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn numeric_table(columns: &[Vec<f64>]) -> DataFrame {
    DataFrame::new(
        columns
            .iter()
            .enumerate()
            .map(|(i, values)| Series::new(PlSmallStr::from(format!("c{i}")), values.clone()).into())
            .collect(),
    )
    .unwrap()
}

fn random_columns(rng: &mut ChaCha8Rng, width: usize, height: usize) -> Vec<Vec<f64>> {
    (0..width)
        .map(|_| (0..height).map(|_| rng.gen_range(-100.0..100.0)).collect())
        .collect()
}

proptest! {
    // Property: the correlation matrix is symmetric with a unit diagonal
    #[test]
    fn prop_correlation_symmetric(seed in any::<u64>(), width in 2usize..6, height in 3usize..40) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let df = numeric_table(&random_columns(&mut rng, width, height));
        let matrix = df.correlation_matrix(0.5).unwrap();

        for i in 0..width {
            prop_assert_eq!(matrix.values[i][i], Some(1.0));
            for j in 0..width {
                prop_assert_eq!(matrix.values[i][j], matrix.values[j][i]);
            }
        }
    }

    // Property: the outlier sub-table has exactly the rows labelled outlier
    #[test]
    fn prop_outlier_table_matches_labels(
        values in prop::collection::vec(-1e3f64..1e3, 3..60),
        threshold in 0.0f64..4.0,
    ) {
        let df = numeric_table(&[values]);
        for method in [OutlierMethod::Iqr, OutlierMethod::Hampel] {
            let result = df.detect_outliers("c0", method, threshold).unwrap();
            let labelled = strings(&result.table, LABEL_COLUMN)
                .iter()
                .filter(|l| l.as_deref() == Some("outlier"))
                .count();
            prop_assert_eq!(result.outliers.height(), labelled);
            prop_assert_eq!(result.table.height(), df.height());
        }
    }

    // Property: a two-valued grouping column partitions every row between the samples
    #[test]
    fn prop_group_split_partitions_rows(flags in prop::collection::vec(any::<bool>(), 2..50)) {
        prop_assume!(flags.iter().any(|f| *f) && flags.iter().any(|f| !*f));
        let values: Vec<f64> = (0..flags.len()).map(|i| i as f64).collect();
        let df = DataFrame::new(vec![
            Series::new(PlSmallStr::from("v"), values).into(),
            Series::new(PlSmallStr::from("g"), flags.clone()).into(),
        ])
        .unwrap();

        let split = df.split_samples(&ColumnSelection::grouped("v", "g")).unwrap();
        prop_assert!(!split.first.is_empty() && !split.second.is_empty());
        prop_assert_eq!(split.first.len() + split.second.len(), flags.len());

        let first_flag = flags[0];
        for (i, flag) in flags.iter().enumerate() {
            let sample = if *flag == first_flag { &split.first } else { &split.second };
            prop_assert!(sample.contains(&(i as f64)));
        }
    }
}
