/// Basic Dashboard Example
///
/// This example demonstrates:
/// - Building a wide forecast table in memory
/// - Reshaping it into a dashboard
/// - Computing a frame with every chart

use forecastboard::{CellValue, Dashboard, Frame, Schema, WideTable, DEFAULT_TOP_N, YEAR_PREFIX};

fn s(v: &str) -> CellValue {
    CellValue::String(v.to_string())
}

fn f(v: f64) -> CellValue {
    CellValue::Float(v)
}

fn main() {
    println!("=== ForecastBoard Basic Dashboard Example ===\n");

    // 1. Create the wide table
    println!("1. Creating wide table...");
    let schema = Schema::new(vec![
        "Area".to_string(),
        "Category".to_string(),
        "Model".to_string(),
        "MAE".to_string(),
        "RMSE".to_string(),
        "Country_Type".to_string(),
        "pred_2024".to_string(),
        "pred_2025".to_string(),
        "pred_2026".to_string(),
    ])
    .unwrap();
    let mut table = WideTable::new("forecasts".to_string(), schema);

    table
        .append_row(vec![
            s("China"), s("GDP Growth"), s("XGBoost"), f(0.42), f(0.58), s("Emerging"),
            f(5.1), f(4.8), f(4.6),
        ])
        .unwrap();
    table
        .append_row(vec![
            s("India"), s("GDP Growth"), s("XGBoost"), f(0.51), f(0.69), s("Developing"),
            f(6.4), f(6.6), f(6.5),
        ])
        .unwrap();
    table
        .append_row(vec![
            s("Germany"), s("Inflation"), s("ARIMA"), f(0.24), f(0.36), s("Developed"),
            f(2.8), f(2.4), f(2.1),
        ])
        .unwrap();
    table
        .append_row(vec![
            s("Brazil"), s("Exports"), s("Prophet"), f(0.77), f(0.95), s("Developing"),
            f(3.1), f(3.4), f(3.6),
        ])
        .unwrap();

    println!("   Table '{}' created with {} rows\n", table.name(), table.len());

    // 2. Build the dashboard
    println!("2. Building dashboard...");
    let dashboard = Dashboard::from_table(&table, YEAR_PREFIX, DEFAULT_TOP_N).unwrap();
    println!(
        "   {} long records over years {:?}\n",
        dashboard.row_count(),
        dashboard.catalog().years
    );

    // 3. Compute a frame with everything selected
    println!("3. Computing frame...");
    match dashboard.frame(&dashboard.default_selection()) {
        Frame::Ready {
            row_count,
            column_count,
            charts,
        } => {
            println!("   Filtered data shape: {} rows, {} columns", row_count, column_count);
            println!("   Time series points: {}", charts.time_series.len());

            println!("   Category means:");
            for mean in &charts.category_means {
                println!("     {} -> {:.2}", mean.category, mean.mean);
            }

            println!("   Model scatter points: {}", charts.model_scatter.len());
            println!("   Share slices: {}", charts.share_breakdown.len());

            println!("   Top areas:");
            for total in &charts.top_areas {
                println!("     {} -> {:.1}", total.area, total.total);
            }
        }
        Frame::NoData => println!("   No data for this selection"),
    }

    println!("\n=== Example Complete ===");
}
