/// Filtering Example
///
/// This example demonstrates:
/// - Narrowing the dashboard along each dimension
/// - What happens when a selection matches nothing
/// - How unknown selection values are dropped

use forecastboard::{
    CellValue, Dashboard, FilterSelection, Frame, Schema, WideTable, DEFAULT_TOP_N,
    NO_DATA_MESSAGE, YEAR_PREFIX,
};

fn s(v: &str) -> CellValue {
    CellValue::String(v.to_string())
}

fn f(v: f64) -> CellValue {
    CellValue::Float(v)
}

fn sample_dashboard() -> Dashboard {
    let schema = Schema::new(vec![
        "Area".to_string(),
        "Category".to_string(),
        "Model".to_string(),
        "MAE".to_string(),
        "RMSE".to_string(),
        "Country_Type".to_string(),
        "pred_2024".to_string(),
        "pred_2025".to_string(),
    ])
    .unwrap();
    let mut table = WideTable::new("forecasts".to_string(), schema);

    table
        .append_row(vec![
            s("China"), s("GDP Growth"), s("XGBoost"), f(0.42), f(0.58), s("Emerging"),
            f(5.1), f(4.8),
        ])
        .unwrap();
    table
        .append_row(vec![
            s("China"), s("Inflation"), s("ARIMA"), f(0.31), f(0.47), s("Emerging"),
            f(2.3), f(2.1),
        ])
        .unwrap();
    table
        .append_row(vec![
            s("Germany"), s("GDP Growth"), s("XGBoost"), f(0.18), f(0.27), s("Developed"),
            f(1.2), f(1.4),
        ])
        .unwrap();

    Dashboard::from_table(&table, YEAR_PREFIX, DEFAULT_TOP_N).unwrap()
}

fn main() {
    println!("=== ForecastBoard Filtering Example ===\n");

    let dashboard = sample_dashboard();

    // 1. Start from the full selection
    println!("1. Full selection...");
    let full = dashboard.default_selection();
    println!("   Matches {} of {} records\n", dashboard.filter(&full).len(), dashboard.row_count());

    // 2. Narrow to one area
    println!("2. Only China...");
    let mut china = full.clone();
    china.areas = ["China"].iter().map(|a| a.to_string()).collect();
    let view = dashboard.filter(&china);
    println!("   Matches {} records", view.len());
    for record in view.iter() {
        println!("     {} {} {} -> {}", record.area, record.category, record.year, record.value);
    }
    println!();

    // 3. Narrow further to one year
    println!("3. Only China in 2024...");
    let mut china_2024 = china.clone();
    china_2024.years = [2024].into_iter().collect();
    match dashboard.frame(&china_2024) {
        Frame::Ready { row_count, column_count, .. } => {
            println!("   Filtered data shape: {} rows, {} columns\n", row_count, column_count);
        }
        Frame::NoData => println!("   No data\n"),
    }

    // 4. Deselect everything
    println!("4. Empty selection...");
    match dashboard.frame(&FilterSelection::default()) {
        Frame::Ready { .. } => println!("   Unexpected data\n"),
        Frame::NoData => println!("   {}\n", NO_DATA_MESSAGE),
    }

    // 5. Unknown values are dropped by intersection
    println!("5. Selection with unknown values...");
    let mut stale = full.clone();
    stale.areas.insert("Atlantis".to_string());
    stale.years.insert(1999);
    let effective = dashboard.catalog().intersect(&stale);
    println!("   Areas kept: {:?}", effective.areas);
    println!("   Years kept: {:?}", effective.years);

    println!("\n=== Example Complete ===");
}
