/// Workbook Loading Example
///
/// This example demonstrates:
/// - Loading a forecast workbook from disk
/// - Inspecting the wide table before reshaping
/// - Opening the same file as a full dashboard
///
/// Run from the repository root so `data/forecasts.xlsx` resolves.

use forecastboard::{load_workbook, Dashboard, DashboardConfig};

fn main() {
    println!("=== ForecastBoard Workbook Loading Example ===\n");

    let path = "data/forecasts.xlsx";

    // 1. Load the raw wide table
    println!("1. Loading workbook...");
    let table = load_workbook(path, None).unwrap();
    println!("   Worksheet '{}' loaded: {} rows, {} columns", table.name(), table.len(), table.schema().len());
    println!("   Columns: {:?}\n", table.schema().get_column_names());

    // 2. Peek at the first row
    println!("2. First row:");
    for column in table.schema().get_column_names() {
        if let Some(value) = table.get_value(0, column) {
            println!("   {} = {:?}", column, value);
        }
    }
    println!();

    // 3. Open the same file as a dashboard
    println!("3. Opening dashboard...");
    let dashboard = Dashboard::open(&DashboardConfig::new(path)).unwrap();
    println!("   {} long records", dashboard.row_count());
    println!("   Areas: {:?}", dashboard.catalog().areas);
    println!("   Categories: {:?}", dashboard.catalog().categories);
    println!("   Years: {:?}", dashboard.catalog().years);

    println!("\n=== Example Complete ===");
}
