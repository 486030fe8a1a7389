//! Read-only inventory dashboard view.
//!
//! Fetches the product list once and renders it as a table with a derived
//! stock status column. On fetch failure the loading indicator stops and
//! nothing is rendered; the error is logged, not displayed.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use opsdeck_core::transport::CatalogClient;
use opsdeck_types::catalog::Product;

use crate::state::AppState;

/// Fetch and render the inventory dashboard.
pub async fn show_inventory(state: &AppState, json: bool) -> Result<()> {
    let spinner = indicatif::ProgressBar::new_spinner();
    if !json {
        spinner.set_style(
            indicatif::ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        spinner.set_message("Loading warehouse data...");
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    }

    let result = state.transport.fetch_product_list().await;
    spinner.finish_and_clear();

    let products = match result {
        Ok(products) => products,
        Err(err) => {
            tracing::error!("failed to fetch products: {err}");
            return Ok(());
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&products)?);
        return Ok(());
    }

    render_table(&products);
    Ok(())
}

/// Render the product table with stock status badges.
fn render_table(products: &[Product]) {
    println!();
    println!("  {}", style("Real-Time Inventory").cyan().bold());

    if products.is_empty() {
        println!();
        println!("  {} No products in the catalog.", style("i").blue().bold());
        println!();
        return;
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("ID").fg(Color::White),
        Cell::new("Product Name").fg(Color::White),
        Cell::new("Supplier").fg(Color::White),
        Cell::new("Stock Level").fg(Color::White),
        Cell::new("Status").fg(Color::White),
    ]);

    for product in products {
        let status_cell = if product.is_low_stock() {
            Cell::new("LOW STOCK").fg(Color::Red)
        } else {
            Cell::new("Healthy").fg(Color::Green)
        };

        table.add_row(vec![
            Cell::new(format!("#{}", product.id)).fg(Color::DarkGrey),
            Cell::new(&product.name).fg(Color::Cyan),
            Cell::new(&product.supplier.name),
            Cell::new(product.stock_quantity.to_string()),
            status_cell,
        ]);
    }

    println!();
    println!("{table}");
    println!();

    let low_count = products.iter().filter(|p| p.is_low_stock()).count();
    println!(
        "  {} product{}, {} low on stock",
        style(products.len()).bold(),
        if products.len() == 1 { "" } else { "s" },
        if low_count > 0 {
            style(low_count).red().bold()
        } else {
            style(low_count).green()
        },
    );
    println!();
}
