//! Non-interactive `list` and `show` subcommands.

use alembic_catalog::{Browser, DetailView, FieldFilter, Item};
use alembic_potterdb::PotterDbClient;
use serde_json::json;
use tracing::info;

use crate::error::AlbError;

const MAX_CELL_WIDTH: usize = 40;

#[derive(Debug, Default, Clone)]
pub struct ListArgs {
    pub search: String,
    pub difficulty: Option<String>,
    pub characteristic: Option<String>,
    pub page: usize,
    pub json: bool,
}

pub async fn list(client: &PotterDbClient, args: ListArgs) -> Result<(), AlbError> {
    let items = client.fetch_potions().await?;
    info!(count = items.len(), "Fetched potions for list");
    print!("{}", render_list(items, &args)?);
    Ok(())
}

pub async fn show(client: &PotterDbClient, id: &str) -> Result<(), AlbError> {
    let items = client.fetch_potions().await?;
    let item = items
        .into_iter()
        .find(|item| item.id == id)
        .ok_or_else(|| AlbError::UnknownItem(id.to_string()))?;

    let mut view = DetailView::default();
    view.open(item);
    print!("{}", render_detail(&view));
    Ok(())
}

/// Filters `items` and renders the requested page as a table or JSON.
pub fn render_list(items: Vec<Item>, args: &ListArgs) -> Result<String, AlbError> {
    let mut browser = Browser::new();
    browser.set_items(items);
    browser.set_search(args.search.clone());
    browser.set_difficulty(FieldFilter::from(args.difficulty.clone()));
    browser.set_characteristic(FieldFilter::from(args.characteristic.clone()));

    let page = args.page.max(1);
    if page != 1 && !browser.jump_to_page(page) {
        return Err(AlbError::PageOutOfRange {
            page,
            total: browser.total_pages(),
        });
    }

    let rows = browser.current_page();
    if args.json {
        let body = json!({
            "page": browser.page(),
            "total_pages": browser.total_pages(),
            "total": browser.filtered().len(),
            "items": rows,
        });
        return Ok(format!("{}\n", serde_json::to_string_pretty(&body)?));
    }

    let table: Vec<[&str; 4]> = rows
        .iter()
        .map(|item| {
            [
                Item::cell(&item.name),
                Item::cell(&item.effect),
                Item::cell(&item.difficulty),
                Item::cell(&item.characteristics),
            ]
        })
        .collect();

    let mut out = format_table(["Name", "Effect", "Difficulty", "Characteristic"], &table);
    out.push_str(&format!(
        "page {} of {} ({} potions)\n",
        browser.page(),
        browser.total_pages(),
        browser.filtered().len()
    ));
    Ok(out)
}

pub fn render_detail(view: &DetailView) -> String {
    let Some(title) = view.title() else {
        return String::new();
    };

    let mut out = format!("{}\n", title);
    for field in view.fields() {
        out.push_str(&format!("  {}: {}\n", field.label, field.value));
    }
    out
}

fn format_table<const N: usize>(header: [&str; N], rows: &[[&str; N]]) -> String {
    let mut widths = header.map(|h| h.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(truncate(cell).chars().count());
        }
    }

    let mut out = String::new();
    for row in std::iter::once(&header).chain(rows) {
        let line: Vec<String> = row
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", truncate(cell)))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}

fn truncate(cell: &str) -> String {
    if cell.chars().count() <= MAX_CELL_WIDTH {
        return cell.to_string();
    }
    let mut short: String = cell.chars().take(MAX_CELL_WIDTH - 1).collect();
    short.push('…');
    short
}
