//! Plain-text tables
//!
//! Amount columns are computed from the displayed factors at render time.

use sf_core::traits::{total_amount, Costed};
use sf_core::ValidationErrors;
use sf_models::{Article, ArticleName, Production, ProductionArticle, WorkforceDetail};
use sf_services::ProductionSummary;

struct Table {
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
    footer: Option<Vec<String>>,
}

impl Table {
    fn new(headers: &[&'static str]) -> Self {
        Self {
            headers: headers.to_vec(),
            rows: Vec::new(),
            footer: None,
        }
    }

    fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    fn footer(&mut self, cells: Vec<String>) {
        self.footer = Some(cells);
    }

    fn render(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in self.rows.iter().chain(self.footer.iter()) {
            for (i, cell) in row.iter().enumerate() {
                if let Some(width) = widths.get_mut(i) {
                    *width = (*width).max(cell.chars().count());
                }
            }
        }

        let line = |cells: &[String]| -> String {
            let padded: Vec<String> = cells
                .iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
                .collect();
            format!("{}\n", padded.join("  ").trim_end())
        };
        let rule: String = widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  ");

        let headers: Vec<String> = self.headers.iter().map(|h| h.to_string()).collect();
        let mut out = line(&headers);
        out.push_str(&rule);
        out.push('\n');
        for row in &self.rows {
            out.push_str(&line(row));
        }
        if let Some(footer) = &self.footer {
            out.push_str(&rule);
            out.push('\n');
            out.push_str(&line(footer));
        }
        out
    }
}

fn money(value: f64) -> String {
    format!("{:.2}", value)
}

fn empty(what: &str) -> String {
    format!("No {}.\n", what)
}

pub fn articles(items: &[Article]) -> String {
    if items.is_empty() {
        return empty("articles");
    }
    let mut table = Table::new(&["ID", "Name", "Quantity"]);
    for article in items {
        table.row(vec![
            article.id.to_string(),
            article.name.clone(),
            article.quantity.to_string(),
        ]);
    }
    table.render()
}

pub fn article_names(items: &[ArticleName]) -> String {
    if items.is_empty() {
        return empty("articles");
    }
    let mut table = Table::new(&["ID", "Name"]);
    for article in items {
        table.row(vec![article.id.to_string(), article.name.clone()]);
    }
    table.render()
}

pub fn productions(items: &[Production]) -> String {
    if items.is_empty() {
        return empty("productions");
    }
    let mut table = Table::new(&["ID", "Date", "Quantity", "Title"]);
    for production in items {
        let date = production
            .calendar_date()
            .map(|d| d.to_string())
            .unwrap_or_else(|| production.date.clone());
        table.row(vec![
            production.id.to_string(),
            date,
            production.quantity.to_string(),
            production.title.clone(),
        ]);
    }
    table.render()
}

pub fn allocations(items: &[ProductionArticle]) -> String {
    if items.is_empty() {
        return empty("articles in this production");
    }
    let mut table = Table::new(&["ID", "Article", "Quantity", "Unit price", "Amount"]);
    for allocation in items {
        let article = if allocation.article_name.is_empty() {
            format!("#{}", allocation.article_id)
        } else {
            allocation.article_name.clone()
        };
        table.row(vec![
            allocation.id.to_string(),
            article,
            allocation.quantity.to_string(),
            money(allocation.unit_price),
            money(allocation.amount()),
        ]);
    }
    table.footer(vec![
        "Total".into(),
        String::new(),
        String::new(),
        String::new(),
        money(total_amount(items)),
    ]);
    table.render()
}

pub fn workforce(items: &[WorkforceDetail]) -> String {
    if items.is_empty() {
        return empty("workforce details");
    }
    let mut table = Table::new(&["ID", "Workers", "Price per head", "Amount"]);
    for detail in items {
        table.row(vec![
            detail.id.to_string(),
            detail.worker_count.to_string(),
            money(detail.price_per_head),
            money(detail.amount()),
        ]);
    }
    table.footer(vec![
        "Total".into(),
        String::new(),
        String::new(),
        money(total_amount(items)),
    ]);
    table.render()
}

pub fn summary(summary: &ProductionSummary) -> String {
    format!(
        "Production {}\n\nMaterials\n{}\nWorkforce\n{}\nMaterials total:  {}\nWorkforce total:  {}\nGrand total:      {}\n",
        summary.production_id,
        allocations(&summary.allocations),
        workforce(&summary.workforce),
        money(summary.materials_total()),
        money(summary.workforce_total()),
        money(summary.grand_total()),
    )
}

pub fn field_errors(errors: &ValidationErrors) -> String {
    errors
        .full_messages()
        .into_iter()
        .map(|message| format!("  - {}\n", message))
        .collect()
}
