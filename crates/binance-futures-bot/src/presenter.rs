/*
[INPUT]:  Validated orders, exchange records, outcomes and error messages
[OUTPUT]: Styled terminal output (summaries, tables, panels)
[POS]:    Presentation layer - console rendering for the CLI
[UPDATE]: When output layout or displayed fields change
*/

use binance_futures_adapter::{AssetBalance, OrderRequest, OrderResponse};
use console::{Alignment, pad_str, style};

use crate::orders::{OrderOutcome, OrderPresenter, OutcomeStatus};

const LABEL_WIDTH: usize = 20;

/// Writes everything to the terminal with `console` styling
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsolePresenter;

impl ConsolePresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn banner(&self, title: &str, subtitle: Option<&str>) {
        println!("{}", style(title).bold().cyan());
        if let Some(sub) = subtitle {
            println!("{}", style(sub).dim());
        }
    }

    pub fn progress(&self, message: &str) {
        println!("{}", style(message).yellow());
    }

    pub fn success(&self, message: &str) {
        println!("{}", style(format!("✓ {message}")).green().bold());
    }

    /// Non-zero balances as an aligned table
    pub fn balances(&self, balances: &[AssetBalance]) {
        println!("\n{}", style("Account Balance").bold().cyan());
        println!(
            "{}  {}  {}",
            style(pad_str("Asset", 8, Alignment::Left, None)).bold(),
            style(pad_str("Wallet Balance", 22, Alignment::Right, None)).bold(),
            style(pad_str("Available Balance", 22, Alignment::Right, None)).bold(),
        );

        let mut shown = 0;
        for balance in balances.iter().filter(|b| !b.is_empty()) {
            println!(
                "{}  {}  {}",
                style(pad_str(&balance.asset, 8, Alignment::Left, None)).yellow(),
                style(pad_str(&balance.balance.to_string(), 22, Alignment::Right, None)).green(),
                style(pad_str(
                    &balance.available_balance.to_string(),
                    22,
                    Alignment::Right,
                    None
                ))
                .cyan(),
            );
            shown += 1;
        }

        if shown == 0 {
            println!("{}", style("No assets with a non-zero balance").dim());
        }
    }

    fn row(&self, label: &str, value: &str) {
        println!(
            "  {}  {}",
            style(pad_str(label, LABEL_WIDTH, Alignment::Left, None)).bold().yellow(),
            value
        );
    }
}

impl OrderPresenter for ConsolePresenter {
    fn order_request(&self, order: &OrderRequest) {
        println!("\n{}", style("📋 Order Request Summary").bold().cyan());
        self.row("Symbol", order.symbol());
        self.row("Side", order.side().as_str());
        self.row("Type", order.order_type().as_str());
        self.row("Quantity", &order.quantity().to_string());
        if let Some(price) = order.price() {
            self.row("Price", &price.to_string());
        }
    }

    fn order_response(&self, response: &OrderResponse) {
        println!("\n{}", style("✅ Order Details").bold().green());
        for (label, value) in response.display_fields() {
            self.row(label, &value);
        }
    }

    fn order_outcome(&self, outcome: &OrderOutcome) {
        let id = outcome
            .order_id
            .map_or_else(|| "?".to_string(), |id| id.to_string());
        let line = match &outcome.status {
            OutcomeStatus::Filled { avg_price } => style(format!(
                "Order {id} filled at average price: {avg_price}"
            ))
            .green()
            .bold(),
            OutcomeStatus::Pending => {
                style(format!("Order {id} created and waiting to be filled"))
                    .yellow()
                    .bold()
            }
            OutcomeStatus::Other(status) => style(format!("Order {id} status: {status}")).bold(),
        };
        println!("\n{line}");
    }

    fn order_cancelled(&self, order_id: i64, _response: &OrderResponse) {
        println!(
            "{}",
            style(format!("✅ Order {order_id} cancelled successfully"))
                .green()
                .bold()
        );
    }

    fn error(&self, message: &str) {
        let inner = message
            .lines()
            .map(console::measure_text_width)
            .chain(std::iter::once("Error".len()))
            .max()
            .unwrap_or(0);
        let border = "─".repeat(inner + 2);
        let line = |text: &str| {
            eprintln!(
                "{} {} {}",
                style("│").red(),
                style(pad_str(text, inner, Alignment::Left, None)).red().bold(),
                style("│").red()
            );
        };

        eprintln!("{}", style(format!("┌{border}┐")).red());
        line("Error");
        eprintln!("{}", style(format!("├{border}┤")).red());
        message.lines().for_each(line);
        eprintln!("{}", style(format!("└{border}┘")).red());
    }
}
