use crate::{entities::BalanceSummary, presentation::utils::format_minor_units};

const HEADER: [&str; 5] = ["Day", "Count", "Pays", "Buys", "Day Balance"];

pub struct BalanceTablePrinter;

impl BalanceTablePrinter {
    pub fn new() -> Self {
        Self
    }

    /// Renders one row per day, in the summary's day order, followed by the
    /// grand total.
    pub fn print_table(&self, summary: &BalanceSummary) -> String {
        let mut output = String::new();

        output.push_str(&row(HEADER.map(String::from)));
        output.push_str(&format!(
            "{:-<17}-+-{:-<5}-+-{:-<14}-+-{:-<14}-+-{:-<14}\n",
            "", "", "", "", ""
        ));
        for day in &summary.days {
            output.push_str(&row([
                day.day.to_string(),
                day.count.to_string(),
                format_minor_units(day.pays),
                format_minor_units(day.buys),
                format_minor_units(day.day_total),
            ]));
        }

        output.push_str(&format!(
            "\nTotal users balance: {}\n",
            format_minor_units(summary.total)
        ));
        output
    }
}

impl Default for BalanceTablePrinter {
    fn default() -> Self {
        Self::new()
    }
}

fn row([day, count, pays, buys, day_total]: [String; 5]) -> String {
    format!(
        "{:<17} | {:>5} | {:>14} | {:>14} | {:>14}\n",
        day, count, pays, buys, day_total
    )
}
