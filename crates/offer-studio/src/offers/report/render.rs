use std::fmt::Write;

use super::super::domain::Offer;
use super::super::scoring::get_optimization_recommendations;
use crate::targeting::TargetingStrategy;

pub const DEFAULT_REPORT_WIDTH: usize = 64;
pub const MIN_REPORT_WIDTH: usize = 40;

/// Fixed-width box-drawing renderer for offers and targeting strategies.
#[derive(Debug, Clone, Copy)]
pub struct ReportRenderer {
    width: usize,
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_REPORT_WIDTH)
    }
}

impl ReportRenderer {
    pub fn new(width: usize) -> Self {
        Self {
            width: width.max(MIN_REPORT_WIDTH),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn generate_report(&self, offer: &Offer) -> String {
        let mut frame = Frame::new(self.width);

        frame.top();
        frame.line("OFFER REPORT");
        frame.line(&offer.name);
        frame.divider();
        frame.row("Category", offer.category.label());
        frame.row("Pricing strategy", offer.pricing_strategy.label());
        frame.row("Offer ID", &offer.id.0);

        frame.divider();
        frame.line("VALUE STACK");
        for item in offer.value_items() {
            let label = if item.is_bonus {
                format!("+ {}", item.name)
            } else {
                item.name.clone()
            };
            frame.row(&label, &format_money(item.value));
        }
        frame.rule();
        frame.row("Total value", &format_money(offer.total_value));
        frame.row("Your price", &format_money(offer.actual_price));
        frame.row("Savings", &format!("{:.1}%", offer.savings_pct));
        frame.row("Delivery cost", &format_money(offer.delivery_cost()));

        frame.divider();
        frame.line("GUARANTEE");
        if offer.guarantee.is_present() {
            frame.line(&offer.guarantee.statement);
            frame.line(&offer.guarantee.terms);
        } else {
            frame.line("none");
        }

        frame.divider();
        frame.line("URGENCY & SCARCITY");
        if offer.urgency.is_empty() && offer.scarcity.is_empty() {
            frame.line("none");
        }
        for element in &offer.urgency {
            frame.line(&format!("- {}: {}", element.kind.label(), element.description));
        }
        for element in &offer.scarcity {
            frame.line(&format!("- {}: {}", element.kind.label(), element.description));
        }

        frame.divider();
        frame.row(
            "CONVERSION POTENTIAL",
            &format!(
                "{} ({:.2})",
                offer.conversion.label.label(),
                offer.conversion.score
            ),
        );
        for component in &offer.conversion.components {
            frame.row(
                component.factor.label(),
                &format!("{:.2} x {:.2}", component.raw, component.weight),
            );
        }

        let recommendations = get_optimization_recommendations(offer);
        if !recommendations.is_empty() {
            frame.divider();
            frame.line("RECOMMENDATIONS");
            for recommendation in &recommendations {
                frame.line(&format!(
                    "[{}] {}: {}",
                    recommendation.priority.label(),
                    recommendation.area.label(),
                    recommendation.message
                ));
            }
        }

        frame.bottom();
        frame.finish()
    }

    pub fn generate_targeting_report(&self, strategy: &TargetingStrategy) -> String {
        let mut frame = Frame::new(self.width);

        frame.top();
        frame.line("TARGETING STRATEGY");
        frame.row("Funnel stage", strategy.stage.label());
        frame.row("Bid objective", strategy.bid_objective);
        frame.line(strategy.messaging_angle);

        frame.divider();
        frame.line("LOOKALIKE AUDIENCES");
        if strategy.lookalikes.is_empty() {
            frame.line("none");
        }
        for audience in &strategy.lookalikes {
            frame.row(
                &format!(
                    "{}% {}",
                    audience.percentage,
                    audience.seed_source.label()
                ),
                &format!(
                    "q {:.2} | reach {}",
                    audience.quality_score,
                    format_count(audience.estimated_reach)
                ),
            );
        }

        frame.bottom();
        frame.finish()
    }
}

struct Frame {
    inner: usize,
    out: String,
}

impl Frame {
    fn new(width: usize) -> Self {
        Self {
            inner: width - 4,
            out: String::new(),
        }
    }

    fn edge(&mut self, left: char, fill: char, right: char) {
        let fill: String = std::iter::repeat(fill).take(self.inner + 2).collect();
        let _ = writeln!(self.out, "{left}{fill}{right}");
    }

    fn top(&mut self) {
        self.edge('╔', '═', '╗');
    }

    fn divider(&mut self) {
        self.edge('╠', '═', '╣');
    }

    fn rule(&mut self) {
        self.edge('╟', '─', '╢');
    }

    fn bottom(&mut self) {
        self.edge('╚', '═', '╝');
    }

    fn line(&mut self, text: &str) {
        let text = fit(text, self.inner);
        let _ = writeln!(self.out, "║ {text} ║");
    }

    /// Left label and right-aligned value; the label gives way when space runs out.
    fn row(&mut self, label: &str, value: &str) {
        let value = truncate(value, self.inner);
        let value_len = value.chars().count();
        let label_room = self.inner.saturating_sub(value_len + 1);
        let label = truncate(label, label_room);
        let gap = self.inner - label.chars().count() - value_len;
        let _ = writeln!(self.out, "║ {label}{}{value} ║", " ".repeat(gap));
    }

    fn finish(self) -> String {
        self.out
    }
}

/// Control characters become spaces so caller text cannot split a framed line.
fn truncate(text: &str, max: usize) -> String {
    let text: String = text
        .chars()
        .map(|ch| if ch.is_control() { ' ' } else { ch })
        .collect();
    let count = text.chars().count();
    if count <= max {
        return text;
    }
    if max == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(max - 1).collect();
    cut.push('…');
    cut
}

fn fit(text: &str, width: usize) -> String {
    let mut fitted = truncate(text, width);
    let pad = width - fitted.chars().count();
    fitted.push_str(&" ".repeat(pad));
    fitted
}

pub(crate) fn format_money(value: f64) -> String {
    let cents = (value.max(0.0) * 100.0).round() as u64;
    format!("${}.{:02}", format_count(cents / 100), cents % 100)
}

pub(crate) fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
