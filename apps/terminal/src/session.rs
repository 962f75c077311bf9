//! # Session
//!
//! Holds the current [`CalculatorState`] and maps commands onto reducer
//! actions.
//!
//! ## Calculate Flow
//! ```text
//! calc
//!   │
//!   ├── can_calculate()? ── no ──► "Calculate is disabled: <reason>"
//!   │
//!   ▼
//! reduce(RequestCalculation)      is_calculating = true
//!   │
//!   ▼
//! "Calculating..."  + sleep(delay) ◄── cosmetic only, engine is instant
//!   │
//!   ▼
//! reduce(CompleteCalculation)     final amount stored
//!   │
//!   ▼
//! "Final Amount: $72.00"
//! "You save: $28.00 (28.0% off)"
//! ```

use std::io::Write;
use std::time::Duration;

use tracing::{debug, info, warn};

use slash_core::form::{evaluate, reduce};
use slash_core::{CalculatorState, Currency, Field, FormAction};

use crate::command::{currency_listing, Command, HELP};
use crate::error::AppResult;

/// Whether the read loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    state: CalculatorState,
    delay: Duration,
}

impl Session {
    pub fn new(state: CalculatorState, delay: Duration) -> Self {
        Session { state, delay }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    fn dispatch(&mut self, action: FormAction) {
        debug!(?action, "Dispatching form action");
        self.state = reduce(&self.state, action);
    }

    /// Runs one command, writing user-facing output to `out`.
    pub async fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> AppResult<Flow> {
        match command {
            Command::Set { field, text } => {
                self.dispatch(set_action(field, text));
                self.write_field(field, out)?;
            }
            Command::Keys { field, keys } => {
                for key in keys {
                    self.dispatch(FormAction::KeyPressed { field, key });
                }
                self.write_field(field, out)?;
            }
            Command::Currency(code) => match Currency::from_code(&code) {
                Ok(currency) => {
                    self.dispatch(FormAction::SelectCurrency(currency));
                    writeln!(out, "Currency: {} ({})", currency.name(), currency.symbol())?;
                    self.write_result(out)?;
                }
                Err(e) => writeln!(out, "{e}")?,
            },
            Command::Currencies(query) => {
                let lines = currency_listing(&query, self.state.currency);
                if lines.is_empty() {
                    writeln!(out, "No currency matches '{query}'")?;
                }
                for line in lines {
                    writeln!(out, "{line}")?;
                }
            }
            Command::Calculate => self.calculate(out).await?,
            Command::Show => {
                for field in [
                    Field::OriginalAmount,
                    Field::DiscountPercent,
                    Field::AdditionalDiscountPercent,
                ] {
                    self.write_field(field, out)?;
                }
                writeln!(out, "Currency: {}", self.state.currency)?;
                self.write_result(out)?;
            }
            Command::Json => {
                writeln!(out, "{}", serde_json::to_string_pretty(&self.state)?)?;
            }
            Command::Clear => {
                self.dispatch(FormAction::Clear);
                writeln!(out, "Cleared")?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    async fn calculate<W: Write>(&mut self, out: &mut W) -> AppResult<()> {
        if !self.state.can_calculate() {
            let reason = match evaluate(&self.state) {
                Err(e) => e.to_string(),
                Ok(_) => "a calculation is already running".to_string(),
            };
            warn!(%reason, "Calculation rejected");
            writeln!(out, "Calculate is disabled: {reason}")?;
            return Ok(());
        }

        self.dispatch(FormAction::RequestCalculation);
        writeln!(out, "Calculating...")?;
        out.flush()?;

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        self.dispatch(FormAction::CompleteCalculation);
        info!(
            original = %self.state.original_amount,
            discount = %self.state.discount_percent,
            additional = %self.state.additional_discount_percent,
            final_amount = self.state.final_amount,
            "Calculation complete"
        );

        if let Some(error) = &self.state.error {
            writeln!(out, "{error}")?;
        }
        self.write_result(out)
    }

    fn write_field<W: Write>(&self, field: Field, out: &mut W) -> AppResult<()> {
        let text = self.state.field(field);
        let shown = if text.is_empty() { "-" } else { text };
        let suffix = match field {
            Field::OriginalAmount => self.state.currency.symbol(),
            Field::DiscountPercent | Field::AdditionalDiscountPercent => "%",
        };
        writeln!(out, "{}: {} {}", field.label(), shown, suffix)?;
        Ok(())
    }

    /// Formatting failures are shown in place of the amount.
    fn write_result<W: Write>(&self, out: &mut W) -> AppResult<()> {
        let currency = self.state.currency;
        let final_amount = currency.format(self.state.final_amount).unwrap_or_else(|e| {
            warn!(final_amount = self.state.final_amount, error = %e, "Cannot format result");
            e.to_string()
        });
        writeln!(out, "Final Amount: {final_amount}")?;

        if let Some(result) = self.state.result() {
            let savings = result.display_savings(currency).unwrap_or_else(|e| e.to_string());
            writeln!(
                out,
                "You save: {} ({} off)",
                savings,
                result.display_savings_percentage()
            )?;
        }
        Ok(())
    }
}

fn set_action(field: Field, text: String) -> FormAction {
    match field {
        Field::OriginalAmount => FormAction::SetOriginalAmount(text),
        Field::DiscountPercent => FormAction::SetDiscountPercent(text),
        Field::AdditionalDiscountPercent => FormAction::SetAdditionalDiscountPercent(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slash_core::Key;

    async fn run(session: &mut Session, lines: &[&str]) -> String {
        let mut out = Vec::new();
        for line in lines {
            if let Some(command) = Command::parse(line).unwrap() {
                session.execute(command, &mut out).await.unwrap();
            }
        }
        String::from_utf8(out).unwrap()
    }

    fn session(delay_ms: u64) -> Session {
        Session::new(CalculatorState::default(), Duration::from_millis(delay_ms))
    }

    #[tokio::test]
    async fn test_single_discount() {
        let mut s = session(0);
        let out = run(&mut s, &["amount 100", "discount 20", "calc"]).await;
        assert!(out.contains("Final Amount: $80.00"));
        assert!(out.contains("You save: $20.00 (20.0% off)"));
    }

    #[tokio::test]
    async fn test_stacked_discount() {
        let mut s = session(0);
        let out = run(&mut s, &["amount 100", "discount 20", "extra 10", "calc"]).await;
        assert!(out.contains("Final Amount: $72.00"));
        assert!(out.contains("You save: $28.00 (28.0% off)"));
    }

    #[tokio::test]
    async fn test_zero_amount_is_disabled() {
        let mut s = session(0);
        let out = run(&mut s, &["amount 0", "discount 50", "calc"]).await;
        assert!(out.contains("Calculate is disabled: Validation error: Original amount must be greater than 0"));
        assert!(!out.contains("Calculating..."));
    }

    #[tokio::test]
    async fn test_out_of_range_discount_is_disabled() {
        let mut s = session(0);
        let out = run(&mut s, &["amount 50", "discount 150", "calc"]).await;
        assert!(out.contains("Calculate is disabled"));
        assert_eq!(s.state().final_amount, 0.0);
    }

    #[tokio::test]
    async fn test_currency_switch_reformats() {
        let mut s = session(0);
        run(&mut s, &["amount 1234.5", "discount 0", "calc"]).await;
        let out = run(&mut s, &["currency eur"]).await;
        assert!(out.contains("Final Amount: €1,234.50"));

        let out = run(&mut s, &["currency XYZ"]).await;
        assert!(out.contains("Unknown currency: XYZ"));
        assert_eq!(s.state().currency, Currency::Eur);
    }

    #[tokio::test]
    async fn test_keypad_respects_percentage_cap() {
        let mut s = session(0);
        run(&mut s, &["key discount 1500"]).await;
        assert_eq!(s.state().discount_percent, "15");

        let mut out = Vec::new();
        s.execute(
            Command::Keys {
                field: Field::DiscountPercent,
                keys: vec![Key::Backspace],
            },
            &mut out,
        )
        .await
        .unwrap();
        assert_eq!(s.state().discount_percent, "1");
    }

    #[tokio::test(start_paused = true)]
    async fn test_calculation_waits_for_the_cosmetic_delay() {
        let mut s = session(500);
        run(&mut s, &["amount 100", "discount 20"]).await;

        let start = tokio::time::Instant::now();
        run(&mut s, &["calc"]).await;

        assert!(start.elapsed() >= Duration::from_millis(500));
        assert!(!s.state().is_calculating);
        assert_eq!(s.state().final_amount, 80.0);
    }

    #[tokio::test]
    async fn test_json_and_quit() {
        let mut s = session(0);
        let out = run(&mut s, &["amount 5", "json"]).await;
        assert!(out.contains("\"originalAmount\": \"5\""));

        let mut sink = Vec::new();
        assert_eq!(s.execute(Command::Quit, &mut sink).await.unwrap(), Flow::Quit);
    }

    #[tokio::test]
    async fn test_unformattable_result_keeps_the_session_alive() {
        let mut s = session(0);
        run(&mut s, &["amount 100000000000000000", "discount 20"]).await;

        let mut out = Vec::new();
        let flow = s.execute(Command::Calculate, &mut out).await;
        assert_eq!(flow.unwrap(), Flow::Continue);

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Final Amount: $80,000,000,000,000,000.00"));
        assert!(out.contains("too large to format"));

        let out = run(&mut s, &["show"]).await;
        assert!(out.contains("too large to format"));
    }

    #[tokio::test]
    async fn test_overlong_amount_is_disabled() {
        let mut s = session(0);
        let amount = format!("amount 1{}", "0".repeat(400));
        run(&mut s, &[amount.as_str(), "discount 20"]).await;

        let mut out = Vec::new();
        let flow = s.execute(Command::Calculate, &mut out).await;
        assert_eq!(flow.unwrap(), Flow::Continue);

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Calculate is disabled"));
        assert!(out.contains("must be a finite number"));
        assert_eq!(s.state().final_amount, 0.0);
    }

    #[tokio::test]
    async fn test_clear_resets_fields() {
        let mut s = session(0);
        run(&mut s, &["currency gbp", "amount 100", "discount 20", "calc", "clear"]).await;
        assert_eq!(s.state().original_amount, "");
        assert_eq!(s.state().final_amount, 0.0);
        assert_eq!(s.state().currency, Currency::Gbp);
    }
}
