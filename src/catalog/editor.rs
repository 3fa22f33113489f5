use crate::error::{CatalogError, Result};
use crate::models::{Direction, Signal, SignalEdit, SignalTag};

/// Number of take-profit inputs the editor shows.
pub const TP_SLOTS: usize = 3;

/// Raw operator input for a signal, before numeric parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalForm {
    pub symbol: String,
    pub direction: Direction,
    pub entry: String,
    pub stop_loss: String,
    pub take_profits: [String; TP_SLOTS],
    pub confidence: f64,
    pub tag: SignalTag,
    pub notes: String,
}

impl Default for SignalForm {
    fn default() -> Self {
        Self {
            symbol: "BTC/USDT".to_string(),
            direction: Direction::Buy,
            entry: String::new(),
            stop_loss: String::new(),
            take_profits: Default::default(),
            confidence: 0.75,
            tag: SignalTag::Free,
            notes: String::new(),
        }
    }
}

impl SignalForm {
    /// Form prefilled for editing. Targets past the third slot are not shown
    /// and are dropped on save.
    pub fn from_signal(signal: &Signal) -> Self {
        let mut take_profits: [String; TP_SLOTS] = Default::default();
        for (slot, tp) in take_profits.iter_mut().zip(&signal.take_profits) {
            *slot = tp.to_string();
        }
        Self {
            symbol: signal.symbol.clone(),
            direction: signal.direction,
            entry: signal.entry.to_string(),
            stop_loss: signal.stop_loss.to_string(),
            take_profits,
            confidence: signal.confidence,
            tag: signal.tag,
            notes: signal.notes.clone(),
        }
    }

    /// Entry and stop loss must be finite numbers. Blank or unparsable target
    /// slots are skipped; the rest keep their slot order.
    pub fn parse(&self) -> Result<SignalEdit> {
        let entry = parse_price("entry", &self.entry)?;
        let stop_loss = parse_price("stop_loss", &self.stop_loss)?;
        let take_profits = self
            .take_profits
            .iter()
            .filter_map(|raw| raw.trim().parse::<f64>().ok())
            .filter(|tp| tp.is_finite())
            .collect();

        Ok(SignalEdit {
            symbol: self.symbol.trim().to_string(),
            direction: self.direction,
            entry,
            stop_loss,
            take_profits,
            confidence: self.confidence.clamp(0.0, 1.0),
            tag: self.tag,
            notes: self.notes.clone(),
        })
    }
}

fn parse_price(field: &'static str, raw: &str) -> Result<f64> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(CatalogError::InvalidInput {
            field,
            value: raw.to_string(),
        }),
    }
}
