// =============================================================================
// Market Data Types — daily OHLCV bars
// =============================================================================
//
// One `Bar` per trading session, oldest-first, strictly increasing by date.
// Missing sessions are simply absent; nothing in the engine assumes or fills
// gaps. The provider client is responsible for dropping entries with null
// fields before a series reaches the indicator engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single daily OHLCV bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    /// Traded volume for the session. Non-negative.
    pub volume: f64,
}

impl Bar {
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// Column-wise view of a bar series, used by the indicator functions which
/// operate on plain `f64` slices.
#[derive(Debug, Clone, Default)]
pub struct SeriesColumns {
    pub opens: Vec<f64>,
    pub highs: Vec<f64>,
    pub lows: Vec<f64>,
    pub closes: Vec<f64>,
    pub volumes: Vec<f64>,
}

impl SeriesColumns {
    /// Split a bar slice into per-column vectors.
    pub fn from_bars(bars: &[Bar]) -> Self {
        let mut cols = Self {
            opens: Vec::with_capacity(bars.len()),
            highs: Vec::with_capacity(bars.len()),
            lows: Vec::with_capacity(bars.len()),
            closes: Vec::with_capacity(bars.len()),
            volumes: Vec::with_capacity(bars.len()),
        };
        for bar in bars {
            cols.opens.push(bar.open);
            cols.highs.push(bar.high);
            cols.lows.push(bar.low);
            cols.closes.push(bar.close);
            cols.volumes.push(bar.volume);
        }
        cols
    }
}
