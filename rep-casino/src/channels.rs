//! Channel layout: which files a casino replication consists of
//!
//! One scalar channel per game style, in a fixed order shared by the write
//! and read sides. Two interchangeable layouts cover the two persistence
//! formats: [`CasinoFrameLayout`] for length-prefixed binary files and
//! [`CasinoLineLayout`] for line-oriented text files.

use rep_core::{ScalarFrameReader, ScalarFrameWriter, ScalarLineReader, ScalarLineWriter};
use rep_stats::ChannelStatistics;
use rep_store::{ReaderInit, StoreError, WriterInit};
use std::path::Path;

/// Channel order: roulette (always red), roulette (alternate), slots,
/// blackjack (conservative), blackjack (aggressive).
pub const CHANNEL_COUNT: usize = 5;

const FRAME_FILES: [&str; CHANNEL_COUNT] = [
    "roulette_red.bin",
    "roulette_alt.bin",
    "slots.bin",
    "blackjack_con.bin",
    "blackjack_agg.bin",
];

const LINE_FILES: [&str; CHANNEL_COUNT] = [
    "roulette_red.txt",
    "roulette_alt.txt",
    "slots.txt",
    "blackjack_con.txt",
    "blackjack_agg.txt",
];

/// Display labels, in channel order.
pub const CHANNEL_LABELS: [&str; CHANNEL_COUNT] = [
    "Roulette AR",
    "Roulette ALT",
    "Slots",
    "Blackjack con",
    "Blackjack agg",
];

/// Binary (length-prefixed frame) channel layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct CasinoFrameLayout;

impl WriterInit for CasinoFrameLayout {
    type Writer = ScalarFrameWriter;

    fn init(&self, dir: &Path) -> Result<Vec<Self::Writer>, StoreError> {
        Ok(FRAME_FILES
            .iter()
            .map(|file| ScalarFrameWriter::frame(dir.join(file)))
            .collect())
    }
}

impl ReaderInit for CasinoFrameLayout {
    type Reader = ScalarFrameReader;

    fn init(&self, dir: &Path) -> Result<Vec<Self::Reader>, StoreError> {
        Ok(FRAME_FILES
            .iter()
            .map(|file| ScalarFrameReader::frame(dir.join(file)))
            .collect())
    }
}

/// Text (one value per line) channel layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct CasinoLineLayout;

impl WriterInit for CasinoLineLayout {
    type Writer = ScalarLineWriter;

    fn init(&self, dir: &Path) -> Result<Vec<Self::Writer>, StoreError> {
        Ok(LINE_FILES
            .iter()
            .map(|file| ScalarLineWriter::line(dir.join(file)))
            .collect())
    }
}

impl ReaderInit for CasinoLineLayout {
    type Reader = ScalarLineReader;

    fn init(&self, dir: &Path) -> Result<Vec<Self::Reader>, StoreError> {
        Ok(LINE_FILES
            .iter()
            .map(|file| ScalarLineReader::line(dir.join(file)))
            .collect())
    }
}

/// Win-rate statistics over a casino replication set, displayed as
/// percentages on a 0-100 chart scale.
pub fn casino_statistics<F>(layout: F) -> ChannelStatistics<F>
where
    F: ReaderInit,
    F::Reader: rep_store::ChannelReader,
{
    ChannelStatistics::new(layout, CHANNEL_LABELS)
        .with_title("Casino Game Win Rates")
        .with_scale(0.0, 100.0)
        .as_percentages()
}
