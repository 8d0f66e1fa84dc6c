//! Read/write offer JSON files.
//!
//! An offer file is the granting party's copy of an offer (including the
//! recipient email, which links do not carry). The schema is `domain::OfferFile`.

use std::fs::File;
use std::path::Path;

use chrono::Utc;
use tracing::info;

use crate::domain::{Offer, OfferFile, TradeoffPosition};
use crate::error::AppError;

/// Write an offer JSON file.
pub fn write_offer_json(path: &Path, offer: &Offer, position: TradeoffPosition) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create offer JSON '{}': {e}", path.display())))?;

    let saved = OfferFile {
        tool: "compmax".to_string(),
        created_at: Utc::now(),
        offer: offer.clone(),
        position,
    };

    serde_json::to_writer_pretty(file, &saved)
        .map_err(|e| AppError::new(2, format!("Failed to write offer JSON: {e}")))?;

    info!(path = %path.display(), "wrote offer file");
    Ok(())
}

/// Read an offer JSON file. Bounds are validated while loading.
pub fn read_offer_json(path: &Path) -> Result<OfferFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open offer JSON '{}': {e}", path.display())))?;
    let saved: OfferFile =
        serde_json::from_reader(file).map_err(|e| AppError::new(2, format!("Invalid offer JSON: {e}")))?;
    Ok(saved)
}
