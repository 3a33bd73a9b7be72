//! Listing transfer operations

use log::{error, info};
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::error::TransferError;

/// Writes a rendered listing in full and flushes the writer.
///
/// The bytes are sent as-is; they already carry CRLF line endings.
pub async fn send_listing<W>(writer: &mut W, listing: &[u8]) -> Result<usize, TransferError>
where
    W: AsyncWrite + Unpin,
{
    if let Err(e) = writer.write_all(listing).await {
        error!("Failed to send directory listing: {}", e);
        return Err(TransferError::WriteFailed(e));
    }

    if let Err(e) = writer.flush().await {
        error!("Failed to flush data stream: {}", e);
        return Err(TransferError::FlushFailed(e));
    }

    info!("Directory listing sent successfully ({} bytes)", listing.len());
    Ok(listing.len())
}
