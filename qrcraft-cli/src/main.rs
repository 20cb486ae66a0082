//! QRCraft command-line QR code generator.
//!
//! Encodes the selected content into a QR payload, asks the remote
//! rendering service for a PNG, and saves it locally.
//!
//! Usage:
//!   qrcraft url --link https://example.com
//!   qrcraft wifi --ssid MyNet --password secret --security wpa
//!   qrcraft contact --name "Jane Doe" --phone 123 --payload-only

use anyhow::{Context, Result};
use clap::Parser;
use qrcraft_cli::Args;
use qrcraft_payload::encode;
use qrcraft_render::{png_file_name, QrRenderer, RenderConfig};
use std::path::PathBuf;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let options = args.render_options();
    let output = args.output;
    let payload_only = args.payload_only;

    let (content_type, fields) = args.content.into_request();
    let payload = encode(content_type, &fields);
    debug!("encoded {} payload: {}", content_type, payload);

    let renderer = QrRenderer::new(RenderConfig::default());
    let image_url = renderer.image_url(&options, &payload);

    if payload_only {
        println!("{payload}");
        println!("{image_url}");
        return Ok(());
    }

    let output = output.unwrap_or_else(|| PathBuf::from(png_file_name(content_type)));
    renderer
        .download(&options, &payload, &output)
        .await
        .with_context(|| format!("failed to download QR code to {}", output.display()))?;

    info!("QR code ready");
    println!("Saved {} QR code to {}", content_type, output.display());
    Ok(())
}
