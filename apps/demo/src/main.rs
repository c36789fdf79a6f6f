use std::{sync::Arc, time::Duration};

use anyhow::Result;
use clap::Parser;
use client_core::{config, CommentsController, HttpVideoApi, ReadCaches, ToastQueue};
use shared::domain::VideoId;

#[derive(Parser, Debug)]
struct Args {
    /// Overrides the configured api base url.
    #[arg(long)]
    server_url: Option<String>,
    #[arg(long)]
    video_id: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let mut settings = config::load_settings();
    if let Some(url) = args.server_url {
        settings.api_base_url = url;
    }
    let base = settings.api_base()?;

    let api = Arc::new(HttpVideoApi::with_timeout(
        base.as_str(),
        Duration::from_secs(settings.request_timeout_seconds),
    )?);
    let caches = Arc::new(ReadCaches::new());
    let toasts = Arc::new(ToastQueue::new());
    let thread = CommentsController::new(api, caches, toasts, Some(VideoId::new(args.video_id)));

    match thread.comments().await? {
        Some(listing) => {
            println!("{} Comments", listing.count);
            for comment in listing.items {
                println!("@{}: {}", comment.author.user_name, comment.content);
            }
        }
        None => println!("No video context bound."),
    }

    Ok(())
}
