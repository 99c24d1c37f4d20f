// SPDX-License-Identifier: MPL-2.0
use std::sync::Arc;
use std::time::Duration;
use toast_stack::config::{self, DEFAULT_DURATION_MS, UNMOUNT_GRACE_DELAY};
use toast_stack::render::console::ConsoleRenderer;
use toast_stack::{NotificationRequest, NotificationType, Position, Toaster};
use tracing_subscriber::EnvFilter;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

struct Flags {
    position: Option<Position>,
    duration: Option<i64>,
    kind: Option<NotificationType>,
    count: usize,
    container: Option<String>,
    title: String,
    message: String,
}

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    let position = args.opt_value_from_str("--position")?;
    let duration = args.opt_value_from_str("--duration")?;
    let kind = args.opt_value_from_str("--type")?;
    let count = args.opt_value_from_str("--count")?.unwrap_or(1);
    let container = args.opt_value_from_str("--container")?;

    let mut free = args
        .finish()
        .into_iter()
        .filter_map(|arg| arg.into_string().ok());
    let title = free.next().unwrap_or_else(|| "Hello".to_string());
    let message = free.next().unwrap_or_else(|| "This is a toast".to_string());

    Ok(Flags {
        position,
        duration,
        kind,
        count,
        container,
        title,
        message,
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("toast_stack=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let flags = parse_flags()?;
    let settings = config::load().unwrap_or_else(|err| {
        tracing::warn!(%err, "could not read settings, using defaults");
        config::Config::default()
    });

    let mut renderer = ConsoleRenderer::stdout();
    if let Some(selector) = settings.default_container() {
        renderer = renderer.with_mount_point(selector);
    }
    if let Some(selector) = &flags.container {
        renderer = renderer.with_mount_point(selector.clone());
    }
    let toaster = Toaster::with_config(Arc::new(renderer), &settings)?;

    for index in 1..=flags.count {
        let mut request = NotificationRequest::new(flags.title.clone(), flags.message.clone());
        if flags.count > 1 {
            request.title = format!("{} #{index}", flags.title);
        }
        request.kind = flags.kind;
        request.position = flags.position;
        request.duration = flags.duration;
        request.container.clone_from(&flags.container);
        toaster.open(&request);
    }

    let auto_dismiss = flags.duration.unwrap_or(DEFAULT_DURATION_MS) > 0;
    if !auto_dismiss {
        let linger = u64::try_from(DEFAULT_DURATION_MS).unwrap_or_default();
        tokio::time::sleep(Duration::from_millis(linger)).await;
        toaster.clear_all();
    }

    // Let the deferred mounts land before polling for an empty stack.
    tokio::time::sleep(POLL_INTERVAL).await;
    while toaster.active_count() > 0 {
        tokio::time::sleep(POLL_INTERVAL).await;
    }
    tokio::time::sleep(UNMOUNT_GRACE_DELAY + POLL_INTERVAL).await;
    Ok(())
}
