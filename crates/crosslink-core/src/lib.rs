//! # Crosslink Core
//!
//! Reconciliation logic for the Mautic → HubSpot contact-ID sync.
//!
//! One run composes four stages sequentially:
//!
//! ```text
//! crosslink-core/src/
//! ├── mautic.rs    # Source enumerator: paged contacts -> deduplicated SyncPairs
//! ├── hubspot.rs   # Property bootstrap, existing-value prober, batched writer
//! ├── filter.rs    # Delta filter: drop pairs whose destination already holds a value
//! ├── notify.rs    # Best-effort Slack summary webhook
//! └── pipeline.rs  # Run composition and accounting
//! ```
//!
//! Everything is sequential; no stage spawns tasks or issues concurrent
//! requests. Rate limiting is a fixed sleep after each HubSpot batch.

pub mod filter;
pub mod hubspot;
pub mod mautic;
pub mod notify;
pub mod pipeline;

// Re-export commonly used types
pub use hubspot::HubSpotClient;
pub use mautic::MauticClient;
pub use notify::Notifier;
pub use pipeline::{run_sync, SyncOptions};
