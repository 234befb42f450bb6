//! Application layer
//!
//! Contains the command use cases. Services coordinate between domain
//! entities and ports; none of them know which adapters sit behind the ports.

pub mod batch_packer;
pub mod command_router;
pub mod dispatcher;
pub mod feed_differ;
pub mod fetch_pipeline;
pub mod watermark_store;

#[allow(unused_imports)]
pub use batch_packer::{pack, split_by_length, Batch, Chunk, PackLimits};
pub use command_router::{Command, CommandOutcome, CommandRouter, InteractionHandler};
pub use dispatcher::{DeliveryReport, Dispatcher, WatermarkGate};
#[allow(unused_imports)]
pub use feed_differ::{diff, items_from_channel, parse_channel, FeedDiff};
pub use fetch_pipeline::{FetchOutcome, FetchPipeline};
pub use watermark_store::WatermarkStore;
