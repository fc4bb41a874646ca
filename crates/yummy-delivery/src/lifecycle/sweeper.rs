//! # Order Sweeper
//!
//! Promotes orders that have been PROCESSING for at least the dwell threshold to DELIVERED.
//!
//! A pass lists every processing order (newest first) and asks the order actor to promote each
//! one that is due. The order actor re-checks the status, so running a pass twice, or racing a
//! pass against another one, never promotes an order twice. A failure on one order is logged and
//! the pass moves on to the next.
//!
//! [`OrderSweeper::spawn`] runs passes on a fixed interval until its `CancellationToken` fires.

use crate::clients::OrderClient;
use crate::clock::Clock;
use crate::order_actor::OrderError;
use chrono::TimeDelta;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

#[derive(Clone)]
pub struct OrderSweeper {
    orders: OrderClient,
    clock: Arc<dyn Clock>,
    dwell: TimeDelta,
}

/// What one pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SweepReport {
    /// Processing orders seen.
    pub examined: usize,
    pub promoted: usize,
    pub failed: usize,
}

impl OrderSweeper {
    pub fn new(orders: OrderClient, clock: Arc<dyn Clock>, dwell: TimeDelta) -> Self {
        Self {
            orders,
            clock,
            dwell,
        }
    }

    /// Runs one pass. Only listing the processing orders can fail the whole pass.
    pub async fn sweep(&self) -> Result<SweepReport, OrderError> {
        let now = self.clock.now();
        let candidates = self.orders.processing().await?;
        let mut report = SweepReport {
            examined: candidates.len(),
            ..SweepReport::default()
        };

        for order in candidates.iter().filter(|order| order.is_due(now, self.dwell)) {
            match self.orders.promote(order.id, now, self.dwell).await {
                Ok(true) => {
                    report.promoted += 1;
                    info!(order_id = %order.id, placed_at = %order.placed_at, "Order delivered");
                }
                Ok(false) => debug!(order_id = %order.id, "Already promoted"),
                Err(error) => {
                    report.failed += 1;
                    warn!(order_id = %order.id, %error, "Promotion failed");
                }
            }
        }

        debug!(?report, "Sweep finished");
        Ok(report)
    }

    /// Sweeps now and then every `every` until `token` is cancelled.
    pub fn spawn(self, every: Duration, token: CancellationToken) -> JoinHandle<()> {
        info!(every_secs = every.as_secs(), "Order sweeper started");
        spawn_periodic(token, every, move || {
            let sweeper = self.clone();
            async move {
                if let Err(error) = sweeper.sweep().await {
                    warn!(%error, "Sweep skipped");
                }
            }
        })
    }
}

fn spawn_periodic<F, Fut>(token: CancellationToken, interval: Duration, mut f: F) -> JoinHandle<()>
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    tokio::spawn(async move {
        let mut ticker = time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = token.cancelled() => break,
                _ = ticker.tick() => f().await,
            }
        }
        info!("Order sweeper stopped");
    })
}
