use crate::cart_actor::CartContext;
use crate::clients::{AddressClient, CartClient, OrderClient, ProductClient, UserClient};
use crate::clock::Clock;
use crate::config::AppConfig;
use crate::lifecycle::OrderSweeper;
use crate::storefront::Storefront;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::{JoinError, JoinHandle};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum ShutdownError {
    #[error("Actor task failed: {0}")]
    TaskFailed(#[from] JoinError),
}

/// Every actor of the delivery backend plus the order sweeper, wired together.
///
/// ```ignore
/// let system = DeliverySystem::start(AppConfig::from_env()?, Arc::new(SystemClock));
/// let shop = system.storefront();
/// let line = shop.add_to_cart(&session, product_id).await?;
/// drop(shop);
/// system.shutdown().await?;
/// ```
pub struct DeliverySystem {
    pub config: AppConfig,
    pub users: UserClient,
    pub products: ProductClient,
    pub addresses: AddressClient,
    pub carts: CartClient,
    pub orders: OrderClient,
    /// The same sweeper the background task runs, for triggering a pass by hand.
    pub sweeper: OrderSweeper,
    token: CancellationToken,
    handles: Vec<JoinHandle<()>>,
}

impl DeliverySystem {
    /// Spawns all actors and the sweeper. Must be called inside a Tokio runtime.
    pub fn start(config: AppConfig, clock: Arc<dyn Clock>) -> Self {
        let buffer = config.actor_buffer;

        // 1. Create actors (no dependencies yet)
        let (product_actor, product_client) = crate::product_actor::new(buffer);
        let (address_actor, address_client) = crate::address_actor::new(buffer);
        let (order_actor, order_client) = crate::order_actor::new(buffer);
        let (cart_actor, cart_client) = crate::cart_actor::new(buffer);
        let (user_actor, user_client) = crate::user_actor::new(buffer);

        let products = ProductClient::new(product_client);
        let addresses = AddressClient::new(address_client);
        let orders = OrderClient::new(order_client);
        let carts = CartClient::new(cart_client);
        let users = UserClient::new(user_client);

        // 2. Start actors, leaves first: User -> Cart -> {Product, Address, Order}
        let mut handles = vec![
            tokio::spawn(product_actor.run(())),
            tokio::spawn(address_actor.run(())),
            tokio::spawn(order_actor.run(())),
            tokio::spawn(cart_actor.run(CartContext {
                products: products.clone(),
                addresses: addresses.clone(),
                orders: orders.clone(),
                clock: clock.clone(),
            })),
            tokio::spawn(user_actor.run(carts.clone())),
        ];

        // 3. Background sweep
        let token = CancellationToken::new();
        let sweeper = OrderSweeper::new(orders.clone(), clock, config.dwell_delta());
        handles.push(sweeper.clone().spawn(config.sweep_interval, token.clone()));

        info!(?config, "Delivery system started");
        Self {
            config,
            users,
            products,
            addresses,
            carts,
            orders,
            sweeper,
            token,
            handles,
        }
    }

    /// A facade over this system's clients. Drop it before calling [`shutdown`](Self::shutdown).
    pub fn storefront(&self) -> Storefront {
        Storefront::new(
            self.users.clone(),
            self.products.clone(),
            self.addresses.clone(),
            self.carts.clone(),
            self.orders.clone(),
            self.config.orders_page_size,
        )
    }

    /// Cancels the sweeper and drops every client, then waits for all tasks to finish.
    ///
    /// Actors stop once every client clone is gone; clones still held elsewhere (a
    /// `Storefront`, say) keep their actor alive and this call waits for them.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down system...");
        self.token.cancel();

        drop(self.sweeper);
        drop(self.users);
        drop(self.carts);
        drop(self.products);
        drop(self.addresses);
        drop(self.orders);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(e.into());
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
