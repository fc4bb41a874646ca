//! Demo run: seeds a small catalog, fills a cart, places an order and lets the sweeper deliver
//! it. The clock is manual so the one-hour dwell passes instantly.

use actor_framework::tracing::setup_tracing;
use chrono::{TimeDelta, Utc};
use rust_decimal::Decimal;
use std::error::Error;
use std::sync::Arc;
use tracing::{info, Instrument};
use yummy_delivery::auth::Session;
use yummy_delivery::clock::ManualClock;
use yummy_delivery::config::AppConfig;
use yummy_delivery::lifecycle::DeliverySystem;
use yummy_delivery::model::{AddressDetails, ProductCreate, ProductKind, ProductQuery, UserCreate};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing();

    let config = AppConfig::from_env()?;
    let clock = Arc::new(ManualClock::new(Utc::now()));
    let system = DeliverySystem::start(config, clock.clone());
    let shop = system.storefront();

    let admin = shop
        .register_user(UserCreate {
            name: "Admin".into(),
            email: "admin@yummy.example".into(),
            admin: true,
        })
        .await?;
    let admin = Session::admin(admin.id);

    let span = tracing::info_span!("catalog_seeding");
    async {
        shop.add_product(
            &admin,
            ProductCreate {
                name: "Margherita".into(),
                price: Decimal::new(1000, 2),
                image_url: None,
                kind: ProductKind::Food {
                    grams: 450,
                    ingredients: vec!["tomato".into(), "mozzarella".into(), "basil".into()],
                },
            },
        )
        .await?;
        shop.add_product(
            &admin,
            ProductCreate {
                name: "Lemonade".into(),
                price: Decimal::new(500, 2),
                image_url: None,
                kind: ProductKind::Beverage { milliliters: 500 },
            },
        )
        .await?;
        Ok::<_, Box<dyn Error>>(())
    }
    .instrument(span)
    .await?;

    let customer = shop
        .register_user(UserCreate {
            name: "Olena".into(),
            email: "olena@example.com".into(),
            admin: false,
        })
        .await?;
    let session = Session::user(customer.id);
    let home = shop
        .add_address(
            &session,
            AddressDetails {
                city: "Lviv".into(),
                street_name: "Rynok Square".into(),
                street_number: "1".into(),
                phone_number: "+380501234567".into(),
            },
        )
        .await?;

    let span = tracing::info_span!("shopping");
    let order = async {
        let catalog = shop.products(ProductQuery::All).await?;
        for product in &catalog {
            shop.add_to_cart(&session, product.id).await?;
        }
        if let Some(pizza) = catalog.first() {
            shop.add_to_cart(&session, pizza.id).await?;
        }
        let cart = shop.cart(&session).await?;
        info!(lines = cart.lines.len(), total = %cart.total, "Cart ready");

        Ok::<_, Box<dyn Error>>(shop.place_order(&session, home.id).await?)
    }
    .instrument(span)
    .await?;
    info!(order_id = %order.id, cost = %order.order_cost, status = ?order.status, "Order placed");

    clock.advance(TimeDelta::minutes(61));
    let report = system.sweeper.sweep().await?;
    info!(?report, "Sweep done");

    let history = shop.orders(&session, 1).await?;
    for order in &history.items {
        info!(order_id = %order.id, status = ?order.status, "History");
    }

    drop(shop);
    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}
