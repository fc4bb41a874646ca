#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use std::sync::Arc;
use std::time::Duration;
use yummy_delivery::auth::Session;
use yummy_delivery::clock::ManualClock;
use yummy_delivery::config::AppConfig;
use yummy_delivery::lifecycle::DeliverySystem;
use yummy_delivery::model::{
    Address, AddressDetails, Product, ProductCreate, ProductKind, UserCreate,
};
use yummy_delivery::storefront::Storefront;

pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 18, 0, 0).unwrap()
}

pub fn cents(value: i64) -> Decimal {
    Decimal::new(value, 2)
}

/// A running system whose background sweeper effectively never ticks after start-up.
pub struct Harness {
    pub system: DeliverySystem,
    pub shop: Storefront,
    pub clock: Arc<ManualClock>,
    pub admin: Session,
}

impl Harness {
    pub async fn start() -> Self {
        let config = AppConfig {
            sweep_interval: Duration::from_secs(24 * 60 * 60),
            ..AppConfig::default()
        };
        let clock = Arc::new(ManualClock::new(start_time()));
        let system = DeliverySystem::start(config, clock.clone());
        let shop = system.storefront();
        let admin = shop
            .register_user(UserCreate {
                name: "Admin".into(),
                email: "admin@yummy.example".into(),
                admin: true,
            })
            .await
            .unwrap();
        Self {
            system,
            shop,
            clock,
            admin: Session::admin(admin.id),
        }
    }

    pub async fn customer(&self, name: &str) -> Session {
        let user = self
            .shop
            .register_user(UserCreate {
                name: name.into(),
                email: format!("{}@example.com", name.to_lowercase()),
                admin: false,
            })
            .await
            .unwrap();
        Session::user(user.id)
    }

    pub async fn food(&self, name: &str, price: Decimal) -> Product {
        self.shop
            .add_product(
                &self.admin,
                ProductCreate {
                    name: name.into(),
                    price,
                    image_url: Some(format!("https://img.example/{}.png", name.to_lowercase())),
                    kind: ProductKind::Food {
                        grams: 350,
                        ingredients: vec!["love".into()],
                    },
                },
            )
            .await
            .unwrap()
    }

    pub async fn drink(&self, name: &str, price: Decimal) -> Product {
        self.shop
            .add_product(
                &self.admin,
                ProductCreate {
                    name: name.into(),
                    price,
                    image_url: None,
                    kind: ProductKind::Beverage { milliliters: 330 },
                },
            )
            .await
            .unwrap()
    }

    pub async fn address(&self, session: &Session) -> Address {
        self.shop
            .add_address(
                session,
                AddressDetails {
                    city: "Lviv".into(),
                    street_name: "Doroshenka".into(),
                    street_number: "14".into(),
                    phone_number: "+380931234567".into(),
                },
            )
            .await
            .unwrap()
    }

    pub async fn stop(self) {
        drop(self.shop);
        self.system.shutdown().await.unwrap();
    }
}
