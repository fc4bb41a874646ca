//! End-to-end cart and checkout behaviour against a fully wired `DeliverySystem`.

mod common;

use common::{cents, Harness};
use rust_decimal::Decimal;
use yummy_delivery::auth::Session;
use yummy_delivery::address_actor::AddressError;
use yummy_delivery::cart_actor::CartError;
use yummy_delivery::model::{
    AddressDetails, AddressId, CartLineId, OrderStatus, ProductCreate, ProductId, ProductKind, ProductType,
    ProductUpdate, UserId,
};
use yummy_delivery::product_actor::ProductError;
use yummy_delivery::storefront::StorefrontError;

#[tokio::test]
async fn single_add_creates_one_line() {
    let h = Harness::start().await;
    let alice = h.customer("Alice").await;
    let p1 = h.food("Pierogi", cents(1000)).await;

    let line = h.shop.add_to_cart(&alice, p1.id).await.unwrap();
    assert_eq!(line.quantity, 1);
    assert_eq!(line.price, cents(1000));

    let cart = h.shop.cart(&alice).await.unwrap();
    assert_eq!(cart.lines.len(), 1);
    assert_eq!(cart.total, cents(1000));
    h.stop().await;
}

#[tokio::test]
async fn adding_twice_increments_the_same_line() {
    let h = Harness::start().await;
    let alice = h.customer("Alice").await;
    let p1 = h.food("Pierogi", cents(1000)).await;

    h.shop.add_to_cart(&alice, p1.id).await.unwrap();
    let line = h.shop.add_to_cart(&alice, p1.id).await.unwrap();

    let cart = h.shop.cart(&alice).await.unwrap();
    assert_eq!(cart.lines.len(), 1);
    assert_eq!(line.quantity, 2);
    assert_eq!(line.price, cents(2000));
    assert_eq!(cart.total, cents(2000));
    h.stop().await;
}

#[tokio::test]
async fn removing_a_line_recomputes_total() {
    let h = Harness::start().await;
    let alice = h.customer("Alice").await;
    let p1 = h.food("Pierogi", cents(1000)).await;
    let p2 = h.drink("Kvass", cents(500)).await;

    h.shop.add_to_cart(&alice, p1.id).await.unwrap();
    h.shop.add_to_cart(&alice, p1.id).await.unwrap();
    let p2_line = h.shop.add_to_cart(&alice, p2.id).await.unwrap();
    assert_eq!(h.shop.cart(&alice).await.unwrap().total, cents(2500));

    h.shop.remove_cart_item(&alice, p2_line.id).await.unwrap();

    let cart = h.shop.cart(&alice).await.unwrap();
    assert_eq!(cart.lines.len(), 1);
    assert_eq!(cart.lines[0].product.product_id, p1.id);
    assert_eq!(cart.total, cents(2000));
    h.stop().await;
}

#[tokio::test]
async fn checkout_freezes_cart_into_order_and_clears_it() {
    let h = Harness::start().await;
    let alice = h.customer("Alice").await;
    let home = h.address(&alice).await;
    let p1 = h.food("Pierogi", cents(1000)).await;
    let p2 = h.drink("Kvass", cents(500)).await;

    h.shop.add_to_cart(&alice, p1.id).await.unwrap();
    h.shop.add_to_cart(&alice, p1.id).await.unwrap();
    h.shop.add_to_cart(&alice, p2.id).await.unwrap();
    let before = h.shop.cart(&alice).await.unwrap();
    assert_eq!(before.total, cents(2500));

    let order = h.shop.place_order(&alice, home.id).await.unwrap();

    assert_eq!(order.order_cost, cents(2500));
    assert_eq!(order.status, OrderStatus::Processing);
    assert_eq!(order.placed_at, common::start_time());
    assert_eq!(order.delivery_address, home);
    assert_eq!(order.lines.len(), before.lines.len());
    for (order_line, cart_line) in order.lines.iter().zip(&before.lines) {
        assert_eq!(order_line.product_id, cart_line.product.product_id);
        assert_eq!(order_line.quantity, cart_line.quantity);
        assert_eq!(order_line.price, cart_line.price);
    }
    assert_eq!(order.lines[1].product_type, ProductType::Beverage);

    let after = h.shop.cart(&alice).await.unwrap();
    assert!(after.lines.is_empty());
    assert_eq!(after.total, Decimal::ZERO);
    h.stop().await;
}

#[tokio::test]
async fn foreign_address_aborts_checkout_without_side_effects() {
    let h = Harness::start().await;
    let alice = h.customer("Alice").await;
    let bob = h.customer("Bob").await;
    let bobs_home = h.address(&bob).await;
    let p1 = h.food("Pierogi", cents(1000)).await;
    h.shop.add_to_cart(&alice, p1.id).await.unwrap();
    let before = h.shop.cart(&alice).await.unwrap();

    let err = h.shop.place_order(&alice, bobs_home.id).await.unwrap_err();
    assert_eq!(
        err,
        StorefrontError::Cart(CartError::AddressNotFound(bobs_home.id))
    );
    assert!(err.is_not_found());

    let err = h.shop.place_order(&alice, AddressId(999)).await.unwrap_err();
    assert_eq!(err, StorefrontError::Cart(CartError::AddressNotFound(AddressId(999))));

    assert_eq!(h.shop.cart(&alice).await.unwrap(), before);
    assert_eq!(h.shop.orders(&alice, 1).await.unwrap().total_items, 0);
    h.stop().await;
}

#[tokio::test]
async fn empty_cart_checks_out_as_a_free_order() {
    let h = Harness::start().await;
    let alice = h.customer("Alice").await;
    let home = h.address(&alice).await;

    let order = h.shop.place_order(&alice, home.id).await.unwrap();
    assert!(order.lines.is_empty());
    assert_eq!(order.order_cost, Decimal::ZERO);
    assert_eq!(order.status, OrderStatus::Processing);

    let history = h.shop.orders(&alice, 1).await.unwrap();
    assert_eq!(history.items, vec![order]);
    assert!(h.shop.cart(&alice).await.unwrap().is_empty());
    h.stop().await;
}

#[tokio::test]
async fn order_ignores_later_price_changes() {
    let h = Harness::start().await;
    let alice = h.customer("Alice").await;
    let home = h.address(&alice).await;
    let p1 = h.food("Pierogi", cents(1000)).await;
    h.shop.add_to_cart(&alice, p1.id).await.unwrap();
    let order = h.shop.place_order(&alice, home.id).await.unwrap();

    h.shop
        .update_product(
            &h.admin,
            p1.id,
            ProductUpdate {
                price: Some(cents(9900)),
                name: Some("Premium Pierogi".into()),
                ..ProductUpdate::default()
            },
        )
        .await
        .unwrap();

    let history = h.shop.orders(&alice, 1).await.unwrap();
    let stored = &history.items[0];
    assert_eq!(stored.id, order.id);
    assert_eq!(stored.order_cost, cents(1000));
    assert_eq!(stored.lines[0].price, cents(1000));
    assert_eq!(stored.lines[0].unit_price, cents(1000));
    assert_eq!(stored.lines[0].name, "Pierogi");

    // New cart lines pick up the new price.
    let line = h.shop.add_to_cart(&alice, p1.id).await.unwrap();
    assert_eq!(line.price, cents(9900));
    h.stop().await;
}

#[tokio::test]
async fn unknown_product_and_line_are_not_found() {
    let h = Harness::start().await;
    let alice = h.customer("Alice").await;

    let err = h.shop.add_to_cart(&alice, ProductId(404)).await.unwrap_err();
    assert_eq!(err, StorefrontError::Cart(CartError::ProductNotFound(ProductId(404))));
    assert!(err.is_not_found());

    let err = h
        .shop
        .remove_cart_item(&alice, CartLineId(1))
        .await
        .unwrap_err();
    assert_eq!(err, StorefrontError::Cart(CartError::CartItemNotFound(CartLineId(1))));
    h.stop().await;
}

#[tokio::test]
async fn cannot_remove_a_line_from_someone_elses_cart() {
    let h = Harness::start().await;
    let alice = h.customer("Alice").await;
    let bob = h.customer("Bob").await;
    let p1 = h.food("Pierogi", cents(1000)).await;
    let p2 = h.food("Holubtsi", cents(1500)).await;

    h.shop.add_to_cart(&alice, p1.id).await.unwrap();
    let alices_second = h.shop.add_to_cart(&alice, p2.id).await.unwrap();
    h.shop.add_to_cart(&bob, p1.id).await.unwrap();

    // Bob's cart has a single line, so Alice's second line id does not exist there.
    let err = h
        .shop
        .remove_cart_item(&bob, alices_second.id)
        .await
        .unwrap_err();
    assert!(matches!(err, StorefrontError::Cart(CartError::CartItemNotFound(_))));
    assert_eq!(h.shop.cart(&alice).await.unwrap().lines.len(), 2);
    assert_eq!(h.shop.cart(&bob).await.unwrap().lines.len(), 1);
    h.stop().await;
}

#[tokio::test]
async fn order_history_is_paged_newest_first() {
    let h = Harness::start().await;
    let alice = h.customer("Alice").await;
    let home = h.address(&alice).await;
    let p1 = h.food("Pierogi", cents(1000)).await;

    let mut placed = Vec::new();
    for _ in 0..8 {
        h.shop.add_to_cart(&alice, p1.id).await.unwrap();
        placed.push(h.shop.place_order(&alice, home.id).await.unwrap().id);
        h.clock.advance(chrono::TimeDelta::minutes(1));
    }
    placed.reverse();

    let first = h.shop.orders(&alice, 0).await.unwrap();
    assert_eq!(first.page, 1);
    assert_eq!(first.page_size, 6);
    assert_eq!(first.total_items, 8);
    assert_eq!(first.total_pages, 2);
    let ids: Vec<_> = first.items.iter().map(|order| order.id).collect();
    assert_eq!(ids, placed[..6].to_vec());

    let second = h.shop.orders(&alice, 2).await.unwrap();
    let ids: Vec<_> = second.items.iter().map(|order| order.id).collect();
    assert_eq!(ids, placed[6..].to_vec());

    let bob = h.customer("Bob").await;
    assert!(h.shop.orders(&bob, 1).await.unwrap().items.is_empty());
    h.stop().await;
}

#[tokio::test]
async fn authentication_and_admin_checks() {
    let h = Harness::start().await;
    let alice = h.customer("Alice").await;
    let anonymous = Session::anonymous();

    assert_eq!(
        h.shop.cart(&anonymous).await.unwrap_err(),
        StorefrontError::Unauthenticated
    );
    assert_eq!(
        h.shop.orders(&anonymous, 1).await.unwrap_err(),
        StorefrontError::Unauthenticated
    );
    assert_eq!(
        h.shop
            .update_product(&alice, ProductId(1), ProductUpdate::default())
            .await
            .unwrap_err(),
        StorefrontError::Forbidden
    );

    // A session for a user that was never registered has no cart.
    let ghost = Session::user(UserId(77));
    assert!(h.shop.cart(&ghost).await.unwrap_err().is_not_found());
    h.stop().await;
}

#[tokio::test]
async fn catalog_validation_surfaces_domain_errors() {
    let h = Harness::start().await;
    let err = h
        .shop
        .update_product(
            &h.admin,
            ProductId(1),
            ProductUpdate {
                price: Some(cents(100)),
                ..ProductUpdate::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err, StorefrontError::Product(ProductError::NotFound(ProductId(1))));

    let p1 = h.food("Pierogi", cents(1000)).await;
    let err = h
        .shop
        .update_product(
            &h.admin,
            p1.id,
            ProductUpdate {
                price: Some(Decimal::ZERO),
                ..ProductUpdate::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err, StorefrontError::Product(ProductError::InvalidPrice(Decimal::ZERO)));

    let err = h
        .shop
        .add_product(
            &h.admin,
            ProductCreate {
                name: "Caviar".into(),
                price: Decimal::MAX,
                image_url: None,
                kind: ProductKind::Food {
                    grams: 50,
                    ingredients: vec!["sturgeon roe".into()],
                },
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err, StorefrontError::Product(ProductError::InvalidPrice(Decimal::MAX)));
    h.stop().await;
}

#[tokio::test]
async fn registration_opens_an_empty_cart() {
    let h = Harness::start().await;
    let user = h
        .shop
        .register_user(yummy_delivery::model::UserCreate {
            name: "Taras".into(),
            email: "taras@example.com".into(),
            admin: false,
        })
        .await
        .unwrap();
    assert!(user.cart_id.is_some());

    let cart = h.shop.cart(&Session::user(user.id)).await.unwrap();
    assert_eq!(Some(cart.id), user.cart_id);
    assert_eq!(cart.owner, user.id);
    assert!(cart.is_empty());

    let err = h
        .shop
        .register_user(yummy_delivery::model::UserCreate {
            name: "Nobody".into(),
            email: "not-an-email".into(),
            admin: false,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, StorefrontError::User(_)));
    h.stop().await;
}

#[tokio::test]
async fn address_book_is_private_to_its_owner() {
    let h = Harness::start().await;
    let alice = h.customer("Alice").await;
    let bob = h.customer("Bob").await;
    let first = h.address(&alice).await;
    let second = h.address(&alice).await;
    let bobs = h.address(&bob).await;

    let listed: Vec<_> = h
        .shop
        .addresses(&alice)
        .await
        .unwrap()
        .into_iter()
        .map(|address| address.id)
        .collect();
    assert_eq!(listed, vec![first.id, second.id]);

    let err = h.shop.remove_address(&alice, bobs.id).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(h.shop.addresses(&bob).await.unwrap().len(), 1);

    h.shop.remove_address(&alice, first.id).await.unwrap();
    assert_eq!(h.shop.addresses(&alice).await.unwrap(), vec![second]);
    h.stop().await;
}

#[tokio::test]
async fn address_update_is_owner_only_and_spares_placed_orders() {
    let h = Harness::start().await;
    let alice = h.customer("Alice").await;
    let bob = h.customer("Bob").await;
    let home = h.address(&alice).await;
    let p1 = h.food("Pierogi", cents(1000)).await;
    h.shop.add_to_cart(&alice, p1.id).await.unwrap();
    let order = h.shop.place_order(&alice, home.id).await.unwrap();

    let moved = AddressDetails {
        city: "Uzhhorod".into(),
        street_name: "Korzo".into(),
        street_number: "3".into(),
        phone_number: "+380631234567".into(),
    };
    let err = h
        .shop
        .update_address(&bob, home.id, moved.clone())
        .await
        .unwrap_err();
    assert_eq!(err, StorefrontError::Address(AddressError::NotFound(home.id)));

    let updated = h.shop.update_address(&alice, home.id, moved).await.unwrap();
    assert_eq!(updated.id, home.id);
    assert_eq!(updated.city, "Uzhhorod");
    assert_eq!(h.shop.addresses(&alice).await.unwrap(), vec![updated]);

    let history = h.shop.orders(&alice, 1).await.unwrap();
    assert_eq!(history.items[0].id, order.id);
    assert_eq!(history.items[0].delivery_address, home);
    h.stop().await;
}
