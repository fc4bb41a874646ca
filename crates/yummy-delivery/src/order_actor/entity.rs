use super::{OrderAction, OrderError};
use crate::model::pricing;
use crate::model::{Order, OrderCreate, OrderId, OrderQuery};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = Infallible;
    type Action = OrderAction;
    type ActionResult = bool;
    type Query = OrderQuery;
    type Context = ();
    type Error = OrderError;

    /// Every new order starts PROCESSING. The cost must equal the sum of the lines, and each
    /// line must be priced as quantity × unit price. An order with no lines costs zero.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        if let Some(line) = params
            .lines
            .iter()
            .find(|line| pricing::line_price(line.unit_price, line.quantity) != Ok(line.price))
        {
            return Err(OrderError::LinePriceMismatch(line.product_id));
        }
        let lines_total = pricing::total(params.lines.iter().map(|line| line.price))?;
        if lines_total != params.order_cost {
            return Err(OrderError::CostMismatch {
                order_cost: params.order_cost,
                lines_total,
            });
        }

        Ok(Order::placed(id, params))
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match update {}
    }

    async fn handle_action(&mut self, action: OrderAction, _ctx: &()) -> Result<bool, Self::Error> {
        match action {
            OrderAction::Promote { as_of, dwell } => Ok(self.promote_if_due(as_of, dwell)),
        }
    }

    fn matches(&self, query: &OrderQuery) -> bool {
        match query {
            OrderQuery::PlacedBy(user_id) => self.placed_by == *user_id,
            OrderQuery::WithStatus(status) => self.status == *status,
        }
    }
}
