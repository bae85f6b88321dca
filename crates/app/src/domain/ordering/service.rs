//! Ordering service.
//!
//! Translates an assembled cart into the order-creation request and issues
//! it to the backend: exactly one network call per submission, no retry and
//! no backoff. The manual path (the user submitting again) is the only
//! retry mechanism.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use async_trait::async_trait;
use comanda::{cart::Cart, draft::OrderDraft};
use mockall::automock;
use tracing::{debug, info};

use crate::{
    api::{
        ApiError, OrdersApi,
        models::{CreateOrderRequest, Order, OrderItemRequest, ReservationId, TableId},
    },
    domain::ordering::errors::OrderingError,
    notify::{Notification, Notifier},
};

/// Fallback text when the backend rejects an order without a message.
const GENERIC_SUBMIT_FAILURE: &str = "failed to submit order";

/// Association fields the calling screen attaches to a submission. The
/// aggregator itself never populates these.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderAssociation {
    /// Table the order is taken at.
    pub table: Option<TableId>,

    /// Reservation the order belongs to.
    pub reservation: Option<ReservationId>,

    /// Free-text note for the kitchen.
    pub note: Option<String>,
}

/// Order submitter backed by the POS backend over HTTP.
///
/// Concurrent submissions are fenced by an in-flight flag, mirroring an
/// ordering screen disabling its submit control while a request is pending.
/// This is a plain boolean guard, not a lock: a refused call returns
/// immediately and nothing is queued.
pub struct HttpOrderingService {
    orders: Arc<dyn OrdersApi>,
    notifier: Arc<dyn Notifier>,
    in_flight: AtomicBool,
}

impl HttpOrderingService {
    #[must_use]
    pub fn new(orders: Arc<dyn OrdersApi>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            orders,
            notifier,
            in_flight: AtomicBool::new(false),
        }
    }

    fn build_request(draft: &OrderDraft, association: OrderAssociation) -> CreateOrderRequest {
        CreateOrderRequest {
            order_items: draft.lines().iter().map(OrderItemRequest::from).collect(),
            table_id: association.table,
            reservation_id: association.reservation,
            note: association.note,
        }
    }

    async fn submit_guarded(
        &self,
        cart: &mut Cart,
        association: OrderAssociation,
    ) -> Result<Order, OrderingError> {
        let draft = match OrderDraft::from_cart(cart) {
            Ok(draft) => draft,
            Err(error) => {
                self.notifier.notify(Notification::warning(
                    "the order is empty; add an item before submitting",
                ));

                return Err(OrderingError::EmptyDraft(error));
            }
        };

        let request = Self::build_request(&draft, association);

        debug!(lines = draft.len(), "submitting order draft");

        match self.orders.create_order(&request).await {
            Ok(order) => {
                cart.clear();

                info!(order_id = %order.id, "order submitted");

                self.notifier
                    .notify(Notification::success(format!("order {} submitted", order.id)));

                Ok(order)
            }
            Err(ApiError::Backend { message, .. }) => {
                let message = message.unwrap_or_else(|| GENERIC_SUBMIT_FAILURE.to_string());

                self.notifier.notify(Notification::error(message.clone()));

                Err(OrderingError::Rejected { message })
            }
            Err(error) => {
                self.notifier.notify(Notification::error(GENERIC_SUBMIT_FAILURE));

                Err(OrderingError::Api(error))
            }
        }
    }
}

#[async_trait]
impl OrderingService for HttpOrderingService {
    async fn submit(
        &self,
        cart: &mut Cart,
        association: OrderAssociation,
    ) -> Result<Order, OrderingError> {
        if self.in_flight.swap(true, Ordering::Acquire) {
            return Err(OrderingError::SubmitInFlight);
        }

        let result = self.submit_guarded(cart, association).await;

        self.in_flight.store(false, Ordering::Release);

        result
    }
}

#[automock]
#[async_trait]
pub trait OrderingService: Send + Sync {
    /// Submit the cart as a new order.
    ///
    /// On success the cart is cleared and a success notification fires; on
    /// any failure the cart is left intact so the user can submit again.
    /// Backend rejections surface the server's message verbatim when
    /// present.
    async fn submit(
        &self,
        cart: &mut Cart,
        association: OrderAssociation,
    ) -> Result<Order, OrderingError>;
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicBool;

    use comanda::catalog::{DishId, MenuItem, MenuItemId};
    use jiff::Timestamp;
    use reqwest::StatusCode;
    use testresult::TestResult;

    use crate::{
        api::{MockOrdersApi, models::OrderId},
        notify::{MockNotifier, NotificationLevel},
    };

    use super::*;

    fn menu_item(id: u64, unit_price: u64) -> MenuItem {
        MenuItem {
            id: MenuItemId::from_raw(id),
            dish_id: DishId::from_raw(id),
            name: format!("item {id}"),
            image_url: None,
            unit_price,
            category_name: None,
        }
    }

    fn order(id: u64) -> Order {
        Order {
            id: OrderId::from_raw(id),
            total: 90_000,
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[tokio::test]
    async fn successful_submit_clears_cart_and_notifies_once() -> TestResult {
        let mut cart = Cart::new();
        cart.add_item(&menu_item(1, 40_000));
        cart.add_item(&menu_item(2, 25_000));
        cart.add_item(&menu_item(2, 25_000));

        let mut orders = MockOrdersApi::new();
        orders
            .expect_create_order()
            .withf(|request| {
                request.order_items
                    == vec![
                        OrderItemRequest {
                            menu_item_id: MenuItemId::from_raw(1),
                            quantity: 1,
                        },
                        OrderItemRequest {
                            menu_item_id: MenuItemId::from_raw(2),
                            quantity: 2,
                        },
                    ]
                    && request.table_id == Some(TableId::from_raw(4))
            })
            .times(1)
            .returning(|_| Ok(order(501)));

        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|notification| notification.level == NotificationLevel::Success)
            .times(1)
            .return_const(());

        let service = HttpOrderingService::new(Arc::new(orders), Arc::new(notifier));

        let association = OrderAssociation {
            table: Some(TableId::from_raw(4)),
            ..OrderAssociation::default()
        };

        let submitted = service.submit(&mut cart, association).await?;

        assert_eq!(submitted.id, OrderId::from_raw(501));
        assert!(cart.is_empty(), "cart must be cleared after a successful submit");

        Ok(())
    }

    #[tokio::test]
    async fn backend_rejection_keeps_cart_and_surfaces_server_message() {
        let mut cart = Cart::new();
        cart.add_item(&menu_item(1, 50_000));

        let mut orders = MockOrdersApi::new();
        orders.expect_create_order().times(1).returning(|_| {
            Err(ApiError::Backend {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: Some("Hết hàng".to_string()),
            })
        });

        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|notification| {
                notification.level == NotificationLevel::Error && notification.message == "Hết hàng"
            })
            .times(1)
            .return_const(());

        let service = HttpOrderingService::new(Arc::new(orders), Arc::new(notifier));

        let result = service.submit(&mut cart, OrderAssociation::default()).await;

        assert!(
            matches!(result, Err(OrderingError::Rejected { ref message }) if message == "Hết hàng"),
            "expected Rejected with the server message, got {result:?}"
        );
        assert_eq!(cart.len(), 1, "cart must be left intact on rejection");
    }

    #[tokio::test]
    async fn rejection_without_message_falls_back_to_generic_text() {
        let mut cart = Cart::new();
        cart.add_item(&menu_item(1, 50_000));

        let mut orders = MockOrdersApi::new();
        orders.expect_create_order().times(1).returning(|_| {
            Err(ApiError::Backend {
                status: StatusCode::BAD_REQUEST,
                message: None,
            })
        });

        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|notification| {
                notification.level == NotificationLevel::Error
                    && notification.message == GENERIC_SUBMIT_FAILURE
            })
            .times(1)
            .return_const(());

        let service = HttpOrderingService::new(Arc::new(orders), Arc::new(notifier));

        let result = service.submit(&mut cart, OrderAssociation::default()).await;

        assert!(
            matches!(result, Err(OrderingError::Rejected { ref message }) if message == GENERIC_SUBMIT_FAILURE),
            "expected Rejected with fallback text, got {result:?}"
        );
        assert_eq!(cart.len(), 1);
    }

    #[tokio::test]
    async fn empty_cart_is_refused_without_a_network_call() {
        let mut cart = Cart::new();

        let mut orders = MockOrdersApi::new();
        orders.expect_create_order().never();

        let mut notifier = MockNotifier::new();
        notifier
            .expect_notify()
            .withf(|notification| notification.level == NotificationLevel::Warning)
            .times(1)
            .return_const(());

        let service = HttpOrderingService::new(Arc::new(orders), Arc::new(notifier));

        let result = service.submit(&mut cart, OrderAssociation::default()).await;

        assert!(
            matches!(result, Err(OrderingError::EmptyDraft(_))),
            "expected EmptyDraft, got {result:?}"
        );
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn guard_releases_after_a_failed_submit() {
        let mut cart = Cart::new();
        cart.add_item(&menu_item(1, 50_000));

        let mut orders = MockOrdersApi::new();
        orders.expect_create_order().times(2).returning(|_| {
            Err(ApiError::Backend {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: None,
            })
        });

        let mut notifier = MockNotifier::new();
        notifier.expect_notify().times(2).return_const(());

        let service = HttpOrderingService::new(Arc::new(orders), Arc::new(notifier));

        let first = service.submit(&mut cart, OrderAssociation::default()).await;
        let second = service.submit(&mut cart, OrderAssociation::default()).await;

        assert!(matches!(first, Err(OrderingError::Rejected { .. })), "got {first:?}");
        assert!(
            matches!(second, Err(OrderingError::Rejected { .. })),
            "second submit must reach the backend again, got {second:?}"
        );
    }

    /// Orders stub whose first call never resolves, holding the in-flight
    /// guard for the duration of the test.
    struct PendingOrders {
        started: Arc<AtomicBool>,
    }

    #[async_trait]
    impl OrdersApi for PendingOrders {
        async fn create_order(&self, _request: &CreateOrderRequest) -> Result<Order, ApiError> {
            self.started.store(true, Ordering::Release);
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn second_submission_is_refused_while_one_is_pending() {
        let started = Arc::new(AtomicBool::new(false));

        let orders = PendingOrders {
            started: Arc::clone(&started),
        };

        let service = Arc::new(HttpOrderingService::new(
            Arc::new(orders),
            Arc::new(MockNotifier::new()),
        ));

        let pending_service = Arc::clone(&service);
        let pending = tokio::spawn(async move {
            let mut cart = Cart::new();
            cart.add_item(&menu_item(1, 50_000));

            pending_service
                .submit(&mut cart, OrderAssociation::default())
                .await
        });

        while !started.load(Ordering::Acquire) {
            tokio::task::yield_now().await;
        }

        let mut cart = Cart::new();
        cart.add_item(&menu_item(2, 25_000));

        let result = service.submit(&mut cart, OrderAssociation::default()).await;

        assert!(
            matches!(result, Err(OrderingError::SubmitInFlight)),
            "expected SubmitInFlight, got {result:?}"
        );
        assert_eq!(cart.len(), 1, "refused submission must not touch the cart");

        pending.abort();
    }
}
