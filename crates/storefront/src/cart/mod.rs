//! The cart store.
//!
//! [`CartStore`] owns the cart lines, keeps the total in step with them,
//! persists the full line list after every change, and re-renders through
//! its [`Renderer`]. It also tracks which cart views are open so the
//! checkout flow can refuse to start on an empty cart.
//!
//! All mutations are synchronous and complete before returning. Failures of
//! the collaborators never abort a mutation: an unreadable snapshot loads as
//! an empty cart, a failed save is logged, and a failed render keeps the
//! previous render on screen.

mod line;
mod panels;

pub use line::{CartLine, SnapshotError, cart_total, decode_snapshot, encode_snapshot, item_count};
pub use panels::Panels;

use chrono::Utc;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, info, warn};

use royal_cafe_core::{CartLineId, CurrencyCode};

use crate::checkout::{CheckoutForm, Customer, Order, OrderSubmitter, SubmitError};
use crate::notify::{Notification, Notifier, TracingNotifier};
use crate::render::{CartView, NoopRenderer, Renderer};
use crate::storage::Storage;

/// Storage key holding the serialized line list.
pub const CART_STORAGE_KEY: &str = "royalCart";

/// User-facing messages.
pub mod messages {
    /// Shown after an item is added; `{name}` is the product name.
    #[must_use]
    pub fn item_added(name: &str) -> String {
        format!("تم إضافة {name} إلى السلة")
    }

    pub const EMPTY_CART: &str = "السلة فارغة، يرجى إضافة منتجات أولاً";
    pub const ORDER_SENT: &str = "تم إرسال طلبك بنجاح!";
    pub const ORDER_FAILED: &str = "تعذر إرسال الطلب، يرجى المحاولة مرة أخرى";
    pub const TOTAL_TOO_LARGE: &str = "تعذر تحديث السلة، الإجمالي كبير جداً";
    pub const MISSING_FIELDS: &str = "يرجى تعبئة جميع الحقول المطلوبة";
}

/// Why checkout did not go ahead.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("cart is empty")]
    EmptyCart,

    #[error(transparent)]
    Submit(#[from] SubmitError),
}

/// Cart state plus its storage, renderer and notifier.
pub struct CartStore<S, R = NoopRenderer, N = TracingNotifier> {
    storage: S,
    renderer: R,
    notifier: N,
    currency: CurrencyCode,
    lines: Vec<CartLine>,
    total: Decimal,
    panels: Panels,
}

impl<S: Storage, R: Renderer, N: Notifier> CartStore<S, R, N> {
    /// Create a store, restore the cart from `storage`, and render it.
    pub fn new(storage: S, renderer: R, notifier: N) -> Self {
        let mut store = Self {
            storage,
            renderer,
            notifier,
            currency: CurrencyCode::default(),
            lines: Vec::new(),
            total: Decimal::ZERO,
            panels: Panels::default(),
        };
        store.load_from_storage();
        store.render();
        store
    }

    /// Price the cart in `currency` and re-render.
    #[must_use]
    pub fn with_currency(mut self, currency: CurrencyCode) -> Self {
        self.currency = currency;
        self.render();
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub const fn total(&self) -> Decimal {
        self.total
    }

    #[must_use]
    pub fn item_count(&self) -> u32 {
        item_count(&self.lines)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub const fn panels(&self) -> Panels {
        self.panels
    }

    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }

    #[must_use]
    pub fn line(&self, id: CartLineId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    #[must_use]
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    pub const fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// The view the renderer is given.
    #[must_use]
    pub fn view(&self) -> CartView {
        CartView::new(&self.lines, self.total, self.currency, self.panels)
    }

    // =========================================================================
    // Cart operations
    // =========================================================================

    /// Add one unit of `name`.
    ///
    /// An existing line with the same name gains one unit; otherwise a new
    /// line with quantity 1 is appended. Negative prices are refused, as is
    /// any addition that would push the total past what a `Decimal` holds.
    pub fn add_item(&mut self, name: &str, price: Decimal) {
        if price < Decimal::ZERO {
            warn!(name, %price, "Refusing to add item with negative price");
            return;
        }

        let mut lines = self.lines.clone();
        if let Some(line) = lines.iter_mut().find(|line| line.name == name) {
            line.quantity = line.quantity.saturating_add(1);
            debug!(name, quantity = line.quantity, "Incremented cart line");
        } else {
            let id = self.next_line_id();
            lines.push(CartLine {
                id,
                name: name.to_string(),
                price,
                quantity: 1,
            });
            debug!(name, %id, "Added cart line");
        }

        if self.commit(lines) {
            self.notifier
                .notify(Notification::success(messages::item_added(name)));
        }
    }

    /// Drop the line with `id`. Unknown ids are ignored.
    pub fn remove_item(&mut self, id: CartLineId) {
        let mut lines = self.lines.clone();
        lines.retain(|line| line.id != id);
        if lines.len() != self.lines.len() {
            debug!(%id, "Removed cart line");
        }
        self.commit(lines);
    }

    /// Set the quantity of line `id`, clamping anything below 1 up to 1.
    ///
    /// Unknown ids are ignored and leave storage and the render untouched.
    /// A quantity whose line total would overflow is refused.
    pub fn update_quantity(&mut self, id: CartLineId, quantity: i64) {
        let mut lines = self.lines.clone();
        let Some(line) = lines.iter_mut().find(|line| line.id == id) else {
            return;
        };
        line.quantity = u32::try_from(quantity.max(1)).unwrap_or(u32::MAX);
        debug!(%id, quantity = line.quantity, "Updated cart line quantity");
        self.commit(lines);
    }

    /// Recompute the total from the current lines.
    ///
    /// Every path that replaces the lines checks the total first, so the
    /// overflow branch only keeps the previous total.
    pub fn calculate_total(&mut self) -> Decimal {
        match cart_total(&self.lines) {
            Some(total) => self.total = total,
            None => warn!(total = %self.total, "Cart total overflowed; keeping previous total"),
        }
        self.total
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.lines.clear();
        self.total = Decimal::ZERO;
        self.save_to_storage();
        self.render();
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Replace the in-memory cart with the stored snapshot.
    ///
    /// Absent, unreadable or invalid snapshots load as an empty cart.
    pub fn load_from_storage(&mut self) {
        self.lines = match self.storage.get(CART_STORAGE_KEY) {
            Ok(Some(raw)) => decode_snapshot(&raw).unwrap_or_else(|e| {
                warn!(error = %e, "Discarding malformed cart snapshot");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "Failed to read cart snapshot");
                Vec::new()
            }
        };
        self.calculate_total();
        debug!(lines = self.lines.len(), total = %self.total, "Cart loaded");
    }

    /// Overwrite the stored snapshot with the current lines.
    ///
    /// Failures are logged; the in-memory cart stays authoritative.
    pub fn save_to_storage(&mut self) {
        let raw = match encode_snapshot(&self.lines) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "Failed to encode cart snapshot");
                return;
            }
        };
        if let Err(e) = self.storage.set(CART_STORAGE_KEY, &raw) {
            warn!(error = %e, "Failed to save cart snapshot");
        }
    }

    // =========================================================================
    // Views and checkout
    // =========================================================================

    /// Render the current state.
    pub fn render(&mut self) {
        let view = self.view();
        self.renderer.render(&view);
    }

    /// Raise a notification through the store's notifier.
    pub fn notify(&mut self, notification: Notification) {
        self.notifier.notify(notification);
    }

    pub fn open_cart(&mut self) {
        self.set_panels(Panels {
            cart_open: true,
            ..self.panels
        });
    }

    pub fn close_cart(&mut self) {
        self.set_panels(Panels {
            cart_open: false,
            ..self.panels
        });
    }

    /// Open the checkout dialog.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::EmptyCart`, after raising an error
    /// notification, if there is nothing in the cart. The dialog stays
    /// closed in that case.
    pub fn open_checkout(&mut self) -> Result<(), CheckoutError> {
        if self.lines.is_empty() {
            self.notifier.notify(Notification::error(messages::EMPTY_CART));
            return Err(CheckoutError::EmptyCart);
        }
        self.set_panels(Panels {
            checkout_open: true,
            ..self.panels
        });
        Ok(())
    }

    pub fn close_checkout(&mut self) {
        self.set_panels(Panels {
            checkout_open: false,
            ..self.panels
        });
    }

    /// Close the success dialog and the cart sidebar behind it.
    pub fn close_success(&mut self) {
        self.set_panels(Panels {
            cart_open: false,
            success_open: false,
            ..self.panels
        });
    }

    /// Close every open view (Escape key).
    pub fn dismiss_all(&mut self) {
        self.set_panels(Panels::default());
    }

    /// Place the order and empty the cart.
    ///
    /// The order carries the customer fields, a copy of the lines and the
    /// total. Only after `submitter` accepts it is the cart cleared, the
    /// checkout dialog swapped for the success dialog, and a success
    /// notification raised. Field presence is the form layer's concern.
    ///
    /// An empty cart is refused here as well as in `open_checkout`, so a
    /// caller that skips the dialog cannot place an order with no lines.
    ///
    /// # Errors
    ///
    /// - `CheckoutError::EmptyCart` if there is nothing to order
    /// - `CheckoutError::Submit` if the submitter refused the order; the
    ///   cart is left as it was
    pub fn submit_order(
        &mut self,
        form: CheckoutForm,
        submitter: &impl OrderSubmitter,
    ) -> Result<Order, CheckoutError> {
        if self.lines.is_empty() {
            self.notifier.notify(Notification::error(messages::EMPTY_CART));
            return Err(CheckoutError::EmptyCart);
        }

        let order = Order::new(Customer::from(form), self.lines.clone(), self.total);
        if let Err(e) = submitter.submit(&order) {
            warn!(error = %e, reference = %order.reference, "Order submission failed");
            self.notifier
                .notify(Notification::error(messages::ORDER_FAILED));
            return Err(e.into());
        }

        info!(reference = %order.reference, total = %order.total, "Order placed");
        self.panels.checkout_open = false;
        self.panels.success_open = true;
        self.clear_cart();
        self.notifier.notify(Notification::success(messages::ORDER_SENT));
        Ok(order)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Swap in `lines`, then persist and render. Refused, with the cart left
    /// as it was, if their total does not fit in a `Decimal`.
    fn commit(&mut self, lines: Vec<CartLine>) -> bool {
        let Some(total) = cart_total(&lines) else {
            warn!(lines = lines.len(), "Refusing change: cart total would overflow");
            self.notifier
                .notify(Notification::error(messages::TOTAL_TOO_LARGE));
            return false;
        };
        self.lines = lines;
        self.total = total;
        self.save_to_storage();
        self.render();
        true
    }

    fn set_panels(&mut self, panels: Panels) {
        if self.panels != panels {
            self.panels = panels;
            self.render();
        }
    }

    /// Millisecond timestamp, bumped past every id already in the cart.
    fn next_line_id(&self) -> CartLineId {
        let now = Utc::now().timestamp_millis();
        let next = self
            .lines
            .iter()
            .map(|line| line.id.as_i64().saturating_add(1))
            .fold(now, i64::max);
        CartLineId::new(next)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use royal_cafe_core::NotificationLevel;

    use super::*;
    use crate::storage::{MemoryStorage, StorageError};

    /// Records every notification for inspection.
    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<Notification>>>);

    impl Notifier for Recorder {
        fn notify(&mut self, notification: Notification) {
            self.0.borrow_mut().push(notification);
        }
    }

    impl Recorder {
        fn levels(&self) -> Vec<NotificationLevel> {
            self.0.borrow().iter().map(|n| n.level).collect()
        }
    }

    /// Counts renders and keeps the last view.
    #[derive(Default)]
    struct ViewLog {
        renders: usize,
        last: Option<CartView>,
    }

    impl Renderer for ViewLog {
        fn render(&mut self, view: &CartView) {
            self.renders += 1;
            self.last = Some(view.clone());
        }
    }

    /// Storage whose writes always fail.
    struct ReadOnlyStorage;

    impl Storage for ReadOnlyStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Io(std::io::Error::other("read-only")))
        }
    }

    struct RejectingSubmitter;

    impl OrderSubmitter for RejectingSubmitter {
        fn submit(&self, _order: &Order) -> Result<(), SubmitError> {
            Err(SubmitError::Rejected("kitchen closed".to_string()))
        }
    }

    /// Submitter that checks what it was handed.
    struct ExpectingSubmitter {
        lines: usize,
        total: Decimal,
    }

    impl OrderSubmitter for ExpectingSubmitter {
        fn submit(&self, order: &Order) -> Result<(), SubmitError> {
            assert_eq!(order.items.len(), self.lines);
            assert_eq!(order.total, self.total);
            Ok(())
        }
    }

    type TestStore = CartStore<MemoryStorage, ViewLog, Recorder>;

    fn store() -> (TestStore, Recorder) {
        let recorder = Recorder::default();
        let store = CartStore::new(MemoryStorage::new(), ViewLog::default(), recorder.clone());
        (store, recorder)
    }

    fn form() -> CheckoutForm {
        CheckoutForm {
            name: "Sara".to_string(),
            phone: "0551234567".to_string(),
            address: "Olaya St".to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_new_store_starts_empty_and_renders() {
        let (store, _) = store();
        assert!(store.is_empty());
        assert_eq!(store.total(), Decimal::ZERO);
        assert_eq!(store.renderer().renders, 1);
    }

    #[test]
    fn test_adding_same_name_twice_increments_quantity() {
        let (mut store, recorder) = store();
        store.add_item("Latte", Decimal::from(15));
        store.add_item("Latte", Decimal::from(15));

        assert_eq!(store.lines().len(), 1);
        assert_eq!(store.lines()[0].quantity, 2);
        assert_eq!(store.total(), Decimal::from(30));
        assert_eq!(
            recorder.levels(),
            vec![NotificationLevel::Success, NotificationLevel::Success]
        );
    }

    #[test]
    fn test_add_notifies_with_product_name() {
        let (mut store, recorder) = store();
        store.add_item("Mocha", Decimal::from(17));
        assert_eq!(recorder.0.borrow()[0].message, messages::item_added("Mocha"));
    }

    #[test]
    fn test_distinct_names_keep_insertion_order_and_unique_ids() {
        let (mut store, _) = store();
        store.add_item("Latte", Decimal::from(15));
        store.add_item("Croissant", Decimal::from(8));
        store.add_item("Tea", Decimal::from(6));

        let names: Vec<_> = store.lines().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Latte", "Croissant", "Tea"]);

        let ids: Vec<_> = store.lines().iter().map(|l| l.id).collect();
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_negative_price_is_refused() {
        let (mut store, recorder) = store();
        store.add_item("Refund", Decimal::from(-5));
        assert!(store.is_empty());
        assert!(recorder.levels().is_empty());
    }

    #[test]
    fn test_update_quantity_clamps_to_one() {
        let (mut store, _) = store();
        store.add_item("Latte", Decimal::from(15));
        let id = store.lines()[0].id;

        store.update_quantity(id, 0);
        assert_eq!(store.line(id).unwrap().quantity, 1);

        store.update_quantity(id, -4);
        assert_eq!(store.line(id).unwrap().quantity, 1);
        assert_eq!(store.total(), Decimal::from(15));
    }

    #[test]
    fn test_update_quantity_sets_value() {
        let (mut store, _) = store();
        store.add_item("Latte", Decimal::from(15));
        let id = store.lines()[0].id;

        store.update_quantity(id, 4);
        assert_eq!(store.line(id).unwrap().quantity, 4);
        assert_eq!(store.total(), Decimal::from(60));
        assert_eq!(store.item_count(), 4);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let (mut store, _) = store();
        store.add_item("Latte", Decimal::from(15));
        let renders = store.renderer().renders;

        store.update_quantity(CartLineId::new(-1), 9);

        assert_eq!(store.lines()[0].quantity, 1);
        assert_eq!(store.renderer().renders, renders);
    }

    #[test]
    fn test_remove_unknown_id_leaves_cart_unchanged() {
        let (mut store, _) = store();
        store.add_item("Latte", Decimal::from(15));
        let before = store.lines().to_vec();

        store.remove_item(CartLineId::new(-1));

        assert_eq!(store.lines(), before.as_slice());
        assert_eq!(store.total(), Decimal::from(15));
    }

    #[test]
    fn test_remove_drops_line_and_recomputes() {
        let (mut store, _) = store();
        store.add_item("Latte", Decimal::from(15));
        store.add_item("Cookie", Decimal::from(5));
        let latte = store.lines()[0].id;

        store.remove_item(latte);

        assert_eq!(store.lines().len(), 1);
        assert_eq!(store.total(), Decimal::from(5));
    }

    #[test]
    fn test_every_mutation_persists_and_renders() {
        let (mut store, _) = store();
        store.add_item("Latte", Decimal::from(15));
        let id = store.lines()[0].id;
        store.update_quantity(id, 3);

        let saved = decode_snapshot(store.storage().peek(CART_STORAGE_KEY).unwrap()).unwrap();
        assert_eq!(saved, store.lines());

        let last = store.renderer().last.clone().unwrap();
        assert_eq!(last.item_count, 3);
        assert_eq!(last.total, "45 ريال");
    }

    #[test]
    fn test_calculate_total_is_fold_over_lines() {
        let raw = r#"[
            {"id":1,"name":"A","price":10,"quantity":2},
            {"id":2,"name":"B","price":5,"quantity":3}
        ]"#;
        let mut store = CartStore::new(
            MemoryStorage::with_value(CART_STORAGE_KEY, raw),
            NoopRenderer,
            TracingNotifier,
        );
        assert_eq!(store.calculate_total(), Decimal::from(35));
        assert_eq!(store.calculate_total(), Decimal::from(35));
    }

    #[test]
    fn test_restore_reproduces_lines_and_total() {
        let (mut store, _) = store();
        store.add_item("Latte", Decimal::from(15));
        store.add_item("Latte", Decimal::from(15));
        store.add_item("Cake", Decimal::new(225, 1));
        let storage = store.storage().clone();

        let restored = CartStore::new(storage, NoopRenderer, TracingNotifier);

        assert_eq!(restored.lines(), store.lines());
        assert_eq!(restored.total(), store.total());
        assert_eq!(restored.total(), Decimal::new(525, 1));
    }

    #[test]
    fn test_malformed_snapshot_loads_empty() {
        let store = CartStore::new(
            MemoryStorage::with_value(CART_STORAGE_KEY, "not json"),
            NoopRenderer,
            TracingNotifier,
        );
        assert!(store.is_empty());
        assert_eq!(store.total(), Decimal::ZERO);
    }

    #[test]
    fn test_snapshot_with_overflowing_total_loads_empty() {
        let raw = r#"[{"id":1,"name":"Gold","price":"79228162514264337593543950335","quantity":2}]"#;
        let store = CartStore::new(
            MemoryStorage::with_value(CART_STORAGE_KEY, raw),
            NoopRenderer,
            TracingNotifier,
        );
        assert!(store.is_empty());
        assert_eq!(store.total(), Decimal::ZERO);
    }

    #[test]
    fn test_quantity_that_would_overflow_is_refused() {
        let (mut store, recorder) = store();
        store.add_item("Gold", Decimal::MAX);
        let id = store.lines()[0].id;
        let saved_before = store.storage().peek(CART_STORAGE_KEY).unwrap().to_string();
        let renders_before = store.renderer().renders;

        store.update_quantity(id, 2);

        assert_eq!(store.lines()[0].quantity, 1);
        assert_eq!(store.total(), Decimal::MAX);
        assert_eq!(store.storage().peek(CART_STORAGE_KEY), Some(saved_before.as_str()));
        assert_eq!(store.renderer().renders, renders_before);
        assert_eq!(
            recorder.levels(),
            vec![NotificationLevel::Success, NotificationLevel::Error]
        );

        // The cart still works afterwards.
        store.remove_item(id);
        assert!(store.is_empty());
        assert_eq!(store.total(), Decimal::ZERO);
    }

    #[test]
    fn test_add_that_would_overflow_is_refused() {
        let (mut store, recorder) = store();
        store.add_item("Gold", Decimal::MAX);

        store.add_item("Gold", Decimal::MAX);
        store.add_item("Tea", Decimal::ONE);

        assert_eq!(store.lines().len(), 1);
        assert_eq!(store.lines()[0].quantity, 1);
        assert_eq!(store.total(), Decimal::MAX);
        assert_eq!(
            recorder.levels(),
            vec![
                NotificationLevel::Success,
                NotificationLevel::Error,
                NotificationLevel::Error
            ]
        );
    }

    #[test]
    fn test_new_ids_follow_restored_ids() {
        let far_future = i64::MAX - 10;
        let raw = format!(r#"[{{"id":{far_future},"name":"Latte","price":15,"quantity":1}}]"#);
        let mut store = CartStore::new(
            MemoryStorage::with_value(CART_STORAGE_KEY, &raw),
            NoopRenderer,
            TracingNotifier,
        );

        store.add_item("Tea", Decimal::from(6));

        assert_eq!(store.lines()[1].id, CartLineId::new(far_future + 1));
    }

    #[test]
    fn test_failed_save_keeps_mutation() {
        let mut store = CartStore::new(ReadOnlyStorage, NoopRenderer, TracingNotifier);
        store.add_item("Latte", Decimal::from(15));
        assert_eq!(store.lines().len(), 1);
        assert_eq!(store.total(), Decimal::from(15));
    }

    #[test]
    fn test_clear_cart_empties_and_persists() {
        let (mut store, _) = store();
        store.add_item("Latte", Decimal::from(15));
        store.clear_cart();

        assert!(store.is_empty());
        assert_eq!(store.total(), Decimal::ZERO);
        assert_eq!(store.storage().peek(CART_STORAGE_KEY), Some("[]"));
    }

    #[test]
    fn test_open_checkout_on_empty_cart_is_refused() {
        let (mut store, recorder) = store();

        let result = store.open_checkout();

        assert!(matches!(result, Err(CheckoutError::EmptyCart)));
        assert!(!store.panels().checkout_open);
        assert_eq!(recorder.levels(), vec![NotificationLevel::Error]);
        assert_eq!(recorder.0.borrow()[0].message, messages::EMPTY_CART);
    }

    #[test]
    fn test_checkout_opens_then_clears_after_submission() {
        let (mut store, recorder) = store();
        store.add_item("Latte", Decimal::from(15));
        store.add_item("Latte", Decimal::from(15));

        store.open_checkout().unwrap();
        assert!(store.panels().checkout_open);
        assert_eq!(store.lines().len(), 1);

        let submitter = ExpectingSubmitter {
            lines: 1,
            total: Decimal::from(30),
        };
        let order = store.submit_order(form(), &submitter).unwrap();

        assert_eq!(order.total, Decimal::from(30));
        assert_eq!(order.items[0].quantity, 2);
        assert_eq!(order.customer.name, "Sara");
        assert!(store.is_empty());
        assert!(!store.panels().checkout_open);
        assert!(store.panels().success_open);
        assert_eq!(recorder.levels().last(), Some(&NotificationLevel::Success));
    }

    #[test]
    fn test_rejected_submission_keeps_cart() {
        let (mut store, recorder) = store();
        store.add_item("Latte", Decimal::from(15));
        store.open_checkout().unwrap();

        let result = store.submit_order(form(), &RejectingSubmitter);

        assert!(matches!(result, Err(CheckoutError::Submit(_))));
        assert_eq!(store.lines().len(), 1);
        assert!(store.panels().checkout_open);
        assert_eq!(recorder.levels().last(), Some(&NotificationLevel::Error));
    }

    #[test]
    fn test_submit_on_empty_cart_is_refused() {
        let (mut store, _) = store();
        let result = store.submit_order(form(), &RejectingSubmitter);
        assert!(matches!(result, Err(CheckoutError::EmptyCart)));
    }

    #[test]
    fn test_close_success_also_closes_cart() {
        let (mut store, _) = store();
        store.add_item("Latte", Decimal::from(15));
        store.open_cart();
        store.open_checkout().unwrap();
        store
            .submit_order(form(), &crate::checkout::LoggingSubmitter)
            .unwrap();

        store.close_success();

        assert!(store.panels().all_closed());
    }

    #[test]
    fn test_dismiss_all_closes_everything() {
        let (mut store, _) = store();
        store.add_item("Latte", Decimal::from(15));
        store.open_cart();
        store.open_checkout().unwrap();

        store.dismiss_all();

        assert!(store.panels().all_closed());
        assert_eq!(store.lines().len(), 1);
    }

    #[test]
    fn test_panel_changes_render_only_when_changed() {
        let (mut store, _) = store();
        let renders = store.renderer().renders;

        store.open_cart();
        store.open_cart();

        assert_eq!(store.renderer().renders, renders + 1);
        assert!(store.renderer().last.as_ref().unwrap().panels.cart_open);
    }

    #[test]
    fn test_with_currency_changes_formatting() {
        let (store, _) = store();
        let mut store = store.with_currency(CurrencyCode::USD);
        store.add_item("Latte", Decimal::new(45, 1));
        assert_eq!(store.view().total, "$4.50");
    }
}
